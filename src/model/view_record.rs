use super::*;

/// View counter of a single piece of content.
///
/// A record only exists once the content has been viewed at least once, so `views` is never zero for a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, new)]
pub struct ViewRecord {
    pub content_id: String,
    pub views: u64,
    #[serde(default)]
    pub last_viewed: Option<Timestamp>,
}

/// Ranking entry returned by the top content query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, new)]
pub struct TopContent {
    pub content_id: String,
    pub views: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, new)]
pub struct TotalViews {
    pub total_views: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_without_views_has_no_timestamp() {
        let record: ViewRecord =
            serde_json::from_str(r#"{ "content_id": "post-1", "views": 0 }"#).unwrap();
        assert_eq!(record.last_viewed, None);
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let json = r#"{ "content_id": "post-1", "views": 2, "last_viewed": "2024-03-01T10:15:30.123456789Z" }"#;
        let record: ViewRecord = serde_json::from_str(json).unwrap();

        let expected = chrono::DateTime::parse_from_rfc3339("2024-03-01T10:15:30.123456789Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        assert_eq!(record.last_viewed, Some(expected));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["last_viewed"], "2024-03-01T10:15:30.123456789Z");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{ "id": "analytics:⟨post-1⟩", "content_id": "post-1", "views": 1 }"#;
        let record: ViewRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, ViewRecord::new("post-1".into(), 1, None));
    }
}
