use snafu::Snafu;

use super::*;

/// Identifier of a piece of content (a draft) whose views are tracked.
///
/// The identifier is opaque to this service, the only requirement is that it is not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for ContentId {
    type Err = ParseContentId;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.trim().is_empty() {
            return Err(ParseContentId::new(input.to_string()));
        }

        Ok(ContentId(input.to_string()))
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Snafu, new)]
#[snafu(display("content id must not be blank, got `{text}`"))]
pub struct ParseContentId {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_opaque_identifiers() {
        let id: ContentId = "65f1c0ffee".parse().unwrap();
        assert_eq!(id.as_str(), "65f1c0ffee");

        let id: ContentId = "drafts/with spaces".parse().unwrap();
        assert_eq!(id.to_string(), "drafts/with spaces");
    }

    #[test]
    fn rejects_blank_identifiers() {
        assert_eq!("".parse::<ContentId>(), Err(ParseContentId::new("".into())));
        assert!("   ".parse::<ContentId>().is_err());
    }
}
