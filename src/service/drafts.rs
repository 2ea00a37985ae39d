use derive_new::new;
use tracing::instrument;

use crate::model::ContentId;
use crate::service::database::{Backend, Result, Sql};

const EXISTS: &str = "SELECT VALUE id FROM type::thing('drafts', $content_id)";

/// Read-only view over the `drafts` collection owned by the draft service.
#[derive(Debug, Clone, new)]
pub struct Drafts {
    backend: Backend,
    /// When disabled every id is assumed to name an existing draft.
    verify: bool,
}

impl Drafts {
    #[instrument(skip(self))]
    pub async fn exists(&self, content_id: &ContentId) -> Result<bool> {
        if !self.verify {
            return Ok(true);
        }

        let ids: Vec<serde_json::Value> = self
            .backend
            .sql(EXISTS)
            .bind(("content_id", content_id.to_string()))
            .fetch_first()
            .await?;

        Ok(!ids.is_empty())
    }
}
