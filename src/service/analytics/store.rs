use std::future::Future;

use snafu::OptionExt;
use tracing::instrument;

use crate::model::{ContentId, ViewRecord};
use crate::service::database::{Backend, EmptyQuerySnafu, Result, Sql};

/// Creates the record on the first view. Incrementing and timestamping happen in the same statement so readers never see one without the other.
const INCREMENT: &str = "UPDATE type::thing('analytics', $content_id) SET content_id = $content_id, views += 1, last_viewed = time::now() RETURN AFTER";

const GET: &str = "SELECT * FROM type::thing('analytics', $content_id)";

/// Durable view counters keyed by content id.
pub trait CounterStore {
    /// Atomically creates the counter with one view, or adds one view to an existing counter, and stamps it with the current time.
    fn increment(&self, content_id: &ContentId) -> impl Future<Output = Result<ViewRecord>> + Send;

    fn get(&self, content_id: &ContentId) -> impl Future<Output = Result<Option<ViewRecord>>> + Send;
}

impl CounterStore for Backend {
    #[instrument(skip(self))]
    async fn increment(&self, content_id: &ContentId) -> Result<ViewRecord> {
        self.sql(INCREMENT)
            .bind(("content_id", content_id.to_string()))
            .fetch_first::<Option<ViewRecord>>()
            .await?
            .context(EmptyQuerySnafu)
    }

    #[instrument(skip(self))]
    async fn get(&self, content_id: &ContentId) -> Result<Option<ViewRecord>> {
        self.sql(GET)
            .bind(("content_id", content_id.to_string()))
            .fetch_first()
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn id(text: &str) -> ContentId {
        text.parse().unwrap()
    }

    #[tokio::test]
    async fn first_increment_creates_the_record() {
        let backend = Backend::memory().await.unwrap();

        assert_eq!(backend.get(&id("post-1")).await.unwrap(), None);

        let record = backend.increment(&id("post-1")).await.unwrap();
        assert_eq!(record.content_id, "post-1");
        assert_eq!(record.views, 1);
        assert!(record.last_viewed.is_some());

        assert_eq!(backend.get(&id("post-1")).await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn sequential_increments_count_every_view() {
        let backend = Backend::memory().await.unwrap();
        let content_id = id("post-1");

        let mut previous = None;
        let mut last = None;
        for expected in 1..=5 {
            let record = backend.increment(&content_id).await.unwrap();
            assert_eq!(record.views, expected);
            assert!(record.last_viewed >= previous, "last_viewed went backwards");
            previous = record.last_viewed;
            last = Some(record);
        }

        let stored = backend.get(&content_id).await.unwrap().unwrap();
        assert_eq!(stored.views, 5);
        assert_eq!(stored.last_viewed, last.unwrap().last_viewed);
    }

    #[tokio::test]
    async fn counters_are_independent() {
        let backend = Backend::memory().await.unwrap();

        backend.increment(&id("post-1")).await.unwrap();
        backend.increment(&id("post-1")).await.unwrap();
        let other = backend.increment(&id("post-2")).await.unwrap();

        assert_eq!(other.views, 1);
        assert_eq!(backend.get(&id("post-1")).await.unwrap().unwrap().views, 2);
    }

    #[tokio::test]
    async fn identifiers_are_used_verbatim() {
        let backend = Backend::memory().await.unwrap();

        for text in ["123", "drafts:with-colon", "with space", "ÜNÏCÖDÉ"] {
            let record = backend.increment(&id(text)).await.unwrap();
            assert_eq!(record.content_id, text);
            assert_eq!(backend.get(&id(text)).await.unwrap().unwrap().views, 1);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_first_increments_do_not_lose_updates() {
        let backend = Arc::new(Backend::memory().await.unwrap());
        let content_id = id("fresh");

        let tasks = (0..64)
            .map(|_| {
                let backend = backend.clone();
                let content_id = content_id.clone();
                tokio::spawn(async move { backend.increment(&content_id).await })
            })
            .collect::<Vec<_>>();

        for result in futures::future::join_all(tasks).await {
            result.unwrap().unwrap();
        }

        let record = backend.get(&content_id).await.unwrap().unwrap();
        assert_eq!(record.views, 64);

        let records: Vec<ViewRecord> = backend
            .sql("SELECT * FROM analytics WHERE content_id = $content_id")
            .bind(("content_id", "fresh"))
            .fetch_first()
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
    }
}
