use derive_new::new;
use snafu::{Location, OptionExt, ResultExt, Snafu};
use tracing::instrument;

use crate::model::{ContentId, ParseContentId, TopContent, TotalViews, ViewRecord};
use crate::service::database::BackendError;

pub use ranking::*;
pub use store::*;

mod ranking;
mod store;

pub type Result<T, E = AnalyticsError> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AnalyticsError {
    #[snafu(display("{source}"))]
    InvalidArgument {
        source: ParseContentId,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("analytics for `{content_id}` not found"))]
    NotFound {
        content_id: ContentId,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("analytics store is unavailable: {source}"))]
    Unavailable {
        source: BackendError,
        #[snafu(implicit)]
        location: Location,
    },
}

/// View tracking operations exposed to the rest of the system.
///
/// Every operation is a single call to the underlying store, store failures are reported as [AnalyticsError::Unavailable] and never retried.
#[derive(Debug, Clone, new)]
pub struct Analytics<S> {
    store: S,
}

impl<S: CounterStore + RankingQuery> Analytics<S> {
    /// Records one view of `content_id`.
    ///
    /// The caller is expected to have checked that the content exists, views of unknown content are counted all the same.
    #[instrument(skip(self))]
    pub async fn record_view(&self, content_id: &str) -> Result<ViewRecord> {
        let content_id: ContentId = content_id.parse().context(InvalidArgumentSnafu)?;
        let record = self
            .store
            .increment(&content_id)
            .await
            .context(UnavailableSnafu)?;

        tracing::info!(content_id = %content_id, views = record.views, "recorded a view of `{}`", content_id);
        Ok(record)
    }

    /// Content that has never been viewed has no record and is reported as [AnalyticsError::NotFound].
    #[instrument(skip(self))]
    pub async fn get_analytics(&self, content_id: &str) -> Result<ViewRecord> {
        let content_id: ContentId = content_id.parse().context(InvalidArgumentSnafu)?;
        self.store
            .get(&content_id)
            .await
            .context(UnavailableSnafu)?
            .context(NotFoundSnafu { content_id })
    }

    #[instrument(skip(self))]
    pub async fn get_top(&self, limit: i64) -> Result<Vec<TopContent>> {
        self.store.top_n(limit).await.context(UnavailableSnafu)
    }

    #[instrument(skip(self))]
    pub async fn get_total(&self) -> Result<TotalViews> {
        let total_views = self.store.total_views().await.context(UnavailableSnafu)?;
        Ok(TotalViews::new(total_views))
    }
}
