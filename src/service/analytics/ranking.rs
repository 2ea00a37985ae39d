use std::future::Future;

use tracing::instrument;

use crate::model::TopContent;
use crate::service::database::{Backend, Result, Sql};

/// Equal view counts are ordered by content id so repeated calls over the same data agree.
const TOP: &str =
    "SELECT content_id, views FROM analytics ORDER BY views DESC, content_id ASC LIMIT $limit";

const TOTAL: &str = "RETURN math::sum((SELECT VALUE views FROM analytics))";

/// Read-only aggregates over every view counter.
///
/// These queries are not isolated from concurrent increments, a ranking computed while views are being
/// recorded may reflect some of those increments and not others.
pub trait RankingQuery {
    /// Most viewed content first. A non-positive `limit` yields nothing.
    fn top_n(&self, limit: i64) -> impl Future<Output = Result<Vec<TopContent>>> + Send;

    fn total_views(&self) -> impl Future<Output = Result<u64>> + Send;
}

impl RankingQuery for Backend {
    #[instrument(skip(self))]
    async fn top_n(&self, limit: i64) -> Result<Vec<TopContent>> {
        if limit <= 0 {
            return Ok(Vec::new());
        }

        self.sql(TOP).bind(("limit", limit)).fetch_first().await
    }

    #[instrument(skip(self))]
    async fn total_views(&self) -> Result<u64> {
        let total: Option<u64> = self.sql(TOTAL).fetch_first().await?;
        Ok(total.unwrap_or_default())
    }
}
