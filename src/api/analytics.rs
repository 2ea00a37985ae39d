use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use tracing::instrument;

use super::state::App;
use super::*;
use crate::model::{ContentId, TopContent, TotalViews, ViewRecord};

#[derive(Debug, Serialize, Deserialize)]
pub struct ViewIncrement {
    pub draft_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

#[instrument(skip(app))]
pub async fn increment_view(
    State(app): State<App>, Path(draft_id): Path<String>,
) -> Result<Json<ViewRecord>> {
    record_view(&app, &draft_id).await.map(Json)
}

#[instrument(skip(app))]
pub async fn increment_view_body(
    State(app): State<App>, Json(payload): Json<ViewIncrement>,
) -> Result<Json<ViewRecord>> {
    record_view(&app, &payload.draft_id).await.map(Json)
}

/// Only views of drafts the draft collection knows about are counted.
async fn record_view(app: &App, draft_id: &str) -> Result<ViewRecord> {
    let draft_id: ContentId = draft_id.parse().context(InvalidDraftIdSnafu)?;

    let exists = app
        .drafts
        .exists(&draft_id)
        .await
        .context(DraftLookupSnafu {
            draft_id: draft_id.clone(),
        })?;

    if !exists {
        return DraftNotFoundSnafu { draft_id }.fail();
    }

    Ok(app.analytics.record_view(draft_id.as_str()).await?)
}

#[instrument(skip(app))]
pub async fn content_analytics(
    State(app): State<App>, Path(content_id): Path<String>,
) -> Result<Json<ViewRecord>> {
    let record = app.analytics.get_analytics(&content_id).await?;
    Ok(Json(record))
}

#[instrument(skip(app))]
pub async fn top_content(
    State(app): State<App>, Query(query): Query<TopQuery>,
) -> Result<Json<Vec<TopContent>>> {
    let top = app.analytics.get_top(query.limit).await?;
    Ok(Json(top))
}

#[instrument(skip(app))]
pub async fn total_views(State(app): State<App>) -> Result<Json<TotalViews>> {
    let total = app.analytics.get_total().await?;
    Ok(Json(total))
}
