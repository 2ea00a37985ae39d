use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use snafu::{Location, Snafu};

use crate::model::{ContentId, ParseContentId};
use crate::service::analytics::AnalyticsError;
use crate::service::database::BackendError;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ApiError {
    #[snafu(transparent)]
    Analytics { source: AnalyticsError },

    #[snafu(display("{source}"))]
    InvalidDraftId {
        source: ParseContentId,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("draft `{draft_id}` not found"))]
    DraftNotFound {
        draft_id: ContentId,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("failed to look up draft `{draft_id}`: {source}"))]
    DraftLookup {
        draft_id: ContentId,
        source: BackendError,
        #[snafu(implicit)]
        location: Location,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Unavailable,
}

impl ErrorKind {
    /// Store failures answer with 400 like the original analytics endpoints did.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::InvalidArgument | ErrorKind::Unavailable => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Analytics { source } => match source {
                AnalyticsError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
                AnalyticsError::NotFound { .. } => ErrorKind::NotFound,
                AnalyticsError::Unavailable { .. } => ErrorKind::Unavailable,
            },
            ApiError::InvalidDraftId { .. } => ErrorKind::InvalidArgument,
            ApiError::DraftNotFound { .. } => ErrorKind::NotFound,
            ApiError::DraftLookup { .. } => ErrorKind::Unavailable,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    detail: String,
    error: ErrorKind,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let kind = self.kind();
        match kind {
            ErrorKind::Unavailable => tracing::error!(error = ?self, "request failed: {}", self),
            _ => tracing::debug!(error = %self, "request rejected"),
        }

        let detail = match kind {
            ErrorKind::Unavailable => "analytics store is unavailable".to_string(),
            _ => self.to_string(),
        };

        let content = ErrorResponse {
            detail,
            error: kind,
        };

        (kind.status(), Json(content)).into_response()
    }
}
