use derive_new::new;

use crate::service::{analytics::Analytics, database::Backend, drafts::Drafts};

#[derive(Debug, Clone, new)]
pub struct App {
    pub analytics: Analytics<Backend>,
    pub drafts: Drafts,
}

/// Builds the application state around a single database connection.
pub fn create_app(backend: Backend, verify_content: bool) -> App {
    let drafts = Drafts::new(backend.clone(), verify_content);

    App {
        analytics: Analytics::new(backend),
        drafts,
    }
}
