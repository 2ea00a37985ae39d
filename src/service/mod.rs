pub mod analytics;
pub mod database;
pub mod drafts;
