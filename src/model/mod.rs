use derive_new::new;
use serde::{Deserialize, Serialize};

pub use content_id::*;
pub use view_record::*;

mod content_id;
mod view_record;

pub type Timestamp = chrono::DateTime<chrono::Utc>;
