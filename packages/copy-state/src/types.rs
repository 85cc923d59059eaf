pub use chrono::{DateTime, Utc};
pub use url::Url;

mod blob_copy;
mod file_copy;
mod snapshot;

pub use blob_copy::*;
pub use file_copy::*;
pub use snapshot::*;
