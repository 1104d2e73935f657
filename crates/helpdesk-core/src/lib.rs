pub mod error;
pub mod mentions;
pub mod models;
pub mod traits;

pub use error::{HelpdeskError, Result};
pub use mentions::{extract_mentions, resolve_and_notify, MemberSource, MentionResolver};
pub use models::*;
pub use traits::{AdminApi, HelpdeskApi};
