pub mod auth;
pub mod comment;
pub mod project;
pub mod ticket;
pub mod user;

pub use auth::*;
pub use comment::*;
pub use project::*;
pub use ticket::*;
pub use user::*;
