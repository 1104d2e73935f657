pub mod client;
mod convert;
pub mod error;
pub mod models;
mod trait_impl;


pub use client::PortalClient;
pub use error::{PortalError, Result};
pub use models::*;

// Re-export helpdesk-core types for convenience
pub use helpdesk_core::{AdminApi, HelpdeskApi, HelpdeskError, MemberSource};
