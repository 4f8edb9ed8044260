//! Domain types and DTOs
//!
//! Entities held by the in-memory store plus the request/response shapes
//! exchanged over HTTP.

pub mod auth;
pub mod notifications;
pub mod profiles;
pub mod skills;
pub mod swaps;

// Re-export commonly used types
pub use profiles::*;
pub use skills::*;
pub use swaps::*;
