//! Service layer modules.
//!
//! Contains the notification center that turns store events into per-profile inboxes.

pub mod notifications;

pub use notifications::NotificationCenter;
