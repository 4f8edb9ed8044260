//! Form handling for the profile editor and the swap request form

pub mod profile_draft;
pub mod swap_request;

pub use profile_draft::ProfileDraft;
pub use swap_request::{SwapFormError, SwapRequestForm};
