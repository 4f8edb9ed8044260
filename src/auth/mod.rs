pub mod context;
pub mod middleware;
pub mod sessions;

pub use context::AuthContext;
pub use middleware::RequireAuth;
pub use sessions::{LoginError, SessionRegistry};
