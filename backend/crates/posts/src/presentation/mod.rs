//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and bearer-token middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::PostAppState;
pub use middleware::{AuthenticatedUser, TokenGuard, require_bearer};
pub use router::{post_router, post_router_generic};
