//! Web API module for Inkwell.
//!
//! This module provides the REST API for posts, comments and accounts.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use middleware::JwtState;
pub use router::{create_health_router, create_router};
pub use server::WebServer;
