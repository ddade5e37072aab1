//! API Module
//!
//! The request dispatcher and its HTTP routing.
//!
//! # Methods (any path)
//! - `GET` - Greet the last stored name
//! - `POST` - Store a name and greet it
//! - `OPTIONS` - CORS preflight
//! - anything else - 405

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
