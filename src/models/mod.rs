//! Request and Response models for the greeting service
//!
//! This module defines the DTOs (Data Transfer Objects) used for the
//! handler's event contract and for the JSON bodies it reads and writes.

pub mod event;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use event::{cors_headers, ApiRequest, ApiResponse};
pub use requests::NameRequest;
pub use responses::MessageResponse;
