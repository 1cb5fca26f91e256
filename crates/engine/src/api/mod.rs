//! HTTP API surface.

pub mod auth;
pub mod http;

pub use auth::AuthPlayer;
pub use http::{routes, ApiError};
