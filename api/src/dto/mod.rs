//! Request and response bodies

pub mod auth;
pub mod error;
pub mod registration;

pub use auth::{LogoutRequest, RefreshRequest, RefreshResponse};
pub use error::{ErrorResponse, ErrorResponseExt, MessageResponse};
pub use registration::{CheckQuery, RegisterRequest, ResendKind, ResendLinkRequest};
