//! HTTP surface of the banking auth server.
//!
//! Exposes registration and token endpoints on top of `ba_core` services.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::AppState;
