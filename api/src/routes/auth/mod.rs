//! Token lifecycle endpoints
//!
//! - Access token refresh
//! - Logout

pub mod logout;
pub mod refresh;
