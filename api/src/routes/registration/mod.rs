//! Registration endpoints
//!
//! - Sign-up
//! - Confirmation status check
//! - Confirmation link resend

pub mod check;
pub mod register;
pub mod resend;
