pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub use r#trait::RefreshTokenStore;

#[cfg(any(test, feature = "mock-services"))]
pub mod mock;
#[cfg(any(test, feature = "mock-services"))]
pub use mock::MockRefreshTokenStore;
