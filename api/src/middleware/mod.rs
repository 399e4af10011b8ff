pub mod cors;

pub use cors::{allowed_origins, create_cors};
