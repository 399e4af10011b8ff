//! Password hashing implementations

mod password;

pub use password::{BcryptPasswordHasher, DEFAULT_BCRYPT_COST};
