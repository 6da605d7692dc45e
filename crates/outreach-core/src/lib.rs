pub mod config;
pub mod error;
pub mod linkedin;

pub use config::Credentials;
pub use error::{Error, Result};
