pub mod config;
pub mod error;
pub mod types;

pub use config::VocableConfig;
pub use error::{Result, VocableError};
pub use types::*;
