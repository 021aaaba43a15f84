pub mod config;
pub mod error;
pub mod reader;

pub use config::Properties;
pub use error::ConfigError;
pub use reader::{ConfigReader, ResourceSource};
