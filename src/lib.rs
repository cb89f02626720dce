pub mod config;
pub mod crawler;
pub mod error;
pub mod fetch;
pub mod http;
pub mod log;
pub mod matcher;
pub mod pushover;
pub mod status;

pub use config::{get_config, Config};
pub use error::{Error, Result};
