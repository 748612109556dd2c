pub mod config;
pub mod error;
pub mod types;

pub use config::{BuildPaths, load_config, load_config_if_present, parse_config_str};
pub use error::{Error, Result};
pub use types::*;
