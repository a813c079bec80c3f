pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::{toml_config::TomlConfig, HelloConfig};
pub use crate::core::{adder::add_numbers, greeter::greet, report::write_report};
pub use crate::utils::error::{HelloError, Result};
