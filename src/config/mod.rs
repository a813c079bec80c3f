pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_single_line, validate_sum_in_range, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Bazel";
pub const DEFAULT_A: i64 = 5;
pub const DEFAULT_B: i64 = 3;

/// Inputs for one report: who to greet and what to add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelloConfig {
    pub name: String,
    pub a: i64,
    pub b: i64,
}

impl Default for HelloConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            a: DEFAULT_A,
            b: DEFAULT_B,
        }
    }
}

impl Validate for HelloConfig {
    fn validate(&self) -> Result<()> {
        validate_single_line("greeting.name", &self.name)?;
        validate_sum_in_range("addition", self.a, self.b)?;
        Ok(())
    }
}
