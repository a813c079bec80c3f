use crate::config::HelloConfig;
use crate::utils::error::{HelloError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub greeting: GreetingConfig,
    pub addition: AdditionConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub name: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            name: crate::config::DEFAULT_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdditionConfig {
    pub a: i64,
    pub b: i64,
}

impl Default for AdditionConfig {
    fn default() -> Self {
        Self {
            a: crate::config::DEFAULT_A,
            b: crate::config::DEFAULT_B,
        }
    }
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// `${VAR}` placeholders are replaced as raw text before parsing, so a value
    /// containing `"` or a newline can break the surrounding TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HelloError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are kept as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HelloError::ConfigParseError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn into_hello_config(self) -> HelloConfig {
        HelloConfig {
            name: self.greeting.name,
            a: self.addition.a,
            b: self.addition.b,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_hello_config().validate()
    }
}
