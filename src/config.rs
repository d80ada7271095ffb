use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{Error, InternalResult};

pub const DEFAULT_EXPRESSION: &str = "Bjaeq + kPlzs * qWeTt-(100/zzAbv)";
pub const DEFAULT_ERROR_DEMO: &str = "invalid@symbol";

/// Settings for the demo binary. The tokenizers themselves take no configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Expressions compared when none are given on the command line.
    #[serde(default = "default_expressions")]
    pub expressions: Vec<String>,

    /// Expression run through the rule tokenizer to show error reporting.
    #[serde(default = "default_error_demo")]
    pub error_demo: String,

    #[serde(default)]
    pub json: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            expressions: default_expressions(),
            error_demo: default_error_demo(),
            json: false,
        }
    }
}

impl DemoConfig {
    /// Loads `path`, or the defaults when it does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        if path.as_ref().exists() {
            from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Expressions to compare: `cli` if given, else the configured list, else the
    /// built-in demo expression.
    pub fn expressions_or_default(&self, cli: &[String]) -> Vec<String> {
        if !cli.is_empty() {
            cli.to_vec()
        } else if !self.expressions.is_empty() {
            self.expressions.clone()
        } else {
            default_expressions()
        }
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let file = File::open(path)
        .map_err(|e| Error::Config(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_expressions() -> Vec<String> {
    vec![DEFAULT_EXPRESSION.to_string()]
}

fn default_error_demo() -> String {
    DEFAULT_ERROR_DEMO.to_string()
}
