//! Configuration options for equation parsing and curve queries.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, Result};
use crate::expression::{Constant, Function};

/// Configuration options for the curve engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Name of the bound (independent) variable. Default: "x"
    pub variable: String,

    /// Maximum nesting depth the parser accepts, counting every link of a
    /// `+ - * /` chain. Default: 256
    pub max_depth: usize,

    /// Whether the registry memoizes the latest result of each curve. Default: true
    pub cache_results: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            variable: "x".to_string(),
            max_depth: 256,
            cache_results: true,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bound variable name.
    pub fn with_variable(mut self, variable: &str) -> Self {
        self.variable = variable.to_string();
        self
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enable or disable result memoization.
    pub fn with_cache_results(mut self, cache_results: bool) -> Self {
        self.cache_results = cache_results;
        self
    }

    /// Check that the configuration can be used.
    ///
    /// The variable must be a plain identifier that does not collide with a
    /// constant or function name, and the depth limit must be positive.
    pub fn validate(&self) -> Result<()> {
        let is_identifier = self
            .variable
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && self
                .variable
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');

        if !is_identifier {
            return Err(CurveError::InvalidConfig(format!(
                "variable '{}' is not an identifier",
                self.variable
            )));
        }

        if Constant::from_name(&self.variable).is_some()
            || Function::from_name(&self.variable).is_some()
        {
            return Err(CurveError::InvalidConfig(format!(
                "variable '{}' shadows a built-in name",
                self.variable
            )));
        }

        if self.max_depth == 0 {
            return Err(CurveError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Load and validate a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
