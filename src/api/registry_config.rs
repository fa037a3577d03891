use serde::{Deserialize, Serialize};

use crate::core::NumberEquality;
use crate::error::{ChartError, ChartResult};

/// Public registry bootstrap configuration.
///
/// Serializable so host applications can keep registry setup next to the
/// rest of their chart configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Field of the merged option that receives the new data on updates.
    /// `None` hands the merged option to the instance untouched.
    #[serde(default = "default_data_key")]
    pub data_key: Option<String>,
    #[serde(default)]
    pub number_equality: NumberEquality,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            data_key: default_data_key(),
            number_equality: NumberEquality::default(),
        }
    }
}

impl RegistryConfig {
    /// Sets the option field that carries data on updates.
    #[must_use]
    pub fn with_data_key(mut self, data_key: impl Into<String>) -> Self {
        self.data_key = Some(data_key.into());
        self
    }

    /// Stops injecting data into the merged option.
    #[must_use]
    pub fn without_data_injection(mut self) -> Self {
        self.data_key = None;
        self
    }

    /// Sets how numbers compare during change detection.
    #[must_use]
    pub fn with_number_equality(mut self, mode: NumberEquality) -> Self {
        self.number_equality = mode;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.data_key.as_deref().is_some_and(str::is_empty) {
            return Err(ChartError::InvalidConfig(
                "data key must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_data_key() -> Option<String> {
    Some("data".to_owned())
}
