//! Batch configuration.

use serde::{Deserialize, Serialize};

/// Tunables for a `BatchLoader`.
///
/// Every field has a default, so `{}` is a valid JSON config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Maximum number of fetches in flight at once. Must be non-zero.
    pub max_concurrency: usize,
}

impl BatchConfig {
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_reasonable() {
        assert_eq!(BatchConfig::default().max_concurrency, 16);
    }

    #[test]
    fn empty_json_falls_back_to_defaults() {
        let c: BatchConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(c, BatchConfig::default());
    }

    #[test]
    fn json_overrides_max_concurrency() {
        let c: BatchConfig = serde_json::from_str(r#"{"max_concurrency": 2}"#).expect("deserialize");
        assert_eq!(c.max_concurrency, 2);
    }
}
