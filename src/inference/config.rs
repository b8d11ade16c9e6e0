//! Configuration for model inference

use serde::{Deserialize, Serialize};

/// Configuration for model inference
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceConfig {
    /// Label for the root table (the document itself)
    pub root_label: String,

    /// Maximum recursion depth for child-entity discovery.
    ///
    /// The cap is absolute over the whole traversal, not relative to
    /// array nesting; past it the walk stops descending without error.
    pub max_depth: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            root_label: "Company".to_string(),
            max_depth: 5,
        }
    }
}

impl InferenceConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }
}

/// Builder for InferenceConfig
#[derive(Debug, Default)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Set the root table label
    pub fn root_label(mut self, label: impl Into<String>) -> Self {
        self.config.root_label = label.into();
        self
    }

    /// Set the maximum discovery depth
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Build the configuration
    pub fn build(self) -> InferenceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InferenceConfig::default();
        assert_eq!(config.root_label, "Company");
        assert_eq!(config.max_depth, 5);
    }

    #[test]
    fn test_builder() {
        let config = InferenceConfig::builder()
            .root_label("Document")
            .max_depth(3)
            .build();

        assert_eq!(config.root_label, "Document");
        assert_eq!(config.max_depth, 3);
    }
}
