//! Verification configuration
//!
//! Loaded from a TOML file such as:
//!
//! ```toml
//! format = "json"
//! error_comparer = "Exact"
//! normalize = true
//! ```

use std::path::Path;

use payload_om::PayloadFormat;
use serde::{Deserialize, Serialize};

use crate::comparer::EmptyErrorComparer;

/// Settings for a [`PayloadVerifier`](crate::verifier::PayloadVerifier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerificationConfig {
    /// Wire format the actual payloads were produced in
    pub format: PayloadFormat,

    /// Name of the error comparer to resolve
    pub error_comparer: String,

    /// Run the format's normalizations before comparing payloads
    pub normalize: bool,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            format: PayloadFormat::Default,
            error_comparer: EmptyErrorComparer::NAME.to_string(),
            normalize: true,
        }
    }
}

impl VerificationConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompareError;

    #[test]
    fn test_defaults() {
        let config = VerificationConfig::default();
        assert_eq!(config.format, PayloadFormat::Default);
        assert_eq!(config.error_comparer, "Empty");
        assert!(config.normalize);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() -> anyhow::Result<()> {
        let config = VerificationConfig::from_toml_str(r#"format = "json""#)?;
        assert_eq!(config.format, PayloadFormat::Json);
        assert_eq!(config.error_comparer, "Empty");
        assert!(config.normalize);
        Ok(())
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = VerificationConfig::from_toml_str("formatt = \"json\"");
        assert!(matches!(result, Err(CompareError::Toml(_))));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = VerificationConfig::from_toml_str("format = \"atom\"");
        assert!(matches!(result, Err(CompareError::Toml(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = VerificationConfig::load("/definitely/not/here/verify.toml");
        assert!(matches!(result, Err(CompareError::Io(_))));
    }
}
