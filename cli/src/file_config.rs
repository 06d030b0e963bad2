//! TOML configuration file
//!
//! ```toml
//! [generator]
//! seed = 42
//!
//! [analysis]
//! sample_count = 5000
//! max_value = 100
//! buckets = 10
//! ```
//!
//! Missing sections and fields take their defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use xorshift_whitening_core::{AnalysisConfig, GeneratorConfig};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub generator: GeneratorConfig,
    pub analysis: AnalysisConfig,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xorshift_whitening_core::DEFAULT_SEED;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = FileConfig::parse("").unwrap();
        assert_eq!(config.generator.seed, DEFAULT_SEED);
        assert_eq!(config.analysis, AnalysisConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = FileConfig::parse("[generator]\nseed = 42\n\n[analysis]\nbuckets = 4\n").unwrap();
        assert_eq!(config.generator.seed, 42);
        assert_eq!(config.analysis.buckets, 4);
        assert_eq!(config.analysis.max_value, 256);
    }

    #[test]
    fn test_wrong_type_rejected() {
        assert!(FileConfig::parse("[generator]\nseed = \"forty-two\"\n").is_err());
    }
}
