//! Analyzer settings

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable analyzer settings
///
/// Both fields are provisional stand-ins for gaps in the source parameter
/// table. Every application of a fallback is logged at warn level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Ink cost assumed for a sub weapon whose row has no `InkConsume`
    /// yet, as a fraction of a full tank in (0, 1]
    #[serde(default = "default_sub_ink_consume")]
    pub sub_ink_consume_fallback: f64,
    /// Save-level tier assumed for a sub weapon whose row has no
    /// `SubInkSaveLv` yet; selects the `ConsumeRt_Sub_Lv{N}` curve
    #[serde(default = "default_sub_ink_save_level")]
    pub sub_ink_save_level_fallback: u8,
}

impl AnalyzerConfig {
    /// Check that the configured fallbacks are usable
    ///
    /// The sub ink cost fallback is a fraction of a full tank and must
    /// sit in (0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sub_ink_consume_fallback > 0.0 && self.sub_ink_consume_fallback <= 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "sub_ink_consume_fallback must be a tank fraction in (0, 1], got {}",
                self.sub_ink_consume_fallback
            )));
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            sub_ink_consume_fallback: 0.6,
            sub_ink_save_level_fallback: 0,
        }
    }
}

fn default_sub_ink_consume() -> f64 {
    0.6
}

fn default_sub_ink_save_level() -> u8 {
    0
}

/// Load analyzer settings from a TOML file
pub fn load_analyzer_config(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let config: AnalyzerConfig = super::load_toml(path)?;
    config.validate()?;
    Ok(config)
}

/// Load analyzer settings from a TOML string
pub fn parse_analyzer_config(content: &str) -> Result<AnalyzerConfig, ConfigError> {
    let config: AnalyzerConfig = super::parse_toml(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert!((config.sub_ink_consume_fallback - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.sub_ink_save_level_fallback, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
sub_ink_consume_fallback = 0.55
sub_ink_save_level_fallback = 1
"#;
        let config = parse_analyzer_config(toml).unwrap();
        assert!((config.sub_ink_consume_fallback - 0.55).abs() < f64::EPSILON);
        assert_eq!(config.sub_ink_save_level_fallback, 1);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = parse_analyzer_config("").unwrap();
        assert!((config.sub_ink_consume_fallback - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.sub_ink_save_level_fallback, 0);
    }

    #[test]
    fn test_out_of_range_fallback_is_rejected() {
        for bad in ["0.0", "-0.5", "1.5", "nan"] {
            let toml = format!("sub_ink_consume_fallback = {}", bad);
            match parse_analyzer_config(&toml) {
                Err(ConfigError::ValidationError(msg)) => {
                    assert!(msg.contains("sub_ink_consume_fallback"));
                }
                other => panic!("expected validation error for {}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_load_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/analyzer.toml");
        let config = load_analyzer_config(&path).unwrap();
        assert!((config.sub_ink_consume_fallback - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.sub_ink_save_level_fallback, 0);
    }
}
