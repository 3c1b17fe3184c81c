use serde::{Deserialize, Serialize};

use crate::sentiment::ThresholdConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Classification cutoffs; built-in defaults apply when absent
    #[serde(default)]
    pub thresholds: Option<ThresholdConfig>,

    /// Presentation defaults; command-line flags override
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

/// Presentation settings.
///
/// Example YAML:
/// ```yaml
/// output:
///   format: detail
///   color: auto
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// detail, compact, or json (default: detail)
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// auto, always, or never (default: auto)
    #[serde(default)]
    pub color: Option<ColorMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Detail,
    Compact,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.thresholds.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    fn test_partial_config_parse() {
        let yaml = r#"
thresholds:
  positive: 0.1
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        let thresholds = config.thresholds.unwrap();
        assert_eq!(thresholds.positive, Some(0.1));
        assert!(thresholds.negative.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
thresholds:
  positive: 0.05
  negative: -0.05
output:
  format: json
  color: never
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.thresholds.unwrap().negative, Some(-0.05));

        let output = config.output.unwrap();
        assert_eq!(output.format, Some(OutputFormat::Json));
        assert_eq!(output.color, Some(ColorMode::Never));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            thresholds: Some(ThresholdConfig::default()),
            output: Some(OutputConfig {
                format: Some(OutputFormat::Compact),
                color: Some(ColorMode::Always),
            }),
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "querries: []\n";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }
}
