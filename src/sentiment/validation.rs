use super::config::ThresholdConfig;

/// Validate threshold configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_thresholds(config: &ThresholdConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let positive = config
        .positive
        .unwrap_or(ThresholdConfig::DEFAULT_POSITIVE);
    let negative = config
        .negative
        .unwrap_or(ThresholdConfig::DEFAULT_NEGATIVE);

    if !(-1.0..=1.0).contains(&positive) {
        errors.push(format!(
            "thresholds.positive: {} is outside [-1.0, 1.0]",
            positive
        ));
    }

    if !(-1.0..=1.0).contains(&negative) {
        errors.push(format!(
            "thresholds.negative: {} is outside [-1.0, 1.0]",
            negative
        ));
    }

    if negative > positive {
        errors.push(format!(
            "thresholds: negative cutoff {} exceeds positive cutoff {}",
            negative, positive
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = ThresholdConfig {
            positive: Some(0.1),
            negative: Some(-0.1),
        };
        assert!(validate_thresholds(&config).is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ThresholdConfig {
            positive: None,
            negative: None,
        };
        assert!(validate_thresholds(&config).is_ok());
    }

    #[test]
    fn test_positive_out_of_range() {
        let config = ThresholdConfig {
            positive: Some(1.5),
            negative: Some(-0.05),
        };
        let errors = validate_thresholds(&config).unwrap_err();
        assert!(errors[0].contains("thresholds.positive"));
    }

    #[test]
    fn test_negative_out_of_range() {
        let config = ThresholdConfig {
            positive: Some(0.05),
            negative: Some(-2.0),
        };
        let errors = validate_thresholds(&config).unwrap_err();
        assert!(errors[0].contains("thresholds.negative"));
    }

    #[test]
    fn test_inverted_cutoffs() {
        let config = ThresholdConfig {
            positive: Some(-0.2),
            negative: Some(0.2),
        };
        let errors = validate_thresholds(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.contains("exceeds positive cutoff")));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ThresholdConfig {
            positive: Some(-3.0), // Error 1, and inverts the cutoffs (error 3)
            negative: Some(2.0),  // Error 2
        };
        let errors = validate_thresholds(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_nan_cutoff_rejected() {
        let config = ThresholdConfig {
            positive: Some(f64::NAN),
            negative: Some(-0.05),
        };
        assert!(validate_thresholds(&config).is_err());
    }
}
