use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::ThresholdConfig;
use super::types::{round_to, SentimentScore};

/// Overall sentiment label derived from the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Negative => write!(f, "negative"),
            Polarity::Neutral => write!(f, "neutral"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub polarity: Polarity,
    pub confidence: f64,
}

/// Classify a score against the configured compound cutoffs.
///
/// Confidence grows with the magnitude of the compound for polar results and
/// with its closeness to zero for neutral ones, capped at 0.95 either way.
pub fn classify(score: &SentimentScore, thresholds: &ThresholdConfig) -> Classification {
    let positive_cutoff = thresholds
        .positive
        .unwrap_or(ThresholdConfig::DEFAULT_POSITIVE);
    let negative_cutoff = thresholds
        .negative
        .unwrap_or(ThresholdConfig::DEFAULT_NEGATIVE);

    let (polarity, confidence) = if score.compound >= positive_cutoff {
        (Polarity::Positive, polar_confidence(score.compound))
    } else if score.compound <= negative_cutoff {
        (Polarity::Negative, polar_confidence(score.compound))
    } else {
        (Polarity::Neutral, neutral_confidence(score.compound))
    };

    Classification {
        polarity,
        confidence: round_to(confidence, 3),
    }
}

fn polar_confidence(compound: f64) -> f64 {
    (0.5 + compound.abs() * 0.5).min(0.95)
}

fn neutral_confidence(compound: f64) -> f64 {
    (0.6 + (1.0 - compound.abs()) * 0.3).min(0.95)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_score(compound: f64) -> SentimentScore {
        SentimentScore {
            negative: 0.0,
            neutral: 1.0,
            positive: 0.0,
            compound,
        }
    }

    #[test]
    fn test_positive_above_cutoff() {
        let result = classify(&sample_score(0.8), &ThresholdConfig::default());
        assert_eq!(result.polarity, Polarity::Positive);
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn test_negative_below_cutoff() {
        let result = classify(&sample_score(-0.6), &ThresholdConfig::default());
        assert_eq!(result.polarity, Polarity::Negative);
        assert_eq!(result.confidence, 0.8);
    }

    #[test]
    fn test_neutral_between_cutoffs() {
        let result = classify(&sample_score(0.0), &ThresholdConfig::default());
        assert_eq!(result.polarity, Polarity::Neutral);
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn test_exact_cutoff_is_polar() {
        let thresholds = ThresholdConfig::default();
        let positive = classify(&sample_score(0.05), &thresholds);
        assert_eq!(positive.polarity, Polarity::Positive);
        let negative = classify(&sample_score(-0.05), &thresholds);
        assert_eq!(negative.polarity, Polarity::Negative);
    }

    #[test]
    fn test_just_inside_cutoffs_is_neutral() {
        let thresholds = ThresholdConfig::default();
        assert_eq!(
            classify(&sample_score(0.049), &thresholds).polarity,
            Polarity::Neutral
        );
        assert_eq!(
            classify(&sample_score(-0.049), &thresholds).polarity,
            Polarity::Neutral
        );
    }

    #[test]
    fn test_confidence_capped() {
        let result = classify(&sample_score(1.0), &ThresholdConfig::default());
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn test_custom_cutoffs() {
        let thresholds = ThresholdConfig {
            positive: Some(0.5),
            negative: Some(-0.5),
        };
        assert_eq!(
            classify(&sample_score(0.3), &thresholds).polarity,
            Polarity::Neutral
        );
        assert_eq!(
            classify(&sample_score(0.6), &thresholds).polarity,
            Polarity::Positive
        );
    }

    #[test]
    fn test_unset_cutoffs_use_defaults() {
        let thresholds = ThresholdConfig {
            positive: None,
            negative: None,
        };
        assert_eq!(
            classify(&sample_score(0.1), &thresholds).polarity,
            Polarity::Positive
        );
        assert_eq!(
            classify(&sample_score(-0.1), &thresholds).polarity,
            Polarity::Negative
        );
    }

    #[test]
    fn test_polarity_display() {
        assert_eq!(Polarity::Positive.to_string(), "positive");
        assert_eq!(Polarity::Negative.to_string(), "negative");
        assert_eq!(Polarity::Neutral.to_string(), "neutral");
    }
}
