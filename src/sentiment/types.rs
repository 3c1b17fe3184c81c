use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::input::InputSource;
use crate::sentiment::classify::Polarity;

/// Polarity proportions plus the normalized aggregate, as reported by the
/// VADER analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub negative: f64, // proportion in [0, 1]
    pub neutral: f64,  // proportion in [0, 1]
    pub positive: f64, // proportion in [0, 1]
    pub compound: f64, // aggregate in [-1, 1]
}

impl SentimentScore {
    /// The score for text with nothing to rate: fully neutral, zero compound.
    pub fn neutral_text() -> Self {
        Self {
            negative: 0.0,
            neutral: 1.0,
            positive: 0.0,
            compound: 0.0,
        }
    }

    /// Round proportions to 3 decimal places and the compound to 4.
    pub fn rounded(self) -> Self {
        Self {
            negative: round_to(self.negative, 3),
            neutral: round_to(self.neutral, 3),
            positive: round_to(self.positive, 3),
            compound: round_to(self.compound, 4),
        }
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// A fully analyzed piece of text, ready for display or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub text: String,
    pub polarity: Polarity,
    pub confidence: f64,
    #[serde(flatten)]
    pub score: SentimentScore,
    pub source: InputSource,
    pub analyzed_at: DateTime<Utc>,
}
