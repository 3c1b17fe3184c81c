use chrono::Utc;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::error::{Result, SentimentError};
use crate::input::InputSource;
use crate::sentiment::classify::classify;
use crate::sentiment::config::ThresholdConfig;
use crate::sentiment::types::{Analysis, SentimentScore};

/// Score a piece of text with the VADER analyzer.
///
/// Empty or whitespace-only text short-circuits to the neutral score without
/// consulting the analyzer. A fresh analyzer is constructed per call; the
/// underlying lexicon is parsed once into process-wide statics.
pub fn analyze_sentiment(text: &str) -> Result<SentimentScore> {
    if text.trim().is_empty() {
        return Ok(SentimentScore::neutral_text());
    }

    let analyzer = SentimentIntensityAnalyzer::new();
    let scores = analyzer.polarity_scores(text);

    let field = |key: &'static str| -> Result<f64> {
        scores
            .get(key)
            .copied()
            .ok_or(SentimentError::MissingScore(key))
    };

    let score = SentimentScore {
        negative: field("neg")?,
        neutral: field("neu")?,
        positive: field("pos")?,
        compound: field("compound")?,
    };

    Ok(score.rounded())
}

/// Score and classify text into the full output record.
pub fn analyze_text(
    text: &str,
    thresholds: &ThresholdConfig,
    source: InputSource,
) -> Result<Analysis> {
    let score = analyze_sentiment(text)?;
    let classification = classify(&score, thresholds);

    Ok(Analysis {
        text: text.to_string(),
        polarity: classification.polarity,
        confidence: classification.confidence,
        score,
        source,
        analyzed_at: Utc::now(),
    })
}
