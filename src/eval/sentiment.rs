//! Sentiment index tier mapping.

use crate::error::EvalError;
use crate::types::SentimentTier;

/// Map a 0-100 sentiment index value onto its tier.
///
/// Band edges follow the published index classification. Values outside
/// [0, 100] are rejected; clamping is the caller's job.
pub fn classify_sentiment(value: i32) -> Result<SentimentTier, EvalError> {
    match value {
        0..=24 => Ok(SentimentTier::ExtremeFear),
        25..=44 => Ok(SentimentTier::Fear),
        45..=55 => Ok(SentimentTier::Neutral),
        56..=75 => Ok(SentimentTier::Greed),
        76..=100 => Ok(SentimentTier::ExtremeGreed),
        other => Err(EvalError::SentimentOutOfRange(other)),
    }
}
