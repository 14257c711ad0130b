use serde::{Deserialize, Serialize};
use std::fmt;

/// Rebalancing severity tier, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionTier {
    Critical,
    Warning,
    Normal,
}

impl fmt::Display for ActionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionTier::Critical => write!(f, "critical"),
            ActionTier::Warning => write!(f, "warning"),
            ActionTier::Normal => write!(f, "normal"),
        }
    }
}

/// One band of the rebalancing ladder.
///
/// A drawdown at or below `upper_bound` matches the band. Rule lists are
/// evaluated in the order supplied, most negative bound first; the
/// classifier itself never sorts.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdRule {
    pub upper_bound: f64,
    pub tier: ActionTier,
    /// Action text shown on the dashboard for this band.
    pub action: String,
}

/// Sentiment index tier over the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SentimentTier {
    ExtremeFear,
    Fear,
    Neutral,
    Greed,
    ExtremeGreed,
}

impl fmt::Display for SentimentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentTier::ExtremeFear => write!(f, "extreme-fear"),
            SentimentTier::Fear => write!(f, "fear"),
            SentimentTier::Neutral => write!(f, "neutral"),
            SentimentTier::Greed => write!(f, "greed"),
            SentimentTier::ExtremeGreed => write!(f, "extreme-greed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_tier_serialization() {
        assert_eq!(
            serde_json::to_string(&ActionTier::Critical).unwrap(),
            "\"critical\""
        );
        let parsed: ActionTier = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(parsed, ActionTier::Warning);
    }

    #[test]
    fn test_action_tier_display() {
        assert_eq!(format!("{}", ActionTier::Critical), "critical");
        assert_eq!(format!("{}", ActionTier::Normal), "normal");
    }

    #[test]
    fn test_sentiment_tier_serialization() {
        assert_eq!(
            serde_json::to_string(&SentimentTier::ExtremeFear).unwrap(),
            "\"extreme-fear\""
        );
        let parsed: SentimentTier = serde_json::from_str("\"extreme-greed\"").unwrap();
        assert_eq!(parsed, SentimentTier::ExtremeGreed);
    }

    #[test]
    fn test_sentiment_tier_display() {
        assert_eq!(format!("{}", SentimentTier::Neutral), "neutral");
        assert_eq!(format!("{}", SentimentTier::ExtremeGreed), "extreme-greed");
    }

    #[test]
    fn test_threshold_rule_clone() {
        let rule = ThresholdRule {
            upper_bound: -10.0,
            tier: ActionTier::Critical,
            action: "cut exposure".to_string(),
        };
        let cloned = rule.clone();
        assert_eq!(cloned, rule);
    }
}
