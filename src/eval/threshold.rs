//! First-match threshold classification over ordered rule sets.

use crate::error::EvalError;
use crate::types::{ActionTier, ThresholdRule};

/// Map a drawdown percentage onto the first matching rule.
///
/// Rules are checked in the order supplied; callers pass the most negative
/// bound first. Boundaries are inclusive: a drawdown exactly at a bound
/// matches that band.
pub fn classify(drawdown_pct: f64, rules: &[ThresholdRule]) -> Result<&ThresholdRule, EvalError> {
    rules
        .iter()
        .find(|rule| drawdown_pct <= rule.upper_bound)
        .ok_or(EvalError::NoMatchingRule(drawdown_pct))
}

/// The rebalancing ladder applied to every tracked symbol.
///
/// The catch-all band carries an infinite bound so every drawdown
/// classifies.
pub fn rebalance_rules() -> Vec<ThresholdRule> {
    vec![
        ThresholdRule {
            upper_bound: -10.0,
            tier: ActionTier::Critical,
            action: "Staged buying underway: raise the cash allocation sharply".to_string(),
        },
        ThresholdRule {
            upper_bound: -2.5,
            tier: ActionTier::Warning,
            action: "Rebalancing band: scale position weights to the current drawdown".to_string(),
        },
        ThresholdRule {
            upper_bound: f64::INFINITY,
            tier: ActionTier::Normal,
            action: "Holding band: keep the market-cap leader while it stays on top".to_string(),
        },
    ]
}
