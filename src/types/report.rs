use chrono::NaiveDate;
use serde::Serialize;

use super::signal::SignalStatus;
use super::tier::{ActionTier, SentimentTier};

/// Drawdown assessment for one symbol, ready for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawdownReport {
    pub symbol: String,
    /// Latest close.
    pub current: f64,
    /// Peak intraday high over the fetched window.
    pub peak: f64,
    pub drawdown_pct: f64,
    pub tier: ActionTier,
    /// Action text for the matched rebalancing band.
    pub action: String,
    /// Quote currency of `current` and `peak` (USD for equities, KRW for
    /// Upbit markets).
    pub currency: String,
    pub timestamp: i64,
}

/// Recent-shock scan result for the watched index.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShockSignalReport {
    pub symbol: String,
    pub status: SignalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_shock_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since_shock: Option<i64>,
    pub lookback_days: i64,
    pub threshold_pct: f64,
    pub timestamp: i64,
}

/// Sentiment index reading with its mapped tier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentReport {
    pub value: i32,
    pub tier: SentimentTier,
    /// When the index provider published this value (epoch seconds).
    pub fetched_at: i64,
}

/// One row of the static rebalancing table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceBand {
    pub tier: ActionTier,
    /// Human-readable trigger condition, e.g. "drawdown <= -10.0%".
    pub trigger: String,
    pub action: String,
}

/// Aggregate payload backing the single-page dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub signal: ShockSignalReport,
    pub equity: DrawdownReport,
    pub crypto: DrawdownReport,
    pub sentiment: SentimentReport,
    pub rebalance: Vec<RebalanceBand>,
    pub timestamp: i64,
}
