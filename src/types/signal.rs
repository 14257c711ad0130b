use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Traffic-light state of the recent-shock scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStatus {
    /// No shock inside the lookback window; buying is allowed.
    Safe,
    /// A shock day is still inside the window; stay out.
    Wait,
}

impl fmt::Display for SignalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalStatus::Safe => write!(f, "safe"),
            SignalStatus::Wait => write!(f, "wait"),
        }
    }
}

/// A single-day decline at or below the shock threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShockEvent {
    pub date: NaiveDate,
    pub change_pct: f64,
}

/// Outcome of scanning a series for recent shock days.
///
/// The last shock date is reported even once the window has elapsed, so
/// the caller can show when the recovery clock started.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalState {
    pub status: SignalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_shock_date: Option<NaiveDate>,
}
