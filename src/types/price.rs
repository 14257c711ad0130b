use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily price observation.
///
/// Produced by an ingestion client, ordered ascending by date within a
/// series, never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading day this observation belongs to.
    pub date: NaiveDate,
    /// Closing price for the day.
    pub close: f64,
    /// Intraday high for the day.
    pub high: f64,
}

/// Drawdown of the latest close against the running peak high.
///
/// Derived, never persisted; recomputed on every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawdownResult {
    /// Close of the most recent observation.
    pub current: f64,
    /// Maximum intraday high across the series, the last period included.
    pub peak: f64,
    /// Percentage distance of `current` below `peak` (non-positive when
    /// the peak holds).
    pub drawdown_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_price_point_creation() {
        let point = PricePoint {
            date: date(2025, 6, 2),
            close: 153.0,
            high: 155.0,
        };
        assert_eq!(point.close, 153.0);
        assert_eq!(point.high, 155.0);
    }

    #[test]
    fn test_price_point_serde_round_trip() {
        let point = PricePoint {
            date: date(2025, 6, 2),
            close: 153.0,
            high: 155.0,
        };
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"2025-06-02\""));

        let parsed: PricePoint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, point);
    }

    #[test]
    fn test_drawdown_result_serialization() {
        let result = DrawdownResult {
            current: 90.0,
            peak: 100.0,
            drawdown_pct: -10.0,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"drawdownPct\":-10.0"));
        assert!(json.contains("\"peak\":100.0"));
    }
}
