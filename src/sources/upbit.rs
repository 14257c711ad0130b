//! Upbit REST client for daily cryptocurrency candles.
//!
//! Public quotation endpoint, no API key required. Markets are KRW-quoted
//! pairs and prices stay in KRW.

use anyhow::{anyhow, Context};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::types::PricePoint;

const UPBIT_API_URL: &str = "https://api.upbit.com/v1";
const DAILY_CANDLE_COUNT: u32 = 200;

/// Markets offered on the dashboard (market code -> display name).
pub const SUPPORTED_MARKETS: &[(&str, &str)] = &[
    ("KRW-BTC", "Bitcoin"),
    ("KRW-ETH", "Ethereum"),
    ("KRW-SOL", "Solana"),
];

/// Check whether a market code is on the supported list.
pub fn is_supported_market(market: &str) -> bool {
    SUPPORTED_MARKETS
        .iter()
        .any(|(code, _)| code.eq_ignore_ascii_case(market))
}

/// Upbit daily candle. The API returns newest first.
#[derive(Debug, Deserialize)]
struct DayCandle {
    candle_date_time_utc: String,
    high_price: f64,
    trade_price: f64,
}

fn candle_to_point(candle: &DayCandle) -> Option<PricePoint> {
    if candle.trade_price <= 0.0 {
        return None;
    }
    // "2025-07-14T00:00:00" -> the date prefix.
    let date = candle.candle_date_time_utc.get(..10)?.parse().ok()?;
    Some(PricePoint {
        date,
        close: candle.trade_price,
        high: candle.high_price,
    })
}

/// Upbit quotation API client.
pub struct UpbitClient {
    client: Client,
}

impl UpbitClient {
    /// Create a client with the given request timeout.
    pub fn new(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("highwater/0.1")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Fetch up to 200 daily candles for a market, ascending by date with
    /// invalid rows skipped.
    pub async fn daily_history(&self, market: &str) -> anyhow::Result<Vec<PricePoint>> {
        let url = format!(
            "{}/candles/days?market={}&count={}",
            UPBIT_API_URL,
            market.to_uppercase(),
            DAILY_CANDLE_COUNT
        );

        debug!("Fetching Upbit candles: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Upbit request failed")?;

        if !response.status().is_success() {
            return Err(anyhow!("Upbit API error: {}", response.status()));
        }

        let candles: Vec<DayCandle> = response.json().await.context("Upbit parse error")?;

        let mut points: Vec<PricePoint> = candles.iter().filter_map(candle_to_point).collect();
        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_supported_markets() {
        assert!(is_supported_market("KRW-BTC"));
        assert!(is_supported_market("krw-eth"));
        assert!(!is_supported_market("KRW-DOGE"));
        assert!(!is_supported_market("USDT-BTC"));
    }

    #[test]
    fn test_day_candle_deserialization() {
        let json = r#"{
            "market": "KRW-BTC",
            "candle_date_time_utc": "2025-07-14T00:00:00",
            "candle_date_time_kst": "2025-07-14T09:00:00",
            "opening_price": 160000000.0,
            "high_price": 163500000.0,
            "low_price": 159000000.0,
            "trade_price": 162000000.0,
            "timestamp": 1752537599000,
            "candle_acc_trade_volume": 1234.5
        }"#;
        let candle: DayCandle = serde_json::from_str(json).unwrap();
        assert_eq!(candle.trade_price, 162000000.0);
        assert_eq!(candle.high_price, 163500000.0);
    }

    #[test]
    fn test_candle_to_point() {
        let candle = DayCandle {
            candle_date_time_utc: "2025-07-14T00:00:00".to_string(),
            high_price: 163500000.0,
            trade_price: 162000000.0,
        };
        let point = candle_to_point(&candle).unwrap();
        assert_eq!(point.date, NaiveDate::from_ymd_opt(2025, 7, 14).unwrap());
        assert_eq!(point.close, 162000000.0);
        assert_eq!(point.high, 163500000.0);
    }

    #[test]
    fn test_candle_to_point_rejects_bad_rows() {
        let zero_price = DayCandle {
            candle_date_time_utc: "2025-07-14T00:00:00".to_string(),
            high_price: 1.0,
            trade_price: 0.0,
        };
        assert!(candle_to_point(&zero_price).is_none());

        let bad_date = DayCandle {
            candle_date_time_utc: "garbage".to_string(),
            high_price: 1.0,
            trade_price: 1.0,
        };
        assert!(candle_to_point(&bad_date).is_none());
    }

    #[test]
    fn test_upbit_client_creation() {
        let _client = UpbitClient::new(30);
    }
}
