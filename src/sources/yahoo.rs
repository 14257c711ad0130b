//! Yahoo Finance chart API client for daily equity and index history.
//!
//! Uses the unofficial v8 chart endpoint (no API key). Supplies the daily
//! close/high series the drawdown and shock scans run on.

use anyhow::{anyhow, Context};
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::types::PricePoint;

const YAHOO_API_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

/// Only the fields the dashboard evaluates; Yahoo's remaining arrays
/// (open, low, volume) are ignored.
#[derive(Debug, Deserialize)]
struct Quote {
    high: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
}

/// Normalize a ticker for the chart endpoint.
/// Yahoo uses hyphens for share classes (BRK-B, not BRK.B); index symbols
/// like ^IXIC pass through unchanged.
fn normalize_symbol(symbol: &str) -> String {
    symbol.to_uppercase().replace('.', "-")
}

/// Flatten Yahoo's parallel arrays into an ascending, deduplicated series.
/// Rows with a missing or non-positive close are skipped.
fn build_series(timestamps: &[i64], quote: &Quote) -> Vec<PricePoint> {
    let highs = quote.high.as_deref().unwrap_or_default();
    let closes = quote.close.as_deref().unwrap_or_default();

    let mut points: Vec<PricePoint> = timestamps
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| {
            let close = closes.get(i).copied().flatten()?;
            if close <= 0.0 {
                return None;
            }
            let high = highs.get(i).copied().flatten().unwrap_or(close);
            let date = DateTime::from_timestamp(ts, 0)?.date_naive();
            Some(PricePoint { date, close, high })
        })
        .collect();

    points.sort_by_key(|p| p.date);
    points.dedup_by_key(|p| p.date);
    points
}

/// Yahoo Finance chart API client.
pub struct YahooClient {
    client: Client,
}

impl YahooClient {
    /// Create a client with the given request timeout.
    pub fn new(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Fetch daily close/high history for a symbol over a Yahoo range
    /// ("1mo", "2mo", "1y", ...). Points come back ascending by date with
    /// invalid rows skipped.
    pub async fn daily_history(&self, symbol: &str, range: &str) -> anyhow::Result<Vec<PricePoint>> {
        let url = format!(
            "{}/{}?range={}&interval=1d&includePrePost=false",
            YAHOO_API_URL,
            normalize_symbol(symbol),
            range
        );

        debug!("Fetching Yahoo chart data: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Yahoo request failed")?;

        if !response.status().is_success() {
            return Err(anyhow!("Yahoo API error: {}", response.status()));
        }

        let data: ChartResponse = response.json().await.context("Yahoo parse error")?;

        if let Some(error) = data.chart.error {
            return Err(anyhow!(
                "Yahoo API error: {} - {}",
                error.code,
                error.description
            ));
        }

        let result = data
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| anyhow!("empty Yahoo chart result"))?;

        let timestamps = result.timestamp.unwrap_or_default();
        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("no quote data in Yahoo response"))?;

        Ok(build_series(&timestamps, &quote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol("aapl"), "AAPL");
        assert_eq!(normalize_symbol("BRK.B"), "BRK-B");
        assert_eq!(normalize_symbol("^IXIC"), "^IXIC");
    }

    #[test]
    fn test_quote_deserialization_with_nulls() {
        let json = r#"{
            "high": [155.0, null, 157.0],
            "close": [153.0, null, 155.0]
        }"#;
        let quote: Quote = serde_json::from_str(json).unwrap();
        let highs = quote.high.unwrap();
        assert_eq!(highs[0], Some(155.0));
        assert_eq!(highs[1], None);
    }

    #[test]
    fn test_chart_error_deserialization() {
        let json = r#"{
            "result": null,
            "error": {"code": "Not Found", "description": "No data found"}
        }"#;
        let chart: Chart = serde_json::from_str(json).unwrap();
        assert!(chart.result.is_none());
        assert_eq!(chart.error.unwrap().code, "Not Found");
    }

    #[test]
    fn test_build_series_skips_invalid_rows() {
        let quote = Quote {
            high: Some(vec![Some(102.0), Some(103.0), None]),
            close: Some(vec![Some(100.0), None, Some(101.0)]),
        };
        // Three consecutive days; the middle row has no close.
        let timestamps = vec![1748822400, 1748908800, 1748995200];
        let series = build_series(&timestamps, &quote);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].close, 100.0);
        assert_eq!(series[0].high, 102.0);
        // Missing high falls back to the close.
        assert_eq!(series[1].close, 101.0);
        assert_eq!(series[1].high, 101.0);
    }

    #[test]
    fn test_build_series_sorted_ascending() {
        let quote = Quote {
            high: Some(vec![Some(101.0), Some(102.0)]),
            close: Some(vec![Some(100.0), Some(101.0)]),
        };
        // Timestamps deliberately out of order.
        let timestamps = vec![1748908800, 1748822400];
        let series = build_series(&timestamps, &quote);

        assert_eq!(series.len(), 2);
        assert!(series[0].date < series[1].date);
    }

    #[test]
    fn test_build_series_drops_non_positive_close() {
        let quote = Quote {
            high: Some(vec![Some(1.0), Some(2.0)]),
            close: Some(vec![Some(0.0), Some(2.0)]),
        };
        let timestamps = vec![1748822400, 1748908800];
        let series = build_series(&timestamps, &quote);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].close, 2.0);
    }

    #[test]
    fn test_yahoo_client_creation() {
        let _client = YahooClient::new(30);
    }
}
