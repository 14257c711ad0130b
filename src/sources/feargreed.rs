//! Fear & Greed index client (alternative.me).
//!
//! The endpoint publishes a 0-100 crypto market sentiment index once a
//! day; values arrive string-encoded.

use anyhow::{anyhow, Context};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const FNG_API_URL: &str = "https://api.alternative.me/fng/";

#[derive(Debug, Deserialize)]
struct FngResponse {
    data: Vec<FngEntry>,
}

#[derive(Debug, Deserialize)]
struct FngEntry {
    value: String,
    timestamp: String,
}

/// Latest sentiment index observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentSample {
    /// Index value on the 0-100 scale.
    pub value: i32,
    /// When the provider published the value (epoch seconds).
    pub published_at: i64,
}

/// Fear & Greed index API client.
pub struct FearGreedClient {
    client: Client,
}

impl FearGreedClient {
    /// Create a client with the given request timeout.
    pub fn new(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("highwater/0.1")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Fetch the latest index value.
    pub async fn latest(&self) -> anyhow::Result<SentimentSample> {
        let url = format!("{}?limit=1", FNG_API_URL);

        debug!("Fetching fear & greed index: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("fear & greed request failed")?;

        if !response.status().is_success() {
            return Err(anyhow!("fear & greed API error: {}", response.status()));
        }

        let data: FngResponse = response.json().await.context("fear & greed parse error")?;

        let entry = data
            .data
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("empty fear & greed response"))?;

        parse_sample(&entry)
    }
}

fn parse_sample(entry: &FngEntry) -> anyhow::Result<SentimentSample> {
    let value: i32 = entry
        .value
        .trim()
        .parse()
        .context("non-numeric fear & greed value")?;
    let published_at: i64 = entry
        .timestamp
        .trim()
        .parse()
        .context("non-numeric fear & greed timestamp")?;

    Ok(SentimentSample {
        value,
        published_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "name": "Fear and Greed Index",
            "data": [
                {
                    "value": "39",
                    "value_classification": "Fear",
                    "timestamp": "1752451200",
                    "time_until_update": "40042"
                }
            ],
            "metadata": {"error": null}
        }"#;
        let response: FngResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].value, "39");
    }

    #[test]
    fn test_parse_sample() {
        let entry = FngEntry {
            value: "72".to_string(),
            timestamp: "1752451200".to_string(),
        };
        let sample = parse_sample(&entry).unwrap();
        assert_eq!(sample.value, 72);
        assert_eq!(sample.published_at, 1752451200);
    }

    #[test]
    fn test_parse_sample_rejects_garbage() {
        let entry = FngEntry {
            value: "n/a".to_string(),
            timestamp: "1752451200".to_string(),
        };
        assert!(parse_sample(&entry).is_err());
    }

    #[test]
    fn test_fear_greed_client_creation() {
        let _client = FearGreedClient::new(30);
    }
}
