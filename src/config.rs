use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Equity symbol shown when the dashboard query omits one.
    pub default_equity_symbol: String,
    /// Upbit market shown when the dashboard query omits one.
    pub default_crypto_market: String,
    /// Index symbol scanned for recent shock days.
    pub shock_index_symbol: String,
    /// Single-day change (percent, negative) that counts as a shock.
    pub shock_threshold_pct: f64,
    /// Days a shock keeps the signal in the wait state.
    pub shock_lookback_days: i64,
    /// TTL for fetched series and sentiment values (seconds).
    pub cache_ttl_secs: u64,
    /// Timeout for outbound HTTP requests (seconds).
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            default_equity_symbol: env::var("DEFAULT_EQUITY_SYMBOL")
                .unwrap_or_else(|_| "AAPL".to_string()),
            default_crypto_market: env::var("DEFAULT_CRYPTO_MARKET")
                .unwrap_or_else(|_| "KRW-BTC".to_string()),
            shock_index_symbol: env::var("SHOCK_INDEX_SYMBOL")
                .unwrap_or_else(|_| "^IXIC".to_string()),
            shock_threshold_pct: env::var("SHOCK_THRESHOLD_PCT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(-3.0),
            shock_lookback_days: env::var("SHOCK_LOOKBACK_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(31),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_values() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 3001,
            default_equity_symbol: "AAPL".to_string(),
            default_crypto_market: "KRW-BTC".to_string(),
            shock_index_symbol: "^IXIC".to_string(),
            shock_threshold_pct: -3.0,
            shock_lookback_days: 31,
            cache_ttl_secs: 3600,
            http_timeout_secs: 30,
        };

        assert_eq!(config.port, 3001);
        assert_eq!(config.shock_threshold_pct, -3.0);
        assert_eq!(config.shock_lookback_days, 31);
        assert_eq!(config.cache_ttl_secs, 3600);
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            host: "localhost".to_string(),
            port: 8080,
            default_equity_symbol: "SPY".to_string(),
            default_crypto_market: "KRW-ETH".to_string(),
            shock_index_symbol: "^GSPC".to_string(),
            shock_threshold_pct: -2.0,
            shock_lookback_days: 20,
            cache_ttl_secs: 600,
            http_timeout_secs: 10,
        };

        let cloned = config.clone();
        assert_eq!(cloned.host, config.host);
        assert_eq!(cloned.shock_index_symbol, config.shock_index_symbol);
    }
}
