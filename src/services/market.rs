//! Market evaluation service: fetch, cache, and evaluate into reports.
//!
//! The only place where the clock, the network, the cache, and the
//! evaluation core meet. Handlers call these methods; the core functions
//! in `eval` receive already resolved inputs.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::eval::{classify, classify_sentiment, compute_drawdown, detect_signal, rebalance_rules};
use crate::services::Cache;
use crate::sources::{FearGreedClient, SentimentSample, UpbitClient, YahooClient};
use crate::types::{
    DashboardReport, DrawdownReport, PricePoint, RebalanceBand, SentimentReport,
    ShockSignalReport,
};

/// Yahoo range fetched for equity drawdowns (the original dashboard looked
/// one year back).
const EQUITY_RANGE: &str = "1y";
/// Yahoo range fetched for the index shock scan; two months comfortably
/// covers a 31-day lookback window.
const SHOCK_RANGE: &str = "2mo";

/// A service result together with its cache provenance.
#[derive(Debug, Clone)]
pub struct Sourced<T> {
    pub data: T,
    pub cached: bool,
}

/// Orchestrates market data retrieval and evaluation.
pub struct MarketService {
    config: Arc<Config>,
    yahoo: YahooClient,
    upbit: UpbitClient,
    fear_greed: FearGreedClient,
    series_cache: Cache<Vec<PricePoint>>,
    sentiment_cache: Cache<SentimentSample>,
}

impl MarketService {
    /// Create the service with clients and caches sized from config.
    pub fn new(config: Arc<Config>) -> Self {
        let ttl = Duration::from_secs(config.cache_ttl_secs);
        let timeout = config.http_timeout_secs;

        Self {
            yahoo: YahooClient::new(timeout),
            upbit: UpbitClient::new(timeout),
            fear_greed: FearGreedClient::new(timeout),
            series_cache: Cache::new(ttl),
            sentiment_cache: Cache::new(ttl),
            config,
        }
    }

    /// Drawdown report for an equity symbol over the past year, in USD.
    pub async fn equity_report(&self, symbol: &str) -> Result<Sourced<DrawdownReport>> {
        let key = format!("yahoo:{}:{}", symbol.to_uppercase(), EQUITY_RANGE);
        let (series, cached) = self.yahoo_series(&key, symbol, EQUITY_RANGE).await?;
        let report = build_drawdown_report(symbol, &series, "USD")?;
        Ok(Sourced {
            data: report,
            cached,
        })
    }

    /// Drawdown report for an Upbit market over its last 200 daily
    /// candles, in KRW.
    pub async fn crypto_report(&self, market: &str) -> Result<Sourced<DrawdownReport>> {
        let market_upper = market.to_uppercase();
        let key = format!("upbit:{}:200d", market_upper);

        let (series, cached) = match self.series_cache.get(&key) {
            Some(series) => (series, true),
            None => {
                let series = self.upbit.daily_history(&market_upper).await?;
                self.series_cache.set(key, series.clone());
                (series, false)
            }
        };

        let report = build_drawdown_report(&market_upper, &series, "KRW")?;
        Ok(Sourced {
            data: report,
            cached,
        })
    }

    /// Recent-shock scan of the configured index, as of today (UTC).
    pub async fn shock_signal(&self) -> Result<Sourced<ShockSignalReport>> {
        let symbol = self.config.shock_index_symbol.clone();
        let key = format!("yahoo:{}:{}", symbol, SHOCK_RANGE);
        let (series, cached) = self.yahoo_series(&key, &symbol, SHOCK_RANGE).await?;

        let as_of = Utc::now().date_naive();
        let state = detect_signal(
            &series,
            self.config.shock_threshold_pct,
            self.config.shock_lookback_days,
            as_of,
        );
        debug!(
            "Shock scan for {}: {} (last shock {:?})",
            symbol, state.status, state.last_shock_date
        );

        Ok(Sourced {
            data: ShockSignalReport {
                symbol,
                status: state.status,
                last_shock_date: state.last_shock_date,
                days_since_shock: state.last_shock_date.map(|d| (as_of - d).num_days()),
                lookback_days: self.config.shock_lookback_days,
                threshold_pct: self.config.shock_threshold_pct,
                timestamp: Utc::now().timestamp(),
            },
            cached,
        })
    }

    /// Latest sentiment index value with its tier.
    pub async fn sentiment_report(&self) -> Result<Sourced<SentimentReport>> {
        let key = "feargreed:latest";
        let (sample, cached) = match self.sentiment_cache.get(key) {
            Some(sample) => (sample, true),
            None => {
                let sample = self.fear_greed.latest().await?;
                self.sentiment_cache.set(key.to_string(), sample);
                (sample, false)
            }
        };

        let tier = classify_sentiment(sample.value)?;
        Ok(Sourced {
            data: SentimentReport {
                value: sample.value,
                tier,
                fetched_at: sample.published_at,
            },
            cached,
        })
    }

    /// The static rebalancing table shown under the status cards.
    pub fn rebalance_table(&self) -> Vec<RebalanceBand> {
        rebalance_rules()
            .into_iter()
            .map(|rule| RebalanceBand {
                tier: rule.tier,
                trigger: if rule.upper_bound.is_finite() {
                    format!("drawdown <= {:.1}%", rule.upper_bound)
                } else {
                    "otherwise".to_string()
                },
                action: rule.action,
            })
            .collect()
    }

    /// Everything the single-page dashboard shows, fetched concurrently.
    ///
    /// A failing section fails the whole report; the dashboard never
    /// substitutes zeroed placeholders for unavailable data.
    pub async fn dashboard(&self, symbol: &str, market: &str) -> Result<DashboardReport> {
        let (signal, equity, crypto, sentiment) = tokio::join!(
            self.shock_signal(),
            self.equity_report(symbol),
            self.crypto_report(market),
            self.sentiment_report(),
        );

        Ok(DashboardReport {
            signal: signal?.data,
            equity: equity?.data,
            crypto: crypto?.data,
            sentiment: sentiment?.data,
            rebalance: self.rebalance_table(),
            timestamp: Utc::now().timestamp(),
        })
    }

    async fn yahoo_series(
        &self,
        key: &str,
        symbol: &str,
        range: &str,
    ) -> Result<(Vec<PricePoint>, bool)> {
        if let Some(series) = self.series_cache.get(key) {
            return Ok((series, true));
        }
        let series = self.yahoo.daily_history(symbol, range).await?;
        self.series_cache.set(key.to_string(), series.clone());
        Ok((series, false))
    }
}

/// Run the drawdown pipeline over a fetched series.
fn build_drawdown_report(
    symbol: &str,
    series: &[PricePoint],
    currency: &str,
) -> Result<DrawdownReport> {
    let result = compute_drawdown(series)?;
    let rules = rebalance_rules();
    let rule = classify(result.drawdown_pct, &rules)?;

    Ok(DrawdownReport {
        symbol: symbol.to_string(),
        current: result.current,
        peak: result.peak,
        drawdown_pct: result.drawdown_pct,
        tier: rule.tier,
        action: rule.action.clone(),
        currency: currency.to_string(),
        timestamp: Utc::now().timestamp(),
    })
}
