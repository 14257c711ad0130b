//! Highwater - Market drawdown monitoring and rebalancing signal server
//!
//! Fetches daily price history for equities (Yahoo Finance) and crypto
//! markets (Upbit) along with a market sentiment index, evaluates drawdown
//! from the high-water mark against a fixed rebalancing ladder, and serves
//! the results as a JSON API together with a recent-shock scan of the
//! watched index.

pub mod api;
pub mod config;
pub mod error;
pub mod eval;
pub mod services;
pub mod sources;
pub mod types;

use std::sync::Arc;

use config::Config;
use services::MarketService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub market: Arc<MarketService>,
}

// Re-export commonly used types
pub use types::*;
