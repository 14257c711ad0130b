//! Caching and market evaluation services.

pub mod cache;
pub mod market;

pub use cache::Cache;
pub use market::{MarketService, Sourced};
