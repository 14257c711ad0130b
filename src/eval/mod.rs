//! Pure evaluation core: drawdown, threshold bands, shock scan, sentiment.
//!
//! Every function here is deterministic over its inputs and performs no
//! I/O. Callers resolve `as_of` themselves and pass already fetched,
//! chronologically ordered series.

pub mod drawdown;
pub mod sentiment;
pub mod shock;
pub mod threshold;

pub use drawdown::compute_drawdown;
pub use sentiment::classify_sentiment;
pub use shock::detect_signal;
pub use threshold::{classify, rebalance_rules};
