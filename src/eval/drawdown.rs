//! Drawdown-from-peak calculation.

use crate::error::EvalError;
use crate::types::{DrawdownResult, PricePoint};

/// Reduce a daily series into (current, peak, drawdown%).
///
/// `peak` is the maximum intraday high across the whole series, the last
/// period included; `current` is the last close. The series must be
/// non-empty and ordered ascending by date.
pub fn compute_drawdown(series: &[PricePoint]) -> Result<DrawdownResult, EvalError> {
    let last = series.last().ok_or(EvalError::EmptySeries)?;

    let peak = series
        .iter()
        .map(|p| p.high)
        .fold(f64::NEG_INFINITY, f64::max);
    if peak == 0.0 {
        return Err(EvalError::ZeroPeak);
    }

    let current = last.close;
    Ok(DrawdownResult {
        current,
        peak,
        drawdown_pct: (current - peak) / peak * 100.0,
    })
}
