//! Recent single-day shock detection over a daily close series.

use chrono::NaiveDate;

use crate::types::{PricePoint, ShockEvent, SignalState, SignalStatus};

/// All single-day declines at or below `shock_pct`, oldest first.
///
/// Changes are close-over-close between consecutive observations; a pair
/// whose earlier close is non-positive cannot produce a defined change and
/// is skipped.
pub fn shock_events(series: &[PricePoint], shock_pct: f64) -> Vec<ShockEvent> {
    series
        .windows(2)
        .filter_map(|pair| {
            let prev = pair[0].close;
            if prev <= 0.0 {
                return None;
            }
            let change_pct = (pair[1].close - prev) / prev * 100.0;
            (change_pct <= shock_pct).then_some(ShockEvent {
                date: pair[1].date,
                change_pct,
            })
        })
        .collect()
}

/// Scan the series for shock days and report whether the most recent one
/// still falls inside the lookback window as of `as_of`.
///
/// `as_of` must be supplied by the caller; the scan never reads the clock.
/// A series with fewer than two points yields `Safe` with no shock date.
pub fn detect_signal(
    series: &[PricePoint],
    shock_pct: f64,
    lookback_days: i64,
    as_of: NaiveDate,
) -> SignalState {
    let events = shock_events(series, shock_pct);
    let Some(last) = events.last() else {
        return SignalState {
            status: SignalStatus::Safe,
            last_shock_date: None,
        };
    };

    let days_passed = (as_of - last.date).num_days();
    let status = if days_passed < lookback_days {
        SignalStatus::Wait
    } else {
        SignalStatus::Safe
    };

    SignalState {
        status,
        last_shock_date: Some(last.date),
    }
}
