use crate::fix::RawFix;

/// A held fix older than this (milliseconds) is no longer a delta baseline
pub const FRESHNESS_WINDOW_MS: i64 = 5 * 60 * 1000;

/// Accept a fix only when its accuracy radius is strictly below the threshold.
///
/// NaN accuracy never compares below anything, so it is rejected.
pub fn passes_accuracy(fix: &RawFix, threshold_m: f64) -> bool {
    fix.accuracy < threshold_m
}

/// Whether `previous` can serve as a delta baseline at wall-clock time `now_millis`.
///
/// Timestamp arithmetic wraps on overflow.
pub fn is_fresh(previous: Option<&RawFix>, now_millis: i64) -> bool {
    match previous {
        Some(prev) => now_millis.wrapping_sub(prev.time) < FRESHNESS_WINDOW_MS,
        None => false,
    }
}
