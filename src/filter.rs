//! Accepted-fix pipeline: accuracy gate, freshness check, delta computation.

use crate::clock::{Clock, SystemClock};
use crate::config::FilterConfig;
use crate::delta::compute_delta;
use crate::fix::{EnrichedFix, RawFix};
use crate::gate::{is_fresh, passes_accuracy};
use crate::state::StateTracker;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Per-session counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStats {
    pub accepted_count: u64,
    pub rejected_count: u64,
    pub delta_count: u64,
    pub stationary_count: u64,
    pub total_distance_meters: f64,
}

/// Filters raw fixes and enriches accepted ones with motion deltas
pub struct LocationFilter {
    config: FilterConfig,
    tracker: Arc<StateTracker>,
    clock: Arc<dyn Clock>,
    stats: Mutex<FilterStats>,
}

impl LocationFilter {
    /// Filter over a fresh session state, using the system clock
    pub fn new(config: FilterConfig) -> Self {
        Self::with_parts(config, Arc::new(StateTracker::new()), Arc::new(SystemClock))
    }

    pub fn with_clock(config: FilterConfig, clock: Arc<dyn Clock>) -> Self {
        Self::with_parts(config, Arc::new(StateTracker::new()), clock)
    }

    pub fn with_parts(
        config: FilterConfig,
        tracker: Arc<StateTracker>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            tracker,
            clock,
            stats: Mutex::new(FilterStats::default()),
        }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn tracker(&self) -> &Arc<StateTracker> {
        &self.tracker
    }

    /// Run one raw fix through the pipeline.
    ///
    /// Returns `None` when the fix fails the accuracy gate; the held fix is
    /// left untouched in that case. Otherwise the fix becomes the new held
    /// fix and is returned enriched with the delta from the previous one, if
    /// that previous fix is still fresh.
    pub fn process(&self, raw: RawFix) -> Option<EnrichedFix> {
        if !passes_accuracy(&raw, self.config.accuracy_threshold_m) {
            log::debug!(
                "Dropping fix from source {}: accuracy {:.1} m >= {:.1} m",
                raw.source_id,
                raw.accuracy,
                self.config.accuracy_threshold_m
            );
            self.update_stats(|s| s.rejected_count = s.rejected_count.saturating_add(1));
            return None;
        }

        let baseline = self.tracker.replace(raw.clone());
        let now = self.clock.now_millis();

        let mut enriched = EnrichedFix::new(self.config.provider_id, raw);
        if let Some(base) = baseline.as_ref().filter(|b| is_fresh(Some(*b), now)) {
            let delta = compute_delta(&enriched.fix, base);
            if delta.delta_time < 0 {
                log::warn!(
                    "Fix from source {} is {} ms older than its baseline",
                    enriched.fix.source_id,
                    delta.delta_time.unsigned_abs()
                );
            }
            log::debug!(
                "Delta {:.1} m over {} ms",
                delta.delta_distance,
                delta.delta_time
            );
            enriched = enriched.with_delta(delta);
        }

        let delta_distance = enriched.delta_distance();
        self.update_stats(|s| {
            s.accepted_count = s.accepted_count.saturating_add(1);
            if let Some(d) = delta_distance {
                s.delta_count = s.delta_count.saturating_add(1);
                s.total_distance_meters += d;
            }
        });

        Some(enriched)
    }

    /// Snapshot of the session counters
    pub fn stats(&self) -> FilterStats {
        self.stats
            .lock()
            .map(|s| s.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Start a new session: forget the held fix and zero the counters
    pub fn reset(&self) {
        self.tracker.clear();
        self.update_stats(|s| *s = FilterStats::default());
    }

    pub(crate) fn update_stats<F: FnOnce(&mut FilterStats)>(&self, f: F) {
        let mut stats = self.stats.lock().unwrap_or_else(|poisoned| {
            log::warn!("Filter stats lock poisoned, recovering counters");
            poisoned.into_inner()
        });
        f(&mut stats);
    }
}
