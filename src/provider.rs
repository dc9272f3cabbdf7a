//! Host-facing adapter that wires the filter to the tracking service.

use crate::error::{LResult, LocationError, ProviderError};
use crate::feedback::{EventBus, Tone, ToneFeedback, TONE_DURATION_MS};
use crate::filter::LocationFilter;
use crate::fix::RawFix;
use crate::sink::LocationSink;
use crate::stationary::StationaryReporter;
use std::sync::{Arc, Mutex};

/// Routes fixes from a location source through the filter into a sink
pub struct LocationProvider {
    filter: Arc<LocationFilter>,
    reporter: StationaryReporter,
    sink: Arc<dyn LocationSink>,
    tone: Mutex<Option<Box<dyn ToneFeedback>>>,
    event_bus: Option<Arc<dyn EventBus>>,
}

impl LocationProvider {
    pub fn new(filter: Arc<LocationFilter>, sink: Arc<dyn LocationSink>) -> Self {
        let reporter = StationaryReporter::new(filter.config().provider_id);
        Self {
            filter,
            reporter,
            sink,
            tone: Mutex::new(None),
            event_bus: None,
        }
    }

    pub fn with_tone_feedback(mut self, tone: Box<dyn ToneFeedback>) -> Self {
        self.tone = Mutex::new(Some(tone));
        self
    }

    pub fn with_event_bus(mut self, bus: Arc<dyn EventBus>) -> Self {
        self.event_bus = Some(bus);
        self
    }

    pub fn filter(&self) -> &Arc<LocationFilter> {
        &self.filter
    }

    /// Filter a fix and forward it to the sink if accepted.
    ///
    /// Returns whether the fix was forwarded.
    pub fn handle_location(&self, fix: RawFix) -> bool {
        match self.filter.process(fix) {
            Some(enriched) => {
                self.sink.on_fix(enriched);
                true
            }
            None => false,
        }
    }

    /// Report a stationary fix without a region radius
    pub fn handle_stationary(&self, fix: RawFix) {
        self.forward_stationary(fix, None);
    }

    /// Report a stationary fix with the radius (meters) of the stationary region
    pub fn handle_stationary_with_radius(&self, fix: RawFix, radius: f64) {
        self.forward_stationary(fix, Some(radius));
    }

    pub(crate) fn forward_stationary(&self, fix: RawFix, radius: Option<f64>) {
        let observation = self.reporter.report(fix, radius);
        self.filter
            .update_stats(|s| s.stationary_count = s.stationary_count.saturating_add(1));
        self.sink.on_stationary(observation);
    }

    /// Surface a permission failure from the location source; never retried here
    pub fn handle_security_exception(&self, message: &str) {
        log::warn!("Location permission denied: {}", message);
        self.sink.on_error(ProviderError::permission_denied(message));
    }

    /// Sound a debug tone if debugging is enabled and a tone capability is attached
    pub fn start_tone(&self, tone: Tone) {
        if !self.filter.config().debug {
            return;
        }
        if let Ok(slot) = self.tone.lock() {
            if let Some(feedback) = slot.as_ref() {
                feedback.play(tone, TONE_DURATION_MS);
            }
        }
    }

    /// Release the tone capability
    pub fn on_destroy(&self) {
        if let Ok(mut slot) = self.tone.lock() {
            slot.take();
        }
    }

    pub fn subscribe(&self, topic: &str) -> LResult<()> {
        self.event_bus
            .as_ref()
            .ok_or(LocationError::NoEventBus)?
            .subscribe(topic)
    }

    pub fn unsubscribe(&self, topic: &str) -> LResult<()> {
        self.event_bus
            .as_ref()
            .ok_or(LocationError::NoEventBus)?
            .unsubscribe(topic)
    }
}
