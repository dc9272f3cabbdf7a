use crate::error::ProviderError;
use crate::fix::{EnrichedFix, StationaryObservation};
use crossbeam::channel::Sender;
use serde::{Deserialize, Serialize};

/// Downstream consumer of filter output (the tracking service)
pub trait LocationSink: Send + Sync {
    fn on_fix(&self, fix: EnrichedFix);
    fn on_stationary(&self, observation: StationaryObservation);
    fn on_error(&self, error: ProviderError);
}

/// Everything a sink can receive, as one value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum SinkEvent {
    Fix(EnrichedFix),
    Stationary(StationaryObservation),
    Error(ProviderError),
}

/// Sink that forwards every event into a crossbeam channel
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<SinkEvent>,
}

impl ChannelSink {
    pub fn new(tx: Sender<SinkEvent>) -> Self {
        Self { tx }
    }

    fn forward(&self, event: SinkEvent) {
        if self.tx.send(event).is_err() {
            log::warn!("Sink receiver dropped, discarding event");
        }
    }
}

impl LocationSink for ChannelSink {
    fn on_fix(&self, fix: EnrichedFix) {
        self.forward(SinkEvent::Fix(fix));
    }

    fn on_stationary(&self, observation: StationaryObservation) {
        self.forward(SinkEvent::Stationary(observation));
    }

    fn on_error(&self, error: ProviderError) {
        self.forward(SinkEvent::Error(error));
    }
}
