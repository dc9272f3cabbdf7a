use crate::fix::{RawFix, StationaryObservation};

/// Builds stationary observations; never consults the accuracy gate or the held fix
#[derive(Debug, Clone, Copy)]
pub struct StationaryReporter {
    provider_id: i32,
}

impl StationaryReporter {
    pub fn new(provider_id: i32) -> Self {
        Self { provider_id }
    }

    pub fn report(&self, fix: RawFix, radius: Option<f64>) -> StationaryObservation {
        StationaryObservation {
            provider_id: self.provider_id,
            fix,
            radius,
        }
    }

    pub fn report_with_radius(&self, fix: RawFix, radius: f64) -> StationaryObservation {
        self.report(fix, Some(radius))
    }

    pub fn report_without_radius(&self, fix: RawFix) -> StationaryObservation {
        self.report(fix, None)
    }
}
