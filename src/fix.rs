use serde::{Deserialize, Serialize};

/// Position fix as delivered by a location source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Accuracy radius in meters
    pub accuracy: f64,
    /// Milliseconds since epoch
    pub time: i64,
    /// Tag of the location source that produced this fix
    pub source_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearing: Option<f64>,
    /// Platform provider name ("gps", "network", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl RawFix {
    pub fn new(latitude: f64, longitude: f64, accuracy: f64, time: i64, source_id: i32) -> Self {
        Self {
            latitude,
            longitude,
            accuracy,
            time,
            source_id,
            altitude: None,
            speed: None,
            bearing: None,
            provider: None,
        }
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_bearing(mut self, bearing: f64) -> Self {
        self.bearing = Some(bearing);
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }
}

/// Distance and elapsed time since the last fresh accepted fix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionDelta {
    /// Meters
    pub delta_distance: f64,
    /// Milliseconds, negative when source clocks disagree
    pub delta_time: i64,
}

/// Accepted fix, optionally carrying the motion delta from its baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedFix {
    pub provider_id: i32,
    #[serde(flatten)]
    pub fix: RawFix,
    #[serde(flatten)]
    pub delta: Option<MotionDelta>,
}

impl EnrichedFix {
    pub fn new(provider_id: i32, fix: RawFix) -> Self {
        Self {
            provider_id,
            fix,
            delta: None,
        }
    }

    pub fn with_delta(mut self, delta: MotionDelta) -> Self {
        self.delta = Some(delta);
        self
    }

    pub fn delta_distance(&self) -> Option<f64> {
        self.delta.map(|d| d.delta_distance)
    }

    pub fn delta_time(&self) -> Option<i64> {
        self.delta.map(|d| d.delta_time)
    }

    pub fn has_delta(&self) -> bool {
        self.delta.is_some()
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Report that the device is holding position, optionally within a radius
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationaryObservation {
    pub provider_id: i32,
    #[serde(flatten)]
    pub fix: RawFix,
    /// Radius of the stationary region in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl StationaryObservation {
    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
