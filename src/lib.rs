// Background Location Filter Core
// Drops inaccurate fixes, tracks the last accepted fix per session and
// enriches new fixes with the distance/time moved since it.

pub mod clock;
pub mod config;
pub mod delta;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod fix;
pub mod gate;
pub mod provider;
pub mod sink;
pub mod state;
pub mod stationary;
pub mod worker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::FilterConfig;
pub use delta::haversine_distance;
pub use error::{LResult, LocationError, ProviderError, PERMISSION_DENIED};
pub use feedback::{EventBus, Tone, ToneFeedback};
pub use filter::{FilterStats, LocationFilter};
pub use fix::{EnrichedFix, MotionDelta, RawFix, StationaryObservation};
pub use gate::FRESHNESS_WINDOW_MS;
pub use provider::LocationProvider;
pub use sink::{ChannelSink, LocationSink, SinkEvent};
pub use state::StateTracker;
pub use stationary::StationaryReporter;
pub use worker::{FilterCommand, FilterWorker};
