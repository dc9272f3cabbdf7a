use crate::error::LResult;
use serde::{Deserialize, Serialize};

/// Default tone duration in milliseconds
pub const TONE_DURATION_MS: u32 = 1000;

/// Debug tones a provider may sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Beep,
    BeepBeepBeep,
    LongBeep,
    DoodlyDoo,
    ChirpChirpChirp,
    Dialtone,
}

/// Host capability that plays tones; the core never depends on it for correctness
pub trait ToneFeedback: Send + Sync {
    fn play(&self, tone: Tone, duration_ms: u32);
}

/// Host capability for subscribing to platform broadcasts
pub trait EventBus: Send + Sync {
    fn subscribe(&self, topic: &str) -> LResult<()>;
    fn unsubscribe(&self, topic: &str) -> LResult<()>;
}
