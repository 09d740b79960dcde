use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Opaque token identifying one started effect instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct EffectHandle(pub u32);

impl std::fmt::Display for EffectHandle {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "effect#{}", self.0)
    }
}

/// Parameters passed along with an effect start request, keyed by the
/// playback service's property names (e.g. `media.leds`).
pub type EffectParams = BTreeMap<String, Value>;

/// A fire-and-forget command for the effect-playback service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum EffectCommand {
    /// Start the named effect. The handle was allocated by the sender and is
    /// used by later [`EffectCommand::StopHandle`] commands.
    Play {
        handle: EffectHandle,
        name: String,
        params: EffectParams,
    },
    /// Stop one started effect instance.
    StopHandle(EffectHandle),
    /// Stop every running instance of the named effect.
    StopNamed(String),
}
