use homeshell_bridge::effect::{EffectHandle, EffectParams};

/// Client of the external effect-playback service.
///
/// All commands are fire-and-forget: implementations must not block waiting
/// for the service, and a failed command is the service's concern. `play`
/// therefore always yields a handle, even if the effect never starts.
pub trait EffectPlayer {
    /// Starts the named effect item with the given parameters.
    fn play(&mut self, name: &str, params: &EffectParams) -> EffectHandle;

    /// Stops one started effect instance.
    fn stop(&mut self, handle: EffectHandle);

    /// Stops every running instance of the named effect item.
    fn stop_named(&mut self, name: &str);
}
