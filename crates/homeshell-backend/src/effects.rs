use homeshell_bridge::effect::{EffectCommand, EffectHandle, EffectParams};
use homeshell_feedback::EffectPlayer;
use tokio::sync::mpsc::UnboundedSender;

/// Effect player that forwards commands to the effect-playback service over
/// the bridge's effect channel.
///
/// Handles are allocated locally so `play` never waits for the service. The
/// queue is unbounded, so a command is only lost once the service is gone.
#[derive(Debug)]
pub struct ChannelEffectPlayer {
    tx: UnboundedSender<EffectCommand>,
    last_handle: u32,
}

impl ChannelEffectPlayer {
    pub fn new(tx: UnboundedSender<EffectCommand>) -> Self {
        Self { tx, last_handle: 0 }
    }

    fn send(&self, command: EffectCommand) {
        if let Err(e) = self.tx.send(command) {
            log::warn!("Effect service is gone, dropping {:?}", e.0);
        }
    }
}

impl EffectPlayer for ChannelEffectPlayer {
    fn play(&mut self, name: &str, params: &EffectParams) -> EffectHandle {
        self.last_handle = self.last_handle.wrapping_add(1).max(1);
        let handle = EffectHandle(self.last_handle);
        self.send(EffectCommand::Play {
            handle,
            name: name.to_string(),
            params: params.clone(),
        });
        handle
    }

    fn stop(&mut self, handle: EffectHandle) {
        self.send(EffectCommand::StopHandle(handle));
    }

    fn stop_named(&mut self, name: &str) {
        self.send(EffectCommand::StopNamed(name.to_string()));
    }
}
