//! Application context and message dispatching utilities.
//!
//! The context contains the shared state and provides helpers for sending
//! events back to the compositor layer.

use std::sync::Arc;

use homeshell_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::mpsc::{Receiver, Sender};

use crate::services;
use crate::state::SharedState;

/// Shared application context passed to services and message handlers.
pub(crate) struct AppContext {
    /// Mutable runtime application state shared across services.
    pub state: SharedState,
    /// Outbound channel to the compositor layer.
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Read and dispatch messages from the bridge until it closes or a
    /// shutdown is requested, then tear the state down.
    pub async fn consume_bridge_messages(self: &Arc<Self>, mut rx: Receiver<MessageToBackend>) {
        while let Some(message) = rx.recv().await {
            log::debug!("Got a compositor message: {message:?}");
            if message == MessageToBackend::Shutdown {
                break;
            }
            self.dispatch_message(message).await;
        }

        services::lifecycle_service::handle_shutdown(self.clone()).await;
    }

    /// Dispatches the received message down to individual service handlers.
    async fn dispatch_message(self: &Arc<Self>, message: MessageToBackend) {
        match message {
            MessageToBackend::ConfigurationRequest => {
                services::config_service::handle_config_request(self.clone()).await;
            }
            MessageToBackend::SetMinimumPriority(priority) => {
                services::config_service::handle_set_minimum_priority(self.clone(), priority)
                    .await;
            }
            MessageToBackend::PostNotification(request) => {
                services::notification_service::handle_post(self.clone(), request).await;
            }
            MessageToBackend::RestoreNotification(restored) => {
                services::notification_service::handle_restore(self.clone(), restored).await;
            }
            MessageToBackend::CloseNotification { id, reason } => {
                services::notification_service::handle_close(self.clone(), id, reason).await;
            }
            MessageToBackend::SurfaceMapped(surface) => {
                services::surface_service::handle_surface_mapped(self.clone(), surface).await;
            }
            MessageToBackend::SurfaceUnmapped(id) => {
                services::surface_service::handle_surface_unmapped(self.clone(), id).await;
            }
            MessageToBackend::SurfacePropertyChanged { id, name, value } => {
                services::surface_service::handle_property_changed(self.clone(), id, name, value)
                    .await;
            }
            MessageToBackend::TopmostSurfaceChanged(id) => {
                services::surface_service::handle_topmost_changed(self.clone(), id).await;
            }
            MessageToBackend::MainWindowVisibilityChanged(visible) => {
                services::lifecycle_service::handle_main_window_visibility(self.clone(), visible)
                    .await;
            }
            MessageToBackend::FrameSwapped => {
                services::lifecycle_service::handle_frame_swapped(self.clone()).await;
            }
            MessageToBackend::Shutdown => {}
        }
    }

    /// Send a message to the compositor layer. A closed channel means the
    /// compositor layer is gone, which is only worth a log line.
    pub async fn send(&self, message: MessageFromBackend) {
        if let Err(e) = self.tx.send(message).await {
            log::warn!("Failed to send message to the compositor layer: {e}");
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::path::PathBuf;
    use std::sync::Arc;

    use homeshell_bridge::MessageFromBackend;
    use homeshell_bridge::config::Config;
    use homeshell_bridge::effect::EffectCommand;
    use tokio::sync::{RwLock, mpsc};

    use super::AppContext;
    use crate::config::LoadedConfig;
    use crate::state::State;

    pub(crate) struct Harness {
        pub context: Arc<AppContext>,
        pub rx: mpsc::Receiver<MessageFromBackend>,
        pub effect_rx: mpsc::UnboundedReceiver<EffectCommand>,
        pub _temp_dir: tempfile::TempDir,
    }

    impl Harness {
        pub fn new(config: Config) -> Self {
            let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
            let path: PathBuf = temp_dir.path().join("config.toml");
            let (tx, rx) = mpsc::channel(64);
            let (effect_tx, effect_rx) = mpsc::unbounded_channel();
            let state = State::new(LoadedConfig { config, path }, effect_tx);
            Self {
                context: Arc::new(AppContext {
                    state: Arc::new(RwLock::new(state)),
                    tx,
                }),
                rx,
                effect_rx,
                _temp_dir: temp_dir,
            }
        }

        pub fn messages(&mut self) -> Vec<MessageFromBackend> {
            std::iter::from_fn(|| self.rx.try_recv().ok()).collect()
        }

        pub fn effects(&mut self) -> Vec<EffectCommand> {
            std::iter::from_fn(|| self.effect_rx.try_recv().ok()).collect()
        }
    }
}
