//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, shared state, the periodic
//! expiry sweep, and the message dispatch loop that listens to compositor
//! events.

use std::{sync::Arc, thread, time::Duration};

use homeshell_bridge::effect::EffectCommand;
use homeshell_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::{
    RwLock,
    mpsc::{Receiver, Sender, UnboundedSender},
};

use crate::app::AppContext;
use crate::config::LoadedConfig;
use crate::services;
use crate::state::State;

/// Initialize backend state and process compositor events until shutdown.
async fn setup_backend(
    config: LoadedConfig,
    rx: Receiver<MessageToBackend>,
    tx: Sender<MessageFromBackend>,
    effect_tx: UnboundedSender<EffectCommand>,
) {
    let sweep_interval = Duration::from_millis(
        config.config.notifications.expiry_sweep_interval_ms.max(1),
    );
    let state = Arc::new(RwLock::new(State::new(config, effect_tx)));
    let context = Arc::new(AppContext { state, tx });

    let sweeper = {
        let context = context.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(sweep_interval);
            loop {
                interval.tick().await;
                services::notification_service::handle_expiry_sweep(context.clone()).await;
            }
        })
    };

    context.consume_bridge_messages(rx).await;
    sweeper.abort();
    log::info!("Backend stopped");
}

/// Spawn the backend runtime and begin processing bridge messages.
///
/// The backend runs on its own thread with a single-threaded runtime, so all
/// events are handled one at a time in arrival order. The returned handle
/// finishes once a shutdown was processed or the bridge closed.
pub fn run(
    config: LoadedConfig,
    rx: Receiver<MessageToBackend>,
    tx: Sender<MessageFromBackend>,
    effect_tx: UnboundedSender<EffectCommand>,
) -> std::io::Result<thread::JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("homeshell-backend".into())
        .spawn(move || runtime.block_on(setup_backend(config, rx, tx, effect_tx)))
}
