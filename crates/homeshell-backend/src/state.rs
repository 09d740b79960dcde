use std::time::Duration;

use homeshell_bridge::effect::EffectCommand;
use homeshell_feedback::{FeedbackDispatcher, NotificationStore};
use tokio::sync::mpsc::UnboundedSender;

use crate::compositor::CompositorSurfaces;
use crate::config::LoadedConfig;
use crate::effects::ChannelEffectPlayer;
use crate::readiness::HomeReadiness;

/// The core application state: configuration plus the notification and
/// surface components wired together by the service handlers.
///
/// It is designed to be wrapped in [`SharedState`]; every handler takes the
/// write lock for the whole of an event, so dispatcher operations never
/// interleave.
#[derive(Debug)]
pub struct State {
    /// The loaded application configuration and the file it came from.
    pub config: LoadedConfig,
    /// Live notification records.
    pub notifications: NotificationStore,
    /// Feedback playback bound to the live notifications.
    pub dispatcher: FeedbackDispatcher<ChannelEffectPlayer>,
    /// Mirror of the compositor's mapped surfaces.
    pub surfaces: CompositorSurfaces,
    /// Home readiness tracking.
    pub readiness: HomeReadiness,
}

impl State {
    pub fn new(config: LoadedConfig, effect_tx: UnboundedSender<EffectCommand>) -> Self {
        let default_expire_timeout = config
            .config
            .notifications
            .default_expire_timeout_ms
            .map(Duration::from_millis);
        let minimum_priority = config.config.feedback.minimum_priority;

        Self {
            config,
            notifications: NotificationStore::new(default_expire_timeout),
            dispatcher: FeedbackDispatcher::new(
                ChannelEffectPlayer::new(effect_tx),
                minimum_priority,
            ),
            surfaces: CompositorSurfaces::default(),
            readiness: HomeReadiness::default(),
        }
    }
}

/// Thread-safe, async-friendly shared reference to the application [`State`].
pub type SharedState = std::sync::Arc<tokio::sync::RwLock<State>>;
