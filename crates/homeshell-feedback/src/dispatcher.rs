//! Feedback playback for notifications.
//!
//! The dispatcher reacts to notifications being added, updated and removed by
//! starting and stopping effects on an [`EffectPlayer`]. Every started effect
//! is bound to the notification it was started for, and all bindings of a
//! notification are stopped before it plays anything new or when it goes
//! away, so no effect outlives its notification.


use std::collections::HashMap;

use homeshell_bridge::effect::{EffectHandle, EffectParams};
use homeshell_bridge::notification::NotificationId;
use homeshell_bridge::value::Value;

use crate::effects::EffectPlayer;
use crate::notification::{Notification, NotificationLookup};
use crate::policy;
use crate::surface::SurfaceRegistry;

/// Effect item played for notifications that explicitly request vibration.
pub const VIBRA_EFFECT: &str = "vibra";

const SOUND_FILE_PREFIX: &str = "file://";

/// Owner of the notification to effect-handle bindings.
#[derive(Debug)]
pub struct FeedbackDispatcher<P> {
    player: P,
    minimum_priority: i32,
    bindings: HashMap<NotificationId, Vec<EffectHandle>>,
}

impl<P: EffectPlayer> FeedbackDispatcher<P> {
    pub fn new(player: P, minimum_priority: i32) -> Self {
        Self {
            player,
            minimum_priority,
            bindings: HashMap::new(),
        }
    }

    pub fn minimum_priority(&self) -> i32 {
        self.minimum_priority
    }

    /// Changes the priority threshold for ambient feedback. Returns whether
    /// the value changed.
    pub fn set_minimum_priority(&mut self, minimum_priority: i32) -> bool {
        if self.minimum_priority == minimum_priority {
            return false;
        }
        self.minimum_priority = minimum_priority;
        true
    }

    /// Plays the feedback of a newly posted or updated notification,
    /// superseding whatever it was playing before.
    pub fn on_notification_added<L, R>(
        &mut self,
        id: NotificationId,
        notifications: &L,
        surfaces: &R,
    ) where
        L: NotificationLookup + ?Sized,
        R: SurfaceRegistry + ?Sized,
    {
        let Some(notification) = notifications.notification(id) else {
            log::debug!("Notification {id} vanished before its feedback was evaluated");
            return;
        };

        // progress updates arrive far too often to be worth any feedback
        if notification.has_progress() {
            return;
        }

        self.stop_bindings(id);

        let items = feedback_items(notification.hints.feedback.as_deref());
        if !items.is_empty() && policy::is_enabled(notification, self.minimum_priority, surfaces) {
            let params = effect_params(notification);
            for item in items {
                self.player.stop_named(item);
                let handle = self.player.play(item, &params);
                log::debug!("Started feedback {item} ({handle}) for notification {id}");
                self.bind(id, handle);
            }
        }

        if notification.hints.vibrate && policy::is_enabled(notification, 0, surfaces) {
            self.player.stop_named(VIBRA_EFFECT);
            let handle = self.player.play(VIBRA_EFFECT, &EffectParams::new());
            log::debug!("Started vibration ({handle}) for notification {id}");
            self.bind(id, handle);
        }
    }

    /// Stops every effect bound to a removed notification.
    ///
    /// Bindings are keyed by id, so this works whether or not the record is
    /// still in the store.
    pub fn on_notification_removed(&mut self, id: NotificationId) {
        self.stop_bindings(id);
    }

    /// Stops every bound effect of every notification. Returns how many
    /// effects were stopped.
    pub fn stop_all(&mut self) -> usize {
        let mut stopped = 0;
        for (_, handles) in self.bindings.drain() {
            for handle in handles {
                self.player.stop(handle);
                stopped += 1;
            }
        }
        stopped
    }

    /// Handles currently bound to a notification, in the order they were
    /// started.
    pub fn bindings(&self, id: NotificationId) -> &[EffectHandle] {
        self.bindings.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of notifications with at least one bound effect.
    pub fn bound_notifications(&self) -> usize {
        self.bindings.len()
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    fn bind(&mut self, id: NotificationId, handle: EffectHandle) {
        self.bindings.entry(id).or_default().push(handle);
    }

    fn stop_bindings(&mut self, id: NotificationId) {
        let Some(handles) = self.bindings.remove(&id) else {
            return;
        };
        for handle in handles {
            log::debug!("Stopping feedback {handle} of notification {id}");
            self.player.stop(handle);
        }
    }
}

/// Splits the feedback hint into effect item names, dropping empty segments.
pub fn feedback_items(feedback: Option<&str>) -> Vec<&str> {
    feedback
        .map(|feedback| feedback.split(',').filter(|item| !item.is_empty()).collect())
        .unwrap_or_default()
}

/// Playback parameters derived from the notification's contents and hints.
pub fn effect_params(notification: &Notification) -> EffectParams {
    let hints = &notification.hints;
    let mut params = EffectParams::new();

    if hints.led_disabled_without_body_and_summary.unwrap_or(true)
        && notification.body.is_empty()
        && notification.summary.is_empty()
    {
        params.insert("media.leds".into(), Value::Bool(false));
    }
    if hints.suppress_sound {
        params.insert("media.audio".into(), Value::Bool(false));
    }
    if hints.origin_package.is_some() {
        // forwarded notifications vibrate only through the explicit hint
        params.insert("media.vibra".into(), Value::Bool(false));
    }
    if let Some(sound_file) = &hints.sound_file {
        let sound_file = sound_file
            .strip_prefix(SOUND_FILE_PREFIX)
            .unwrap_or(sound_file);
        params.insert("sound.filename".into(), Value::from(sound_file));
        params.insert("sound.enabled".into(), Value::Bool(true));
    }

    params
}
