//! In-memory collaborators for unit tests.

use homeshell_bridge::effect::{EffectHandle, EffectParams};
use homeshell_bridge::notification::NotificationId;
use homeshell_bridge::surface::SurfaceInfo;
use homeshell_bridge::value::Value;

use crate::effects::EffectPlayer;
use crate::hints::Hints;
use crate::notification::Notification;
use crate::surface::{PREVIEWS_DISABLED_PROPERTY, SuppressionMode};

/// One call observed by [`RecordingPlayer`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Play(EffectHandle, String, EffectParams),
    Stop(EffectHandle),
    StopNamed(String),
}

/// Effect player that records every call and hands out sequential handles.
#[derive(Debug, Default)]
pub(crate) struct RecordingPlayer {
    pub calls: Vec<Call>,
    next_handle: u32,
}

impl RecordingPlayer {
    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

impl EffectPlayer for RecordingPlayer {
    fn play(&mut self, name: &str, params: &EffectParams) -> EffectHandle {
        self.next_handle += 1;
        let handle = EffectHandle(self.next_handle);
        self.calls
            .push(Call::Play(handle, name.to_string(), params.clone()));
        handle
    }

    fn stop(&mut self, handle: EffectHandle) {
        self.calls.push(Call::Stop(handle));
    }

    fn stop_named(&mut self, name: &str) {
        self.calls.push(Call::StopNamed(name.to_string()));
    }
}

/// A plain, visible, normal-urgency notification with a summary and body.
pub(crate) fn notification(id: u32) -> Notification {
    Notification {
        id: NotificationId(id),
        app_name: "messages".into(),
        summary: "Summary".into(),
        body: "Body".into(),
        hints: Hints::default(),
        restored: false,
        expire_timeout: 0,
    }
}

/// A surface registry whose topmost surface declares `mode`.
pub(crate) fn topmost_with_mode(mode: SuppressionMode) -> Option<SurfaceInfo> {
    let level = match mode {
        SuppressionMode::AllEnabled => 0,
        SuppressionMode::ApplicationNotificationsDisabled => 1,
        SuppressionMode::SystemNotificationsDisabled => 2,
        SuppressionMode::AllDisabled => 3,
    };
    let mut surface = SurfaceInfo::default();
    surface
        .properties
        .insert(PREVIEWS_DISABLED_PROPERTY.into(), Value::Int(level));
    Some(surface)
}
