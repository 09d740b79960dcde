use std::time::Instant;

use homeshell_bridge::MessageFromBackend;
use homeshell_bridge::notification::{
    CloseReason, NotificationId, NotificationRequest, RestoredNotification,
};
use homeshell_feedback::StoreEvent;

use crate::state::State;

/// Handles a posted notification (see
/// [`homeshell_bridge::MessageToBackend::PostNotification`]).
pub async fn handle_post(context: super::AppContextHandle, request: NotificationRequest) {
    let event = {
        let mut state = context.state.write().await;
        let event = state.notifications.post(request, Instant::now());
        play_feedback(&mut state, event);
        event
    };
    context.send(lifecycle_message(event)).await;
}

/// Handles a notification restored from persisted state (see
/// [`homeshell_bridge::MessageToBackend::RestoreNotification`]).
pub async fn handle_restore(context: super::AppContextHandle, restored: RestoredNotification) {
    let event = {
        let mut state = context.state.write().await;
        let event = state.notifications.restore(restored, Instant::now());
        play_feedback(&mut state, event);
        event
    };
    context.send(lifecycle_message(event)).await;
}

/// Handles a close request (see
/// [`homeshell_bridge::MessageToBackend::CloseNotification`]).
pub async fn handle_close(
    context: super::AppContextHandle,
    id: NotificationId,
    reason: CloseReason,
) {
    let closed = {
        let mut state = context.state.write().await;
        close(&mut state, id)
    };

    if closed {
        context
            .send(MessageFromBackend::NotificationClosed { id, reason })
            .await;
    } else {
        log::debug!("Ignoring close request for unknown notification {id}");
    }
}

/// Removes every notification whose expire timeout has elapsed.
pub async fn handle_expiry_sweep(context: super::AppContextHandle) {
    let expired = {
        let mut state = context.state.write().await;
        let mut expired = state.notifications.expired(Instant::now());
        expired.retain(|id| close(&mut state, *id));
        expired
    };

    for id in expired {
        log::debug!("Notification {id} expired");
        context
            .send(MessageFromBackend::NotificationClosed {
                id,
                reason: CloseReason::Expired,
            })
            .await;
    }
}

fn play_feedback(state: &mut State, event: StoreEvent) {
    let State {
        notifications,
        dispatcher,
        surfaces,
        ..
    } = state;
    dispatcher.on_notification_added(event.id(), notifications, surfaces);
}

fn close(state: &mut State, id: NotificationId) -> bool {
    if state.notifications.remove(id).is_none() {
        return false;
    }
    state.dispatcher.on_notification_removed(id);
    true
}

fn lifecycle_message(event: StoreEvent) -> MessageFromBackend {
    match event {
        StoreEvent::Added(id) => MessageFromBackend::NotificationAdded(id),
        StoreEvent::Updated(id) => MessageFromBackend::NotificationUpdated(id),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use homeshell_bridge::config::Config;
    use homeshell_bridge::effect::{EffectCommand, EffectHandle, EffectParams};
    use homeshell_bridge::surface::{SurfaceId, SurfaceInfo};
    use homeshell_bridge::value::Value;
    use homeshell_feedback::surface::PREVIEWS_DISABLED_PROPERTY;

    use super::*;
    use crate::app::testing::Harness;

    fn request(replaces_id: u32, hints: &[(&str, Value)]) -> NotificationRequest {
        NotificationRequest {
            app_name: "messages".into(),
            replaces_id,
            summary: "New message".into(),
            body: "Hello".into(),
            hints: hints
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
            expire_timeout: 0,
        }
    }

    fn play(handle: u32, name: &str) -> EffectCommand {
        EffectCommand::Play {
            handle: EffectHandle(handle),
            name: name.into(),
            params: EffectParams::new(),
        }
    }

    #[tokio::test]
    async fn post_update_and_close_drive_feedback() {
        let mut config = Config::default();
        config.feedback.minimum_priority = 3;
        let mut harness = Harness::new(config);
        let id = NotificationId(1);

        let hints = [
            ("x-nemo-feedback", Value::from("sound,led")),
            ("x-nemo-priority", Value::Int(5)),
        ];
        handle_post(harness.context.clone(), request(0, &hints)).await;
        assert_eq!(harness.messages(), vec![MessageFromBackend::NotificationAdded(id)]);
        assert_eq!(
            harness.effects(),
            vec![
                EffectCommand::StopNamed("sound".into()),
                play(1, "sound"),
                EffectCommand::StopNamed("led".into()),
                play(2, "led"),
            ]
        );

        let hints = [
            ("x-nemo-feedback", Value::from("led")),
            ("x-nemo-priority", Value::Int(5)),
        ];
        handle_post(harness.context.clone(), request(1, &hints)).await;
        assert_eq!(harness.messages(), vec![MessageFromBackend::NotificationUpdated(id)]);
        assert_eq!(
            harness.effects(),
            vec![
                EffectCommand::StopHandle(EffectHandle(1)),
                EffectCommand::StopHandle(EffectHandle(2)),
                EffectCommand::StopNamed("led".into()),
                play(3, "led"),
            ]
        );

        handle_close(harness.context.clone(), id, CloseReason::Dismissed).await;
        assert_eq!(
            harness.messages(),
            vec![MessageFromBackend::NotificationClosed {
                id,
                reason: CloseReason::Dismissed,
            }]
        );
        assert_eq!(harness.effects(), vec![EffectCommand::StopHandle(EffectHandle(3))]);

        let state = harness.context.state.read().await;
        assert!(state.notifications.is_empty());
        assert_eq!(state.dispatcher.bound_notifications(), 0);
    }

    #[tokio::test]
    async fn topmost_surface_suppresses_new_feedback() {
        let mut harness = Harness::new(Config::default());
        {
            let mut state = harness.context.state.write().await;
            state.surfaces.map(SurfaceInfo {
                id: SurfaceId(4),
                title: "video".into(),
                properties: HashMap::from([(
                    PREVIEWS_DISABLED_PROPERTY.to_string(),
                    Value::Int(3),
                )]),
            });
            state.surfaces.set_topmost(Some(SurfaceId(4)));
        }

        let hints = [
            ("x-nemo-feedback", Value::from("chat")),
            ("x-nemo-vibrate", Value::Bool(true)),
            ("urgency", Value::Int(2)),
        ];
        handle_post(harness.context.clone(), request(0, &hints)).await;

        assert!(harness.effects().is_empty());
        assert_eq!(
            harness.messages(),
            vec![MessageFromBackend::NotificationAdded(NotificationId(1))]
        );
    }

    #[tokio::test]
    async fn restored_notifications_play_nothing() {
        let mut harness = Harness::new(Config::default());
        let hints = [
            ("x-nemo-feedback", Value::from("chat")),
            ("x-nemo-vibrate", Value::Bool(true)),
        ];

        handle_restore(
            harness.context.clone(),
            RestoredNotification {
                id: NotificationId(12),
                request: request(0, &hints),
            },
        )
        .await;

        assert!(harness.effects().is_empty());
        assert_eq!(
            harness.messages(),
            vec![MessageFromBackend::NotificationAdded(NotificationId(12))]
        );
    }

    #[tokio::test]
    async fn closing_an_unknown_notification_is_silent() {
        let mut harness = Harness::new(Config::default());

        handle_close(harness.context.clone(), NotificationId(5), CloseReason::Closed).await;

        assert!(harness.messages().is_empty());
        assert!(harness.effects().is_empty());
    }

    #[tokio::test]
    async fn expired_notifications_are_closed_and_stopped() {
        let mut harness = Harness::new(Config::default());
        let mut expiring = request(0, &[("x-nemo-feedback", Value::from("chat"))]);
        expiring.expire_timeout = 1;
        handle_post(harness.context.clone(), expiring).await;
        handle_post(harness.context.clone(), request(0, &[])).await;
        harness.messages();
        harness.effects();

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        handle_expiry_sweep(harness.context.clone()).await;

        assert_eq!(
            harness.messages(),
            vec![MessageFromBackend::NotificationClosed {
                id: NotificationId(1),
                reason: CloseReason::Expired,
            }]
        );
        assert_eq!(harness.effects(), vec![EffectCommand::StopHandle(EffectHandle(1))]);
        assert_eq!(harness.context.state.read().await.notifications.len(), 1);
    }
}
