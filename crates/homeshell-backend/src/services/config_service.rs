use homeshell_bridge::MessageFromBackend;

/// Handles an incoming configuration request (see
/// [`homeshell_bridge::MessageToBackend::ConfigurationRequest`]).
pub async fn handle_config_request(context: super::AppContextHandle) {
    let config = {
        let state = context.state.read().await;
        state.config.config.clone()
    };
    context
        .send(MessageFromBackend::ConfigurationResponse(config))
        .await;
}

/// Changes the minimum feedback priority, persists it and announces the
/// change. Setting the current value again is a no-op.
pub async fn handle_set_minimum_priority(context: super::AppContextHandle, priority: i32) {
    let (config, path) = {
        let mut state = context.state.write().await;
        if !state.dispatcher.set_minimum_priority(priority) {
            return;
        }
        state.config.config.feedback.minimum_priority = priority;
        (state.config.config.clone(), state.config.path.clone())
    };

    log::info!("Minimum feedback priority changed to {priority}");
    // persist the new threshold so it is remembered across runs
    if let Err(e) = crate::config::save_config(&config, &path).await {
        log::error!("Failed to persist minimum priority: {e}");
    }

    context
        .send(MessageFromBackend::MinimumPriorityChanged(priority))
        .await;
}

#[cfg(test)]
mod tests {
    use homeshell_bridge::config::Config;
    use homeshell_bridge::effect::EffectCommand;
    use homeshell_bridge::notification::NotificationRequest;
    use homeshell_bridge::value::Value;

    use super::*;
    use crate::app::testing::Harness;
    use crate::services::notification_service;

    fn played(effects: &[EffectCommand]) -> Vec<&str> {
        effects
            .iter()
            .filter_map(|command| match command {
                EffectCommand::Play { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn minimum_priority_change_is_announced_and_persisted() {
        let mut harness = Harness::new(Config::default());

        handle_set_minimum_priority(harness.context.clone(), 70).await;
        handle_set_minimum_priority(harness.context.clone(), 70).await;

        assert_eq!(
            harness.messages(),
            vec![MessageFromBackend::MinimumPriorityChanged(70)]
        );

        let path = harness.context.state.read().await.config.path.clone();
        let loaded = crate::config::load_config(Some(path))
            .await
            .expect("failed to load persisted config");
        assert_eq!(loaded.config.feedback.minimum_priority, 70);
    }

    #[tokio::test]
    async fn configuration_request_returns_the_live_config() {
        let mut config = Config::default();
        config.feedback.minimum_priority = 5;
        let mut harness = Harness::new(config.clone());

        handle_config_request(harness.context.clone()).await;

        assert_eq!(
            harness.messages(),
            vec![MessageFromBackend::ConfigurationResponse(config)]
        );
    }

    #[tokio::test]
    async fn raised_minimum_priority_applies_to_later_notifications() {
        let mut harness = Harness::new(Config::default());
        let request = || NotificationRequest {
            summary: "Low priority".into(),
            hints: [
                ("x-nemo-feedback".to_string(), Value::from("chat")),
                ("x-nemo-vibrate".to_string(), Value::Bool(true)),
                ("x-nemo-priority".to_string(), Value::Int(2)),
            ]
            .into(),
            ..Default::default()
        };

        notification_service::handle_post(harness.context.clone(), request()).await;
        assert_eq!(played(&harness.effects()), vec!["chat", "vibra"]);

        handle_set_minimum_priority(harness.context.clone(), 3).await;
        notification_service::handle_post(harness.context.clone(), request()).await;

        assert_eq!(played(&harness.effects()), vec!["vibra"]);
        assert_eq!(
            harness.context.state.read().await.dispatcher.minimum_priority(),
            3
        );
    }
}
