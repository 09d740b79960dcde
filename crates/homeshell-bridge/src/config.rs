use serde::{Deserialize, Serialize};

/// Settings of the notification feedback engine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Minimum notification priority needed for ambient feedback (sound, LED
    /// and feedback-tag driven vibration). Critical notifications bypass it.
    pub minimum_priority: i32,
}

/// Settings of the notification store.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Expire timeout applied to notifications posted with `-1`. `None`
    /// keeps them until closed.
    pub default_expire_timeout_ms: Option<u64>,
    /// How often expired notifications are swept from the store.
    pub expiry_sweep_interval_ms: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_expire_timeout_ms: None,
            expiry_sweep_interval_ms: 1000,
        }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Configuration of the feedback engine.
    pub feedback: FeedbackConfig,
    /// Configuration of the notification store.
    pub notifications: NotificationsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let config: Config =
            toml::from_str("[feedback]\nminimum_priority = 100\n").expect("failed to parse");
        assert_eq!(config.feedback.minimum_priority, 100);
        assert_eq!(config.notifications, NotificationsConfig::default());
    }
}
