//! Validation of raw notification hints.
//!
//! Applications attach hints as a loosely typed map. The shell only acts on a
//! closed set of them, listed in [`HintKey`]; every known hint is converted to
//! its concrete type here and the result is stored in [`Hints`]. A hint with
//! an unusable value is logged and treated as absent.

use std::collections::HashMap;

use homeshell_bridge::value::Value;

use crate::notification::Urgency;

/// Errors produced while validating a single hint value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HintError {
    /// The value has a type the hint cannot be read from.
    #[error("hint {key} expects {expected}, got {value:?}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
        value: Value,
    },
    /// The value is numeric but outside the range the hint accepts.
    #[error("hint {key} value {value} is out of range")]
    OutOfRange { key: &'static str, value: i64 },
}

/// Hints the shell understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintKey {
    /// Comma-separated list of effect items to play.
    Feedback,
    /// Sound file to play instead of the effect's default sound.
    SoundFile,
    /// Disables the audio part of the feedback.
    SuppressSound,
    /// Requests vibration regardless of the priority threshold.
    Vibrate,
    /// Disables the LED when both body and summary are empty. Defaults to on.
    LedDisabledWithoutBodyAndSummary,
    /// Package of the originating application on a foreign runtime.
    OriginPackage,
    /// Marks the notification as important enough to turn the display on.
    DisplayOn,
    /// Urgency level, 0..=2.
    Urgency,
    /// Application assigned priority.
    Priority,
    /// Hides the notification from every presentation.
    Hidden,
    /// Progress of an ongoing operation, 0.0..=1.0.
    Progress,
}

impl HintKey {
    pub const ALL: [Self; 11] = [
        Self::Feedback,
        Self::SoundFile,
        Self::SuppressSound,
        Self::Vibrate,
        Self::LedDisabledWithoutBodyAndSummary,
        Self::OriginPackage,
        Self::DisplayOn,
        Self::Urgency,
        Self::Priority,
        Self::Hidden,
        Self::Progress,
    ];

    /// The wire name of the hint.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Feedback => "x-nemo-feedback",
            Self::SoundFile => "sound-file",
            Self::SuppressSound => "suppress-sound",
            Self::Vibrate => "x-nemo-vibrate",
            Self::LedDisabledWithoutBodyAndSummary => {
                "x-nemo-led-disabled-without-body-and-summary"
            }
            Self::OriginPackage => "x-nemo-origin-package",
            Self::DisplayOn => "x-nemo-display-on",
            Self::Urgency => "urgency",
            Self::Priority => "x-nemo-priority",
            Self::Hidden => "x-nemo-hidden",
            Self::Progress => "x-nemo-progress",
        }
    }

    /// Looks a hint up by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

/// Typed view of the hints attached to a notification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hints {
    pub feedback: Option<String>,
    pub sound_file: Option<String>,
    pub suppress_sound: bool,
    pub vibrate: bool,
    pub led_disabled_without_body_and_summary: Option<bool>,
    pub origin_package: Option<String>,
    pub display_on: bool,
    pub urgency: Urgency,
    pub priority: i32,
    pub hidden: bool,
    pub progress: Option<f64>,
}

impl Hints {
    /// Validates a raw hint map. Unknown hints are ignored and malformed ones
    /// are logged and left at their defaults.
    pub fn parse(raw: &HashMap<String, Value>) -> Self {
        let mut hints = Self::default();
        for (name, value) in raw {
            let Some(key) = HintKey::from_name(name) else {
                continue;
            };
            if let Err(e) = hints.apply(key, value) {
                log::warn!("Ignoring malformed notification hint: {e}");
            }
        }
        hints
    }

    fn apply(&mut self, key: HintKey, value: &Value) -> Result<(), HintError> {
        match key {
            HintKey::Feedback => self.feedback = non_empty(text(key, value)?),
            HintKey::SoundFile => self.sound_file = non_empty(text(key, value)?),
            HintKey::SuppressSound => self.suppress_sound = flag(key, value)?,
            HintKey::Vibrate => self.vibrate = flag(key, value)?,
            HintKey::LedDisabledWithoutBodyAndSummary => {
                self.led_disabled_without_body_and_summary = Some(flag(key, value)?);
            }
            HintKey::OriginPackage => self.origin_package = non_empty(text(key, value)?),
            HintKey::DisplayOn => self.display_on = flag(key, value)?,
            HintKey::Urgency => {
                let level = integer(key, value)?;
                self.urgency = Urgency::from_level(level).ok_or(HintError::OutOfRange {
                    key: key.name(),
                    value: level,
                })?;
            }
            HintKey::Priority => {
                let priority = integer(key, value)?;
                self.priority = i32::try_from(priority).map_err(|_| HintError::OutOfRange {
                    key: key.name(),
                    value: priority,
                })?;
            }
            HintKey::Hidden => self.hidden = flag(key, value)?,
            HintKey::Progress => {
                let progress = value
                    .as_double()
                    .ok_or_else(|| wrong_type(key, "a number", value))?;
                self.progress = Some(progress);
            }
        }
        Ok(())
    }
}

fn wrong_type(key: HintKey, expected: &'static str, value: &Value) -> HintError {
    HintError::WrongType {
        key: key.name(),
        expected,
        value: value.clone(),
    }
}

fn flag(key: HintKey, value: &Value) -> Result<bool, HintError> {
    value.as_bool().ok_or_else(|| wrong_type(key, "a boolean", value))
}

fn integer(key: HintKey, value: &Value) -> Result<i64, HintError> {
    value.as_int().ok_or_else(|| wrong_type(key, "an integer", value))
}

fn text(key: HintKey, value: &Value) -> Result<String, HintError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| wrong_type(key, "a string", value))
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(entries: &[(&str, Value)]) -> HashMap<String, Value> {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn known_hints_are_typed() {
        let hints = Hints::parse(&raw(&[
            ("x-nemo-feedback", Value::from("chat,led")),
            ("sound-file", Value::from("file:///usr/share/sounds/a.wav")),
            ("x-nemo-vibrate", Value::Bool(true)),
            ("urgency", Value::Int(2)),
            ("x-nemo-priority", Value::from("120")),
            ("x-nemo-progress", Value::Double(0.5)),
        ]));

        assert_eq!(hints.feedback.as_deref(), Some("chat,led"));
        assert_eq!(hints.sound_file.as_deref(), Some("file:///usr/share/sounds/a.wav"));
        assert!(hints.vibrate);
        assert_eq!(hints.urgency, Urgency::Critical);
        assert_eq!(hints.priority, 120);
        assert_eq!(hints.progress, Some(0.5));
        assert_eq!(hints.led_disabled_without_body_and_summary, None);
    }

    #[test]
    fn malformed_hints_keep_their_defaults() {
        let hints = Hints::parse(&raw(&[
            ("urgency", Value::Int(7)),
            ("x-nemo-vibrate", Value::from("maybe")),
            ("x-nemo-priority", Value::Int(i64::MAX)),
            ("x-nemo-feedback", Value::Int(1)),
            ("x-unknown", Value::Bool(true)),
        ]));

        assert_eq!(hints, Hints::default());
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let hints = Hints::parse(&raw(&[
            ("x-nemo-origin-package", Value::from("")),
            ("sound-file", Value::from("")),
        ]));

        assert_eq!(hints.origin_package, None);
        assert_eq!(hints.sound_file, None);
    }

    #[test]
    fn every_key_round_trips_through_its_name() {
        for key in HintKey::ALL {
            assert_eq!(HintKey::from_name(key.name()), Some(key));
        }
        assert_eq!(HintKey::from_name("x-nemo-unknown"), None);
    }
}
