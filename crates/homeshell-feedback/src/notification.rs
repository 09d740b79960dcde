use std::collections::HashMap;

use homeshell_bridge::notification::{NotificationId, NotificationRequest};

use crate::hints::Hints;

/// Severity class set by the posting application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    Critical,
}

impl Urgency {
    /// Maps the numeric urgency level used on the wire.
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(Self::Low),
            1 => Some(Self::Normal),
            2 => Some(Self::Critical),
            _ => None,
        }
    }
}

/// A live notification record.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Stable identifier, unchanged by updates.
    pub id: NotificationId,
    /// Name of the posting application.
    pub app_name: String,
    /// Single-line summary.
    pub summary: String,
    /// Body text.
    pub body: String,
    /// Validated hints.
    pub hints: Hints,
    /// Whether the record was reconstructed from persisted state rather than
    /// freshly posted.
    pub restored: bool,
    /// Expire timeout in milliseconds as posted.
    pub expire_timeout: i32,
}

impl Notification {
    /// Builds a record from a posting request, validating its hints.
    pub fn from_request(id: NotificationId, request: NotificationRequest) -> Self {
        Self {
            id,
            hints: Hints::parse(&request.hints),
            app_name: request.app_name,
            summary: request.summary,
            body: request.body,
            restored: false,
            expire_timeout: request.expire_timeout,
        }
    }

    pub fn urgency(&self) -> Urgency {
        self.hints.urgency
    }

    pub fn priority(&self) -> i32 {
        self.hints.priority
    }

    pub fn hidden(&self) -> bool {
        self.hints.hidden
    }

    pub fn restored(&self) -> bool {
        self.restored
    }

    /// Progress-update notifications report an ongoing operation and are
    /// updated far too often to produce feedback.
    pub fn has_progress(&self) -> bool {
        self.hints.progress.is_some()
    }

    /// Critical notifications bypass the priority threshold and the
    /// application suppression mode.
    pub fn is_critical(&self) -> bool {
        self.urgency() >= Urgency::Critical || self.hints.display_on
    }
}

/// Read access to the live notification records.
pub trait NotificationLookup {
    /// Returns the current record, or `None` if it is gone.
    fn notification(&self, id: NotificationId) -> Option<&Notification>;
}

impl NotificationLookup for HashMap<NotificationId, Notification> {
    fn notification(&self, id: NotificationId) -> Option<&Notification> {
        self.get(&id)
    }
}
