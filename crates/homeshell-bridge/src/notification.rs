use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Unique, stable identifier of a notification for its whole lifetime.
///
/// Ids are assigned by the notification store in increasing order; `0` is
/// never a valid id and is used by posting applications to mean "new".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NotificationId(pub u32);

impl std::fmt::Display for NotificationId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

/// Why a notification left the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CloseReason {
    /// The notification's expire timeout elapsed.
    Expired,
    /// The user dismissed the notification.
    Dismissed,
    /// The posting application asked for the notification to be removed.
    Closed,
    /// Any other reason.
    Undefined,
}

/// A notification as posted by an application.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NotificationRequest {
    /// Name of the posting application.
    pub app_name: String,
    /// Id of a live notification to update; `0` posts a new one.
    pub replaces_id: u32,
    /// Single-line summary.
    pub summary: String,
    /// Body text.
    pub body: String,
    /// Raw hints keyed by their wire names (e.g. `x-nemo-feedback`).
    pub hints: HashMap<String, Value>,
    /// Expire timeout in milliseconds. `-1` uses the configured default,
    /// `0` never expires.
    pub expire_timeout: i32,
}

/// A notification reconstructed from persisted state, reinserted under the id
/// it had before.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RestoredNotification {
    /// The id the notification was persisted with.
    pub id: NotificationId,
    /// The notification contents.
    pub request: NotificationRequest,
}
