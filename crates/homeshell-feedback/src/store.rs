//! The set of live notifications.
//!
//! The store assigns ids, applies posts, updates and removals, and tracks the
//! expiry deadline of each record. It knows nothing about feedback; callers
//! forward the returned [`StoreEvent`]s to the dispatcher.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use homeshell_bridge::notification::{NotificationId, NotificationRequest, RestoredNotification};

use crate::notification::{Notification, NotificationLookup};

/// Outcome of a post or restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// A new record was created.
    Added(NotificationId),
    /// A live record was updated in place.
    Updated(NotificationId),
}

impl StoreEvent {
    pub fn id(self) -> NotificationId {
        match self {
            Self::Added(id) | Self::Updated(id) => id,
        }
    }
}

#[derive(Debug)]
struct Entry {
    notification: Notification,
    expires_at: Option<Instant>,
}

/// Owner of the live notification records.
#[derive(Debug)]
pub struct NotificationStore {
    entries: HashMap<NotificationId, Entry>,
    last_id: u32,
    default_expire_timeout: Option<Duration>,
}

impl NotificationStore {
    /// Creates an empty store. `default_expire_timeout` applies to
    /// notifications posted with an expire timeout of `-1`.
    pub fn new(default_expire_timeout: Option<Duration>) -> Self {
        Self {
            entries: HashMap::new(),
            last_id: 0,
            default_expire_timeout,
        }
    }

    /// Posts a notification. A `replaces_id` naming a live record updates it
    /// in place and keeps its id; anything else creates a new record.
    pub fn post(&mut self, request: NotificationRequest, now: Instant) -> StoreEvent {
        let replaces = NotificationId(request.replaces_id);
        if request.replaces_id != 0 && self.entries.contains_key(&replaces) {
            self.insert(Notification::from_request(replaces, request), now);
            return StoreEvent::Updated(replaces);
        }

        if request.replaces_id != 0 {
            log::debug!("Notification {replaces} is gone, posting a new one instead");
        }

        let id = self.allocate_id();
        self.insert(Notification::from_request(id, request), now);
        StoreEvent::Added(id)
    }

    /// Reinserts a notification reconstructed from persisted state under its
    /// persisted id. Fresh ids are always allocated past every restored one.
    /// Id 0 is never a valid id, so such a record gets a fresh one instead.
    pub fn restore(&mut self, restored: RestoredNotification, now: Instant) -> StoreEvent {
        let id = if restored.id.0 == 0 {
            let id = self.allocate_id();
            log::warn!("Restored notification has no valid id, using {id}");
            id
        } else {
            restored.id
        };
        self.last_id = self.last_id.max(id.0);

        let mut notification = Notification::from_request(id, restored.request);
        notification.restored = true;

        let existed = self.entries.contains_key(&id);
        self.insert(notification, now);
        if existed {
            StoreEvent::Updated(id)
        } else {
            StoreEvent::Added(id)
        }
    }

    /// Removes a record, returning it if it was live.
    pub fn remove(&mut self, id: NotificationId) -> Option<Notification> {
        self.entries.remove(&id).map(|entry| entry.notification)
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.get(&id).map(|entry| &entry.notification)
    }

    /// Ids of the records whose expiry deadline is at or before `now`, in
    /// ascending order.
    pub fn expired(&self, now: Instant) -> Vec<NotificationId> {
        let mut ids: Vec<NotificationId> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.expires_at.is_some_and(|deadline| deadline <= now))
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn allocate_id(&mut self) -> NotificationId {
        // ids wrap around after u32::MAX, skipping 0 and anything still live
        loop {
            self.last_id = self.last_id.wrapping_add(1);
            let id = NotificationId(self.last_id);
            if self.last_id != 0 && !self.entries.contains_key(&id) {
                return id;
            }
        }
    }

    fn insert(&mut self, notification: Notification, now: Instant) {
        let expires_at = self
            .expire_timeout(notification.expire_timeout)
            .map(|timeout| now + timeout);
        self.entries.insert(
            notification.id,
            Entry {
                notification,
                expires_at,
            },
        );
    }

    fn expire_timeout(&self, expire_timeout: i32) -> Option<Duration> {
        match expire_timeout {
            -1 => self.default_expire_timeout,
            timeout if timeout > 0 => Some(Duration::from_millis(timeout as u64)),
            _ => None,
        }
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl NotificationLookup for NotificationStore {
    fn notification(&self, id: NotificationId) -> Option<&Notification> {
        self.get(id)
    }
}
