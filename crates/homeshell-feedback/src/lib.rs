//! Notification store, feedback policy and effect dispatching.
//!
//! This crate holds the notification lifecycle core of the shell:
//! - [`store::NotificationStore`] keeps the live notification records.
//! - [`hints`] validates raw notification hints into typed values once, where
//!   notifications enter the store.
//! - [`surface`] derives the suppression mode declared by the topmost
//!   compositor surface.
//! - [`policy`] decides whether a notification may produce feedback right now.
//! - [`dispatcher::FeedbackDispatcher`] starts and stops effects on an
//!   [`effects::EffectPlayer`] and tracks which effect handles belong to which
//!   notification.
//!
//! Collaborators are passed in explicitly, so every component can be driven
//! against in-memory fakes.

pub mod dispatcher;
pub mod effects;
pub mod hints;
pub mod notification;
pub mod policy;
pub mod store;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;

pub use dispatcher::FeedbackDispatcher;
pub use effects::EffectPlayer;
pub use notification::{Notification, NotificationLookup, Urgency};
pub use store::{NotificationStore, StoreEvent};
pub use surface::{SuppressionMode, SurfaceRegistry};
