//! Backend service handlers for compositor-driven events.
//!
//! This module groups async event handlers that operate on the shared
//! `AppContext`, update the notification and surface state, start or stop
//! feedback, and emit lifecycle events back to the compositor layer.

pub mod config_service;
pub mod lifecycle_service;
pub mod notification_service;
pub mod surface_service;

/// Represents a type that is used in all handlers as an application context.
pub(crate) type AppContextHandle = std::sync::Arc<crate::app::AppContext>;
