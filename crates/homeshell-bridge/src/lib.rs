//! Communication bridge between the compositor layer and the shell backend.
//!
//! This crate defines the types and protocols used to connect the
//! declarative UI/compositor layer with the backend that owns notifications
//! and feedback playback.
//!
//! The design is deliberately lightweight and unidirectional:
//! - The compositor layer sends events (e.g., a notification was posted, the
//!   topmost surface changed, the first frame was swapped).
//! - The backend pushes events (e.g., notification lifecycle changes,
//!   configuration changes, home readiness).
//! - The backend issues effect commands to the effect-playback service over a
//!   separate channel, never waiting for a reply.
//!
//! Messages travel over bounded [`tokio::sync::mpsc`] channels wrapped in
//! [`BridgeChannels`]. The effect command queue is unbounded: the backend
//! never waits on it and a stop command must never be shed.

pub mod config;
pub mod effect;
pub mod notification;
pub mod surface;
pub mod value;

use tokio::sync::mpsc::{self, Receiver, Sender, UnboundedReceiver, UnboundedSender};

/// Messages emitted by the backend to inform the compositor layer of state
/// updates.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageFromBackend {
    /// Response to the configuration request.
    ConfigurationResponse(config::Config),
    /// A notification was created in the store.
    NotificationAdded(notification::NotificationId),
    /// A live notification was updated in place.
    NotificationUpdated(notification::NotificationId),
    /// A notification was removed from the store.
    NotificationClosed {
        id: notification::NotificationId,
        reason: notification::CloseReason,
    },
    /// The minimum feedback priority was changed at runtime.
    MinimumPriorityChanged(i32),
    /// The home screen finished its first visible frame. Sent at most once.
    HomeReady,
    /// The backend is about to tear down its state.
    AboutToDestroy,
}

/// Events issued by the compositor layer to drive the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageToBackend {
    /// Request for the application configuration.
    ConfigurationRequest,
    /// Post a new notification or update a live one.
    PostNotification(notification::NotificationRequest),
    /// Reinsert a notification reconstructed from persisted state.
    RestoreNotification(notification::RestoredNotification),
    /// Close a notification.
    CloseNotification {
        id: notification::NotificationId,
        reason: notification::CloseReason,
    },
    /// A surface was mapped by the compositor.
    SurfaceMapped(surface::SurfaceInfo),
    /// A surface was unmapped by the compositor.
    SurfaceUnmapped(surface::SurfaceId),
    /// A window property of a mapped surface changed.
    SurfacePropertyChanged {
        id: surface::SurfaceId,
        name: String,
        value: Option<value::Value>,
    },
    /// The topmost surface changed; `None` means the home screen is on top.
    TopmostSurfaceChanged(Option<surface::SurfaceId>),
    /// Change the minimum priority needed for ambient feedback.
    SetMinimumPriority(i32),
    /// Visibility of the main home window changed.
    MainWindowVisibilityChanged(bool),
    /// The compositor swapped a frame.
    FrameSwapped,
    /// Tear the backend down.
    Shutdown,
}

/// Paired `tokio::mpsc` channels for bidirectional communication between the
/// compositor layer and the backend, plus the outbound effect command queue.
pub struct BridgeChannels {
    /// Receiver used by the compositor layer to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the compositor layer to send events to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get events from the compositor layer.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the compositor
    /// layer.
    pub backend_tx: Sender<MessageFromBackend>,

    /// Sender used by the backend to issue effect commands.
    pub effect_tx: UnboundedSender<effect::EffectCommand>,
    /// Receiver used by the effect-playback service.
    pub effect_rx: UnboundedReceiver<effect::EffectCommand>,
}

impl BridgeChannels {
    /// Creates a new set of bridged channels with the given message buffer
    /// capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        let (effect_tx, effect_rx) = mpsc::unbounded_channel();
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
            effect_tx,
            effect_rx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
