use crate::notification::{Notification, Urgency};
use crate::surface::{SuppressionMode, SurfaceRegistry, current_suppression_mode};

/// Decides whether `notification` may produce feedback under the current
/// surface state.
///
/// Hidden and restored notifications never do. Otherwise the notification
/// must clear the priority threshold (critical ones always do) and the
/// suppression mode of the topmost surface must let it through.
pub fn is_enabled<R: SurfaceRegistry + ?Sized>(
    notification: &Notification,
    minimum_priority: i32,
    surfaces: &R,
) -> bool {
    if notification.hidden() || notification.restored() {
        return false;
    }

    let critical = notification.is_critical();
    let mode = current_suppression_mode(surfaces);

    (notification.priority() >= minimum_priority || critical)
        && permits(mode, notification.urgency(), critical)
}

/// Whether the suppression mode lets a notification with the given urgency
/// and criticality through.
pub fn permits(mode: SuppressionMode, urgency: Urgency, critical: bool) -> bool {
    match mode {
        SuppressionMode::AllEnabled => true,
        SuppressionMode::ApplicationNotificationsDisabled => critical,
        SuppressionMode::SystemNotificationsDisabled => urgency < Urgency::Critical,
        SuppressionMode::AllDisabled => false,
    }
}
