use homeshell_bridge::surface::SurfaceInfo;
use homeshell_bridge::value::Value;

/// Window property through which a client restricts notification feedback
/// while it is on top.
pub const PREVIEWS_DISABLED_PROPERTY: &str = "NOTIFICATION_PREVIEWS_DISABLED";

/// Restriction declared by the topmost surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuppressionMode {
    #[default]
    AllEnabled,
    ApplicationNotificationsDisabled,
    SystemNotificationsDisabled,
    AllDisabled,
}

impl SuppressionMode {
    /// Reads the mode from the declared property value. Missing or invalid
    /// values mean [`SuppressionMode::AllEnabled`].
    pub fn from_property(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_int) {
            Some(1) => Self::ApplicationNotificationsDisabled,
            Some(2) => Self::SystemNotificationsDisabled,
            Some(3) => Self::AllDisabled,
            _ => Self::AllEnabled,
        }
    }
}

/// Read access to the compositor's surface set.
pub trait SurfaceRegistry {
    /// The surface currently on top, if any client surface is.
    fn topmost_surface(&self) -> Option<&SurfaceInfo>;
}

impl SurfaceRegistry for Option<SurfaceInfo> {
    fn topmost_surface(&self) -> Option<&SurfaceInfo> {
        self.as_ref()
    }
}

/// The suppression mode currently in force.
pub fn current_suppression_mode<R: SurfaceRegistry + ?Sized>(registry: &R) -> SuppressionMode {
    SuppressionMode::from_property(
        registry
            .topmost_surface()
            .and_then(|surface| surface.property(PREVIEWS_DISABLED_PROPERTY)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_topmost_surface_enables_everything() {
        assert_eq!(current_suppression_mode(&None::<SurfaceInfo>), SuppressionMode::AllEnabled);
    }

    #[test]
    fn topmost_surface_property_selects_the_mode() {
        let mut surface = SurfaceInfo::default();
        assert_eq!(
            current_suppression_mode(&Some(surface.clone())),
            SuppressionMode::AllEnabled
        );

        surface
            .properties
            .insert(PREVIEWS_DISABLED_PROPERTY.into(), Value::Int(1));
        assert_eq!(
            current_suppression_mode(&Some(surface.clone())),
            SuppressionMode::ApplicationNotificationsDisabled
        );

        surface
            .properties
            .insert(PREVIEWS_DISABLED_PROPERTY.into(), Value::from("3"));
        assert_eq!(
            current_suppression_mode(&Some(surface)),
            SuppressionMode::AllDisabled
        );
    }

    #[test]
    fn invalid_values_enable_everything() {
        assert_eq!(
            SuppressionMode::from_property(Some(&Value::Int(9))),
            SuppressionMode::AllEnabled
        );
        assert_eq!(
            SuppressionMode::from_property(Some(&Value::Bool(true))),
            SuppressionMode::AllEnabled
        );
    }
}
