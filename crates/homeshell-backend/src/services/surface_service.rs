//! Keeps the backend's view of the compositor surfaces current.
//!
//! Surface changes never replay feedback; the suppression mode is read again
//! the next time a notification is evaluated.

use homeshell_bridge::surface::{SurfaceId, SurfaceInfo};
use homeshell_bridge::value::Value;

pub async fn handle_surface_mapped(context: super::AppContextHandle, surface: SurfaceInfo) {
    let mut state = context.state.write().await;
    log::debug!("Surface {:?} mapped: {}", surface.id, surface.title);
    state.surfaces.map(surface);
    log::debug!("{} surface(s) mapped", state.surfaces.len());
}

pub async fn handle_surface_unmapped(context: super::AppContextHandle, id: SurfaceId) {
    if context.state.write().await.surfaces.unmap(id).is_none() {
        log::debug!("Unmapped surface {id:?} was not known");
    }
}

pub async fn handle_property_changed(
    context: super::AppContextHandle,
    id: SurfaceId,
    name: String,
    value: Option<Value>,
) {
    let mut state = context.state.write().await;
    if !state.surfaces.set_property(id, name, value) {
        log::debug!("Property change for unknown surface {id:?}");
    }
}

pub async fn handle_topmost_changed(context: super::AppContextHandle, id: Option<SurfaceId>) {
    let mut state = context.state.write().await;
    log::debug!(
        "Topmost surface changed from {:?} to {id:?}",
        state.surfaces.topmost_id()
    );
    state.surfaces.set_topmost(id);
}
