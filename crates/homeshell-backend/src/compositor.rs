//! Backend-side mirror of the compositor's surface set.

use std::collections::HashMap;

use homeshell_bridge::surface::{SurfaceId, SurfaceInfo};
use homeshell_bridge::value::Value;
use homeshell_feedback::SurfaceRegistry;

/// Mapped surfaces with their window properties, and which one is on top.
#[derive(Debug, Default)]
pub struct CompositorSurfaces {
    surfaces: HashMap<SurfaceId, SurfaceInfo>,
    topmost: Option<SurfaceId>,
}

impl CompositorSurfaces {
    pub fn map(&mut self, surface: SurfaceInfo) {
        self.surfaces.insert(surface.id, surface);
    }

    /// Forgets a surface. Unmapping the topmost surface leaves nothing on top
    /// until the compositor reports the next one.
    pub fn unmap(&mut self, id: SurfaceId) -> Option<SurfaceInfo> {
        if self.topmost == Some(id) {
            self.topmost = None;
        }
        self.surfaces.remove(&id)
    }

    /// Sets or clears a window property. Returns `false` if the surface is
    /// not mapped.
    pub fn set_property(&mut self, id: SurfaceId, name: String, value: Option<Value>) -> bool {
        let Some(surface) = self.surfaces.get_mut(&id) else {
            return false;
        };
        match value {
            Some(value) => surface.properties.insert(name, value),
            None => surface.properties.remove(&name),
        };
        true
    }

    pub fn set_topmost(&mut self, id: Option<SurfaceId>) {
        self.topmost = id;
    }

    pub fn topmost_id(&self) -> Option<SurfaceId> {
        self.topmost
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }
}

impl SurfaceRegistry for CompositorSurfaces {
    fn topmost_surface(&self) -> Option<&SurfaceInfo> {
        self.topmost.and_then(|id| self.surfaces.get(&id))
    }
}
