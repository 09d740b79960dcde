use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Compositor-assigned identifier of a client surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct SurfaceId(pub u32);

/// A mapped surface together with the window properties its client declared.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SurfaceInfo {
    /// Identifier of the surface.
    pub id: SurfaceId,
    /// Window title declared by the client.
    pub title: String,
    /// Window properties declared by the client.
    pub properties: HashMap<String, Value>,
}

impl SurfaceInfo {
    /// Returns the declared window property with the given name.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}
