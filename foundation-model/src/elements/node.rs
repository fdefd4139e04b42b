//! Node element - a named point in 3D space

use serde::{Deserialize, Serialize};

/// Handle to a node inside a `StructuralModel`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

/// A 3D node in the structural model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Label, e.g. `n1` or `K:p3_b`
    pub name: String,
    /// X coordinate in m
    pub x: f64,
    /// Y coordinate in m
    pub y: f64,
    /// Z coordinate in m
    pub z: f64,
}

impl Node {
    /// Create a new node at the given coordinates
    pub fn new(name: &str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name: name.to_string(),
            x,
            y,
            z,
        }
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}
