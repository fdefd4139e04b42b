//! Plane element - a flat 2D member bounded by four corner nodes

use serde::{Deserialize, Serialize};

use super::{Material, NodeId};

/// Handle to a plane inside a `StructuralModel`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaneId(pub(crate) usize);

/// A quadrilateral plate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub name: String,
    /// Corner nodes in winding order
    pub corners: [NodeId; 4],
    /// Thickness in m
    pub thickness: f64,
    pub material: Material,
}

impl Plane {
    /// Nodes bounding edge `edge` (1-based). Edge 4 closes back to the first corner.
    pub fn edge(&self, edge: usize) -> Option<(NodeId, NodeId)> {
        if !(1..=4).contains(&edge) {
            return None;
        }
        let start = self.corners[edge - 1];
        let end = self.corners[edge % 4];
        Some((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_edges_wrap_around() {
        let plane = Plane {
            name: "slab".into(),
            corners: [NodeId(0), NodeId(1), NodeId(2), NodeId(3)],
            thickness: 0.5,
            material: Material::new(0, "concrete_slab"),
        };
        assert_eq!(plane.edge(1), Some((NodeId(0), NodeId(1))));
        assert_eq!(plane.edge(4), Some((NodeId(3), NodeId(0))));
        assert_eq!(plane.edge(0), None);
        assert_eq!(plane.edge(5), None);
    }
}
