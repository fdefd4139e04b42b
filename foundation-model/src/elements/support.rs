//! Support conditions

use serde::{Deserialize, Serialize};

use super::{BeamId, NodeId, PlaneId};

/// Behaviour of a single degree of freedom
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "stiffness", rename_all = "snake_case")]
pub enum Freedom {
    /// Unrestrained
    Free,
    /// Fully restrained
    Rigid,
    /// Spring with stiffness in N/m (translations) or Nm/rad (rotations)
    Flexible(f64),
}

impl Freedom {
    pub fn label(&self) -> &'static str {
        match self {
            Freedom::Free => "Free",
            Freedom::Rigid => "Rigid",
            Freedom::Flexible(_) => "Flexible",
        }
    }

    /// Spring stiffness, 0 unless flexible
    pub fn stiffness(&self) -> f64 {
        match self {
            Freedom::Flexible(k) => *k,
            _ => 0.0,
        }
    }
}

/// Per-axis restraints [X, Y, Z, RX, RY, RZ]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Restraints {
    pub x: Freedom,
    pub y: Freedom,
    pub z: Freedom,
    pub rx: Freedom,
    pub ry: Freedom,
    pub rz: Freedom,
}

impl Restraints {
    /// All six DOFs free
    pub fn free() -> Self {
        Self {
            x: Freedom::Free,
            y: Freedom::Free,
            z: Freedom::Free,
            rx: Freedom::Free,
            ry: Freedom::Free,
            rz: Freedom::Free,
        }
    }

    pub fn with_x(mut self, freedom: Freedom) -> Self {
        self.x = freedom;
        self
    }

    pub fn with_y(mut self, freedom: Freedom) -> Self {
        self.y = freedom;
        self
    }

    pub fn with_z(mut self, freedom: Freedom) -> Self {
        self.z = freedom;
        self
    }

    /// Restraints as array [X, Y, Z, RX, RY, RZ]
    pub fn as_array(&self) -> [Freedom; 6] {
        [self.x, self.y, self.z, self.rx, self.ry, self.rz]
    }
}

impl Default for Restraints {
    fn default() -> Self {
        Self::free()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateSystem {
    Global,
    Local,
}

impl CoordinateSystem {
    pub fn label(&self) -> &'static str {
        match self {
            CoordinateSystem::Global => "GCS",
            CoordinateSystem::Local => "LCS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointSupportType {
    Standard,
}

impl PointSupportType {
    pub fn label(&self) -> &'static str {
        match self {
            PointSupportType::Standard => "Standard",
        }
    }
}

/// Support at a single node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSupport {
    pub name: String,
    pub node: NodeId,
    pub support_type: PointSupportType,
    pub restraints: Restraints,
    pub coordinate_system: CoordinateSystem,
}

/// What a line support is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineSupportTarget {
    /// Along the full length of a beam
    Beam(BeamId),
    /// Along one edge (1-based) of a plane
    PlaneEdge { plane: PlaneId, edge: usize },
}

/// Support distributed along a beam or a plane edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSupport {
    pub name: String,
    pub target: LineSupportTarget,
    pub restraints: Restraints,
    pub coordinate_system: CoordinateSystem,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_restraints() {
        let r = Restraints::free();
        assert!(r.as_array().iter().all(|f| *f == Freedom::Free));
    }

    #[test]
    fn test_flexible_z_only() {
        let r = Restraints::free().with_z(Freedom::Flexible(400e6));
        assert_eq!(r.as_array()[2], Freedom::Flexible(400e6));
        assert_eq!(r.z.stiffness(), 400e6);
        assert_eq!(r.x.stiffness(), 0.0);
        assert_eq!(r.z.label(), "Flexible");
        assert_eq!(r.x.label(), "Free");
    }
}
