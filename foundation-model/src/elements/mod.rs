//! Structural elements module

mod beam;
mod material;
mod node;
mod plane;
mod section;
mod support;

pub use beam::{Beam, BeamId};
pub use material::Material;
pub use node::{Node, NodeId};
pub use plane::{Plane, PlaneId};
pub use section::{CrossSection, CrossSectionId, CrossSectionShape};
pub use support::{
    CoordinateSystem, Freedom, LineSupport, LineSupportTarget, PointSupport, PointSupportType,
    Restraints,
};
