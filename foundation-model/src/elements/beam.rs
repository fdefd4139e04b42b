//! Beam element - a straight 1D member between two nodes

use serde::{Deserialize, Serialize};

use super::{CrossSectionId, NodeId};

/// Handle to a beam inside a `StructuralModel`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BeamId(pub(crate) usize);

/// A beam running from `begin_node` to `end_node`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    pub name: String,
    pub begin_node: NodeId,
    pub end_node: NodeId,
    pub cross_section: CrossSectionId,
}
