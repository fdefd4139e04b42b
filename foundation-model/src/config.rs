//! Fixed layout and stiffness constants of the foundation
//!
//! `LayoutConfig::default()` is the standard foundation. Tests and callers
//! may substitute other values.

use serde::{Deserialize, Serialize};

/// Number of piles along X
pub const PILES_X: usize = 4;
/// Number of piles along Y
pub const PILES_Y: usize = 3;
/// Clearance between the outer piles and the slab edge in m
pub const PILE_EDGE_DISTANCE: f64 = 0.3;
/// Vertical spring at the pile toe in N/m
pub const PILE_VERTICAL_STIFFNESS: f64 = 400e6;
/// Horizontal bedding along the pile shaft in N/m
pub const PILE_HORIZONTAL_STIFFNESS: f64 = 10e6;
/// Horizontal restraint along the slab edges in N/m
pub const SLAB_EDGE_STIFFNESS: f64 = 50e6;

/// Material name of the piles
pub const PILE_MATERIAL: &str = "C30/37";
/// Material name of the slab
pub const SLAB_MATERIAL: &str = "concrete_slab";

/// Geometry and stiffness settings used by the model builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub piles_x: usize,
    pub piles_y: usize,
    pub pile_edge_distance: f64,
    pub pile_vertical_stiffness: f64,
    pub pile_horizontal_stiffness: f64,
    pub slab_edge_stiffness: f64,
    pub pile_material: String,
    pub slab_material: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            piles_x: PILES_X,
            piles_y: PILES_Y,
            pile_edge_distance: PILE_EDGE_DISTANCE,
            pile_vertical_stiffness: PILE_VERTICAL_STIFFNESS,
            pile_horizontal_stiffness: PILE_HORIZONTAL_STIFFNESS,
            slab_edge_stiffness: SLAB_EDGE_STIFFNESS,
            pile_material: PILE_MATERIAL.to_string(),
            slab_material: SLAB_MATERIAL.to_string(),
        }
    }
}

impl LayoutConfig {
    /// Total number of piles in the grid
    pub fn pile_count(&self) -> usize {
        self.piles_x * self.piles_y
    }
}
