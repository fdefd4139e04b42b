//! Surface loads on planes

use serde::{Deserialize, Serialize};

use super::LoadCaseId;
use crate::elements::{CoordinateSystem, PlaneId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadDirection {
    X,
    Y,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceLoadType {
    Force,
    SelfWeight,
}

/// Whether the value is per true area or per projected area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadLocation {
    Length,
    Projection,
}

impl LoadDirection {
    pub fn label(&self) -> &'static str {
        match self {
            LoadDirection::X => "X",
            LoadDirection::Y => "Y",
            LoadDirection::Z => "Z",
        }
    }
}

impl SurfaceLoadType {
    pub fn label(&self) -> &'static str {
        match self {
            SurfaceLoadType::Force => "Force",
            SurfaceLoadType::SelfWeight => "Self weight",
        }
    }
}

impl LoadLocation {
    pub fn label(&self) -> &'static str {
        match self {
            LoadLocation::Length => "Length",
            LoadLocation::Projection => "Projection",
        }
    }
}

/// Uniform load over a whole plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceLoad {
    pub name: String,
    pub load_case: LoadCaseId,
    pub plane: PlaneId,
    pub direction: LoadDirection,
    pub load_type: SurfaceLoadType,
    /// Magnitude in Pa, sign follows the axis
    pub value: f64,
    pub coordinate_system: CoordinateSystem,
    pub location: LoadLocation,
}
