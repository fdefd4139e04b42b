//! Material references
//!
//! The analysis engine owns the material library (it lives in the `.esa`
//! template), so a material here is only a reference by id and name.

use serde::{Deserialize, Serialize};

/// Reference to a material defined in the analysis template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// Engine-side material id
    pub id: u32,
    /// Material name as known to the engine
    pub name: String,
}

impl Material {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}
