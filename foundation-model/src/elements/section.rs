//! Cross-section definitions for beam elements

use serde::{Deserialize, Serialize};

use super::Material;

/// Handle to a cross-section inside a `StructuralModel`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrossSectionId(pub(crate) usize);

/// Cross-section geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum CrossSectionShape {
    /// Solid circle, diameter in m
    Circular { diameter: f64 },
}

/// A named cross-section with its material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSection {
    pub name: String,
    pub material: Material,
    pub shape: CrossSectionShape,
}

impl CrossSection {
    /// Create a solid circular section
    pub fn circular(name: &str, material: Material, diameter: f64) -> Self {
        Self {
            name: name.to_string(),
            material,
            shape: CrossSectionShape::Circular { diameter },
        }
    }

    /// Outer diameter in m
    pub fn diameter(&self) -> f64 {
        match self.shape {
            CrossSectionShape::Circular { diameter } => diameter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circular_section() {
        let section = CrossSection::circular("pile", Material::new(0, "C30/37"), 0.5);
        assert_eq!(section.material.name, "C30/37");
        assert_eq!(section.diameter(), 0.5);
    }
}
