//! User parameters for the foundation and the form that collects them
//!
//! Values are stored in the units the user types them in (mm, m, kN/m²).
//! The accessor methods return SI base units.

use serde::{Deserialize, Serialize};

/// Millimeters to meters
pub const MM_TO_M: f64 = 1e-3;
/// kN to N, kN/m² to Pa
pub const KILO_TO_BASE: f64 = 1e3;

/// All user inputs, nested the same way as the input form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoundationParams {
    pub geometry: GeometryParams,
    pub loads: LoadParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryParams {
    pub slab: SlabParams,
    pub piles: PileParams,
}

/// Slab dimensions in millimeters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlabParams {
    pub width_x: f64,
    pub width_y: f64,
    pub thickness: f64,
}

impl Default for SlabParams {
    fn default() -> Self {
        Self {
            width_x: 6000.0,
            width_y: 5000.0,
            thickness: 500.0,
        }
    }
}

/// Pile diameter in millimeters, length in meters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PileParams {
    pub diameter: f64,
    pub length: f64,
}

impl Default for PileParams {
    fn default() -> Self {
        Self {
            diameter: 500.0,
            length: 7.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadParams {
    pub input: LoadInput,
}

/// Uniform load on the slab in kN/m²
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadInput {
    pub uniform_load: f64,
}

impl Default for LoadInput {
    fn default() -> Self {
        Self { uniform_load: 1.0 }
    }
}

impl FoundationParams {
    /// Slab width along X in m
    pub fn slab_width_x(&self) -> f64 {
        self.geometry.slab.width_x * MM_TO_M
    }

    /// Slab width along Y in m
    pub fn slab_width_y(&self) -> f64 {
        self.geometry.slab.width_y * MM_TO_M
    }

    /// Slab thickness in m
    pub fn slab_thickness(&self) -> f64 {
        self.geometry.slab.thickness * MM_TO_M
    }

    /// Pile diameter in m
    pub fn pile_diameter(&self) -> f64 {
        self.geometry.piles.diameter * MM_TO_M
    }

    /// Pile length in m (entered in m already)
    pub fn pile_length(&self) -> f64 {
        self.geometry.piles.length
    }

    /// Surface force in Pa acting in global Z. Negative = downward.
    pub fn surface_force(&self) -> f64 {
        -(self.loads.input.uniform_load * KILO_TO_BASE)
    }
}

// ========================
// Form description
// ========================

/// Description of the input form, served to whatever front end hosts the app
#[derive(Debug, Clone, Serialize)]
pub struct Parametrization {
    pub tabs: Vec<Tab>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tab {
    pub name: &'static str,
    pub title: &'static str,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub name: &'static str,
    pub title: &'static str,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Field {
    Number {
        name: &'static str,
        label: &'static str,
        suffix: &'static str,
        default: f64,
    },
    Download {
        name: &'static str,
        label: &'static str,
        endpoint: &'static str,
    },
}

impl Field {
    fn number(name: &'static str, label: &'static str, suffix: &'static str, default: f64) -> Self {
        Field::Number { name, label, suffix, default }
    }
}

/// Build the form description. Defaults come from `FoundationParams::default()`.
pub fn parametrization() -> Parametrization {
    let defaults = FoundationParams::default();
    let slab = &defaults.geometry.slab;
    let piles = &defaults.geometry.piles;

    Parametrization {
        tabs: vec![
            Tab {
                name: "geometry",
                title: "Geometry",
                sections: vec![
                    Section {
                        name: "slab",
                        title: "Slab",
                        fields: vec![
                            Field::number("width_x", "Width in x", "mm", slab.width_x),
                            Field::number("width_y", "Width in y", "mm", slab.width_y),
                            Field::number("thickness", "Thickness", "mm", slab.thickness),
                        ],
                    },
                    Section {
                        name: "piles",
                        title: "Piles",
                        fields: vec![
                            Field::number("diameter", "Diameter", "mm", piles.diameter),
                            Field::number("length", "Length", "m", piles.length),
                        ],
                    },
                ],
            },
            Tab {
                name: "loads",
                title: "Loads",
                sections: vec![Section {
                    name: "input",
                    title: "Input",
                    fields: vec![Field::number(
                        "uniform_load",
                        "Uniform load",
                        "kN/m2",
                        defaults.loads.input.uniform_load,
                    )],
                }],
            },
            Tab {
                name: "scia",
                title: "SCIA",
                sections: vec![Section {
                    name: "downloads",
                    title: "Downloads",
                    fields: vec![
                        Field::Download {
                            name: "input_xml_btn",
                            label: "Input .xml",
                            endpoint: "/api/v1/downloads/input-xml",
                        },
                        Field::Download {
                            name: "input_def_btn",
                            label: "Input .def",
                            endpoint: "/api/v1/downloads/input-def",
                        },
                        Field::Download {
                            name: "input_esa_btn",
                            label: "Input .esa",
                            endpoint: "/api/v1/downloads/input-esa",
                        },
                    ],
                }],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        let params = FoundationParams::default();
        assert!((params.slab_width_x() - 6.0).abs() < 1e-12);
        assert!((params.slab_width_y() - 5.0).abs() < 1e-12);
        assert!((params.slab_thickness() - 0.5).abs() < 1e-12);
        assert!((params.pile_diameter() - 0.5).abs() < 1e-12);
        assert_eq!(params.pile_length(), 7.0);
        assert_eq!(params.surface_force(), -1000.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "geometry": { "slab": { "width_x": 8000 } } }"#;
        let params: FoundationParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.geometry.slab.width_x, 8000.0);
        assert_eq!(params.geometry.slab.width_y, 5000.0);
        assert_eq!(params.geometry.piles.length, 7.0);
        assert_eq!(params.loads.input.uniform_load, 1.0);
    }

    #[test]
    fn test_parametrization_defaults_match_params() {
        let form = parametrization();
        assert_eq!(form.tabs.len(), 3);
        let slab = &form.tabs[0].sections[0];
        match &slab.fields[0] {
            Field::Number { name, default, suffix, .. } => {
                assert_eq!(*name, "width_x");
                assert_eq!(*default, 6000.0);
                assert_eq!(*suffix, "mm");
            }
            other => panic!("unexpected field {:?}", other),
        }
    }
}
