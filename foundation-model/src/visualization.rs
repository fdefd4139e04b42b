//! Visualization builder - renderable primitives for the 3D view
//!
//! Output order is fixed: one sphere per node, one cylinder per beam, then
//! the slab extrusion.

use serde::{Deserialize, Serialize};

use crate::elements::Node;
use crate::error::ModelResult;
use crate::model::StructuralModel;
use crate::params::FoundationParams;

/// Node sphere radius as a fraction of the slab width in y
const NODE_RADIUS_RATIO: f64 = 0.01;
/// Opacity of the beam and slab bodies
const BODY_OPACITY: f64 = 0.3;
/// Roughness of the beam and slab bodies
const BODY_ROUGHNESS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<&Node> for Point {
    fn from(node: &Node) -> Self {
        let [x, y, z] = node.coords();
        Self::new(x, y, z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Display hints attached to a primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayMaterial {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roughness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl DisplayMaterial {
    fn colored(name: &str, color: Color) -> Self {
        Self {
            name: name.to_string(),
            color: Some(color),
            roughness: None,
            opacity: None,
        }
    }

    fn translucent(name: &str) -> Self {
        Self {
            name: name.to_string(),
            color: None,
            roughness: Some(BODY_ROUGHNESS),
            opacity: Some(BODY_OPACITY),
        }
    }
}

/// A renderable primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    Sphere {
        centre: Point,
        radius: f64,
        material: DisplayMaterial,
    },
    CircularExtrusion {
        diameter: f64,
        line: Line,
        material: DisplayMaterial,
    },
    /// Closed profile swept along `line`
    Extrusion {
        profile: Vec<Point>,
        line: Line,
        material: DisplayMaterial,
    },
}

/// Build the primitives for a model built from `params`
pub fn visualization_geometries(
    params: &FoundationParams,
    model: &StructuralModel,
) -> ModelResult<Vec<Geometry>> {
    let mut geometries = Vec::with_capacity(model.nodes().len() + model.beams().len() + 1);

    let radius = params.slab_width_y() * NODE_RADIUS_RATIO;
    let node_material = DisplayMaterial::colored("node", Color { r: 0, g: 255, b: 0 });
    for node in model.nodes() {
        geometries.push(Geometry::Sphere {
            centre: Point::from(node),
            radius,
            material: node_material.clone(),
        });
    }

    let diameter = params.pile_diameter();
    for beam in model.beams() {
        let (top, bottom) = model.beam_nodes(beam)?;
        geometries.push(Geometry::CircularExtrusion {
            diameter,
            line: Line {
                start: Point::from(top),
                end: Point::from(bottom),
            },
            material: DisplayMaterial::translucent("beam"),
        });
    }

    let half = params.slab_thickness() / 2.0;
    for plane in model.planes() {
        let mut profile: Vec<Point> = model
            .plane_corners(plane)?
            .into_iter()
            .map(Point::from)
            .collect();
        profile.push(profile[0]);

        geometries.push(Geometry::Extrusion {
            profile,
            line: Line {
                start: Point::new(0.0, 0.0, -half),
                end: Point::new(0.0, 0.0, half),
            },
            material: DisplayMaterial::translucent("slab"),
        });
    }

    Ok(geometries)
}
