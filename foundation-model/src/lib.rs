//! Foundation Model - parametric pile foundation for SCIA Engineer
//!
//! Builds the structural model of a rectangular slab resting on a grid of
//! piles, renders it as simple 3D primitives, and reads and writes the XML
//! files exchanged with the SCIA analysis engine.
//!
//! ## Example
//! ```rust
//! use foundation_model::prelude::*;
//!
//! let params = FoundationParams::default();
//! let model = build_foundation_model(&params).unwrap();
//! assert_eq!(model.beams().len(), 12);
//!
//! let geometries = visualization_geometries(&params, &model).unwrap();
//! assert_eq!(geometries.len(), 28 + 12 + 1);
//!
//! let input_xml = write_input_xml(&model).unwrap();
//! assert!(input_xml.contains("foundation slab"));
//! ```

pub mod builder;
pub mod config;
pub mod elements;
pub mod error;
pub mod loads;
pub mod model;
pub mod params;
pub mod scia;
pub mod visualization;

// Re-export common types
pub mod prelude {
    pub use crate::builder::{build_foundation_model, pile_positions, FoundationBuilder};
    pub use crate::config::LayoutConfig;
    pub use crate::elements::{
        Beam, CoordinateSystem, CrossSection, Freedom, LineSupport, LineSupportTarget, Material,
        Node, Plane, PointSupport, Restraints,
    };
    pub use crate::error::{ModelError, ModelResult};
    pub use crate::loads::{LoadCase, LoadCombination, LoadGroup, SurfaceLoad};
    pub use crate::model::StructuralModel;
    pub use crate::params::{parametrization, FoundationParams};
    pub use crate::scia::{max_pile_reaction, write_definition_file, write_input_xml, OutputFile};
    pub use crate::visualization::{visualization_geometries, Geometry};
}
