//! Model builder - turns user parameters into a complete structural model
//!
//! The topology is fixed: a rectangular slab on a regular grid of piles.
//! Pile numbering runs x-major, y-minor starting at 1.

use log::debug;

use crate::config::LayoutConfig;
use crate::elements::{CoordinateSystem, Freedom, Material, PointSupportType, Restraints};
use crate::error::ModelResult;
use crate::loads::{
    ActionType, CombinationType, Duration, LoadDirection, LoadLocation, LoadOption,
    LoadTypeOption, RelationOption, Specification, SurfaceLoadType, VariableLoadType,
};
use crate::model::StructuralModel;
use crate::params::FoundationParams;

pub const CROSS_SECTION_NAME: &str = "concrete_pile";
pub const SLAB_NAME: &str = "foundation slab";
pub const LOAD_GROUP_NAME: &str = "LG1";
pub const LOAD_CASE_NAME: &str = "LC1";
pub const LOAD_CASE_DESCRIPTION: &str = "first load case";
pub const COMBINATION_NAME: &str = "C1";
pub const SURFACE_LOAD_NAME: &str = "SF:1";

/// `n` evenly spaced values from `start` to `end`, both inclusive
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Pile (x, y) positions in m, x-major then y-minor
pub fn pile_positions(width_x: f64, width_y: f64, config: &LayoutConfig) -> Vec<(f64, f64)> {
    let edge = config.pile_edge_distance;
    let xs = linspace(edge, width_x - edge, config.piles_x);
    let ys = linspace(edge, width_y - edge, config.piles_y);

    xs.iter()
        .flat_map(|&x| ys.iter().map(move |&y| (x, y)))
        .collect()
}

/// Builds foundation models for a given layout
#[derive(Debug, Clone, Default)]
pub struct FoundationBuilder {
    config: LayoutConfig,
}

impl FoundationBuilder {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Build the full model: geometry, supports, load sets and the slab load
    pub fn build(&self, params: &FoundationParams) -> ModelResult<StructuralModel> {
        let cfg = &self.config;
        let mut model = StructuralModel::new();

        // Slab corners
        let width_x = params.slab_width_x();
        let width_y = params.slab_width_y();
        let n1 = model.create_node("n1", 0.0, 0.0, 0.0)?;
        let n2 = model.create_node("n2", 0.0, width_y, 0.0)?;
        let n3 = model.create_node("n3", width_x, width_y, 0.0)?;
        let n4 = model.create_node("n4", width_x, 0.0, 0.0)?;

        // Piles
        let pile_length = params.pile_length();
        let section = model.create_circular_cross_section(
            CROSS_SECTION_NAME,
            Material::new(0, &cfg.pile_material),
            params.pile_diameter(),
        )?;

        let mut pile_beams = Vec::with_capacity(cfg.pile_count());
        for (pile_id, (x, y)) in pile_positions(width_x, width_y, cfg).into_iter().enumerate() {
            let pile_id = pile_id + 1;
            let top = model.create_node(&format!("K:p{pile_id}_t"), x, y, 0.0)?;
            let bottom = model.create_node(&format!("K:p{pile_id}_b"), x, y, -pile_length)?;
            pile_beams.push((pile_id, top, bottom));
        }
        let pile_beams = pile_beams
            .into_iter()
            .map(|(pile_id, top, bottom)| {
                model
                    .create_beam(top, bottom, section)
                    .map(|beam| (pile_id, beam, bottom))
            })
            .collect::<ModelResult<Vec<_>>>()?;

        // Slab
        let slab = model.create_plane(
            [n1, n2, n3, n4],
            params.slab_thickness(),
            SLAB_NAME,
            Material::new(0, &cfg.slab_material),
        )?;

        // Pile toe springs
        let toe = Restraints::free().with_z(Freedom::Flexible(cfg.pile_vertical_stiffness));
        for (pile_id, _, bottom) in &pile_beams {
            model.create_point_support(
                &format!("Sn:p{pile_id}"),
                *bottom,
                PointSupportType::Standard,
                toe,
                CoordinateSystem::Global,
            )?;
        }

        // Pile shaft bedding
        let shaft = Restraints::free()
            .with_x(Freedom::Flexible(cfg.pile_horizontal_stiffness))
            .with_y(Freedom::Flexible(cfg.pile_horizontal_stiffness));
        for (pile_id, beam, _) in &pile_beams {
            model.create_line_support_on_beam(
                &format!("Sb:p{pile_id}"),
                *beam,
                shaft,
                CoordinateSystem::Global,
            )?;
        }

        // Slab edges: 1 and 3 restrained in X, 2 and 4 in Y
        let edge_x = Restraints::free().with_x(Freedom::Flexible(cfg.slab_edge_stiffness));
        let edge_y = Restraints::free().with_y(Freedom::Flexible(cfg.slab_edge_stiffness));
        for (edge, restraints) in [(1, edge_x), (3, edge_x), (2, edge_y), (4, edge_y)] {
            model.create_line_support_on_plane(
                &format!("Sl:e{edge}"),
                slab,
                edge,
                restraints,
                CoordinateSystem::Global,
            )?;
        }

        // Load sets
        let group = model.create_load_group(
            LOAD_GROUP_NAME,
            LoadOption::Variable,
            RelationOption::Standard,
            Some(LoadTypeOption::CatG),
        )?;
        let case = model.create_load_case(
            LOAD_CASE_NAME,
            LOAD_CASE_DESCRIPTION,
            group,
            ActionType::Variable {
                load_type: VariableLoadType::Static,
                specification: Specification::Standard,
                duration: Duration::Short,
            },
        )?;
        model.create_load_combination(
            COMBINATION_NAME,
            CombinationType::EnvelopeServiceability,
            vec![(case, 1.0)],
        )?;

        // Slab load
        model.create_surface_load(
            SURFACE_LOAD_NAME,
            case,
            slab,
            LoadDirection::Z,
            SurfaceLoadType::Force,
            params.surface_force(),
            CoordinateSystem::Global,
            LoadLocation::Length,
        )?;

        debug!("Built foundation model: {}", model.summary());
        Ok(model)
    }
}

/// Build the standard foundation model
pub fn build_foundation_model(params: &FoundationParams) -> ModelResult<StructuralModel> {
    FoundationBuilder::default().build(params)
}
