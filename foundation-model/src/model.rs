//! Structural model - container for the entities sent to the analysis engine
//!
//! Entities are appended through the `create_*` methods and referenced
//! afterwards through the typed handles those methods return. Nothing can be
//! edited or removed once it is in the model.

use serde::Serialize;

use crate::elements::{
    Beam, BeamId, CoordinateSystem, CrossSection, CrossSectionId, LineSupport, LineSupportTarget,
    Material, Node, NodeId, Plane, PlaneId, PointSupport, PointSupportType, Restraints,
};
use crate::error::{ModelError, ModelResult};
use crate::loads::{
    ActionType, CombinationType, LoadCase, LoadCaseId, LoadCombination, LoadDirection, LoadGroup,
    LoadGroupId, LoadLocation, LoadOption, LoadTypeOption, RelationOption, SurfaceLoad,
    SurfaceLoadType,
};

/// The structural model of one foundation
#[derive(Debug, Clone, Default, Serialize)]
pub struct StructuralModel {
    nodes: Vec<Node>,
    cross_sections: Vec<CrossSection>,
    beams: Vec<Beam>,
    planes: Vec<Plane>,
    point_supports: Vec<PointSupport>,
    line_supports: Vec<LineSupport>,
    load_groups: Vec<LoadGroup>,
    load_cases: Vec<LoadCase>,
    load_combinations: Vec<LoadCombination>,
    surface_loads: Vec<SurfaceLoad>,
}

fn ensure_unique<'a>(mut existing: impl Iterator<Item = &'a str>, name: &str) -> ModelResult<()> {
    if existing.any(|n| n == name) {
        return Err(ModelError::DuplicateName(name.to_string()));
    }
    Ok(())
}

impl StructuralModel {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Model Building Methods
    // ========================

    /// Add a node
    pub fn create_node(&mut self, name: &str, x: f64, y: f64, z: f64) -> ModelResult<NodeId> {
        ensure_unique(self.nodes.iter().map(|n| n.name.as_str()), name)?;
        self.nodes.push(Node::new(name, x, y, z));
        Ok(NodeId(self.nodes.len() - 1))
    }

    /// Add a solid circular cross-section
    pub fn create_circular_cross_section(
        &mut self,
        name: &str,
        material: Material,
        diameter: f64,
    ) -> ModelResult<CrossSectionId> {
        ensure_unique(self.cross_sections.iter().map(|c| c.name.as_str()), name)?;
        self.cross_sections
            .push(CrossSection::circular(name, material, diameter));
        Ok(CrossSectionId(self.cross_sections.len() - 1))
    }

    /// Add a beam between two existing nodes. Beams are named `B1`, `B2`, ...
    pub fn create_beam(
        &mut self,
        begin_node: NodeId,
        end_node: NodeId,
        cross_section: CrossSectionId,
    ) -> ModelResult<BeamId> {
        self.check_node(begin_node)?;
        self.check_node(end_node)?;
        if cross_section.0 >= self.cross_sections.len() {
            return Err(ModelError::UnknownCrossSection(cross_section.0));
        }

        let name = format!("B{}", self.beams.len() + 1);
        ensure_unique(self.beams.iter().map(|b| b.name.as_str()), &name)?;
        self.beams.push(Beam {
            name,
            begin_node,
            end_node,
            cross_section,
        });
        Ok(BeamId(self.beams.len() - 1))
    }

    /// Add a quadrilateral plane over four existing nodes
    pub fn create_plane(
        &mut self,
        corners: [NodeId; 4],
        thickness: f64,
        name: &str,
        material: Material,
    ) -> ModelResult<PlaneId> {
        for corner in corners {
            self.check_node(corner)?;
        }
        ensure_unique(self.planes.iter().map(|p| p.name.as_str()), name)?;
        self.planes.push(Plane {
            name: name.to_string(),
            corners,
            thickness,
            material,
        });
        Ok(PlaneId(self.planes.len() - 1))
    }

    /// Add a support at a node
    pub fn create_point_support(
        &mut self,
        name: &str,
        node: NodeId,
        support_type: PointSupportType,
        restraints: Restraints,
        coordinate_system: CoordinateSystem,
    ) -> ModelResult<()> {
        self.check_node(node)?;
        ensure_unique(self.point_supports.iter().map(|s| s.name.as_str()), name)?;
        self.point_supports.push(PointSupport {
            name: name.to_string(),
            node,
            support_type,
            restraints,
            coordinate_system,
        });
        Ok(())
    }

    /// Add a support along the full length of a beam
    pub fn create_line_support_on_beam(
        &mut self,
        name: &str,
        beam: BeamId,
        restraints: Restraints,
        coordinate_system: CoordinateSystem,
    ) -> ModelResult<()> {
        if beam.0 >= self.beams.len() {
            return Err(ModelError::UnknownBeam(beam.0));
        }
        self.push_line_support(name, LineSupportTarget::Beam(beam), restraints, coordinate_system)
    }

    /// Add a support along edge `edge` (1..=4) of a plane
    pub fn create_line_support_on_plane(
        &mut self,
        name: &str,
        plane: PlaneId,
        edge: usize,
        restraints: Restraints,
        coordinate_system: CoordinateSystem,
    ) -> ModelResult<()> {
        let target = self.plane(plane)?;
        if target.edge(edge).is_none() {
            return Err(ModelError::InvalidEdge(edge));
        }
        self.push_line_support(
            name,
            LineSupportTarget::PlaneEdge { plane, edge },
            restraints,
            coordinate_system,
        )
    }

    fn push_line_support(
        &mut self,
        name: &str,
        target: LineSupportTarget,
        restraints: Restraints,
        coordinate_system: CoordinateSystem,
    ) -> ModelResult<()> {
        ensure_unique(self.line_supports.iter().map(|s| s.name.as_str()), name)?;
        self.line_supports.push(LineSupport {
            name: name.to_string(),
            target,
            restraints,
            coordinate_system,
        });
        Ok(())
    }

    /// Add a load group
    pub fn create_load_group(
        &mut self,
        name: &str,
        load_option: LoadOption,
        relation: RelationOption,
        load_type: Option<LoadTypeOption>,
    ) -> ModelResult<LoadGroupId> {
        ensure_unique(self.load_groups.iter().map(|g| g.name.as_str()), name)?;
        self.load_groups.push(LoadGroup {
            name: name.to_string(),
            load_option,
            relation,
            load_type,
        });
        Ok(LoadGroupId(self.load_groups.len() - 1))
    }

    /// Add a load case belonging to an existing load group
    pub fn create_load_case(
        &mut self,
        name: &str,
        description: &str,
        load_group: LoadGroupId,
        action: ActionType,
    ) -> ModelResult<LoadCaseId> {
        if load_group.0 >= self.load_groups.len() {
            return Err(ModelError::UnknownLoadGroup(load_group.0));
        }
        ensure_unique(self.load_cases.iter().map(|c| c.name.as_str()), name)?;
        self.load_cases.push(LoadCase {
            name: name.to_string(),
            description: description.to_string(),
            load_group,
            action,
        });
        Ok(LoadCaseId(self.load_cases.len() - 1))
    }

    /// Add a load combination over existing load cases
    pub fn create_load_combination(
        &mut self,
        name: &str,
        combination_type: CombinationType,
        factors: Vec<(LoadCaseId, f64)>,
    ) -> ModelResult<()> {
        for (case, _) in &factors {
            self.load_case(*case)?;
        }
        ensure_unique(self.load_combinations.iter().map(|c| c.name.as_str()), name)?;
        self.load_combinations.push(LoadCombination {
            name: name.to_string(),
            combination_type,
            factors,
        });
        Ok(())
    }

    /// Add a uniform load over a plane
    #[allow(clippy::too_many_arguments)]
    pub fn create_surface_load(
        &mut self,
        name: &str,
        load_case: LoadCaseId,
        plane: PlaneId,
        direction: LoadDirection,
        load_type: SurfaceLoadType,
        value: f64,
        coordinate_system: CoordinateSystem,
        location: LoadLocation,
    ) -> ModelResult<()> {
        self.load_case(load_case)?;
        self.plane(plane)?;
        ensure_unique(self.surface_loads.iter().map(|l| l.name.as_str()), name)?;
        self.surface_loads.push(SurfaceLoad {
            name: name.to_string(),
            load_case,
            plane,
            direction,
            load_type,
            value,
            coordinate_system,
            location,
        });
        Ok(())
    }

    // ========================
    // Accessors
    // ========================

    fn check_node(&self, id: NodeId) -> ModelResult<()> {
        self.node(id).map(|_| ())
    }

    pub fn node(&self, id: NodeId) -> ModelResult<&Node> {
        self.nodes.get(id.0).ok_or(ModelError::UnknownNode(id.0))
    }

    pub fn beam(&self, id: BeamId) -> ModelResult<&Beam> {
        self.beams.get(id.0).ok_or(ModelError::UnknownBeam(id.0))
    }

    pub fn plane(&self, id: PlaneId) -> ModelResult<&Plane> {
        self.planes.get(id.0).ok_or(ModelError::UnknownPlane(id.0))
    }

    pub fn cross_section(&self, id: CrossSectionId) -> ModelResult<&CrossSection> {
        self.cross_sections
            .get(id.0)
            .ok_or(ModelError::UnknownCrossSection(id.0))
    }

    pub fn load_group(&self, id: LoadGroupId) -> ModelResult<&LoadGroup> {
        self.load_groups
            .get(id.0)
            .ok_or(ModelError::UnknownLoadGroup(id.0))
    }

    pub fn load_case(&self, id: LoadCaseId) -> ModelResult<&LoadCase> {
        self.load_cases
            .get(id.0)
            .ok_or(ModelError::UnknownLoadCase(id.0))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn cross_sections(&self) -> &[CrossSection] {
        &self.cross_sections
    }

    pub fn beams(&self) -> &[Beam] {
        &self.beams
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn point_supports(&self) -> &[PointSupport] {
        &self.point_supports
    }

    pub fn line_supports(&self) -> &[LineSupport] {
        &self.line_supports
    }

    pub fn load_groups(&self) -> &[LoadGroup] {
        &self.load_groups
    }

    pub fn load_cases(&self) -> &[LoadCase] {
        &self.load_cases
    }

    pub fn load_combinations(&self) -> &[LoadCombination] {
        &self.load_combinations
    }

    pub fn surface_loads(&self) -> &[SurfaceLoad] {
        &self.surface_loads
    }

    /// Begin and end node of a beam
    pub fn beam_nodes(&self, beam: &Beam) -> ModelResult<(&Node, &Node)> {
        Ok((self.node(beam.begin_node)?, self.node(beam.end_node)?))
    }

    /// Corner nodes of a plane in winding order
    pub fn plane_corners(&self, plane: &Plane) -> ModelResult<[&Node; 4]> {
        let [a, b, c, d] = plane.corners;
        Ok([self.node(a)?, self.node(b)?, self.node(c)?, self.node(d)?])
    }

    /// One-line summary used in logs
    pub fn summary(&self) -> String {
        format!(
            "nodes={}, beams={}, planes={}, point_supports={}, line_supports={}, load_cases={}, combinations={}, surface_loads={}",
            self.nodes.len(),
            self.beams.len(),
            self.planes.len(),
            self.point_supports.len(),
            self.line_supports.len(),
            self.load_cases.len(),
            self.load_combinations.len(),
            self.surface_loads.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_model() -> (StructuralModel, [NodeId; 4]) {
        let mut model = StructuralModel::new();
        let a = model.create_node("a", 0.0, 0.0, 0.0).unwrap();
        let b = model.create_node("b", 0.0, 1.0, 0.0).unwrap();
        let c = model.create_node("c", 1.0, 1.0, 0.0).unwrap();
        let d = model.create_node("d", 1.0, 0.0, 0.0).unwrap();
        (model, [a, b, c, d])
    }

    #[test]
    fn test_duplicate_node_name_rejected() {
        let (mut model, _) = square_model();
        let err = model.create_node("a", 5.0, 5.0, 5.0).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateName(name) if name == "a"));
        assert_eq!(model.nodes().len(), 4);
    }

    #[test]
    fn test_beam_requires_known_nodes() {
        let (mut model, [a, ..]) = square_model();
        let section = model
            .create_circular_cross_section("pile", Material::new(0, "C30/37"), 0.4)
            .unwrap();
        let err = model.create_beam(a, NodeId(99), section).unwrap_err();
        assert!(matches!(err, ModelError::UnknownNode(99)));

        let beam = model.create_beam(a, NodeId(1), section).unwrap();
        assert_eq!(model.beam(beam).unwrap().name, "B1");
    }

    #[test]
    fn test_plane_edge_support_checks_edge() {
        let (mut model, corners) = square_model();
        let plane = model
            .create_plane(corners, 0.3, "slab", Material::new(0, "concrete_slab"))
            .unwrap();

        let err = model
            .create_line_support_on_plane("e5", plane, 5, Restraints::free(), CoordinateSystem::Global)
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidEdge(5)));

        model
            .create_line_support_on_plane("e1", plane, 1, Restraints::free(), CoordinateSystem::Global)
            .unwrap();
        assert_eq!(model.line_supports().len(), 1);
    }

    #[test]
    fn test_load_case_requires_group() {
        let mut model = StructuralModel::new();
        let err = model
            .create_load_case("LC1", "", LoadGroupId(0), ActionType::Permanent)
            .unwrap_err();
        assert!(matches!(err, ModelError::UnknownLoadGroup(0)));
    }
}
