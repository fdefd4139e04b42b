//! Model XML writer

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use super::tables::{self, end_table, finish_document, start_document, start_table, TableDef};
use super::DEFINITION_FILE_NAME;
use crate::elements::{LineSupportTarget, Restraints};
use crate::error::ModelResult;
use crate::loads::ActionType;
use crate::model::StructuralModel;

const ROOT: &str = "project";

/// One `<obj>` row: its name and cell values in column order
struct Row {
    name: String,
    values: Vec<String>,
}

impl Row {
    fn new(name: &str, values: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            values,
        }
    }
}

fn num(value: f64) -> String {
    value.to_string()
}

/// Freedom label and stiffness per axis, X through Rz
fn restraint_cells(restraints: &Restraints) -> Vec<String> {
    restraints
        .as_array()
        .iter()
        .flat_map(|f| [f.label().to_string(), num(f.stiffness())])
        .collect()
}

fn write_rows(writer: &mut Writer<Vec<u8>>, table: &TableDef, rows: &[Row]) -> ModelResult<()> {
    start_table(writer, table)?;
    for (i, row) in rows.iter().enumerate() {
        let id = (i + 1).to_string();
        writer.write_event(Event::Start(
            BytesStart::new("obj").with_attributes([("id", id.as_str()), ("nm", row.name.as_str())]),
        ))?;
        for (j, value) in row.values.iter().enumerate() {
            let tag = format!("p{j}");
            writer.write_event(Event::Empty(
                BytesStart::new(tag.as_str()).with_attributes([("v", value.as_str())]),
            ))?;
        }
        writer.write_event(Event::End(BytesEnd::new("obj")))?;
    }
    end_table(writer)
}

/// Serialize a model into the engine's XML input format
pub fn write_input_xml(model: &StructuralModel) -> ModelResult<String> {
    let mut writer = start_document(ROOT)?;
    writer.write_event(Event::Empty(
        BytesStart::new("def").with_attributes([("uri", DEFINITION_FILE_NAME)]),
    ))?;

    // Materials referenced by sections and planes, first use wins
    let mut materials: Vec<Row> = Vec::new();
    let used = model
        .cross_sections()
        .iter()
        .map(|c| &c.material)
        .chain(model.planes().iter().map(|p| &p.material));
    for material in used {
        if !materials.iter().any(|r| r.name == material.name) {
            materials.push(Row::new(
                &material.name,
                vec![material.name.clone(), material.id.to_string()],
            ));
        }
    }
    write_rows(&mut writer, &tables::MATERIALS, &materials)?;

    let rows: Vec<Row> = model
        .cross_sections()
        .iter()
        .map(|c| {
            Row::new(
                &c.name,
                vec![c.name.clone(), c.material.name.clone(), "Circle".to_string(), num(c.diameter())],
            )
        })
        .collect();
    write_rows(&mut writer, &tables::CROSS_SECTIONS, &rows)?;

    let rows: Vec<Row> = model
        .nodes()
        .iter()
        .map(|n| Row::new(&n.name, vec![n.name.clone(), num(n.x), num(n.y), num(n.z)]))
        .collect();
    write_rows(&mut writer, &tables::NODES, &rows)?;

    let mut rows = Vec::with_capacity(model.beams().len());
    for beam in model.beams() {
        let (begin, end) = model.beam_nodes(beam)?;
        let section = model.cross_section(beam.cross_section)?;
        rows.push(Row::new(
            &beam.name,
            vec![beam.name.clone(), section.name.clone(), begin.name.clone(), end.name.clone()],
        ));
    }
    write_rows(&mut writer, &tables::BEAMS, &rows)?;

    let mut rows = Vec::with_capacity(model.planes().len());
    for plane in model.planes() {
        let mut values = vec![plane.name.clone(), plane.material.name.clone(), num(plane.thickness)];
        values.extend(model.plane_corners(plane)?.iter().map(|n| n.name.clone()));
        rows.push(Row::new(&plane.name, values));
    }
    write_rows(&mut writer, &tables::PLANES, &rows)?;

    let mut rows = Vec::with_capacity(model.point_supports().len());
    for support in model.point_supports() {
        let mut values = vec![
            support.name.clone(),
            model.node(support.node)?.name.clone(),
            support.support_type.label().to_string(),
            support.coordinate_system.label().to_string(),
        ];
        values.extend(restraint_cells(&support.restraints));
        rows.push(Row::new(&support.name, values));
    }
    write_rows(&mut writer, &tables::POINT_SUPPORTS, &rows)?;

    let mut beam_rows = Vec::new();
    let mut edge_rows = Vec::new();
    for support in model.line_supports() {
        let csys = support.coordinate_system.label().to_string();
        match support.target {
            LineSupportTarget::Beam(beam) => {
                let mut values = vec![support.name.clone(), model.beam(beam)?.name.clone(), csys];
                values.extend(restraint_cells(&support.restraints));
                beam_rows.push(Row::new(&support.name, values));
            }
            LineSupportTarget::PlaneEdge { plane, edge } => {
                let mut values = vec![
                    support.name.clone(),
                    model.plane(plane)?.name.clone(),
                    edge.to_string(),
                    csys,
                ];
                values.extend(restraint_cells(&support.restraints));
                edge_rows.push(Row::new(&support.name, values));
            }
        }
    }
    write_rows(&mut writer, &tables::BEAM_LINE_SUPPORTS, &beam_rows)?;
    write_rows(&mut writer, &tables::EDGE_LINE_SUPPORTS, &edge_rows)?;

    let rows: Vec<Row> = model
        .load_groups()
        .iter()
        .map(|g| {
            Row::new(
                &g.name,
                vec![
                    g.name.clone(),
                    g.load_option.label().to_string(),
                    g.relation.label().to_string(),
                    g.load_type.map(|t| t.label()).unwrap_or_default().to_string(),
                ],
            )
        })
        .collect();
    write_rows(&mut writer, &tables::LOAD_GROUPS, &rows)?;

    let mut rows = Vec::with_capacity(model.load_cases().len());
    for case in model.load_cases() {
        let (load_type, specification, duration) = match case.action {
            ActionType::Permanent => ("", "", ""),
            ActionType::Variable {
                load_type,
                specification,
                duration,
            } => (load_type.label(), specification.label(), duration.label()),
        };
        rows.push(Row::new(
            &case.name,
            vec![
                case.name.clone(),
                case.description.clone(),
                case.action.label().to_string(),
                model.load_group(case.load_group)?.name.clone(),
                load_type.to_string(),
                specification.to_string(),
                duration.to_string(),
            ],
        ));
    }
    write_rows(&mut writer, &tables::LOAD_CASES, &rows)?;

    let mut rows = Vec::with_capacity(model.load_combinations().len());
    for combo in model.load_combinations() {
        let contents = combo
            .factors
            .iter()
            .map(|(case, factor)| Ok(format!("{}*{}", model.load_case(*case)?.name, num(*factor))))
            .collect::<ModelResult<Vec<_>>>()?
            .join(";");
        rows.push(Row::new(
            &combo.name,
            vec![combo.name.clone(), combo.combination_type.label().to_string(), contents],
        ));
    }
    write_rows(&mut writer, &tables::COMBINATIONS, &rows)?;

    let mut rows = Vec::with_capacity(model.surface_loads().len());
    for load in model.surface_loads() {
        rows.push(Row::new(
            &load.name,
            vec![
                load.name.clone(),
                model.load_case(load.load_case)?.name.clone(),
                model.plane(load.plane)?.name.clone(),
                load.direction.label().to_string(),
                load.load_type.label().to_string(),
                num(load.value),
                load.coordinate_system.label().to_string(),
                load.location.label().to_string(),
            ],
        ));
    }
    write_rows(&mut writer, &tables::SURFACE_LOADS, &rows)?;

    finish_document(writer, ROOT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_foundation_model;
    use crate::params::FoundationParams;

    fn table<'a, 'i>(doc: &'a roxmltree::Document<'i>, name: &str) -> roxmltree::Node<'a, 'i> {
        doc.descendants()
            .find(|n| n.tag_name().name() == "table" && n.attribute("name") == Some(name))
            .unwrap_or_else(|| panic!("table {name} missing"))
    }

    fn objects<'a, 'i>(table: roxmltree::Node<'a, 'i>) -> Vec<roxmltree::Node<'a, 'i>> {
        table
            .children()
            .filter(|n| n.tag_name().name() == "obj")
            .collect()
    }

    #[test]
    fn test_every_row_matches_its_header() {
        let model = build_foundation_model(&FoundationParams::default()).unwrap();
        let xml = write_input_xml(&model).unwrap();
        let doc = roxmltree::Document::parse(&xml).unwrap();

        for def in tables::ALL_TABLES {
            let table = table(&doc, def.name);
            for obj in objects(table) {
                let cells = obj.children().filter(|n| n.is_element()).count();
                assert_eq!(cells, def.columns.len(), "row width in {}", def.name);
            }
        }
    }

    #[test]
    fn test_entity_counts() {
        let model = build_foundation_model(&FoundationParams::default()).unwrap();
        let xml = write_input_xml(&model).unwrap();
        let doc = roxmltree::Document::parse(&xml).unwrap();

        assert_eq!(objects(table(&doc, "Node")).len(), 28);
        assert_eq!(objects(table(&doc, "Beam")).len(), 12);
        assert_eq!(objects(table(&doc, "Plane")).len(), 1);
        assert_eq!(objects(table(&doc, "Support in node")).len(), 12);
        assert_eq!(objects(table(&doc, "Line support on beam")).len(), 12);
        assert_eq!(objects(table(&doc, "Line support on plane edge")).len(), 4);
        assert_eq!(objects(table(&doc, "Material")).len(), 2);
    }

    #[test]
    fn test_references_definition_file_and_writes_load_value() {
        let model = build_foundation_model(&FoundationParams::default()).unwrap();
        let xml = write_input_xml(&model).unwrap();
        let doc = roxmltree::Document::parse(&xml).unwrap();

        let def = doc
            .descendants()
            .find(|n| n.tag_name().name() == "def")
            .unwrap();
        assert_eq!(def.attribute("uri"), Some(DEFINITION_FILE_NAME));

        let load = objects(table(&doc, "Surface load"))[0];
        assert_eq!(load.attribute("nm"), Some("SF:1"));
        let value = load
            .children()
            .find(|n| n.tag_name().name() == "p5")
            .and_then(|n| n.attribute("v"));
        assert_eq!(value, Some("-1000"));

        let combo = objects(table(&doc, "Combination"))[0];
        let contents = combo
            .children()
            .find(|n| n.tag_name().name() == "p2")
            .and_then(|n| n.attribute("v"));
        assert_eq!(contents, Some("LC1*1"));
    }
}
