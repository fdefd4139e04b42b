//! Table layouts shared by the model XML and the definition file

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::error::ModelResult;
use super::SCIA_NAMESPACE;

/// One entity table: a type id and its column titles
pub(crate) struct TableDef {
    pub name: &'static str,
    pub table_type: &'static str,
    pub columns: &'static [&'static str],
}

pub(crate) const MATERIALS: TableDef = TableDef {
    name: "Material",
    table_type: "EP_Material.EP_Material.1",
    columns: &["Name", "Id"],
};

pub(crate) const CROSS_SECTIONS: TableDef = TableDef {
    name: "Cross-section",
    table_type: "EP_CrossSection.EP_CssGeometric.1",
    columns: &["Name", "Material", "Shape", "Diameter"],
};

pub(crate) const NODES: TableDef = TableDef {
    name: "Node",
    table_type: "EP_DSG_Elements.EP_StructNode.1",
    columns: &["Name", "Coord X", "Coord Y", "Coord Z"],
};

pub(crate) const BEAMS: TableDef = TableDef {
    name: "Beam",
    table_type: "EP_DSG_Elements.EP_Beam.1",
    columns: &["Name", "Cross-section", "Beg. node", "End node"],
};

pub(crate) const PLANES: TableDef = TableDef {
    name: "Plane",
    table_type: "EP_DSG_Elements.EP_Plane.1",
    columns: &[
        "Name", "Material", "Thickness", "Node 1", "Node 2", "Node 3", "Node 4",
    ],
};

pub(crate) const POINT_SUPPORTS: TableDef = TableDef {
    name: "Support in node",
    table_type: "EP_DSG_Elements.EP_PointSupportPoint.1",
    columns: &[
        "Name", "Node", "Type", "System",
        "X", "Stiffness X", "Y", "Stiffness Y", "Z", "Stiffness Z",
        "Rx", "Stiffness Rx", "Ry", "Stiffness Ry", "Rz", "Stiffness Rz",
    ],
};

pub(crate) const BEAM_LINE_SUPPORTS: TableDef = TableDef {
    name: "Line support on beam",
    table_type: "EP_DSG_Elements.EP_LineSupportLine.1",
    columns: &[
        "Name", "Reference", "System",
        "X", "Stiffness X", "Y", "Stiffness Y", "Z", "Stiffness Z",
        "Rx", "Stiffness Rx", "Ry", "Stiffness Ry", "Rz", "Stiffness Rz",
    ],
};

pub(crate) const EDGE_LINE_SUPPORTS: TableDef = TableDef {
    name: "Line support on plane edge",
    table_type: "EP_DSG_Elements.EP_LineSupportSurface.1",
    columns: &[
        "Name", "Reference", "Edge", "System",
        "X", "Stiffness X", "Y", "Stiffness Y", "Z", "Stiffness Z",
        "Rx", "Stiffness Rx", "Ry", "Stiffness Ry", "Rz", "Stiffness Rz",
    ],
};

pub(crate) const LOAD_GROUPS: TableDef = TableDef {
    name: "Load group",
    table_type: "EP_LoadCaseManager.EP_LoadGroup.1",
    columns: &["Name", "Load", "Relation", "Load type"],
};

pub(crate) const LOAD_CASES: TableDef = TableDef {
    name: "Load case",
    table_type: "EP_LoadCaseManager.EP_LoadCase.1",
    columns: &[
        "Name", "Description", "Action type", "Load group", "Load type", "Specification", "Duration",
    ],
};

pub(crate) const COMBINATIONS: TableDef = TableDef {
    name: "Combination",
    table_type: "EP_LoadCaseManager.EP_Combination.1",
    columns: &["Name", "Type", "Contents"],
};

pub(crate) const SURFACE_LOADS: TableDef = TableDef {
    name: "Surface load",
    table_type: "EP_DSG_Elements.EP_SurfaceLoad.1",
    columns: &[
        "Name", "Load case", "Reference", "Direction", "Type", "Value", "System", "Location",
    ],
};

/// Every table, in the order it is written
pub(crate) const ALL_TABLES: [&TableDef; 12] = [
    &MATERIALS,
    &CROSS_SECTIONS,
    &NODES,
    &BEAMS,
    &PLANES,
    &POINT_SUPPORTS,
    &BEAM_LINE_SUPPORTS,
    &EDGE_LINE_SUPPORTS,
    &LOAD_GROUPS,
    &LOAD_CASES,
    &COMBINATIONS,
    &SURFACE_LOADS,
];

/// Start an indented document with the XML declaration and a namespaced root
pub(crate) fn start_document(root: &str) -> ModelResult<Writer<Vec<u8>>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    writer.write_event(Event::Start(
        BytesStart::new(root).with_attributes([("xmlns", SCIA_NAMESPACE)]),
    ))?;
    Ok(writer)
}

/// Close the root element and return the document text
pub(crate) fn finish_document(mut writer: Writer<Vec<u8>>, root: &str) -> ModelResult<String> {
    writer.write_event(Event::End(BytesEnd::new(root)))?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

/// Open `<container>` and `<table>` for `table`, then write its `<h>` header
pub(crate) fn start_table(writer: &mut Writer<Vec<u8>>, table: &TableDef) -> ModelResult<()> {
    writer.write_event(Event::Start(
        BytesStart::new("container").with_attributes([("t", table.table_type)]),
    ))?;
    writer.write_event(Event::Start(
        BytesStart::new("table").with_attributes([("t", table.table_type), ("name", table.name)]),
    ))?;

    writer.write_event(Event::Start(BytesStart::new("h")))?;
    for (i, column) in table.columns.iter().enumerate() {
        let tag = format!("h{i}");
        writer.write_event(Event::Empty(
            BytesStart::new(tag.as_str()).with_attributes([("t", *column)]),
        ))?;
    }
    writer.write_event(Event::End(BytesEnd::new("h")))?;
    Ok(())
}

pub(crate) fn end_table(writer: &mut Writer<Vec<u8>>) -> ModelResult<()> {
    writer.write_event(Event::End(BytesEnd::new("table")))?;
    writer.write_event(Event::End(BytesEnd::new("container")))?;
    Ok(())
}
