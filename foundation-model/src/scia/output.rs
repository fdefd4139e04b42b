//! Reader for the engine's XML output
//!
//! Layout:
//! ```xml
//! <project>
//!   <table name="Reactions" parent="Combinations - C1">
//!     <section name="Nodal reactions">
//!       <h><h0 t="Node"/><h1 t="R_z"/></h>
//!       <obj><p0 v="K:p1_b"/><p1 v="-25000.5"/></obj>
//!     </section>
//!   </table>
//! </project>
//! ```

use crate::error::{ModelError, ModelResult};

pub const REACTIONS_RESULT: &str = "Reactions";
pub const NODAL_REACTIONS_SECTION: &str = "Nodal reactions";
pub const VERTICAL_REACTION_COLUMN: &str = "R_z";

/// Parent label the engine files combination results under
pub fn combination_parent(combination: &str) -> String {
    format!("Combinations - {combination}")
}

/// One named block of rows inside a result
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSection {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A named result, e.g. reactions for one combination
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    pub name: String,
    pub parent: Option<String>,
    pub sections: Vec<ResultSection>,
}

/// All results in one output file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputFile {
    pub results: Vec<ResultTable>,
}

/// Highest column index accepted in a result section
pub const MAX_CELL_INDEX: usize = 255;

/// Index encoded in a cell tag such as `p3` or `h3`
fn cell_index(tag: &str, prefix: char) -> ModelResult<Option<usize>> {
    let Some(digits) = tag.strip_prefix(prefix) else {
        return Ok(None);
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }
    match digits.parse::<usize>() {
        Ok(i) if i <= MAX_CELL_INDEX => Ok(Some(i)),
        _ => Err(ModelError::CellIndexOutOfRange(tag.to_string())),
    }
}

/// Store `value` at `index`, padding with empty cells
fn set_cell(cells: &mut Vec<String>, index: usize, value: &str) {
    if cells.len() <= index {
        cells.resize(index + 1, String::new());
    }
    cells[index] = value.to_string();
}

fn is_element(node: &roxmltree::Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

fn parse_section(node: roxmltree::Node) -> ModelResult<ResultSection> {
    let mut columns = Vec::new();
    let mut rows = Vec::new();

    for child in node.children().filter(|c| c.is_element()) {
        match child.tag_name().name() {
            "h" => {
                for cell in child.children().filter(|c| c.is_element()) {
                    if let Some(i) = cell_index(cell.tag_name().name(), 'h')? {
                        set_cell(&mut columns, i, cell.attribute("t").unwrap_or_default());
                    }
                }
            }
            "obj" => {
                let mut row = Vec::new();
                for cell in child.children().filter(|c| c.is_element()) {
                    if let Some(i) = cell_index(cell.tag_name().name(), 'p')? {
                        set_cell(&mut row, i, cell.attribute("v").unwrap_or_default());
                    }
                }
                rows.push(row);
            }
            _ => {}
        }
    }

    Ok(ResultSection {
        name: node.attribute("name").unwrap_or_default().to_string(),
        columns,
        rows,
    })
}

impl OutputFile {
    /// Parse the output XML
    pub fn parse(xml: &str) -> ModelResult<Self> {
        let doc = roxmltree::Document::parse(xml)?;

        let results = doc
            .descendants()
            .filter(|n| is_element(n, "table"))
            .map(|table| -> ModelResult<ResultTable> {
                Ok(ResultTable {
                    name: table.attribute("name").unwrap_or_default().to_string(),
                    parent: table.attribute("parent").map(str::to_string),
                    sections: table
                        .children()
                        .filter(|n| is_element(n, "section"))
                        .map(parse_section)
                        .collect::<ModelResult<_>>()?,
                })
            })
            .collect::<ModelResult<_>>()?;

        Ok(Self { results })
    }

    /// Find a result by name and parent label
    pub fn result(&self, name: &str, parent: &str) -> ModelResult<&ResultTable> {
        self.results
            .iter()
            .find(|r| r.name == name && r.parent.as_deref() == Some(parent))
            .ok_or_else(|| ModelError::ResultNotFound {
                name: name.to_string(),
                parent: parent.to_string(),
            })
    }
}

impl ResultTable {
    pub fn section(&self, name: &str) -> ModelResult<&ResultSection> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ModelError::SectionNotFound(name.to_string()))
    }
}

impl ResultSection {
    /// Raw cell values of a column; short rows yield empty strings
    pub fn column(&self, title: &str) -> ModelResult<Vec<&str>> {
        let index = self
            .columns
            .iter()
            .position(|c| c == title)
            .ok_or_else(|| ModelError::ColumnNotFound(title.to_string()))?;

        Ok(self
            .rows
            .iter()
            .map(|row| row.get(index).map(String::as_str).unwrap_or_default())
            .collect())
    }

    /// Column values parsed as numbers
    pub fn numeric_column(&self, title: &str) -> ModelResult<Vec<f64>> {
        self.column(title)?
            .into_iter()
            .map(|v| {
                v.trim().parse::<f64>().map_err(|_| ModelError::InvalidNumber {
                    column: title.to_string(),
                    value: v.to_string(),
                })
            })
            .collect()
    }

    /// Largest value of a numeric column
    pub fn max(&self, title: &str) -> ModelResult<f64> {
        self.numeric_column(title)?
            .into_iter()
            .reduce(f64::max)
            .ok_or_else(|| ModelError::EmptyColumn(title.to_string()))
    }
}

/// Largest vertical nodal reaction for `combination`, in N
pub fn max_pile_reaction(output_xml: &str, combination: &str) -> ModelResult<f64> {
    let output = OutputFile::parse(output_xml)?;
    output
        .result(REACTIONS_RESULT, &combination_parent(combination))?
        .section(NODAL_REACTIONS_SECTION)?
        .max(VERTICAL_REACTION_COLUMN)
}
