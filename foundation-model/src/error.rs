//! Error types for the foundation model

use thiserror::Error;

/// Main error type for model construction and SCIA file handling
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Duplicate name '{0}' already exists")]
    DuplicateName(String),

    #[error("Node handle {0} does not resolve in this model")]
    UnknownNode(usize),

    #[error("Beam handle {0} does not resolve in this model")]
    UnknownBeam(usize),

    #[error("Plane handle {0} does not resolve in this model")]
    UnknownPlane(usize),

    #[error("Cross-section handle {0} does not resolve in this model")]
    UnknownCrossSection(usize),

    #[error("Load group handle {0} does not resolve in this model")]
    UnknownLoadGroup(usize),

    #[error("Load case handle {0} does not resolve in this model")]
    UnknownLoadCase(usize),

    #[error("Plane edge {0} is out of range (expected 1..=4)")]
    InvalidEdge(usize),

    #[error("XML write error: {0}")]
    XmlWrite(#[from] quick_xml::Error),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] roxmltree::Error),

    #[error("Result '{name}' under '{parent}' not found in output file")]
    ResultNotFound { name: String, parent: String },

    #[error("Result section '{0}' not found")]
    SectionNotFound(String),

    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    #[error("Column '{0}' has no values")]
    EmptyColumn(String),

    #[error("Value '{value}' in column '{column}' is not a number")]
    InvalidNumber { column: String, value: String },

    #[error("Cell '{0}' has an out-of-range column index")]
    CellIndexOutOfRange(String),
}

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;
