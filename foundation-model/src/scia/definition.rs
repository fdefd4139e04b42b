//! Definition file (`.xml.def`) describing every table the model XML uses
//!
//! The file only depends on the table layouts, never on a model.

use super::tables::{end_table, finish_document, start_document, start_table, ALL_TABLES};
use crate::error::ModelResult;

const ROOT: &str = "def_list";

/// Write the definition file
pub fn write_definition_file() -> ModelResult<String> {
    let mut writer = start_document(ROOT)?;
    for table in ALL_TABLES {
        start_table(&mut writer, table)?;
        end_table(&mut writer)?;
    }
    finish_document(writer, ROOT)
}
