//! SCIA Engineer XML interchange
//!
//! The engine consumes three files side by side: the model XML, the
//! definition file it references, and an `.esa` project template. It writes
//! one XML output file whose result tables are read back by [`output`].

mod definition;
mod input;
pub mod output;
mod tables;

pub use definition::write_definition_file;
pub use input::write_input_xml;
pub use output::{max_pile_reaction, OutputFile, ResultSection, ResultTable};

/// XML namespace used by SCIA project files
pub const SCIA_NAMESPACE: &str = "http://www.scia.cz";
/// Model XML file name inside the analysis work directory
pub const INPUT_FILE_NAME: &str = "model.xml";
/// Definition file name, referenced from the model XML
pub const DEFINITION_FILE_NAME: &str = "model.xml.def";
/// Project template file name
pub const TEMPLATE_FILE_NAME: &str = "model.esa";
/// Output file the engine is asked to write
pub const OUTPUT_FILE_NAME: &str = "output.xml";
