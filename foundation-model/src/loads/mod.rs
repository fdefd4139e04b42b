//! Load groups, load cases, combinations and loads

mod load_case;
mod load_combo;
mod load_group;
mod surface_load;

pub use load_case::{ActionType, Duration, LoadCase, LoadCaseId, Specification, VariableLoadType};
pub use load_combo::{CombinationType, LoadCombination};
pub use load_group::{LoadGroup, LoadGroupId, LoadOption, LoadTypeOption, RelationOption};
pub use surface_load::{LoadDirection, LoadLocation, SurfaceLoad, SurfaceLoadType};
