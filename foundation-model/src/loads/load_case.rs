//! Load cases

use serde::{Deserialize, Serialize};

use super::LoadGroupId;

/// Handle to a load case inside a `StructuralModel`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadCaseId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableLoadType {
    Static,
    Dynamic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Specification {
    Standard,
    Temperature,
    Static,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Duration {
    Long,
    Medium,
    Short,
    Instantaneous,
}

impl VariableLoadType {
    pub fn label(&self) -> &'static str {
        match self {
            VariableLoadType::Static => "Static",
            VariableLoadType::Dynamic => "Dynamic",
        }
    }
}

impl Specification {
    pub fn label(&self) -> &'static str {
        match self {
            Specification::Standard => "Standard",
            Specification::Temperature => "Temperature",
            Specification::Static => "Static",
        }
    }
}

impl Duration {
    pub fn label(&self) -> &'static str {
        match self {
            Duration::Long => "Long",
            Duration::Medium => "Medium",
            Duration::Short => "Short",
            Duration::Instantaneous => "Instantaneous",
        }
    }
}

/// How the loads in a case act
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionType {
    Permanent,
    Variable {
        load_type: VariableLoadType,
        specification: Specification,
        duration: Duration,
    },
}

impl ActionType {
    pub fn label(&self) -> &'static str {
        match self {
            ActionType::Permanent => "Permanent",
            ActionType::Variable { .. } => "Variable",
        }
    }
}

/// A load case groups related loads under a common name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    pub name: String,
    pub description: String,
    pub load_group: LoadGroupId,
    pub action: ActionType,
}
