//! Load groups

use serde::{Deserialize, Serialize};

/// Handle to a load group inside a `StructuralModel`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadGroupId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadOption {
    Permanent,
    Variable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationOption {
    Standard,
    Exclusive,
    Together,
}

/// Eurocode imposed load categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadTypeOption {
    CatA,
    CatB,
    CatC,
    CatD,
    CatE,
    CatF,
    CatG,
    CatH,
    Snow,
    Wind,
}

impl LoadOption {
    pub fn label(&self) -> &'static str {
        match self {
            LoadOption::Permanent => "Permanent",
            LoadOption::Variable => "Variable",
        }
    }
}

impl RelationOption {
    pub fn label(&self) -> &'static str {
        match self {
            RelationOption::Standard => "Standard",
            RelationOption::Exclusive => "Exclusive",
            RelationOption::Together => "Together",
        }
    }
}

impl LoadTypeOption {
    pub fn label(&self) -> &'static str {
        match self {
            LoadTypeOption::CatA => "Cat A : Domestic",
            LoadTypeOption::CatB => "Cat B : Offices",
            LoadTypeOption::CatC => "Cat C : Congregation",
            LoadTypeOption::CatD => "Cat D : Shopping",
            LoadTypeOption::CatE => "Cat E : Storage",
            LoadTypeOption::CatF => "Cat F : Vehicle <30kN",
            LoadTypeOption::CatG => "Cat G : Vehicle <160kN",
            LoadTypeOption::CatH => "Cat H : Roofs",
            LoadTypeOption::Snow => "Snow",
            LoadTypeOption::Wind => "Wind",
        }
    }
}

/// A load group categorizes load cases for combination rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadGroup {
    pub name: String,
    pub load_option: LoadOption,
    pub relation: RelationOption,
    /// Only meaningful for variable groups
    pub load_type: Option<LoadTypeOption>,
}
