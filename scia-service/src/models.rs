use foundation_model::visualization::Geometry;
use serde::{Deserialize, Serialize};

/// Body of the 3D view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryResponse {
    pub geometries: Vec<Geometry>,
}

/// Body of the analysis view: the 3D scene plus a result table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryAndDataResponse {
    pub geometries: Vec<Geometry>,
    pub data: DataGroup,
    pub job_id: String,
    pub timestamp: String,
}

/// Ordered list of result rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataGroup(pub Vec<DataItem>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataItem {
    pub label: String,
    pub value: DataValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_decimals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subgroup: Option<DataGroup>,
}

impl DataItem {
    /// Heading row grouping the items of `subgroup`
    pub fn heading(label: &str, subgroup: DataGroup) -> Self {
        Self {
            label: label.to_string(),
            value: DataValue::Text(" ".to_string()),
            suffix: None,
            number_of_decimals: None,
            subgroup: Some(subgroup),
        }
    }

    pub fn number(label: &str, value: f64, suffix: &str, number_of_decimals: u32) -> Self {
        Self {
            label: label.to_string(),
            value: DataValue::Number(value),
            suffix: Some(suffix.to_string()),
            number_of_decimals: Some(number_of_decimals),
            subgroup: None,
        }
    }
}

/// Result table shown next to the model after an analysis
pub fn reaction_data(max_pile_reaction: f64) -> DataGroup {
    DataGroup(vec![DataItem::heading(
        "SCIA results",
        DataGroup(vec![DataItem::number(
            "Maximum pile reaction",
            max_pile_reaction,
            "N",
            2,
        )]),
    )])
}
