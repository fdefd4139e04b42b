//! Load combinations

use serde::{Deserialize, Serialize};

use super::LoadCaseId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombinationType {
    EnvelopeUltimate,
    EnvelopeServiceability,
    LinearUltimate,
    LinearServiceability,
}

impl CombinationType {
    pub fn label(&self) -> &'static str {
        match self {
            CombinationType::EnvelopeUltimate => "Envelope - ultimate",
            CombinationType::EnvelopeServiceability => "Envelope - serviceability",
            CombinationType::LinearUltimate => "Linear - ultimate",
            CombinationType::LinearServiceability => "Linear - serviceability",
        }
    }
}

/// A load combination defines how load cases are combined for analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    pub name: String,
    pub combination_type: CombinationType,
    /// Load cases with their factors, in insertion order
    pub factors: Vec<(LoadCaseId, f64)>,
}
