use serde::{Deserialize, Serialize};

/// Outcome of a quote refresh pass.
///
/// Symbols in `failed` keep their previous record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshReport {
    pub updated: Vec<String>,
    pub failed: Vec<String>,
}
