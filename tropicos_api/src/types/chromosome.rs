use serde::{Deserialize, Serialize};

use super::Reference;

/// Cytological count for a name, from `/Name/{id}/ChromosomeCounts`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ChromosomeCount {
    pub display_name: Option<String>,
    /// Free text such as `2n = 24`.
    pub sporophytic_count: Option<String>,
    pub reference: Option<Reference>,
}
