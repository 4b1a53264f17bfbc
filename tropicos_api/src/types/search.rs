use serde::{Deserialize, Serialize};

use super::NameId;

/// One hit from `/Name/Search`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResult {
    pub name_id: Option<NameId>,
    pub scientific_name: Option<String>,
    pub scientific_name_with_authors: Option<String>,
    pub author: Option<String>,
    pub family: Option<String>,
    pub rank_abbreviation: Option<String>,
    #[serde(rename = "NomenclatureStatusID")]
    pub nomenclature_status_id: Option<i64>,
    pub nomenclature_status_name: Option<String>,
    pub symbol: Option<String>,
    pub display_reference: Option<String>,
    pub display_date: Option<String>,
    /// Total hits for the query, repeated on every row.
    pub total_rows: Option<u64>,
}
