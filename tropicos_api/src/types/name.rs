//! Name records: summaries, synonymy, and higher taxa.

use serde::{Deserialize, Serialize};

use super::Reference;

/// Stable numeric identifier of a name record.
pub type NameId = u64;

/// A name as embedded in synonym, higher-taxa, and list responses.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Name {
    pub name_id: Option<NameId>,
    pub scientific_name: Option<String>,
    pub scientific_name_with_authors: Option<String>,
    pub author: Option<String>,
    pub family: Option<String>,
    pub rank: Option<String>,
    pub rank_abbreviation: Option<String>,
    pub nomenclature_status_name: Option<String>,
    pub display_reference: Option<String>,
    pub display_date: Option<String>,
}

/// Full record for one name, returned by `/Name/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NameSummary {
    pub name_id: Option<NameId>,
    pub scientific_name: Option<String>,
    pub scientific_name_with_authors: Option<String>,
    pub author: Option<String>,
    pub family: Option<String>,
    pub genus: Option<String>,
    pub species_epithet: Option<String>,
    pub rank: Option<String>,
    pub rank_abbreviation: Option<String>,
    #[serde(rename = "NomenclatureStatusID")]
    pub nomenclature_status_id: Option<i64>,
    pub nomenclature_status_name: Option<String>,
    pub symbol: Option<String>,
    pub citation: Option<String>,
    pub name_published_citation: Option<String>,
    pub copyright: Option<String>,
    pub source: Option<String>,
    /// Sent as a string by the service.
    pub accepted_name_count: Option<String>,
    /// Sent as a string by the service.
    pub synonym_count: Option<String>,
    pub type_specimens: Option<Vec<TypeSpecimen>>,
}

/// Type specimen embedded in a [`NameSummary`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TypeSpecimen {
    pub collector_name: Option<String>,
    pub collection_number: Option<String>,
    pub institution: Option<String>,
    pub kind_of_type_abbrev: Option<String>,
    pub kind_of_type_name: Option<String>,
    pub type_note: Option<String>,
}

/// Links a synonym to the accepted name, returned by both `/Synonyms` and
/// `/AcceptedNames`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Synonym {
    pub synonym_name: Option<Name>,
    pub accepted_name: Option<Name>,
    /// Publication in which the synonymy was asserted.
    pub reference: Option<Reference>,
}
