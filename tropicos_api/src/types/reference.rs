//! Publication citation records.

use serde::{Deserialize, Serialize};

/// Citation metadata for a publication.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Reference {
    pub reference_id: Option<u64>,
    pub publication_id: Option<u64>,
    pub abbreviated_title: Option<String>,
    pub article_title: Option<String>,
    pub collation: Option<String>,
    pub full_citation: Option<String>,
    pub title_page_year: Option<String>,
    pub year_published: Option<String>,
}

/// A reference attached to a name, returned by `/Name/{id}/References`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NameReference {
    /// Whether the publication accepts the name.
    pub accepted_by: Option<bool>,
    pub annotation: Option<String>,
    pub reference: Option<Reference>,
}
