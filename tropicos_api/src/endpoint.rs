//! The fixed table of service endpoints.

use crate::types::NameId;

/// One service operation, carrying the name id for the operations whose path
/// embeds one.
///
/// | Variant | Path | Response |
/// |---|---|---|
/// | `Search` | `/Name/Search` | `Vec<SearchResult>` |
/// | `Summary(id)` | `/Name/{id}` | `NameSummary` |
/// | `Synonyms(id)` | `/Name/{id}/Synonyms` | `Vec<Synonym>` |
/// | `AcceptedNames(id)` | `/Name/{id}/AcceptedNames` | `Vec<Synonym>` |
/// | `Distributions(id)` | `/Name/{id}/Distributions` | `Vec<Distribution>` |
/// | `References(id)` | `/Name/{id}/References` | `Vec<NameReference>` |
/// | `Images(id)` | `/Name/{id}/Images` | `Vec<Image>` |
/// | `ChromosomeCounts(id)` | `/Name/{id}/ChromosomeCounts` | `Vec<ChromosomeCount>` |
/// | `HigherTaxa(id)` | `/Name/{id}/HigherTaxa` | `Vec<Name>` |
/// | `Specimens(id)` | `/Name/{id}/Specimens` | `Vec<Specimen>` |
/// | `ListNames` | `/Name/List` | `Vec<Name>` |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Search,
    Summary(NameId),
    Synonyms(NameId),
    AcceptedNames(NameId),
    Distributions(NameId),
    References(NameId),
    Images(NameId),
    ChromosomeCounts(NameId),
    HigherTaxa(NameId),
    Specimens(NameId),
    ListNames,
}

impl Endpoint {
    /// Operation name, used in log events.
    pub fn operation(&self) -> &'static str {
        match self {
            Endpoint::Search => "search",
            Endpoint::Summary(_) => "summary",
            Endpoint::Synonyms(_) => "synonyms",
            Endpoint::AcceptedNames(_) => "acceptedNames",
            Endpoint::Distributions(_) => "distributions",
            Endpoint::References(_) => "references",
            Endpoint::Images(_) => "images",
            Endpoint::ChromosomeCounts(_) => "chromosomeCounts",
            Endpoint::HigherTaxa(_) => "higherTaxa",
            Endpoint::Specimens(_) => "specimens",
            Endpoint::ListNames => "listNames",
        }
    }

    /// The name id embedded in the path, if this operation takes one.
    pub fn name_id(&self) -> Option<NameId> {
        match *self {
            Endpoint::Search | Endpoint::ListNames => None,
            Endpoint::Summary(id)
            | Endpoint::Synonyms(id)
            | Endpoint::AcceptedNames(id)
            | Endpoint::Distributions(id)
            | Endpoint::References(id)
            | Endpoint::Images(id)
            | Endpoint::ChromosomeCounts(id)
            | Endpoint::HigherTaxa(id)
            | Endpoint::Specimens(id) => Some(id),
        }
    }

    pub fn requires_id(&self) -> bool {
        self.name_id().is_some()
    }

    /// Resource path relative to the service root, with the id as a path segment.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Search => "/Name/Search".to_string(),
            Endpoint::Summary(id) => format!("/Name/{}", id),
            Endpoint::Synonyms(id) => format!("/Name/{}/Synonyms", id),
            Endpoint::AcceptedNames(id) => format!("/Name/{}/AcceptedNames", id),
            Endpoint::Distributions(id) => format!("/Name/{}/Distributions", id),
            Endpoint::References(id) => format!("/Name/{}/References", id),
            Endpoint::Images(id) => format!("/Name/{}/Images", id),
            Endpoint::ChromosomeCounts(id) => format!("/Name/{}/ChromosomeCounts", id),
            Endpoint::HigherTaxa(id) => format!("/Name/{}/HigherTaxa", id),
            Endpoint::Specimens(id) => format!("/Name/{}/Specimens", id),
            Endpoint::ListNames => "/Name/List".to_string(),
        }
    }
}
