//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields, and [`SortOrder`].

use std::str::FromStr;

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for page size and raw passthrough parameters.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the number of results per page.
    fn with_page_size(mut self, page_size: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page_size = Some(page_size);
        self
    }

    /// Adds a parameter the builder does not model. It is sent as given,
    /// except that `apiKey` and `format` are always replaced by the client's
    /// own configuration.
    fn with_param(mut self, key: &str, value: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common()
            .extra
            .push((key.to_string(), value.to_string()));
        self
    }
}

/// Sort order for search results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        })
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(()),
        }
    }
}

/// Fields shared by all query types.
#[derive(Clone, Debug, Default)]
pub struct QueryCommon {
    /// Results per page. `None` uses the API default.
    pub page_size: Option<u32>,
    /// Raw passthrough pairs, appended after the modelled parameters.
    pub extra: Vec<(String, String)>,
}

impl QueryCommon {
    /// Appends the page size and passthrough parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(page_size) = self.page_size {
            url.query_pairs_mut()
                .append_pair("pagesize", &page_size.to_string());
        };
        for (key, value) in self.extra.iter() {
            url.query_pairs_mut().append_pair(key, value);
        }
        url
    }
}
