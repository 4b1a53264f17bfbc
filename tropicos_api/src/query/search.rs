use std::str::FromStr;

use url::Url;

use crate::types::NameId;

use super::{
    common::{QueryCommon, SortOrder},
    Query,
};

/// Parameters for `/Name/Search`. Only the fields that are set are sent.
#[derive(Clone, Debug, Default)]
pub struct SearchQuery {
    pub common: QueryCommon,
    pub name: Option<String>,
    pub common_name: Option<String>,
    pub family: Option<String>,
    pub name_id: Option<NameId>,
    pub search_type: Option<SearchType>,
    pub order_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub start_row: Option<u32>,
}

impl Query for SearchQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(name) = &self.name {
            url.query_pairs_mut().append_pair("name", name);
        }
        if let Some(common_name) = &self.common_name {
            url.query_pairs_mut().append_pair("commonname", common_name);
        }
        if let Some(family) = &self.family {
            url.query_pairs_mut().append_pair("family", family);
        }
        if let Some(name_id) = self.name_id {
            url.query_pairs_mut()
                .append_pair("nameid", &name_id.to_string());
        }
        if let Some(search_type) = self.search_type {
            url.query_pairs_mut()
                .append_pair("type", &search_type.to_string());
        }
        if let Some(order_by) = &self.order_by {
            url.query_pairs_mut().append_pair("orderby", order_by);
        }
        if let Some(sort_order) = self.sort_order {
            url.query_pairs_mut()
                .append_pair("sortorder", &sort_order.to_string());
        }
        if let Some(start_row) = self.start_row {
            url.query_pairs_mut()
                .append_pair("startrow", &start_row.to_string());
        }
        self.common.add_to_url(&url)
    }
}

impl SearchQuery {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_common_name(mut self, common_name: &str) -> Self {
        self.common_name = Some(common_name.to_string());
        self
    }

    pub fn with_family(mut self, family: &str) -> Self {
        self.family = Some(family.to_string());
        self
    }

    pub fn with_name_id(mut self, name_id: NameId) -> Self {
        self.name_id = Some(name_id);
        self
    }

    pub fn with_search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = Some(search_type);
        self
    }

    pub fn with_order_by(mut self, order_by: &str) -> Self {
        self.order_by = Some(order_by.to_string());
        self
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Sets the 1-based row to start returning results from.
    pub fn with_start_row(mut self, start_row: u32) -> Self {
        self.start_row = Some(start_row);
        self
    }
}

/// How `name` is matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchType {
    Exact,
    Wildcard,
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SearchType::Exact => "exact",
            SearchType::Wildcard => "wildcard",
        })
    }
}

impl FromStr for SearchType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(SearchType::Exact),
            "wildcard" => Ok(SearchType::Wildcard),
            _ => Err(()),
        }
    }
}
