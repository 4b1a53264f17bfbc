use url::Url;

use crate::types::NameId;

use super::{common::QueryCommon, Query};

/// Parameters for `/Name/List`. `startid` is required by the service, so it
/// is taken at construction and always sent.
#[derive(Clone, Debug)]
pub struct ListNamesQuery {
    pub common: QueryCommon,
    pub start_id: NameId,
}

impl ListNamesQuery {
    pub fn new(start_id: NameId) -> Self {
        Self {
            common: QueryCommon::default(),
            start_id,
        }
    }
}

impl Query for ListNamesQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("startid", &self.start_id.to_string());
        self.common.add_to_url(&url)
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{ListNamesQuery, Query};

    #[test]
    fn test_list_names_query() {
        let url = Url::parse("https://example.com").unwrap();

        insta::assert_snapshot!(
            ListNamesQuery::new(100).with_page_size(50).add_to_url(&url).to_string(),
            @"https://example.com/?startid=100&pagesize=50"
        );
        insta::assert_snapshot!(
            ListNamesQuery::new(0).add_to_url(&url).to_string(),
            @"https://example.com/?startid=0"
        );
    }
}
