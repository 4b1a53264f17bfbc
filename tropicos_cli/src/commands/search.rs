use anyhow::{bail, Result};
use clap::Args;
use tropicos_api::types::NameId;
use tropicos_api::{Client, Query, SearchQuery, SearchType, SortOrder};

use super::print_raw_xml;
use crate::output::{build_search_rows, print_records, OutputFormat, XmlTags};

#[derive(Args)]
pub struct SearchArgs {
    /// Scientific name to search for (e.g. "Quercus alba")
    #[arg(long)]
    pub name: Option<String>,

    /// Common name to search for
    #[arg(long)]
    pub common_name: Option<String>,

    /// Restrict to a family (e.g. Fagaceae)
    #[arg(long)]
    pub family: Option<String>,

    /// Look up a specific name id
    #[arg(long)]
    pub name_id: Option<NameId>,

    /// Match mode: exact or wildcard
    #[arg(long = "type")]
    pub search_type: Option<String>,

    /// Field to order results by
    #[arg(long)]
    pub order_by: Option<String>,

    /// Sort order: asc or desc
    #[arg(long)]
    pub sort: Option<String>,

    /// Row to start from (1-based)
    #[arg(long)]
    pub start_row: Option<u32>,

    /// Results per page
    #[arg(long)]
    pub page_size: Option<u32>,
}

pub async fn run(args: &SearchArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let query = build_query(args)?;

    let resp = client.search(&query).send().await?;
    if print_raw_xml(&resp) {
        return Ok(());
    }
    let hits = resp.data()?;

    if let Some(total) = hits.first().and_then(|h| h.total_rows) {
        eprintln!("Showing {} of {} names", hits.len(), total);
    }

    print_records(
        build_search_rows(&hits),
        &hits,
        XmlTags {
            root: "Names",
            item: "Name",
        },
        format,
    )
}

fn build_query(args: &SearchArgs) -> Result<SearchQuery> {
    let mut query = SearchQuery::default();

    if let Some(name) = &args.name {
        query = query.with_name(name);
    }
    if let Some(common_name) = &args.common_name {
        query = query.with_common_name(common_name);
    }
    if let Some(family) = &args.family {
        query = query.with_family(family);
    }
    if let Some(name_id) = args.name_id {
        query = query.with_name_id(name_id);
    }
    if let Some(search_type) = &args.search_type {
        let Ok(search_type) = search_type.parse::<SearchType>() else {
            bail!("unknown search type {:?}; expected exact or wildcard", search_type);
        };
        query = query.with_search_type(search_type);
    }
    if let Some(order_by) = &args.order_by {
        query = query.with_order_by(order_by);
    }
    if let Some(sort) = &args.sort {
        let Ok(sort_order) = sort.parse::<SortOrder>() else {
            bail!("unknown sort order {:?}; expected asc or desc", sort);
        };
        query = query.with_sort_order(sort_order);
    }
    if let Some(start_row) = args.start_row {
        query = query.with_start_row(start_row);
    }
    if let Some(page_size) = args.page_size {
        query = query.with_page_size(page_size);
    }

    Ok(query)
}
