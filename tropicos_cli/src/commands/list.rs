use anyhow::Result;
use clap::Args;
use tropicos_api::types::{Name, NameId};
use tropicos_api::{Client, ListNamesQuery, Query};

use super::print_raw_xml;
use crate::output::{build_name_rows, print_records, OutputFormat, XmlTags};

#[derive(Args)]
pub struct ListArgs {
    /// Name id to start listing from
    #[arg(long)]
    pub start_id: NameId,

    /// Results per page
    #[arg(long)]
    pub page_size: Option<u32>,
}

pub async fn run(args: &ListArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let mut query = ListNamesQuery::new(args.start_id);
    if let Some(page_size) = args.page_size {
        query = query.with_page_size(page_size);
    }

    let resp = client.list_names(&query).send().await?;
    if print_raw_xml(&resp) {
        return Ok(());
    }
    let names = resp.data()?;

    if let Some(next) = next_start_id(&names) {
        eprintln!("{} names; continue with --start-id {}", names.len(), next);
    }

    print_records(
        build_name_rows(&names),
        &names,
        XmlTags {
            root: "Names",
            item: "Name",
        },
        format,
    )
}

/// The start id that continues after the last name of a page.
fn next_start_id(names: &[Name]) -> Option<NameId> {
    names.last()?.name_id?.checked_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(id: Option<NameId>) -> Name {
        Name {
            name_id: id,
            ..Name::default()
        }
    }

    #[test]
    fn test_next_start_id_follows_last_name() {
        assert_eq!(next_start_id(&[name(Some(10)), name(Some(42))]), Some(43));
    }

    #[test]
    fn test_next_start_id_without_id_or_names() {
        assert_eq!(next_start_id(&[]), None);
        assert_eq!(next_start_id(&[name(Some(10)), name(None)]), None);
    }

    #[test]
    fn test_next_start_id_at_max_id() {
        assert_eq!(next_start_id(&[name(Some(NameId::MAX))]), None);
    }
}
