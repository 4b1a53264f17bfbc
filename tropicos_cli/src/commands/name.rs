//! Subcommands that look up records attached to one name id.

use anyhow::Result;
use clap::Args;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tropicos_api::types::NameId;
use tropicos_api::{Client, PendingRequest};

use super::print_raw_xml;
use crate::output::{
    build_chromosome_count_rows, build_distribution_rows, build_image_rows, build_name_rows,
    build_reference_rows, build_specimen_rows, build_summary_rows, build_synonym_rows,
    build_type_specimen_rows, print_json, print_records, OutputFormat, XmlTags,
};

#[derive(Args)]
pub struct NameArgs {
    /// Tropicos name id
    pub id: NameId,
}

/// Which per-name record set to fetch.
#[derive(Clone, Copy, Debug)]
pub enum Lookup {
    Summary,
    Synonyms,
    AcceptedNames,
    Distributions,
    References,
    Images,
    ChromosomeCounts,
    HigherTaxa,
    Specimens,
}

pub async fn run(lookup: Lookup, args: &NameArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let id = args.id;
    match lookup {
        Lookup::Summary => summary(id, client, format).await,
        Lookup::Synonyms => {
            show(client.synonyms(id), build_synonym_rows, tags("Synonyms", "Synonym"), format).await
        }
        Lookup::AcceptedNames => {
            show(
                client.accepted_names(id),
                build_synonym_rows,
                tags("AcceptedNames", "Synonym"),
                format,
            )
            .await
        }
        Lookup::Distributions => {
            show(
                client.distributions(id),
                build_distribution_rows,
                tags("Distributions", "Distribution"),
                format,
            )
            .await
        }
        Lookup::References => {
            show(
                client.references(id),
                build_reference_rows,
                tags("References", "NameReference"),
                format,
            )
            .await
        }
        Lookup::Images => show(client.images(id), build_image_rows, tags("Images", "Image"), format).await,
        Lookup::ChromosomeCounts => {
            show(
                client.chromosome_counts(id),
                build_chromosome_count_rows,
                tags("ChromosomeCounts", "ChromosomeCount"),
                format,
            )
            .await
        }
        Lookup::HigherTaxa => {
            show(client.higher_taxa(id), build_name_rows, tags("HigherTaxa", "Name"), format).await
        }
        Lookup::Specimens => {
            show(
                client.specimens(id),
                build_specimen_rows,
                tags("Specimens", "Specimen"),
                format,
            )
            .await
        }
    }
}

/// Sends a list request and renders its records.
async fn show<T, R>(
    request: PendingRequest<'_, Vec<T>>,
    build_rows: impl Fn(&[T]) -> Vec<R>,
    tags: XmlTags,
    format: OutputFormat,
) -> Result<()>
where
    T: DeserializeOwned + Serialize,
    R: Tabled + Serialize,
{
    let resp = request.send().await?;
    if print_raw_xml(&resp) {
        return Ok(());
    }
    let records = resp.data()?;
    print_records(build_rows(&records), &records, tags, format)
}

async fn summary(id: NameId, client: &Client, format: OutputFormat) -> Result<()> {
    let resp = client.summary(id).send().await?;
    if print_raw_xml(&resp) {
        return Ok(());
    }
    let summary = resp.data()?;

    match format {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Table | OutputFormat::Markdown => {
            print_records(build_summary_rows(&summary), &[&summary], tags("Names", "Name"), format)?;
            let specimens = summary.type_specimens.as_deref().unwrap_or_default();
            if !specimens.is_empty() {
                let mut table = Table::new(build_type_specimen_rows(specimens));
                if format == OutputFormat::Markdown {
                    table.with(Style::markdown());
                }
                println!("\nType specimens\n{}", table);
            }
        }
        OutputFormat::Csv | OutputFormat::Xml => {
            print_records(build_summary_rows(&summary), &[&summary], tags("Names", "Name"), format)?
        }
    }
    Ok(())
}

fn tags(root: &'static str, item: &'static str) -> XmlTags {
    XmlTags { root, item }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> Client {
        Client::builder()
            .api_key("k")
            .base_url(&server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_lookup_renders_decoded_records() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Name/100/Images"))
            .and(query_param("apiKey", "k"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(include_str!("../../../tropicos_api/tests/fixtures/images.json")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        run(Lookup::Images, &NameArgs { id: 100 }, &client, OutputFormat::Csv)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_lookup_surfaces_decode_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Name/100/Specimens"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = run(Lookup::Specimens, &NameArgs { id: 100 }, &client, OutputFormat::Table).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_lookup_surfaces_status_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Name/100/HigherTaxa"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = run(Lookup::HigherTaxa, &NameArgs { id: 100 }, &client, OutputFormat::Json)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid API key"));
    }
}
