mod commands;
mod output;
mod xml_output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tropicos_api::{Client, Format};

use crate::commands::name::{Lookup, NameArgs};
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "tropicos")]
#[command(about = "Query plant names, synonymy, and specimens from the Tropicos web service")]
struct Cli {
    /// Tropicos API key
    #[arg(long, env = "TROPICOS_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Service root URL (defaults to the production service)
    #[arg(long, env = "TROPICOS_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Response format requested from the service: json or xml. XML bodies are printed as-is.
    #[arg(long, default_value = "json", global = true)]
    format: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    output: OutputFormat,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search names
    Search(commands::search::SearchArgs),
    /// Show the summary record for a name
    Summary(NameArgs),
    /// List synonyms of a name
    Synonyms(NameArgs),
    /// List accepted names for a name
    AcceptedNames(NameArgs),
    /// List distribution records for a name
    Distributions(NameArgs),
    /// List references for a name
    References(NameArgs),
    /// List images of a name
    Images(NameArgs),
    /// List chromosome counts for a name
    ChromosomeCounts(NameArgs),
    /// Show the higher taxa of a name
    HigherTaxa(NameArgs),
    /// List specimens of a name
    Specimens(NameArgs),
    /// List names by id
    List(commands::list::ListArgs),
}

fn build_client(cli: &Cli) -> Result<Client> {
    let format: Format = cli.format.parse()?;
    let mut builder = Client::builder().format(format);
    if let Some(api_key) = &cli.api_key {
        builder = builder.api_key(api_key);
    }
    if let Some(base_url) = &cli.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tropicos=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = build_client(&cli)?;
    tracing::debug!(base_url = client.base_url(), format = %client.format(), "client configured");
    let format = cli.output;

    match &cli.command {
        Commands::Search(args) => commands::search::run(args, &client, format).await?,
        Commands::List(args) => commands::list::run(args, &client, format).await?,
        Commands::Summary(args) => commands::name::run(Lookup::Summary, args, &client, format).await?,
        Commands::Synonyms(args) => commands::name::run(Lookup::Synonyms, args, &client, format).await?,
        Commands::AcceptedNames(args) => {
            commands::name::run(Lookup::AcceptedNames, args, &client, format).await?
        }
        Commands::Distributions(args) => {
            commands::name::run(Lookup::Distributions, args, &client, format).await?
        }
        Commands::References(args) => {
            commands::name::run(Lookup::References, args, &client, format).await?
        }
        Commands::Images(args) => commands::name::run(Lookup::Images, args, &client, format).await?,
        Commands::ChromosomeCounts(args) => {
            commands::name::run(Lookup::ChromosomeCounts, args, &client, format).await?
        }
        Commands::HigherTaxa(args) => {
            commands::name::run(Lookup::HigherTaxa, args, &client, format).await?
        }
        Commands::Specimens(args) => {
            commands::name::run(Lookup::Specimens, args, &client, format).await?
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_name_subcommand() {
        let cli = Cli::try_parse_from([
            "tropicos",
            "--api-key",
            "k",
            "synonyms",
            "12345",
            "--output",
            "csv",
        ])
        .unwrap();
        assert_eq!(cli.output, OutputFormat::Csv);
        match cli.command {
            Commands::Synonyms(args) => assert_eq!(args.id, 12345),
            _ => panic!("expected synonyms"),
        }
    }

    #[test]
    fn test_cli_list_requires_start_id() {
        assert!(Cli::try_parse_from(["tropicos", "list"]).is_err());
    }

    #[test]
    fn test_build_client_rejects_bad_format() {
        let cli = Cli::try_parse_from(["tropicos", "--api-key", "k", "--format", "yaml", "summary", "1"])
            .unwrap();
        assert!(build_client(&cli).is_err());
    }

    #[test]
    fn test_build_client_requires_api_key() {
        let cli = Cli {
            api_key: None,
            base_url: None,
            format: "json".to_string(),
            output: OutputFormat::Table,
            timeout: None,
            command: Commands::Summary(NameArgs { id: 1 }),
        };
        let err = build_client(&cli).unwrap_err();
        assert!(err.to_string().contains("API key"));
    }
}
