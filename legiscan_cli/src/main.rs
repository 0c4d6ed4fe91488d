mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use legiscan_lib::legiscan_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "legiscan")]
#[command(about = "Query state legislative data from LegiScan")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find legislators in a state by name
    FindLegislator(commands::find_legislator::FindLegislatorArgs),
    /// Collect a legislator's votes across a set of bills
    Votes(commands::votes::VotesArgs),
    /// List the bills a legislator primarily authored
    Authored(commands::authored::AuthoredArgs),
    /// Look up a single bill
    Bill(commands::bill::BillArgs),
    /// List a state's legislative sessions
    Sessions(commands::sessions::SessionsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("legiscan_api=info".parse().unwrap())
                .add_directive("legiscan_lib=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();
    let api_key = std::env::var("LEGISCAN_API_KEY")
        .context("LEGISCAN_API_KEY is not set; get a key at https://legiscan.com/legiscan")?;

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let client = Client::new(&api_key);

    match &cli.command {
        Commands::FindLegislator(args) => {
            commands::find_legislator::run(args, &client, &format).await?
        }
        Commands::Votes(args) => commands::votes::run(args, &client, &format).await?,
        Commands::Authored(args) => commands::authored::run(args, &client, &format).await?,
        Commands::Bill(args) => commands::bill::run(args, &client, &format).await?,
        Commands::Sessions(args) => commands::sessions::run(args, &client, &format).await?,
    }

    Ok(())
}
