use anyhow::Result;
use clap::Args;
use legiscan_lib::legiscan_api::Client;
use legiscan_lib::types::Chamber;
use legiscan_lib::{legislator_votes, validation};

use crate::output::{print_json, print_votes_table, OutputFormat};

#[derive(Args)]
pub struct VotesArgs {
    /// Person identifier of the legislator
    #[arg(long)]
    pub person: i64,

    /// Bill identifiers to scan, comma-separated or repeated
    #[arg(long, required = true, num_args = 1.., value_delimiter = ',')]
    pub bills: Vec<i64>,

    /// Restrict to one chamber: house (h), senate (s), joint (j)
    #[arg(long)]
    pub chamber: Option<String>,
}

pub async fn run(args: &VotesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    validation::validate_id(args.person, "person id")?;
    for bill_id in &args.bills {
        validation::validate_id(*bill_id, "bill id")?;
    }
    let chamber = args
        .chamber
        .as_deref()
        .map(|c| c.parse::<Chamber>())
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let report = legislator_votes(client, args.person, &args.bills, chamber).await?;

    match format {
        OutputFormat::Table => print_votes_table(&report),
        OutputFormat::Json => print_json(&report)?,
    }

    Ok(())
}
