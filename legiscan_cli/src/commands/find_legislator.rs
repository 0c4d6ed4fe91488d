use anyhow::Result;
use clap::Args;
use legiscan_lib::legiscan_api::Client;
use legiscan_lib::{find_legislator, validation};

use crate::output::{print_json, print_search_table, OutputFormat};

#[derive(Args)]
pub struct FindLegislatorArgs {
    /// Free-text name query, e.g. "smith" or "jane smith"
    pub query: String,

    /// Jurisdiction code (two-letter state, DC, PR, or US for Congress)
    #[arg(long)]
    pub state: String,

    /// Search a specific session instead of the current one
    #[arg(long)]
    pub session: Option<i64>,
}

pub async fn run(args: &FindLegislatorArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = validation::validate_query(&args.query)?;
    let state = validation::validate_state(&args.state)?;
    if let Some(session_id) = args.session {
        validation::validate_id(session_id, "session id")?;
    }

    let search = find_legislator(client, &query, &state, args.session).await?;

    match format {
        OutputFormat::Table => print_search_table(&search),
        OutputFormat::Json => print_json(&search)?,
    }

    Ok(())
}
