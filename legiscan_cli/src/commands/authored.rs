use anyhow::Result;
use clap::Args;
use legiscan_lib::legiscan_api::Client;
use legiscan_lib::{primary_authored_bills, validation};

use crate::output::{print_authored_table, print_json, OutputFormat};

#[derive(Args)]
pub struct AuthoredArgs {
    /// Person identifier of the legislator
    #[arg(long)]
    pub person: i64,

    /// Filter to a jurisdiction's current session
    #[arg(long)]
    pub state: Option<String>,

    /// Filter to a specific session (takes precedence over --state)
    #[arg(long)]
    pub session: Option<i64>,
}

pub async fn run(args: &AuthoredArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    validation::validate_id(args.person, "person id")?;
    let state = args
        .state
        .as_deref()
        .map(validation::validate_state)
        .transpose()?;
    if let Some(session_id) = args.session {
        validation::validate_id(session_id, "session id")?;
    }

    let report =
        primary_authored_bills(client, args.person, state.as_deref(), args.session).await?;

    match format {
        OutputFormat::Table => print_authored_table(&report),
        OutputFormat::Json => print_json(&report)?,
    }

    Ok(())
}
