use anyhow::Result;
use clap::Args;
use legiscan_lib::legiscan_api::Client;
use legiscan_lib::session::current_session;
use legiscan_lib::validation;

use crate::output::{print_json, print_sessions_table, OutputFormat};

#[derive(Args)]
pub struct SessionsArgs {
    /// Jurisdiction code (two-letter state, DC, PR, or US for Congress)
    pub state: String,
}

pub async fn run(args: &SessionsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let state = validation::validate_state(&args.state)?;

    let sessions = client.get_session_list(&state).await?;
    let current_id = current_session(&state, &sessions)
        .ok()
        .map(|s| s.session_id);

    match format {
        OutputFormat::Json => print_json(&sessions)?,
        OutputFormat::Table => print_sessions_table(&sessions, current_id),
    }

    Ok(())
}
