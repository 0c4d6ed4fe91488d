use anyhow::Result;
use clap::Args;
use legiscan_lib::legiscan_api::Client;
use legiscan_lib::validation;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct BillArgs {
    /// Bill identifier
    pub id: i64,
}

pub async fn run(args: &BillArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    validation::validate_id(args.id, "bill id")?;

    let bill = client.get_bill(args.id).await?;

    match format {
        OutputFormat::Json => print_json(&bill)?,
        OutputFormat::Table => {
            println!("{}: {}", bill.bill_number, bill.title);
            println!("Session: {}", bill.session.session_name);
            if let Some(date) = bill.status_date {
                println!("Status {} as of {}", bill.status, date);
            }
            for sponsor in &bill.sponsors {
                println!(
                    "  sponsor #{}: {} ({})",
                    sponsor.sponsor_order, sponsor.name, sponsor.party
                );
            }
            println!("{} roll call(s), {} text version(s)", bill.votes.len(), bill.texts.len());
        }
    }

    Ok(())
}
