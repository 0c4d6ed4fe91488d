use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use legiscan_lib::types::Session;
use legiscan_lib::{AuthoredBillReport, LegislatorSearch, LegislatorVoteReport};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "ID")]
    people_id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Party")]
    party: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "District")]
    district: String,
}

#[derive(Tabled)]
struct VoteRow {
    #[tabled(rename = "Bill")]
    bill: String,
    #[tabled(rename = "Roll Call")]
    roll_call: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Chamber")]
    chamber: String,
    #[tabled(rename = "Vote")]
    vote: String,
    #[tabled(rename = "Passed")]
    passed: String,
}

#[derive(Tabled)]
struct AuthoredRow {
    #[tabled(rename = "Bill")]
    bill: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status Date")]
    status_date: String,
    #[tabled(rename = "Rank")]
    rank: i64,
    #[tabled(rename = "Type")]
    sponsor_type: String,
}

#[derive(Tabled)]
struct SessionRow {
    #[tabled(rename = "ID")]
    session_id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Years")]
    years: String,
    #[tabled(rename = "Adjourned")]
    adjourned: String,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints batch-level fetch failures to stderr so tables stay clean.
pub fn print_errors(errors: &[String]) {
    for error in errors {
        eprintln!("warning: {}", error);
    }
}

pub fn print_search_table(search: &LegislatorSearch) {
    eprintln!(
        "Session {} ({}): {} match(es)",
        search.session.session_id, search.session.session_name, search.match_count
    );
    let rows: Vec<MatchRow> = search
        .matches
        .iter()
        .map(|m| MatchRow {
            people_id: m.people_id,
            name: m.name.clone(),
            party: m.party.clone(),
            role: m.role.clone(),
            district: m.district.clone(),
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::psql()));
}

pub fn print_votes_table(report: &LegislatorVoteReport) {
    if let Some(ref name) = report.legislator_name {
        eprintln!("Votes cast by {}", name);
    }
    let rows: Vec<VoteRow> = report
        .votes
        .iter()
        .map(|v| VoteRow {
            bill: v.bill_number.clone(),
            roll_call: v.desc.clone(),
            date: v.date.map(|d| d.to_string()).unwrap_or_default(),
            chamber: v.chamber.to_string(),
            vote: v.vote_text.clone(),
            passed: if v.passed { "yes" } else { "no" }.to_string(),
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::psql()));
    eprintln!(
        "Summary: {} yea, {} nay, {} not voting, {} absent",
        report.summary.yea, report.summary.nay, report.summary.not_voting, report.summary.absent
    );
    print_errors(&report.errors);
}

pub fn print_authored_table(report: &AuthoredBillReport) {
    eprintln!(
        "{} of {} sponsored bills primarily authored",
        report.primary_count, report.total_sponsored
    );
    let rows: Vec<AuthoredRow> = report
        .bills
        .iter()
        .map(|b| AuthoredRow {
            bill: b.bill_number.clone(),
            title: b.title.clone(),
            status_date: b.status_date.map(|d| d.to_string()).unwrap_or_default(),
            rank: b.sponsor_order,
            sponsor_type: b.sponsor_type.clone(),
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::psql()));
    print_errors(&report.errors);
}

pub fn print_sessions_table(sessions: &[Session], current_id: Option<i64>) {
    let rows: Vec<SessionRow> = sessions
        .iter()
        .map(|s| SessionRow {
            session_id: s.session_id,
            name: s.session_name.clone(),
            years: format!("{}-{}", s.year_start, s.year_end),
            adjourned: match (s.sine_die, current_id == Some(s.session_id)) {
                (_, true) => "no (current)".to_string(),
                (0, _) => "no".to_string(),
                _ => "yes".to_string(),
            },
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::psql()));
}
