//! Composite research operations.
//!
//! Each operation chains dependent fetch stages (session list, then
//! people; sponsored bills, then bill detail; bills, then roll calls),
//! runs the fan-out stages through [`crate::batch::run_batched`], and
//! folds the successes into one report. Failures before any batching
//! starts abort the operation; failures inside a batch degrade to the
//! report's `errors` list.

use chrono::NaiveDate;
use serde::Serialize;

use legiscan_api::types::{BillID, Chamber, PeopleID, RollCallID, SessionID};

use crate::batch::{run_batched, DEFAULT_CONCURRENCY};
use crate::error::ResearchError;
use crate::matching::matches_name;
use crate::provider::LegislativeDataProvider;
use crate::session::{current_session, find_session};
use crate::sponsors::{is_primary_author, sponsor_type_label};

/// One vote a legislator cast on one roll call.
#[derive(Serialize, Debug)]
pub struct VoteRecord {
    pub bill_id: BillID,
    pub bill_number: String,
    pub bill_title: String,
    pub roll_call_id: RollCallID,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub desc: String,
    pub chamber: Chamber,
    pub passed: bool,
    /// Numeric vote code: 1=Yea, 2=Nay, 3=Not Voting, 4=Absent.
    pub vote_id: i64,
    pub vote_text: String,
}

/// Tally of a legislator's votes by vote code.
#[derive(Serialize, Debug, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub yea: u32,
    pub nay: u32,
    pub not_voting: u32,
    pub absent: u32,
}

/// Result of [`legislator_votes`].
#[derive(Serialize, Debug)]
pub struct LegislatorVoteReport {
    /// Display name, recovered from the first fetched bill whose sponsor
    /// list contains the legislator. Absent when no bill names them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legislator_name: Option<String>,
    pub votes: Vec<VoteRecord>,
    pub summary: VoteTally,
    /// Non-fatal per-item fetch failures, omitted when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Collects every vote a legislator cast on the given bills.
///
/// Stage 1 fetches the bills in one batch. Stage 2 fetches each bill's
/// roll calls, filtered to `chamber` when one is given, in one sub-batch
/// per bill. A failed fetch is recorded as `"Bill <id>: <reason>"` or
/// `"Roll call <id>: <reason>"` and never aborts the remaining work.
pub async fn legislator_votes<P: LegislativeDataProvider>(
    provider: &P,
    people_id: PeopleID,
    bill_ids: &[BillID],
    chamber: Option<Chamber>,
) -> Result<LegislatorVoteReport, ResearchError> {
    let mut errors = Vec::new();

    let settled = run_batched(bill_ids.to_vec(), DEFAULT_CONCURRENCY, |id| {
        provider.bill(id)
    })
    .await;

    let mut bills = Vec::new();
    for (bill_id, outcome) in bill_ids.iter().zip(settled) {
        match outcome {
            Ok(bill) => bills.push(bill),
            Err(e) => errors.push(format!("Bill {}: {}", bill_id, e)),
        }
    }

    let mut legislator_name = None;
    let mut votes = Vec::new();
    let mut summary = VoteTally::default();

    for bill in &bills {
        if legislator_name.is_none() {
            legislator_name = bill
                .sponsors
                .iter()
                .find(|s| s.people_id == people_id)
                .map(|s| s.name.clone());
        }

        let roll_call_ids: Vec<RollCallID> = bill
            .votes
            .iter()
            .filter(|v| chamber.map_or(true, |c| v.chamber == c))
            .map(|v| v.roll_call_id)
            .collect();
        if roll_call_ids.is_empty() {
            continue;
        }

        let settled = run_batched(roll_call_ids.clone(), DEFAULT_CONCURRENCY, |id| {
            provider.roll_call(id)
        })
        .await;

        for (roll_call_id, outcome) in roll_call_ids.iter().zip(settled) {
            let roll_call = match outcome {
                Ok(rc) => rc,
                Err(e) => {
                    errors.push(format!("Roll call {}: {}", roll_call_id, e));
                    continue;
                }
            };
            let Some(cast) = roll_call.votes.iter().find(|v| v.people_id == people_id) else {
                continue;
            };
            match cast.vote_id {
                1 => summary.yea += 1,
                2 => summary.nay += 1,
                3 => summary.not_voting += 1,
                4 => summary.absent += 1,
                _ => {}
            }
            votes.push(VoteRecord {
                bill_id: bill.bill_id,
                bill_number: bill.bill_number.clone(),
                bill_title: bill.title.clone(),
                roll_call_id: roll_call.roll_call_id,
                date: roll_call.date,
                desc: roll_call.desc.clone(),
                chamber: roll_call.chamber,
                passed: roll_call.passed == 1,
                vote_id: cast.vote_id,
                vote_text: cast.vote_text.clone(),
            });
        }
    }

    if !errors.is_empty() {
        tracing::warn!(
            "legislator_votes for person {} degraded: {} fetches failed",
            people_id,
            errors.len()
        );
    }

    Ok(LegislatorVoteReport {
        legislator_name,
        votes,
        summary,
        errors,
    })
}

/// One bill a legislator primarily authored.
#[derive(Serialize, Debug)]
pub struct AuthoredBill {
    pub bill_id: BillID,
    pub bill_number: String,
    pub title: String,
    pub description: String,
    pub session_id: SessionID,
    pub session_name: String,
    pub status: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_date: Option<NaiveDate>,
    /// 1-based rank among the bill's sponsors.
    pub sponsor_order: i64,
    /// Human-readable sponsorship label, e.g. "Primary Sponsor".
    pub sponsor_type: String,
}

/// Result of [`primary_authored_bills`].
#[derive(Serialize, Debug)]
pub struct AuthoredBillReport {
    /// Sponsored bills on record before any session filtering.
    pub total_sponsored: usize,
    /// Number of bills that passed the primary-author test.
    pub primary_count: usize,
    pub bills: Vec<AuthoredBill>,
    /// Non-fatal per-item fetch failures, omitted when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Collects the bills a legislator primarily authored.
///
/// The sponsored-bill list is fetched up front; a failure there aborts
/// the operation. When `session_id` is given it filters directly; when
/// only `state` is given the state's current session is resolved first.
/// With neither, all sponsored bills are considered. Bill-detail fetches
/// are batched and fail per item.
pub async fn primary_authored_bills<P: LegislativeDataProvider>(
    provider: &P,
    people_id: PeopleID,
    state: Option<&str>,
    session_id: Option<SessionID>,
) -> Result<AuthoredBillReport, ResearchError> {
    let sponsored = provider.sponsored_list(people_id).await?;
    let total_sponsored = sponsored.len();

    let target_session = match (session_id, state) {
        (Some(id), _) => Some(id),
        (None, Some(state)) => {
            let sessions = provider.session_list(state).await?;
            Some(current_session(state, &sessions)?.session_id)
        }
        (None, None) => None,
    };

    let bill_ids: Vec<BillID> = sponsored
        .iter()
        .filter(|b| target_session.map_or(true, |s| b.session_id == s))
        .map(|b| b.bill_id)
        .collect();

    let settled = run_batched(bill_ids.clone(), DEFAULT_CONCURRENCY, |id| {
        provider.bill(id)
    })
    .await;

    let mut errors = Vec::new();
    let mut bills = Vec::new();
    for (bill_id, outcome) in bill_ids.iter().zip(settled) {
        let bill = match outcome {
            Ok(bill) => bill,
            Err(e) => {
                errors.push(format!("Bill {}: {}", bill_id, e));
                continue;
            }
        };
        let authored = bill
            .sponsors
            .iter()
            .find(|s| s.people_id == people_id)
            .filter(|s| is_primary_author(s))
            .map(|s| (s.sponsor_order, s.sponsor_type_id));
        if let Some((sponsor_order, sponsor_type_id)) = authored {
            bills.push(AuthoredBill {
                bill_id: bill.bill_id,
                bill_number: bill.bill_number,
                title: bill.title,
                description: bill.description,
                session_id: bill.session.session_id,
                session_name: bill.session.session_name,
                status: bill.status,
                status_date: bill.status_date,
                sponsor_order,
                sponsor_type: sponsor_type_label(sponsor_type_id).to_string(),
            });
        }
    }

    if !errors.is_empty() {
        tracing::warn!(
            "primary_authored_bills for person {} degraded: {} fetches failed",
            people_id,
            errors.len()
        );
    }

    Ok(AuthoredBillReport {
        total_sponsored,
        primary_count: bills.len(),
        bills,
        errors,
    })
}

/// Identifying metadata of the session a search resolved to.
#[derive(Serialize, Debug)]
pub struct SessionSummary {
    pub session_id: SessionID,
    pub session_name: String,
    pub year_start: i32,
    pub year_end: i32,
}

/// Stable projection of a matched legislator's identifying fields.
#[derive(Serialize, Debug)]
pub struct LegislatorMatch {
    pub people_id: PeopleID,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub party: String,
    pub role: String,
    pub district: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ballotpedia: Option<String>,
}

/// Result of [`find_legislator`].
#[derive(Serialize, Debug)]
pub struct LegislatorSearch {
    pub session: SessionSummary,
    pub match_count: usize,
    pub matches: Vec<LegislatorMatch>,
}

/// Finds legislators in a state whose names match a free-text query.
///
/// The target session is the explicitly requested one (which must exist
/// in the state's session list) or the state's current session. The full
/// session roster is then scanned with [`matches_name`].
pub async fn find_legislator<P: LegislativeDataProvider>(
    provider: &P,
    query: &str,
    state: &str,
    session_id: Option<SessionID>,
) -> Result<LegislatorSearch, ResearchError> {
    let sessions = provider.session_list(state).await?;
    let session = match session_id {
        Some(id) => find_session(&sessions, id).ok_or_else(|| ResearchError::SessionNotFound {
            session_id: id,
            state: state.to_string(),
        })?,
        None => current_session(state, &sessions)?,
    };

    let people = provider.session_people(session.session_id).await?;
    let matches: Vec<LegislatorMatch> = people
        .into_iter()
        .filter(|p| matches_name(query, p))
        .map(|p| LegislatorMatch {
            people_id: p.people_id,
            name: p.name,
            first_name: p.first_name,
            last_name: p.last_name,
            nickname: p.nickname,
            party: p.party,
            role: p.role,
            district: p.district,
            ballotpedia: p.ballotpedia,
        })
        .collect();

    Ok(LegislatorSearch {
        session: SessionSummary {
            session_id: session.session_id,
            session_name: session.session_name.clone(),
            year_start: session.year_start,
            year_end: session.year_end,
        },
        match_count: matches.len(),
        matches,
    })
}
