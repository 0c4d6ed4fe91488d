//! Bill records returned by `getBill` and `getSponsoredList`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{PeopleID, RollCallID, SessionID};

/// Unique numeric identifier for a bill.
pub type BillID = i64;

/// Full bill record returned by `getBill`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Bill {
    /// Unique bill identifier.
    pub bill_id: BillID,

    /// Display number, e.g. "SB 101".
    pub bill_number: String,

    /// Short title.
    pub title: String,

    /// Longer description; often identical to the title.
    #[serde(default)]
    pub description: String,

    /// Numeric status code (1=Introduced .. 6=Vetoed upstream convention).
    #[serde(default)]
    pub status: i64,

    /// Date the bill entered its current status.
    #[serde(default, deserialize_with = "super::opt_date")]
    pub status_date: Option<NaiveDate>,

    /// Session the bill belongs to.
    pub session: BillSession,

    /// Sponsorships in upstream order.
    #[serde(default)]
    pub sponsors: Vec<Sponsor>,

    /// Pointers to the roll calls taken on this bill.
    #[serde(default)]
    pub votes: Vec<VoteReference>,

    /// Pointers to the bill's text documents.
    #[serde(default)]
    pub texts: Vec<TextReference>,
}

/// Session reference embedded in a bill record.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BillSession {
    /// Session identifier.
    pub session_id: SessionID,

    /// Display name of the session.
    #[serde(default)]
    pub session_name: String,
}

/// One sponsorship entry on a bill.
///
/// `sponsor_order` is the 1-based rank among the bill's sponsors; a bill
/// carries at most one entry with `sponsor_order == 1`, but
/// `sponsor_type_id == 1` (Primary Sponsor) may appear independently.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Sponsor {
    /// Person identifier of the sponsor.
    pub people_id: PeopleID,

    /// Display name of the sponsor.
    pub name: String,

    /// Party abbreviation.
    #[serde(default)]
    pub party: String,

    /// 0=Sponsor, 1=Primary Sponsor, 2=Co-Sponsor, 3=Joint Sponsor.
    pub sponsor_type_id: i64,

    /// 1-based rank among the bill's sponsors.
    pub sponsor_order: i64,
}

/// Lightweight pointer to a roll call, embedded in a bill record.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VoteReference {
    /// Roll-call identifier, resolvable via `getRollCall`.
    pub roll_call_id: RollCallID,

    /// Date the roll call was taken.
    #[serde(default, deserialize_with = "super::opt_date")]
    pub date: Option<NaiveDate>,

    /// Upstream description, e.g. "Third Reading".
    #[serde(default)]
    pub desc: String,

    /// Chamber the roll call was taken in.
    pub chamber: Chamber,
}

/// Pointer to a bill text document.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TextReference {
    /// Document identifier.
    pub doc_id: i64,

    /// Document type, e.g. "Introduced", "Enrolled".
    #[serde(default, rename = "type")]
    pub doc_type: String,

    /// Date of the document.
    #[serde(default, deserialize_with = "super::opt_date")]
    pub date: Option<NaiveDate>,
}

/// Bill summary entry returned by `getSponsoredList`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SponsoredBill {
    /// Session the bill belongs to.
    pub session_id: SessionID,

    /// Bill identifier, resolvable via `getBill`.
    pub bill_id: BillID,

    /// Display number, e.g. "SB 101".
    #[serde(default)]
    pub number: String,
}

/// Legislative chamber, as the single-letter upstream code.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chamber {
    /// Lower chamber.
    #[serde(rename = "H")]
    House,

    /// Upper chamber.
    #[serde(rename = "S")]
    Senate,

    /// Joint session of both chambers.
    #[serde(rename = "J")]
    Joint,
}

impl std::fmt::Display for Chamber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Chamber::House => "H",
                Chamber::Senate => "S",
                Chamber::Joint => "J",
            }
        )
    }
}

impl std::str::FromStr for Chamber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h" | "house" => Ok(Chamber::House),
            "s" | "senate" => Ok(Chamber::Senate),
            "j" | "joint" => Ok(Chamber::Joint),
            other => Err(format!("unknown chamber: {}", other)),
        }
    }
}
