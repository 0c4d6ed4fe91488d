//! Roll-call records returned by `getRollCall`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BillID, Chamber, PeopleID};

/// Unique numeric identifier for a roll call.
pub type RollCallID = i64;

/// One recorded roll call, with aggregate counts and individual votes.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RollCall {
    /// Unique roll-call identifier.
    pub roll_call_id: RollCallID,

    /// Bill the roll call was taken on.
    pub bill_id: BillID,

    /// Date the roll call was taken.
    #[serde(default, deserialize_with = "super::opt_date")]
    pub date: Option<NaiveDate>,

    /// Upstream description, e.g. "Third Reading".
    #[serde(default)]
    pub desc: String,

    /// Chamber the roll call was taken in.
    pub chamber: Chamber,

    /// Aggregate yea count.
    pub yea: i64,

    /// Aggregate nay count.
    pub nay: i64,

    /// Aggregate not-voting count.
    #[serde(default)]
    pub nv: i64,

    /// Aggregate absent count.
    #[serde(default)]
    pub absent: i64,

    /// Total ballots cast.
    #[serde(default)]
    pub total: i64,

    /// 1 when the motion passed, 0 otherwise.
    pub passed: i64,

    /// Individual votes, in upstream order.
    #[serde(default)]
    pub votes: Vec<PersonVote>,
}

/// One legislator's vote within a roll call.
///
/// Vote codes follow the upstream convention: 1=Yea, 2=Nay, 3=Not Voting,
/// 4=Absent.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PersonVote {
    /// Person who cast the vote.
    pub people_id: PeopleID,

    /// Numeric vote code.
    pub vote_id: i64,

    /// Human-readable vote text, e.g. "Yea".
    #[serde(default)]
    pub vote_text: String,
}
