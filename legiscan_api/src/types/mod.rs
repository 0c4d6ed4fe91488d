mod session;
pub use self::session::{Session, SessionID};

mod person;
pub use self::person::{PeopleID, Person};

mod bill;
pub use self::bill::{
    Bill, BillID, BillSession, Chamber, SponsoredBill, Sponsor, TextReference, VoteReference,
};

mod rollcall;
pub use self::rollcall::{PersonVote, RollCall, RollCallID};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Deserializes an optional `YYYY-MM-DD` date field. The upstream emits
/// `"0000-00-00"` or an empty string for unknown dates; both map to `None`.
pub(crate) fn opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()))
}
