//! Legislator records returned by `getPerson` and `getSessionPeople`.

use serde::{Deserialize, Serialize};

/// Unique numeric identifier for a legislator.
pub type PeopleID = i64;

/// A legislator active in some session.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Person {
    /// Unique person identifier.
    pub people_id: PeopleID,

    /// Full display name, e.g. "Jane Smith".
    pub name: String,

    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// Nickname, when the upstream has one on file.
    #[serde(default)]
    pub nickname: Option<String>,

    /// Party abbreviation, e.g. "D", "R".
    #[serde(default)]
    pub party: String,

    /// Role title, e.g. "Rep", "Sen".
    #[serde(default)]
    pub role: String,

    /// District designation, e.g. "HD-042".
    #[serde(default)]
    pub district: String,

    /// Vote Smart identifier, when known.
    #[serde(default)]
    pub votesmart_id: Option<i64>,

    /// OpenSecrets identifier, when known.
    #[serde(default)]
    pub opensecrets_id: Option<String>,

    /// Ballotpedia page name, when known.
    #[serde(default)]
    pub ballotpedia: Option<String>,
}
