//! Legislative session records returned by `getSessionList`.

use serde::{Deserialize, Serialize};

/// Unique numeric identifier for a session.
pub type SessionID = i64;

/// One legislative session of a jurisdiction.
///
/// "Current" is never stored upstream; it is derived from `sine_die` and
/// the year range by the consumer.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Session {
    /// Unique session identifier.
    pub session_id: SessionID,

    /// Numeric state identifier assigned by the upstream.
    pub state_id: i64,

    /// First year covered by the session.
    pub year_start: i32,

    /// Last year covered by the session.
    pub year_end: i32,

    /// 1 when the session has formally adjourned sine die, 0 otherwise.
    pub sine_die: i64,

    /// 1 for special sessions.
    #[serde(default)]
    pub special: i64,

    /// Short display name, e.g. "2023-2024 Regular Session".
    pub session_name: String,

    /// Longer descriptive title.
    #[serde(default)]
    pub session_title: String,

    /// Upstream tag, e.g. "Regular Session".
    #[serde(default)]
    pub session_tag: Option<String>,
}
