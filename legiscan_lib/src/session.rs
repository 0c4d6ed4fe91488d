//! Current-session resolution over an already-fetched session list.

use legiscan_api::types::{Session, SessionID};

use crate::error::ResearchError;

/// Selects the "current" session of a jurisdiction.
///
/// Sessions that have not adjourned sine die win; among those the greatest
/// `year_end` is chosen. When every session has adjourned, falls back to
/// the greatest `year_end` over the full list. An empty list is a
/// precondition failure. On equal `year_end` the last entry in list order
/// wins; callers must not depend on tie order.
pub fn current_session<'a>(
    state: &str,
    sessions: &'a [Session],
) -> Result<&'a Session, ResearchError> {
    let open = sessions
        .iter()
        .filter(|s| s.sine_die == 0)
        .max_by_key(|s| s.year_end);
    match open {
        Some(session) => Ok(session),
        None => sessions
            .iter()
            .max_by_key(|s| s.year_end)
            .ok_or_else(|| ResearchError::NoSessions(state.to_string())),
    }
}

/// Looks up a session by identifier in a jurisdiction's session list.
pub fn find_session(sessions: &[Session], session_id: SessionID) -> Option<&Session> {
    sessions.iter().find(|s| s.session_id == session_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(session_id: SessionID, year_start: i32, year_end: i32, sine_die: i64) -> Session {
        Session {
            session_id,
            state_id: 5,
            year_start,
            year_end,
            sine_die,
            special: 0,
            session_name: format!("{}-{} Session", year_start, year_end),
            session_title: String::new(),
            session_tag: None,
        }
    }

    #[test]
    fn prefers_open_session_with_greatest_year_end() {
        let sessions = vec![
            session(1, 2019, 2020, 1),
            session(2, 2021, 2022, 0),
            session(3, 2023, 2024, 0),
        ];
        let current = current_session("CA", &sessions).unwrap();
        assert_eq!(current.session_id, 3);
        assert_eq!(current.sine_die, 0);
    }

    #[test]
    fn open_session_wins_even_when_an_adjourned_one_is_newer() {
        // A closed special session can postdate the open regular session.
        let sessions = vec![session(1, 2023, 2025, 1), session(2, 2023, 2024, 0)];
        assert_eq!(current_session("CA", &sessions).unwrap().session_id, 2);
    }

    #[test]
    fn falls_back_to_newest_when_all_adjourned() {
        let sessions = vec![
            session(1, 2019, 2020, 1),
            session(2, 2023, 2024, 1),
            session(3, 2021, 2022, 1),
        ];
        assert_eq!(current_session("CA", &sessions).unwrap().session_id, 2);
    }

    #[test]
    fn empty_list_is_a_precondition_failure() {
        let err = current_session("ZZ", &[]).unwrap_err();
        assert!(matches!(err, ResearchError::NoSessions(ref s) if s == "ZZ"));
    }

    #[test]
    fn find_session_by_id() {
        let sessions = vec![session(1, 2021, 2022, 1), session(2, 2023, 2024, 0)];
        assert_eq!(find_session(&sessions, 1).unwrap().year_end, 2022);
        assert!(find_session(&sessions, 99).is_none());
    }
}
