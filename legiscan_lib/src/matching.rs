//! Name matching for legislator lookups.

use legiscan_api::types::Person;

/// Returns whether a free-text query plausibly identifies a person.
///
/// The query is lowercased and trimmed. A match succeeds immediately when
/// the full name contains the whole query as a substring; otherwise every
/// whitespace-separated token must appear as a substring of the first
/// name, last name, full name, or nickname.
///
/// This heuristic is deliberately permissive and order-insensitive; short
/// tokens produce false positives (a one-letter token matches almost
/// anything). Callers rely on this behavior, so it must not be tightened
/// to stemming or edit-distance matching.
pub fn matches_name(query: &str, person: &Person) -> bool {
    let query = query.trim().to_lowercase();
    let full = person.name.to_lowercase();
    if full.contains(&query) {
        return true;
    }

    let first = person.first_name.to_lowercase();
    let last = person.last_name.to_lowercase();
    let nickname = person
        .nickname
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    query.split_whitespace().all(|token| {
        first.contains(token)
            || last.contains(token)
            || full.contains(token)
            || nickname.contains(token)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, first: &str, last: &str, nickname: Option<&str>) -> Person {
        Person {
            people_id: 1,
            name: name.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            nickname: nickname.map(str::to_string),
            party: "D".to_string(),
            role: "Sen".to_string(),
            district: "SD-011".to_string(),
            votesmart_id: None,
            opensecrets_id: None,
            ballotpedia: None,
        }
    }

    #[test]
    fn single_token_matches_full_name_substring() {
        let p = person("Jane Smith", "Jane", "Smith", None);
        assert!(matches_name("Smith", &p));
        assert!(matches_name("smith", &p));
        assert!(matches_name("  SMITH  ", &p));
    }

    #[test]
    fn multi_token_query_matches_reordered_name() {
        // "Smith, Jane" does not contain "jane smith" as a substring, so
        // the token fallback has to carry the match.
        let p = person("Smith, Jane", "Jane", "Smith", None);
        assert!(matches_name("Jane Smith", &p));
    }

    #[test]
    fn every_token_must_match_somewhere() {
        let p = person("Jane Smith", "Jane", "Smith", None);
        assert!(!matches_name("Jane Jones", &p));
    }

    #[test]
    fn nickname_participates_in_token_matching() {
        let p = person("Robert Chen", "Robert", "Chen", Some("Bob"));
        assert!(matches_name("bob chen", &p));
        let without = person("Robert Chen", "Robert", "Chen", None);
        assert!(!matches_name("bob chen", &without));
    }

    #[test]
    fn partial_tokens_match_as_substrings() {
        // Documented permissiveness: short tokens are substring matches.
        let p = person("Jane Smith", "Jane", "Smith", None);
        assert!(matches_name("ja smi", &p));
        assert!(matches_name("e", &p));
    }
}
