//! Sponsorship classification.

use legiscan_api::types::Sponsor;

/// Returns whether a sponsorship record constitutes primary authorship.
///
/// Either condition alone qualifies: the upstream marks primary sponsors
/// with `sponsor_type_id == 1`, but some jurisdictions only rank them
/// first (`sponsor_order == 1`) under a different type.
pub fn is_primary_author(sponsor: &Sponsor) -> bool {
    sponsor.sponsor_type_id == 1 || sponsor.sponsor_order == 1
}

/// Maps a `sponsor_type_id` to its human-readable label.
pub fn sponsor_type_label(sponsor_type_id: i64) -> &'static str {
    match sponsor_type_id {
        0 => "Sponsor",
        1 => "Primary Sponsor",
        2 => "Co-Sponsor",
        3 => "Joint Sponsor",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sponsor(sponsor_type_id: i64, sponsor_order: i64) -> Sponsor {
        Sponsor {
            people_id: 42,
            name: "Jane Smith".to_string(),
            party: "D".to_string(),
            sponsor_type_id,
            sponsor_order,
        }
    }

    #[test]
    fn primary_type_qualifies() {
        assert!(is_primary_author(&sponsor(1, 5)));
    }

    #[test]
    fn first_rank_qualifies_regardless_of_type() {
        // Order wins: typed as Co-Sponsor but ranked first.
        let s = sponsor(2, 1);
        assert!(is_primary_author(&s));
        assert_eq!(sponsor_type_label(s.sponsor_type_id), "Co-Sponsor");
    }

    #[test]
    fn neither_condition_is_not_primary() {
        assert!(!is_primary_author(&sponsor(0, 2)));
        assert!(!is_primary_author(&sponsor(2, 3)));
    }

    #[test]
    fn labels_cover_the_fixed_range() {
        assert_eq!(sponsor_type_label(0), "Sponsor");
        assert_eq!(sponsor_type_label(1), "Primary Sponsor");
        assert_eq!(sponsor_type_label(2), "Co-Sponsor");
        assert_eq!(sponsor_type_label(3), "Joint Sponsor");
        assert_eq!(sponsor_type_label(9), "Unknown");
        assert_eq!(sponsor_type_label(-1), "Unknown");
    }
}
