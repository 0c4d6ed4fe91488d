//! Input validation for caller-supplied arguments.

use crate::error::ResearchError;

pub const MAX_QUERY_LENGTH: usize = 100;

/// Jurisdiction codes the upstream understands: 50 states, DC,
/// territories, and `US` for Congress.
pub const VALID_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "DC", "PR", "US",
];

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, ResearchError> {
    if input.len() > max_len {
        return Err(ResearchError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(ResearchError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a name query: enforce length, strip control chars, trim.
pub fn validate_query(input: &str) -> Result<String, ResearchError> {
    sanitize_text(input, MAX_QUERY_LENGTH)
}

/// Validate a jurisdiction code: uppercase, check against known codes.
pub fn validate_state(input: &str) -> Result<String, ResearchError> {
    let upper = input.trim().to_uppercase();
    if VALID_STATES.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err(ResearchError::InvalidInput(format!(
            "unknown jurisdiction '{}'. Valid codes: two-letter state codes, DC, PR, or US for Congress",
            input
        )))
    }
}

/// Validate an upstream numeric identifier: must be positive.
pub fn validate_id(value: i64, label: &str) -> Result<i64, ResearchError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(ResearchError::InvalidInput(format!(
            "{} must be a positive identifier, got {}",
            label, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_codes_are_normalized() {
        assert_eq!(validate_state("ca").unwrap(), "CA");
        assert_eq!(validate_state(" us ").unwrap(), "US");
        assert!(validate_state("ZZ").is_err());
        assert!(validate_state("").is_err());
    }

    #[test]
    fn queries_are_sanitized() {
        assert_eq!(validate_query("  Jane\tSmith ").unwrap(), "JaneSmith");
        assert_eq!(validate_query("Jane Smith").unwrap(), "Jane Smith");
        assert!(validate_query("\x07\x08").is_err());
        assert!(validate_query(&"x".repeat(MAX_QUERY_LENGTH + 1)).is_err());
    }

    #[test]
    fn identifiers_must_be_positive() {
        assert_eq!(validate_id(42, "person id").unwrap(), 42);
        assert!(validate_id(0, "person id").is_err());
        assert!(validate_id(-5, "bill id").is_err());
    }
}
