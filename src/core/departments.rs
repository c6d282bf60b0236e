//! Department name normalization and extraction
//!
//! Rosters and schedules carry department names as free text
//! ("Computer Science Engineering", "II YEAR(AGRI,EEE,ECE,MECH)").
//! Everything downstream joins on canonical codes, so these two helpers
//! sit at the boundary: [`normalize`] maps one free-text name to a code,
//! [`extract`] pulls a code list out of a schedule department field.
//! Both are pure functions over the rules tables.

use crate::core::rules::SeatingRules;

/// Compound keyword rules checked before the alias scan, most specific
/// first. These exist because several canonical codes share overlapping
/// substrings (AIDS and AIML both contain "ARTIFICIAL INTELLIGENCE",
/// CYS is a substring-collision magnet), so a plain alias scan would
/// resolve them by table order rather than by meaning.
const COMPOUND_RULES: &[(&[&str], &str)] = &[
    (&["ARTIFICIAL", "INTELLIGENCE", "DATA", "SCIENCE"], "AIDS"),
    (&["ARTIFICIAL", "INTELLIGENCE", "MACHINE", "LEARNING"], "AIML"),
    (&["CYBER", "SECURITY"], "CYS"),
    (&["COMPUTER", "SCIENCE"], "CSE"),
    (&["INTERNET", "THINGS"], "IOT"),
    (&["INFORMATION", "TECHNOLOGY"], "IT"),
    (&["ELECTRONICS", "COMMUNICATION"], "ECE"),
    (&["ELECTRICAL", "ELECTRONICS"], "EEE"),
];

/// Normalize a free-text department name to its canonical code
///
/// Best-effort, not validating: compound keyword rules first, then an
/// alias substring scan in table order, and if nothing matches the input
/// comes back unchanged. Deterministic, and idempotent on inputs already
/// in canonical form.
#[must_use]
pub fn normalize(raw: &str, rules: &SeatingRules) -> String {
    let upper = raw.trim().to_uppercase();

    for (keywords, code) in COMPOUND_RULES {
        if keywords.iter().all(|keyword| upper.contains(keyword)) {
            return (*code).to_string();
        }
    }

    for entry in &rules.departments {
        for alias in &entry.aliases {
            if upper.contains(&alias.to_uppercase()) {
                return entry.code.clone();
            }
        }
    }

    raw.to_string()
}

/// Extract canonical department codes from a schedule department field
///
/// A parenthesized group ("II YEAR(AGRI,EEE,ECE,MECH)") is split on
/// commas and each token normalized, preserving source order and
/// duplicates. Without a group, the alias tables are scanned against the
/// uppercased field and matching codes are collected in table order (one
/// match per department). Empty input yields an empty list.
#[must_use]
pub fn extract(field: &str, rules: &SeatingRules) -> Vec<String> {
    if let Some(group) = parenthesized_group(field) {
        return group
            .split(',')
            .map(|token| normalize(token.trim(), rules))
            .collect();
    }

    let upper = field.to_uppercase();
    let mut codes = Vec::new();
    for entry in &rules.departments {
        for alias in &entry.aliases {
            if upper.contains(&alias.to_uppercase()) {
                codes.push(entry.code.clone());
                break;
            }
        }
    }
    codes
}

/// Interior of the first parenthesized group, if any
fn parenthesized_group(field: &str) -> Option<&str> {
    let open = field.find('(')?;
    let rest = &field[open + 1..];
    let close = rest.find(')')?;
    Some(&rest[..close])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> SeatingRules {
        SeatingRules::from_defaults()
    }

    #[test]
    fn test_normalize_alias_match() {
        let rules = rules();
        assert_eq!(normalize("Computer Science Engineering", &rules), "CSE");
        assert_eq!(normalize("  mechanical ", &rules), "MECH");
        assert_eq!(normalize("Biotechnology", &rules), "BT");
    }

    #[test]
    fn test_normalize_compound_rules_win_over_alias_order() {
        let rules = rules();
        // Both AI departments contain "ARTIFICIAL INTELLIGENCE"; the
        // four-keyword rules must decide, not alias table order.
        assert_eq!(
            normalize("Artificial Intelligence and Data Science", &rules),
            "AIDS"
        );
        assert_eq!(
            normalize("Artificial Intelligence and Machine Learning", &rules),
            "AIML"
        );
        // "CYBERSECURITY" contains "IT" as a substring; the compound rule
        // has to fire before the alias scan reaches the IT entry.
        assert_eq!(normalize("Cyber Security", &rules), "CYS");
    }

    #[test]
    fn test_normalize_unknown_passes_through() {
        let rules = rules();
        assert_eq!(normalize("PHYSICS", &rules), "PHYSICS");
        assert_eq!(normalize("", &rules), "");
    }

    #[test]
    fn test_normalize_idempotent_on_canonical_codes() {
        let rules = rules();
        for entry in &rules.departments {
            let once = normalize(&entry.code, &rules);
            assert_eq!(normalize(&once, &rules), once);
        }
    }

    #[test]
    fn test_extract_parenthesized_group() {
        let rules = rules();
        assert_eq!(
            extract("II YEAR(AGRI,EEE,ECE,MECH)", &rules),
            vec!["AGRI", "EEE", "ECE", "MECH"]
        );
    }

    #[test]
    fn test_extract_group_tokens_are_normalized() {
        let rules = rules();
        assert_eq!(
            extract("I YEAR(Computer Science, Information Technology)", &rules),
            vec!["CSE", "IT"]
        );
    }

    #[test]
    fn test_extract_without_group_scans_aliases_in_table_order() {
        let rules = rules();
        assert_eq!(
            extract("MECHANICAL AND BIOMEDICAL COMBINED", &rules),
            vec!["MECH", "BME"]
        );
    }

    #[test]
    fn test_extract_preserves_duplicates_and_order() {
        let rules = rules();
        assert_eq!(
            extract("(CSE,ECE,CSE)", &rules),
            vec!["CSE", "ECE", "CSE"]
        );
    }

    #[test]
    fn test_extract_empty_input() {
        let rules = rules();
        assert!(extract("", &rules).is_empty());
    }
}
