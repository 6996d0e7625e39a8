// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application-ID formatting, code tables, and parsing.
//!
//! An application ID has the shape
//! `{ApplicantPrefix}-{CategoryCode}-{Year}-{DeptCode}-{Sequence}`,
//! e.g. `S-NPT-2025-IT-001`. Sequence numbers are allocated per bucket,
//! where a bucket is the set of IDs sharing the first four segments.
//!
//! The code tables here are immutable statics; all functions are pure.

use crate::error::DomainError;
use crate::types::{ApplicantType, ReimbursementType};

/// Department display names and their ID codes, in declaration order.
///
/// Matching is exact first, then substring containment in either direction,
/// scanned in declaration order so that ambiguous free text ("civil" when
/// "civil engineering" is present) resolves deterministically.
const DEPARTMENT_CODES: [(&str, &str); 8] = [
    ("computer science", "CSE"),
    ("information technology", "IT"),
    ("electronics and communication", "ECE"),
    ("electrical and electronics", "EEE"),
    ("mechanical engineering", "MECH"),
    ("civil engineering", "CIV"),
    ("master of business administration", "MBA"),
    ("science and humanities", "SH"),
];

/// The components recovered from a well-formed application ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedApplicationId {
    /// Display label of the applicant type ("Student", "Faculty", ...).
    pub applicant_type: String,
    /// Display label of the category ("NPTEL", "Conference", ...).
    pub category: String,
    /// The 4-digit year segment, verbatim.
    pub year: String,
    /// Display name of the department, or the raw code when unknown.
    pub department: String,
    /// The trailing sequence number.
    pub sequence: u32,
}

/// Looks up a code in a table: exact match first, then substring containment
/// in either direction, in table-declaration order.
fn match_code(input: &str, table: &[(&'static str, &'static str)]) -> Option<&'static str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    for &(name, code) in table {
        if name == needle {
            return Some(code);
        }
    }
    for &(name, code) in table {
        if name.contains(needle.as_str()) || needle.contains(name) {
            return Some(code);
        }
    }
    None
}

fn is_four_digits(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns the first run of exactly four consecutive ASCII digits, if any.
fn first_four_digit_run(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut start = 0;
    while start < bytes.len() {
        if bytes[start].is_ascii_digit() {
            let mut end = start;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
            if end - start >= 4 {
                return s.get(start..start + 4);
            }
            start = end;
        } else {
            start += 1;
        }
    }
    None
}

/// Extracts the 4-digit year segment from an academic-year string.
///
/// `"2025-2026"` and `"2025"` both yield `"2025"`; otherwise the first
/// 4-digit run anywhere in the input is used; failing that, the current
/// calendar year.
#[must_use]
pub fn extract_year(academic_year: &str) -> String {
    let trimmed = academic_year.trim();
    let head = trimmed.split('-').next().unwrap_or_default().trim();
    if is_four_digits(head) {
        return head.to_string();
    }
    if let Some(run) = first_four_digit_run(trimmed) {
        return run.to_string();
    }
    time::OffsetDateTime::now_utc().year().to_string()
}

/// Maps a department display name to its ID code.
///
/// Table lookup first (exact, then substring). Unmatched multi-word input is
/// abbreviated to word initials (max 4, upper-cased); unmatched single-word
/// input is truncated to its first 4 characters, upper-cased. Missing input
/// yields `"UNK"`.
#[must_use]
pub fn department_code(department: &str) -> String {
    let trimmed = department.trim();
    if trimmed.is_empty() {
        return String::from("UNK");
    }
    if let Some(code) = match_code(trimmed, &DEPARTMENT_CODES) {
        return code.to_string();
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    if words.len() > 1 {
        words
            .iter()
            .filter_map(|w| w.chars().next())
            .take(4)
            .collect::<String>()
            .to_uppercase()
    } else {
        trimmed.chars().take(4).collect::<String>().to_uppercase()
    }
}

/// Reverse-maps a department code to its display name, title-cased.
///
/// Unknown codes are passed through verbatim.
fn department_label(code: &str) -> String {
    DEPARTMENT_CODES
        .iter()
        .find(|(_, c)| c.eq_ignore_ascii_case(code))
        .map_or_else(|| code.to_string(), |(name, _)| title_case(name))
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Builds the bucket prefix `{Prefix}-{Category}-{Year}-{Dept}-` for a claim.
#[must_use]
pub fn bucket_prefix(
    applicant_type: ApplicantType,
    reimbursement_type: ReimbursementType,
    academic_year: &str,
    department: &str,
) -> String {
    format!(
        "{}-{}-{}-{}-",
        applicant_type.id_prefix(),
        reimbursement_type.code(),
        extract_year(academic_year),
        department_code(department)
    )
}

/// Formats a full application ID from a bucket prefix and sequence number.
///
/// Sequences are zero-padded to 3 digits; wider sequences grow unpadded.
#[must_use]
pub fn format_application_id(prefix: &str, sequence: u32) -> String {
    format!("{prefix}{sequence:03}")
}

/// Computes the next sequence number for a bucket from its existing IDs.
///
/// The scan is case-insensitive on the prefix. The trailing segment of each
/// matching ID is parsed as an integer; the result is `max + 1`, or 1 for an
/// empty bucket. Max-plus-one, not count-plus-one: gaps left by deleted
/// pending requests are never reused.
#[must_use]
pub fn next_sequence_from_ids(existing: &[String], prefix: &str) -> u32 {
    let needle = prefix.to_lowercase();
    existing
        .iter()
        .filter(|id| id.to_lowercase().starts_with(&needle))
        .filter_map(|id| id.rsplit('-').next())
        .filter_map(|seq| seq.parse::<u32>().ok())
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Parses an application ID back into display labels.
///
/// # Errors
///
/// Returns `DomainError::MalformedApplicationId` if the input does not split
/// on `-` into exactly 5 segments, or if the sequence segment is not numeric.
pub fn parse_application_id(id: &str) -> Result<ParsedApplicationId, DomainError> {
    let segments: Vec<&str> = id.split('-').collect();
    if segments.len() != 5 {
        return Err(DomainError::MalformedApplicationId {
            id: id.to_string(),
            reason: format!("expected 5 segments, found {}", segments.len()),
        });
    }

    let sequence: u32 =
        segments[4]
            .parse()
            .map_err(|_| DomainError::MalformedApplicationId {
                id: id.to_string(),
                reason: "sequence segment is not numeric".to_string(),
            })?;

    Ok(ParsedApplicationId {
        applicant_type: ApplicantType::label_for_prefix(segments[0]),
        category: ReimbursementType::label_for_code(segments[1]),
        year: segments[2].to_string(),
        department: department_label(segments[3]),
        sequence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_from_academic_range() {
        assert_eq!(extract_year("2025-2026"), "2025");
    }

    #[test]
    fn test_year_from_plain_year() {
        assert_eq!(extract_year("2025"), "2025");
    }

    #[test]
    fn test_year_extracted_from_surrounding_text() {
        assert_eq!(extract_year("AY 2024/25"), "2024");
        assert_eq!(extract_year("batch of 2023, spring"), "2023");
    }

    #[test]
    fn test_year_defaults_to_current_year() {
        let current = time::OffsetDateTime::now_utc().year().to_string();
        assert_eq!(extract_year("no year here"), current);
        assert_eq!(extract_year(""), current);
        // A 3-digit run is not a year
        assert_eq!(extract_year("room 101"), current);
    }

    #[test]
    fn test_department_exact_match() {
        assert_eq!(department_code("Information Technology"), "IT");
        assert_eq!(department_code("computer science"), "CSE");
    }

    #[test]
    fn test_department_substring_match() {
        // Input contained in a table entry
        assert_eq!(department_code("civil"), "CIV");
        assert_eq!(department_code("mechanical"), "MECH");
        // Table entry contained in the input
        assert_eq!(
            department_code("department of computer science and design"),
            "CSE"
        );
    }

    #[test]
    fn test_department_multi_word_fallback_abbreviates() {
        assert_eq!(department_code("Food Processing Technology"), "FPT");
        // Initials are capped at 4 letters
        assert_eq!(department_code("a b c d e f"), "ABCD");
    }

    #[test]
    fn test_department_single_word_fallback_truncates() {
        assert_eq!(department_code("Biotech"), "BIOT");
        assert_eq!(department_code("Law"), "LAW");
    }

    #[test]
    fn test_department_missing() {
        assert_eq!(department_code(""), "UNK");
        assert_eq!(department_code("   "), "UNK");
    }

    #[test]
    fn test_bucket_prefix_shape() {
        let prefix = bucket_prefix(
            ApplicantType::Student,
            ReimbursementType::Nptel,
            "2025-2026",
            "Information Technology",
        );
        assert_eq!(prefix, "S-NPT-2025-IT-");
    }

    #[test]
    fn test_format_pads_to_three_digits() {
        assert_eq!(format_application_id("S-NPT-2025-IT-", 1), "S-NPT-2025-IT-001");
        assert_eq!(format_application_id("S-NPT-2025-IT-", 42), "S-NPT-2025-IT-042");
        assert_eq!(format_application_id("S-NPT-2025-IT-", 999), "S-NPT-2025-IT-999");
    }

    #[test]
    fn test_format_beyond_three_digits_grows() {
        assert_eq!(
            format_application_id("S-NPT-2025-IT-", 1000),
            "S-NPT-2025-IT-1000"
        );
    }

    #[test]
    fn test_next_sequence_empty_bucket() {
        assert_eq!(next_sequence_from_ids(&[], "S-NPT-2025-IT-"), 1);
    }

    #[test]
    fn test_next_sequence_is_max_plus_one() {
        let existing = vec![
            String::from("S-NPT-2025-IT-001"),
            String::from("S-NPT-2025-IT-003"),
        ];
        assert_eq!(next_sequence_from_ids(&existing, "S-NPT-2025-IT-"), 4);
    }

    #[test]
    fn test_next_sequence_prefix_match_is_case_insensitive() {
        let existing = vec![String::from("s-npt-2025-it-007")];
        assert_eq!(next_sequence_from_ids(&existing, "S-NPT-2025-IT-"), 8);
    }

    #[test]
    fn test_next_sequence_ignores_other_buckets() {
        let existing = vec![
            String::from("S-NPT-2025-IT-005"),
            String::from("F-FDP-2025-IT-009"),
            String::from("S-NPT-2024-IT-011"),
        ];
        assert_eq!(next_sequence_from_ids(&existing, "S-NPT-2025-IT-"), 6);
    }

    #[test]
    fn test_parse_round_trips_labels() {
        let parsed = match parse_application_id("S-NPT-2025-IT-001") {
            Ok(parsed) => parsed,
            Err(e) => panic!("expected parse to succeed: {e}"),
        };
        assert_eq!(parsed.applicant_type, "Student");
        assert_eq!(parsed.category, "NPTEL");
        assert_eq!(parsed.year, "2025");
        assert_eq!(parsed.department, "Information Technology");
        assert_eq!(parsed.sequence, 1);
    }

    #[test]
    fn test_parse_unknown_codes_pass_through() {
        let parsed = match parse_application_id("X-ZZZ-2025-FPT-010") {
            Ok(parsed) => parsed,
            Err(e) => panic!("expected parse to succeed: {e}"),
        };
        assert_eq!(parsed.applicant_type, "X");
        assert_eq!(parsed.category, "ZZZ");
        assert_eq!(parsed.department, "FPT");
        assert_eq!(parsed.sequence, 10);
    }

    #[test]
    fn test_parse_rejects_wrong_segment_count() {
        assert!(parse_application_id("garbage").is_err());
        assert!(parse_application_id("S-NPT-2025-IT").is_err());
        assert!(parse_application_id("S-NPT-2025-IT-001-extra").is_err());
        assert!(parse_application_id("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric_sequence() {
        let result = parse_application_id("S-NPT-2025-IT-abc");
        assert!(matches!(
            result,
            Err(DomainError::MalformedApplicationId { .. })
        ));
    }
}
