// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::role::ActorRole;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Who is submitting the claim.
///
/// The applicant type contributes the single-letter prefix of the
/// application ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApplicantType {
    /// Default when the submitted value is unrecognized.
    #[default]
    Student,
    Faculty,
    Coordinator,
    Hod,
}

impl ApplicantType {
    /// Returns the string representation of the applicant type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Faculty => "faculty",
            Self::Coordinator => "coordinator",
            Self::Hod => "hod",
        }
    }

    /// Returns the display label used when reverse-mapping identifiers.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Faculty => "Faculty",
            Self::Coordinator => "Coordinator",
            Self::Hod => "HOD",
        }
    }

    /// Returns the single-letter application-ID prefix for this type.
    #[must_use]
    pub const fn id_prefix(&self) -> char {
        match self {
            Self::Student => 'S',
            Self::Faculty => 'F',
            Self::Coordinator => 'C',
            Self::Hod => 'H',
        }
    }

    /// Normalizes free text into an applicant type.
    ///
    /// Unrecognized or missing input falls back to `Student`, mirroring the
    /// lenient intake behavior of the submission forms.
    #[must_use]
    pub fn from_text(s: &str) -> Self {
        Self::from_str(s.trim().to_lowercase().as_str()).unwrap_or_default()
    }

    /// Reverse-maps a single-letter prefix to its display label.
    ///
    /// Unknown prefixes are passed through verbatim.
    #[must_use]
    pub fn label_for_prefix(prefix: &str) -> String {
        match prefix {
            "S" => Self::Student.label().to_string(),
            "F" => Self::Faculty.label().to_string(),
            "C" => Self::Coordinator.label().to_string(),
            "H" => Self::Hod.label().to_string(),
            other => other.to_string(),
        }
    }
}

impl FromStr for ApplicantType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "faculty" => Ok(Self::Faculty),
            "coordinator" => Ok(Self::Coordinator),
            "hod" => Ok(Self::Hod),
            _ => Err(DomainError::InvalidApplicantType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ApplicantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the claim is for.
///
/// Free text from submission forms is normalized into this closed set; the
/// category contributes the 3-letter code of the application ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReimbursementType {
    Nptel,
    Fdp,
    Conference,
    Workshop,
    Travel,
    LabMaterials,
    Other,
}

impl ReimbursementType {
    /// Normalized names in declaration order; used for exact and substring
    /// matching of free-text input.
    const NAMES: [(&'static str, Self); 7] = [
        ("nptel", Self::Nptel),
        ("fdp", Self::Fdp),
        ("conference", Self::Conference),
        ("workshop", Self::Workshop),
        ("travel", Self::Travel),
        ("lab materials", Self::LabMaterials),
        ("other", Self::Other),
    ];

    /// Returns the display label for this category.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Nptel => "NPTEL",
            Self::Fdp => "FDP",
            Self::Conference => "Conference",
            Self::Workshop => "Workshop",
            Self::Travel => "Travel",
            Self::LabMaterials => "Lab Materials",
            Self::Other => "Other",
        }
    }

    /// Returns the 3-letter category code used in application IDs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Nptel => "NPT",
            Self::Fdp => "FDP",
            Self::Conference => "CON",
            Self::Workshop => "WSP",
            Self::Travel => "TRV",
            Self::LabMaterials => "LAB",
            Self::Other => "OTH",
        }
    }

    /// Normalizes free text into a category.
    ///
    /// Matching is lower-cased and trimmed: exact match first, then substring
    /// containment in either direction in declaration order. Unmatched input
    /// falls back to `Other`.
    #[must_use]
    pub fn normalize(input: &str) -> Self {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return Self::Other;
        }
        for (name, category) in Self::NAMES {
            if name == needle {
                return category;
            }
        }
        for (name, category) in Self::NAMES {
            if name.contains(&needle) || needle.contains(name) {
                return category;
            }
        }
        Self::Other
    }

    /// Reverse-maps a category code to its display label.
    ///
    /// Unknown codes are passed through verbatim.
    #[must_use]
    pub fn label_for_code(code: &str) -> String {
        Self::NAMES
            .iter()
            .map(|(_, category)| category)
            .find(|category| category.code().eq_ignore_ascii_case(code))
            .map_or_else(|| code.to_string(), |category| category.label().to_string())
    }
}

impl std::fmt::Display for ReimbursementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An attachment reference carried by a request.
///
/// Opaque to the workflow core: never validated, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// The original file name.
    pub file_name: String,
    /// Where the stored document can be fetched.
    pub url: String,
}

/// A single entry in a request's append-only review trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewComment {
    /// The role of the reviewer who wrote the comment.
    pub author: ActorRole,
    /// The comment text.
    pub text: String,
    /// When the comment was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

impl ReviewComment {
    /// Creates a new review comment.
    #[must_use]
    pub const fn new(author: ActorRole, text: String, at: OffsetDateTime) -> Self {
        Self { author, text, at }
    }
}
