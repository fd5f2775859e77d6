//! Canonical user profile.
//!
//! Created and persisted by the profile editor surface; the engine only ever
//! reads it. Every leaf field is optional so partially filled profiles
//! deserialize cleanly.

use serde::{Deserialize, Serialize};

/// The canonical user data structure, one record per profile category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    /// Single-valued personal information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal: Option<PersonalInfo>,

    /// Ordered work history entries, most relevant first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub work: Vec<WorkEntry>,

    /// Ordered education entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<EducationEntry>,

    /// Free-text skills record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<SkillsInfo>,
}

/// Personal information, all fields optional strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}

impl PersonalInfo {
    /// "First Last" when both parts are present and non-empty.
    pub fn full_name(&self) -> Option<String> {
        let first = self.first_name.as_deref().unwrap_or("").trim();
        let last = self.last_name.as_deref().unwrap_or("").trim();
        let combined = format!("{} {}", first, last);
        let combined = combined.trim().to_string();
        if combined.len() > 1 {
            Some(combined)
        } else {
            None
        }
    }
}

/// One work history entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkEntry {
    pub company: Option<String>,
    pub title: Option<String>,
    /// ISO-like date string, e.g. "2021-03" or "2021-03-01".
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current_job: bool,
    pub description: Option<String>,
}

impl WorkEntry {
    /// End date as it should be written to the page: empty while the job
    /// is current, regardless of any stored value.
    pub fn effective_end_date(&self) -> &str {
        if self.current_job {
            ""
        } else {
            self.end_date.as_deref().unwrap_or("")
        }
    }
}

/// One education entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current_school: bool,
}

impl EducationEntry {
    /// End date as written to the page; empty while still enrolled.
    pub fn effective_end_date(&self) -> &str {
        if self.current_school {
            ""
        } else {
            self.end_date.as_deref().unwrap_or("")
        }
    }
}

/// Skills and additional information. Comma or line separated lists, the
/// exact format is left to the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsInfo {
    pub skills: Option<String>,
    pub certifications: Option<String>,
    pub languages: Option<String>,
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
