//! Selector catalog: the declarative side of the matcher.
//!
//! Maps each canonical field to an ordered ladder of lookup strategies and
//! each multi-entry category to its section and add-entry discovery terms.
//! Ordering encodes precedence: exact attribute matches first, label and
//! automation-id fallbacks last. Pure data; evaluation lives in
//! [`crate::resolve`] and [`crate::sections`].

use autoapply_protocols::{Category, FieldKey};

/// One lookup strategy, evaluated against every synonym term of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// `id` attribute equals the term.
    ExactId,
    /// `id` attribute contains the term.
    IdContains,
    /// `name` attribute equals the term.
    ExactName,
    /// `name` attribute contains the term.
    NameContains,
    /// Input `type` attribute equals the given type.
    TypeEquals(&'static str),
    /// Placeholder text contains the term.
    PlaceholderContains,
    /// `aria-label` contains the term.
    AriaLabelContains,
    /// A label whose `for` attribute contains the term; resolves to the
    /// label's target control.
    LabelFor,
    /// The vendor's `data-automation-id` contains the term.
    AutomationIdContains,
    /// A label whose text contains the term; resolves to the label's
    /// target control. Broadest fallback.
    LabelText,
}

const DEFAULT_LADDER: &[Strategy] = &[
    Strategy::ExactId,
    Strategy::IdContains,
    Strategy::ExactName,
    Strategy::NameContains,
    Strategy::PlaceholderContains,
    Strategy::AriaLabelContains,
    Strategy::LabelFor,
    Strategy::AutomationIdContains,
    Strategy::LabelText,
];

const EMAIL_LADDER: &[Strategy] = &[
    Strategy::ExactId,
    Strategy::IdContains,
    Strategy::ExactName,
    Strategy::NameContains,
    Strategy::TypeEquals("email"),
    Strategy::PlaceholderContains,
    Strategy::AriaLabelContains,
    Strategy::LabelFor,
    Strategy::AutomationIdContains,
    Strategy::LabelText,
];

const PHONE_LADDER: &[Strategy] = &[
    Strategy::ExactId,
    Strategy::IdContains,
    Strategy::ExactName,
    Strategy::NameContains,
    Strategy::TypeEquals("tel"),
    Strategy::PlaceholderContains,
    Strategy::AriaLabelContains,
    Strategy::LabelFor,
    Strategy::AutomationIdContains,
    Strategy::LabelText,
];

/// Ordered lookup strategies for a canonical field.
pub fn strategies_for(key: FieldKey) -> &'static [Strategy] {
    match key {
        FieldKey::Email => EMAIL_LADDER,
        FieldKey::Phone => PHONE_LADDER,
        _ => DEFAULT_LADDER,
    }
}

/// Canonical fields belonging to a category, fill order.
pub fn fields_for(category: Category) -> &'static [FieldKey] {
    match category {
        Category::Personal => &[
            FieldKey::FirstName,
            FieldKey::LastName,
            FieldKey::Email,
            FieldKey::Phone,
            FieldKey::Address,
            FieldKey::City,
            FieldKey::State,
            FieldKey::Zip,
            FieldKey::Country,
        ],
        Category::Work => &[
            FieldKey::Company,
            FieldKey::JobTitle,
            FieldKey::StartDate,
            FieldKey::EndDate,
            FieldKey::Description,
        ],
        Category::Education => &[
            FieldKey::School,
            FieldKey::Degree,
            FieldKey::FieldOfStudy,
            FieldKey::StartDate,
            FieldKey::EndDate,
        ],
        Category::Skills => &[
            FieldKey::Skills,
            FieldKey::Certifications,
            FieldKey::Languages,
        ],
    }
}

/// Section and add-entry discovery terms for a multi-entry category.
#[derive(Debug)]
pub struct SectionProfile {
    /// Substrings matched against container `id`/`data-automation-id`.
    pub marker_terms: &'static [&'static str],
    /// Substrings matched against h2/h3 heading text.
    pub heading_terms: &'static [&'static str],
    /// Substrings matched against fieldset legend text.
    pub legend_terms: &'static [&'static str],
    /// Known sub-field `id`/`name` substrings used to infer sections from
    /// their closest containers when nothing explicit is found.
    pub anchor_terms: &'static [&'static str],
    /// `data-automation-id` substrings of the add-entry control.
    pub add_automation_terms: &'static [&'static str],
    /// `aria-label` substrings of the add-entry control.
    pub add_aria_terms: &'static [&'static str],
    /// Caption substrings of explicit add-entry buttons.
    pub add_caption_terms: &'static [&'static str],
}

const WORK_SECTIONS: SectionProfile = SectionProfile {
    marker_terms: &[
        "work-experience",
        "workExperience",
        "work-history",
        "workHistory",
        "employment-history",
        "employmentHistory",
    ],
    heading_terms: &["work experience", "employment history"],
    legend_terms: &["work", "employment"],
    anchor_terms: &["jobTitle", "title", "company", "employer"],
    add_automation_terms: &["addWorkExperience", "addEmployment"],
    add_aria_terms: &["add work experience", "add employment"],
    add_caption_terms: &[
        "add work",
        "add experience",
        "add employment",
        "add another position",
    ],
};

const EDUCATION_SECTIONS: SectionProfile = SectionProfile {
    marker_terms: &["education", "academic"],
    heading_terms: &["education", "academic"],
    legend_terms: &["education", "academic"],
    anchor_terms: &["school", "university", "college", "degree"],
    add_automation_terms: &["addEducation", "addSchool"],
    add_aria_terms: &["add education", "add school"],
    add_caption_terms: &["add education", "add school", "add another degree"],
};

/// Section discovery terms; only work and education repeat.
pub fn section_profile(category: Category) -> Option<&'static SectionProfile> {
    match category {
        Category::Work => Some(&WORK_SECTIONS),
        Category::Education => Some(&EDUCATION_SECTIONS),
        Category::Personal | Category::Skills => None,
    }
}

/// Input types included in detect mode's broad control sweep.
pub const DETECT_INPUT_TYPES: &[&str] = &["text", "email", "tel", "date"];

/// `id` substrings probed by detect mode for vendor-specific fields.
pub const DETECT_ID_PROBES: &[&str] = &[
    "firstName",
    "lastName",
    "email",
    "phone",
    "address",
    "country",
    "state",
    "city",
    "postal",
    "zip",
    "education",
    "workExperience",
    "skill",
];

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
