//! Canonical field vocabulary.
//!
//! A [`FieldKey`] names a semantic profile slot independent of any page's
//! attribute naming. Each key carries the synonym terms observed across
//! vendor deployments; the resolver crosses these terms with its lookup
//! strategies to broaden matching.

use serde::{Deserialize, Serialize};

/// Profile categories, in the order the engine fills them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Personal,
    Work,
    Education,
    Skills,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Work => "work",
            Category::Education => "education",
            Category::Skills => "skills",
        }
    }
}

/// Canonical name of a semantic profile slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    // Personal
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    City,
    State,
    Zip,
    Country,
    // Work
    Company,
    JobTitle,
    StartDate,
    EndDate,
    CurrentJob,
    Description,
    // Education
    School,
    Degree,
    FieldOfStudy,
    CurrentSchool,
    // Skills
    Skills,
    Certifications,
    Languages,
}

impl FieldKey {
    /// The key's own camelCase name, also the primary search term.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::FirstName => "firstName",
            FieldKey::LastName => "lastName",
            FieldKey::Email => "email",
            FieldKey::Phone => "phone",
            FieldKey::Address => "address",
            FieldKey::City => "city",
            FieldKey::State => "state",
            FieldKey::Zip => "zip",
            FieldKey::Country => "country",
            FieldKey::Company => "company",
            FieldKey::JobTitle => "jobTitle",
            FieldKey::StartDate => "startDate",
            FieldKey::EndDate => "endDate",
            FieldKey::CurrentJob => "currentJob",
            FieldKey::Description => "description",
            FieldKey::School => "school",
            FieldKey::Degree => "degree",
            FieldKey::FieldOfStudy => "fieldOfStudy",
            FieldKey::CurrentSchool => "currentSchool",
            FieldKey::Skills => "skills",
            FieldKey::Certifications => "certifications",
            FieldKey::Languages => "languages",
        }
    }

    /// Synonym terms tried against page attributes, broadest coverage first.
    pub fn terms(&self) -> &'static [&'static str] {
        match self {
            FieldKey::FirstName => &["firstName", "first-name", "first_name", "givenName"],
            FieldKey::LastName => &["lastName", "last-name", "last_name", "familyName"],
            FieldKey::Email => &["email", "emailAddress", "email-address", "email_address"],
            FieldKey::Phone => &[
                "phone",
                "phoneNumber",
                "phone-number",
                "phone_number",
                "mobile",
                "cellphone",
            ],
            FieldKey::Address => &[
                "address",
                "streetAddress",
                "street-address",
                "street_address",
                "addr1",
                "addressLine1",
            ],
            FieldKey::City => &["city", "cityName", "city-name", "city_name", "municipality"],
            FieldKey::State => &[
                "state",
                "stateProvince",
                "state-province",
                "state_province",
                "region",
            ],
            FieldKey::Zip => &[
                "zip",
                "zipCode",
                "zip-code",
                "zip_code",
                "postal",
                "postalCode",
                "postal-code",
                "postal_code",
            ],
            FieldKey::Country => &["country", "countryName", "country-name", "country_name"],
            FieldKey::Company => &["company", "employer", "organization", "companyName"],
            FieldKey::JobTitle => &["jobTitle", "title", "position", "role"],
            FieldKey::StartDate => &[
                "startDate",
                "start-date",
                "start_date",
                "fromDate",
                "dateFrom",
            ],
            FieldKey::EndDate => &["endDate", "end-date", "end_date", "toDate", "dateTo"],
            FieldKey::CurrentJob => &["current", "present"],
            FieldKey::Description => &[
                "description",
                "jobDescription",
                "responsibilities",
                "duties",
            ],
            FieldKey::School => &["school", "schoolName", "institution", "college", "university"],
            FieldKey::Degree => &["degree", "degreeName", "degreeType", "qualification"],
            FieldKey::FieldOfStudy => &["fieldOfStudy", "field", "major", "studyField"],
            FieldKey::CurrentSchool => &["current", "present", "inProgress"],
            FieldKey::Skills => &["skills", "technicalSkills", "professionalSkills"],
            FieldKey::Certifications => &["certifications", "certificates", "licenses"],
            FieldKey::Languages => &["languages", "languageSkills", "spokenLanguages"],
        }
    }

    /// Whether this key carries a date value that goes through
    /// normalization before being written.
    pub fn is_date(&self) -> bool {
        matches!(self, FieldKey::StartDate | FieldKey::EndDate)
    }

    /// Whether this key targets a checkbox rather than a text-like control.
    pub fn is_flag(&self) -> bool {
        matches!(self, FieldKey::CurrentJob | FieldKey::CurrentSchool)
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
