use super::*;

#[test]
fn test_primary_term_comes_first() {
    assert_eq!(FieldKey::FirstName.terms()[0], "firstName");
    assert_eq!(FieldKey::School.terms()[0], "school");
    assert_eq!(FieldKey::Skills.terms()[0], "skills");
}

#[test]
fn test_as_str_matches_serde_name() {
    let json = serde_json::to_value(FieldKey::FieldOfStudy).unwrap();
    assert_eq!(json, "fieldOfStudy");
    assert_eq!(FieldKey::FieldOfStudy.as_str(), "fieldOfStudy");
}

#[test]
fn test_date_keys() {
    assert!(FieldKey::StartDate.is_date());
    assert!(FieldKey::EndDate.is_date());
    assert!(!FieldKey::Email.is_date());
}

#[test]
fn test_flag_keys() {
    assert!(FieldKey::CurrentJob.is_flag());
    assert!(FieldKey::CurrentSchool.is_flag());
    assert!(!FieldKey::Company.is_flag());
}

#[test]
fn test_phone_synonyms_include_mobile() {
    assert!(FieldKey::Phone.terms().contains(&"mobile"));
    assert!(FieldKey::Phone.terms().contains(&"cellphone"));
}

#[test]
fn test_category_as_str() {
    assert_eq!(Category::Work.as_str(), "work");
    assert_eq!(Category::Education.as_str(), "education");
}
