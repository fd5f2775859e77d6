use super::*;

#[test]
fn test_profile_deserialize_partial() {
    let json = serde_json::json!({
        "personal": { "firstName": "Jane", "email": "jane@x.com" }
    });
    let profile: Profile = serde_json::from_value(json).unwrap();
    let personal = profile.personal.unwrap();
    assert_eq!(personal.first_name.as_deref(), Some("Jane"));
    assert_eq!(personal.last_name, None);
    assert!(profile.work.is_empty());
    assert!(profile.skills.is_none());
}

#[test]
fn test_profile_deserialize_empty_object() {
    let profile: Profile = serde_json::from_str("{}").unwrap();
    assert!(profile.personal.is_none());
    assert!(profile.education.is_empty());
}

#[test]
fn test_work_entry_camel_case_keys() {
    let json = serde_json::json!({
        "company": "Acme",
        "startDate": "2020-01",
        "endDate": "2022-06",
        "currentJob": false
    });
    let entry: WorkEntry = serde_json::from_value(json).unwrap();
    assert_eq!(entry.start_date.as_deref(), Some("2020-01"));
    assert_eq!(entry.effective_end_date(), "2022-06");
}

#[test]
fn test_current_job_blanks_end_date() {
    let entry = WorkEntry {
        end_date: Some("2022-06".to_string()),
        current_job: true,
        ..Default::default()
    };
    assert_eq!(entry.effective_end_date(), "");
}

#[test]
fn test_current_school_blanks_end_date() {
    let entry = EducationEntry {
        end_date: Some("2024-05".to_string()),
        current_school: true,
        ..Default::default()
    };
    assert_eq!(entry.effective_end_date(), "");

    let done = EducationEntry {
        end_date: Some("2024-05".to_string()),
        current_school: false,
        ..Default::default()
    };
    assert_eq!(done.effective_end_date(), "2024-05");
}

#[test]
fn test_full_name() {
    let personal = PersonalInfo {
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        ..Default::default()
    };
    assert_eq!(personal.full_name().as_deref(), Some("Jane Doe"));
}

#[test]
fn test_full_name_requires_content() {
    assert_eq!(PersonalInfo::default().full_name(), None);

    let only_first = PersonalInfo {
        first_name: Some("Jane".to_string()),
        ..Default::default()
    };
    assert_eq!(only_first.full_name().as_deref(), Some("Jane"));
}

#[test]
fn test_profile_round_trip() {
    let profile = Profile {
        personal: Some(PersonalInfo {
            first_name: Some("Sam".to_string()),
            ..Default::default()
        }),
        work: vec![WorkEntry {
            company: Some("Initech".to_string()),
            current_job: true,
            ..Default::default()
        }],
        ..Default::default()
    };
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["work"][0]["currentJob"], true);
    let back: Profile = serde_json::from_value(json).unwrap();
    assert_eq!(back.work[0].company.as_deref(), Some("Initech"));
}
