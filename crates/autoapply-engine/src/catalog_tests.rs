use super::*;

#[test]
fn test_exact_strategies_precede_substring() {
    let ladder = strategies_for(FieldKey::FirstName);
    let exact_id = ladder.iter().position(|s| *s == Strategy::ExactId).unwrap();
    let id_contains = ladder
        .iter()
        .position(|s| *s == Strategy::IdContains)
        .unwrap();
    assert!(exact_id < id_contains);
}

#[test]
fn test_label_fallbacks_come_last() {
    for key in [FieldKey::FirstName, FieldKey::Email, FieldKey::School] {
        let ladder = strategies_for(key);
        assert_eq!(*ladder.last().unwrap(), Strategy::LabelText);
    }
}

#[test]
fn test_email_ladder_includes_type_match() {
    assert!(strategies_for(FieldKey::Email).contains(&Strategy::TypeEquals("email")));
    assert!(strategies_for(FieldKey::Phone).contains(&Strategy::TypeEquals("tel")));
    assert!(!strategies_for(FieldKey::City).iter().any(|s| matches!(s, Strategy::TypeEquals(_))));
}

#[test]
fn test_personal_fields_complete() {
    let fields = fields_for(Category::Personal);
    assert_eq!(fields.len(), 9);
    assert_eq!(fields[0], FieldKey::FirstName);
    assert!(fields.contains(&FieldKey::Country));
}

#[test]
fn test_multi_entry_categories_have_section_profiles() {
    assert!(section_profile(Category::Work).is_some());
    assert!(section_profile(Category::Education).is_some());
    assert!(section_profile(Category::Personal).is_none());
    assert!(section_profile(Category::Skills).is_none());
}

#[test]
fn test_work_profile_terms() {
    let profile = section_profile(Category::Work).unwrap();
    assert!(profile.marker_terms.contains(&"workExperience"));
    assert!(profile.anchor_terms.contains(&"company"));
    assert!(profile.add_automation_terms.contains(&"addWorkExperience"));
}

#[test]
fn test_detect_probes_cover_core_fields() {
    assert!(DETECT_ID_PROBES.contains(&"firstName"));
    assert!(DETECT_ID_PROBES.contains(&"zip"));
    assert!(DETECT_INPUT_TYPES.contains(&"email"));
}
