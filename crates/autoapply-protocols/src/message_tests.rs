use super::*;

#[test]
fn test_fill_form_request_shape() {
    let json = serde_json::json!({
        "action": "fillForm",
        "userData": { "personal": { "firstName": "Jane" } }
    });
    let request: Request = serde_json::from_value(json).unwrap();
    match request {
        Request::FillForm { user_data } => {
            assert_eq!(
                user_data.personal.unwrap().first_name.as_deref(),
                Some("Jane")
            );
        }
        other => panic!("unexpected request: {:?}", other),
    }
}

#[test]
fn test_detect_fields_request_shape() {
    let json = serde_json::json!({ "action": "detectFields" });
    let request: Request = serde_json::from_value(json).unwrap();
    assert!(matches!(request, Request::DetectFields));
}

#[test]
fn test_show_notification_request_shape() {
    let json = serde_json::json!({
        "action": "showNotification",
        "message": "No profile data found."
    });
    let request: Request = serde_json::from_value(json).unwrap();
    match request {
        Request::ShowNotification { message } => {
            assert_eq!(message, "No profile data found.");
        }
        other => panic!("unexpected request: {:?}", other),
    }
}

#[test]
fn test_filled_outcome() {
    let outcome = FillOutcome::filled(7);
    assert!(outcome.success);
    assert_eq!(outcome.field_count, Some(7));
    assert!(outcome.message.contains("7"));
}

#[test]
fn test_failure_outcome_omits_count() {
    let outcome = FillOutcome::failure("Not a Workday page");
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["success"], false);
    assert!(json.get("fieldCount").is_none());
    assert_eq!(json["message"], "Not a Workday page");
}

#[test]
fn test_outcome_field_count_camel_case() {
    let outcome = FillOutcome::detected(3);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["fieldCount"], 3);
}
