use super::*;

fn application() -> ApplicationData {
    ApplicationData {
        first_name: " Ada ".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "analytical".to_owned(),
        gender: "female".to_owned(),
        age: "28".to_owned(),
        country: "Canada".to_owned(),
        desired_job: "Engineer".to_owned(),
        start_month: "2026-11".to_owned(),
    }
}

#[test]
fn empty_until_published() {
    let state = PaymentState::default();
    assert!(state.application.is_none());
    assert!(state.applicant_name().is_none());
}

#[test]
fn publish_carries_destination_fields() {
    let mut state = PaymentState::default();
    state.publish(&application());
    let app = state.application.clone().unwrap();
    assert_eq!(app.country, "Canada");
    assert_eq!(app.desired_job, "Engineer");
    assert_eq!(app.start_month, "2026-11");
    assert_eq!(app.email, "ada@example.com");
}

#[test]
fn published_payload_never_serializes_password() {
    let mut state = PaymentState::default();
    state.publish(&application());
    let json = serde_json::to_value(state.application.unwrap()).unwrap();
    assert!(json.get("password").is_none());
}

#[test]
fn applicant_name_trims_parts() {
    let mut state = PaymentState::default();
    state.publish(&application());
    assert_eq!(state.applicant_name().as_deref(), Some("Ada Lovelace"));
}
