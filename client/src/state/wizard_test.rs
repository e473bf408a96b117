use super::*;

// =============================================================
// Helpers
// =============================================================

fn identity_filled() -> ApplicationData {
    ApplicationData {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "analytical".to_owned(),
        gender: "female".to_owned(),
        age: "28".to_owned(),
        ..ApplicationData::default()
    }
}

fn all_filled() -> ApplicationData {
    ApplicationData {
        country: "Canada".to_owned(),
        desired_job: "Software engineer".to_owned(),
        start_month: "2026-11".to_owned(),
        ..identity_filled()
    }
}

// =============================================================
// validate_identity
// =============================================================

#[test]
fn identity_valid_when_all_fields_present() {
    assert_eq!(validate_identity(&identity_filled()), Ok(()));
}

#[test]
fn identity_rejects_each_blank_field() {
    let blanks: [fn(&mut ApplicationData); 6] = [
        |d| d.first_name.clear(),
        |d| d.last_name = "  ".to_owned(),
        |d| d.email.clear(),
        |d| d.password.clear(),
        |d| d.gender.clear(),
        |d| d.age.clear(),
    ];
    for blank in blanks {
        let mut data = identity_filled();
        blank(&mut data);
        assert_eq!(validate_identity(&data), Err(MISSING_FIELDS_MESSAGE));
    }
}

#[test]
fn identity_password_length_boundary() {
    let mut data = identity_filled();
    data.password = "1234567".to_owned();
    assert_eq!(validate_identity(&data), Err(SHORT_PASSWORD_MESSAGE));
    data.password = "12345678".to_owned();
    assert_eq!(validate_identity(&data), Ok(()));
}

#[test]
fn identity_password_length_counts_characters() {
    let mut data = identity_filled();
    data.password = "ééééééé".to_owned();
    assert_eq!(validate_identity(&data), Err(SHORT_PASSWORD_MESSAGE));
}

#[test]
fn destination_requires_all_fields() {
    assert_eq!(validate_destination(&all_filled()), Ok(()));
    let mut data = all_filled();
    data.start_month.clear();
    assert_eq!(validate_destination(&data), Err(MISSING_FIELDS_MESSAGE));
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn wizard_starts_on_identity_step() {
    let state = WizardState::default();
    assert_eq!(state.step, WizardStep::Identity);
    assert_eq!(state.step.number(), 1);
}

#[test]
fn advance_blocked_by_incomplete_identity() {
    let mut state = WizardState::default();
    assert!(!state.advance());
    assert_eq!(state.step, WizardStep::Identity);
    assert_eq!(state.error.as_deref(), Some(MISSING_FIELDS_MESSAGE));
}

#[test]
fn advance_blocked_by_short_password() {
    let mut state = WizardState { data: identity_filled(), ..WizardState::default() };
    state.data.password = "short".to_owned();
    assert!(!state.advance());
    assert_eq!(state.step, WizardStep::Identity);
}

#[test]
fn advance_reaches_destination_and_clears_error() {
    let mut state = WizardState {
        data: identity_filled(),
        error: Some("old".to_owned()),
        ..WizardState::default()
    };
    assert!(state.advance());
    assert_eq!(state.step, WizardStep::Destination);
    assert_eq!(state.step.number(), 2);
    assert!(state.error.is_none());
}

#[test]
fn back_is_unconditional_and_keeps_data() {
    let mut state = WizardState { data: identity_filled(), ..WizardState::default() };
    state.advance();
    state.data.country.clear();
    state.error = Some("x".to_owned());
    state.back();
    assert_eq!(state.step, WizardStep::Identity);
    assert!(state.error.is_none());
    assert_eq!(state.data.first_name, "Ada");
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_only_from_destination_step() {
    let mut state = WizardState { data: all_filled(), ..WizardState::default() };
    assert!(state.begin_submit().is_none());
    assert!(!state.submitting);
}

#[test]
fn submit_requires_destination_fields() {
    let mut state = WizardState { data: identity_filled(), ..WizardState::default() };
    state.advance();
    assert!(state.begin_submit().is_none());
    assert_eq!(state.error.as_deref(), Some(MISSING_FIELDS_MESSAGE));
    assert!(!state.submitting);
}

#[test]
fn submit_returns_payload_once() {
    let mut state = WizardState { data: all_filled(), ..WizardState::default() };
    state.advance();
    let payload = state.begin_submit().unwrap();
    assert_eq!(payload, all_filled());
    assert!(state.submitting);
    assert!(state.begin_submit().is_none());
}

#[test]
fn submit_failure_shows_message_and_allows_retry() {
    let mut state = WizardState { data: all_filled(), ..WizardState::default() };
    state.advance();
    state.begin_submit();
    state.submit_failed("Email already registered".to_owned());
    assert!(!state.submitting);
    assert_eq!(state.step, WizardStep::Destination);
    assert_eq!(state.error.as_deref(), Some("Email already registered"));
    assert!(state.begin_submit().is_some());
}

#[test]
fn submit_success_clears_form() {
    let mut state = WizardState { data: all_filled(), ..WizardState::default() };
    state.advance();
    state.begin_submit();
    state.submit_succeeded();
    assert_eq!(state.data, ApplicationData::default());
    assert_eq!(state.step, WizardStep::Identity);
    assert!(!state.submitting);
}

// =============================================================
// WizardField
// =============================================================

#[test]
fn field_set_then_value_targets_same_slot() {
    let mut data = ApplicationData::default();
    for field in WizardField::IDENTITY.into_iter().chain(WizardField::DESTINATION) {
        field.set(&mut data, format!("{field:?}"));
        assert_eq!(field.value(&data), format!("{field:?}"));
    }
    assert_eq!(data.desired_job, "DesiredJob");
    assert_eq!(data.age, "Age");
}

#[test]
fn filling_identity_fields_unlocks_step_two() {
    let mut state = WizardState::default();
    for field in WizardField::IDENTITY {
        field.set(&mut state.data, "filled-in".to_owned());
    }
    assert!(state.advance());
}

#[test]
fn password_field_renders_masked() {
    assert_eq!(WizardField::Password.input_type(), "password");
    assert_eq!(WizardField::StartMonth.input_type(), "month");
    assert_eq!(WizardField::FirstName.input_type(), "text");
}
