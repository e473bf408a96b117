//! Two-step application wizard state machine.
//!
//! DESIGN
//! ======
//! `Identity` (names, credentials, demographics) moves to `Destination`
//! (country, job, start month) only when every identity field is filled and
//! the password is long enough. Going back is always allowed. Submission is a
//! single terminal action guarded against double submits.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use crate::net::types::ApplicationData;

pub const MIN_PASSWORD_LEN: usize = 8;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const SHORT_PASSWORD_MESSAGE: &str = "Password must be at least 8 characters.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Identity,
    Destination,
}

impl WizardStep {
    /// 1-based position for the progress indicator.
    pub fn number(self) -> u8 {
        match self {
            Self::Identity => 1,
            Self::Destination => 2,
        }
    }
}

/// A single wizard input, used by the page to bind controls generically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardField {
    FirstName,
    LastName,
    Email,
    Password,
    Gender,
    Age,
    Country,
    DesiredJob,
    StartMonth,
}

impl WizardField {
    pub const IDENTITY: [Self; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Password,
        Self::Gender,
        Self::Age,
    ];
    pub const DESTINATION: [Self; 3] = [Self::Country, Self::DesiredJob, Self::StartMonth];

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Gender => "Gender",
            Self::Age => "Age",
            Self::Country => "Destination country",
            Self::DesiredJob => "Desired job",
            Self::StartMonth => "Start month",
        }
    }

    /// HTML `type` for the field's `<input>`.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Age => "number",
            Self::StartMonth => "month",
            _ => "text",
        }
    }

    pub fn value(self, data: &ApplicationData) -> &str {
        match self {
            Self::FirstName => &data.first_name,
            Self::LastName => &data.last_name,
            Self::Email => &data.email,
            Self::Password => &data.password,
            Self::Gender => &data.gender,
            Self::Age => &data.age,
            Self::Country => &data.country,
            Self::DesiredJob => &data.desired_job,
            Self::StartMonth => &data.start_month,
        }
    }

    pub fn set(self, data: &mut ApplicationData, value: String) {
        let slot = match self {
            Self::FirstName => &mut data.first_name,
            Self::LastName => &mut data.last_name,
            Self::Email => &mut data.email,
            Self::Password => &mut data.password,
            Self::Gender => &mut data.gender,
            Self::Age => &mut data.age,
            Self::Country => &mut data.country,
            Self::DesiredJob => &mut data.desired_job,
            Self::StartMonth => &mut data.start_month,
        };
        *slot = value;
    }
}

pub const GENDER_OPTIONS: [(&str, &str); 3] =
    [("female", "Female"), ("male", "Male"), ("other", "Other")];

/// Check the step-1 fields.
///
/// # Errors
///
/// Returns the message to show when a field is blank or the password is
/// shorter than [`MIN_PASSWORD_LEN`].
pub fn validate_identity(data: &ApplicationData) -> Result<(), &'static str> {
    let required = [
        &data.first_name,
        &data.last_name,
        &data.email,
        &data.password,
        &data.gender,
        &data.age,
    ];
    if required.iter().any(|v| v.trim().is_empty()) {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    if data.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SHORT_PASSWORD_MESSAGE);
    }
    Ok(())
}

/// Check the step-2 fields.
///
/// # Errors
///
/// Returns the message to show when a field is blank.
pub fn validate_destination(data: &ApplicationData) -> Result<(), &'static str> {
    let required = [&data.country, &data.desired_job, &data.start_month];
    if required.iter().any(|v| v.trim().is_empty()) {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(())
}

#[derive(Clone, Debug, Default)]
pub struct WizardState {
    pub step: WizardStep,
    pub data: ApplicationData,
    pub error: Option<String>,
    pub submitting: bool,
}

impl WizardState {
    /// Move from step 1 to step 2. Returns `true` if the step changed; on a
    /// validation failure the error is recorded and the step stays put.
    pub fn advance(&mut self) -> bool {
        if self.step != WizardStep::Identity {
            return false;
        }
        match validate_identity(&self.data) {
            Ok(()) => {
                self.step = WizardStep::Destination;
                self.error = None;
                true
            }
            Err(msg) => {
                self.error = Some(msg.to_owned());
                false
            }
        }
    }

    pub fn back(&mut self) {
        self.step = WizardStep::Identity;
        self.error = None;
    }

    /// Start the terminal submit. Returns the payload to send, or `None` when
    /// not on the last step, already submitting, or a step is incomplete.
    pub fn begin_submit(&mut self) -> Option<ApplicationData> {
        if self.step != WizardStep::Destination || self.submitting {
            return None;
        }
        let check = validate_identity(&self.data).and_then(|()| validate_destination(&self.data));
        if let Err(msg) = check {
            self.error = Some(msg.to_owned());
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some(self.data.clone())
    }

    pub fn submit_failed(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }

    /// Drop the in-memory form once the backend has accepted it.
    pub fn submit_succeeded(&mut self) {
        *self = Self::default();
    }
}
