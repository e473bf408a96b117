//! Contact form state and status banner lifecycle.
//!
//! DESIGN
//! ======
//! Each banner carries a monotonically increasing id. The timer that hides a
//! success banner dismisses by id, so an older timer firing after a newer
//! submission leaves the newer banner alone.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::types::ContactFormData;

pub const SUCCESS_BANNER_SECS: u64 = 5;

pub const CONTACT_SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";
pub const CONTACT_MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "banner--success",
            Self::Error => "banner--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub kind: BannerKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ContactState {
    pub form: ContactFormData,
    pub banner: Option<Banner>,
    pub submitting: bool,
    next_banner_id: u64,
}

impl ContactState {
    /// Check that every field has content and, if so, return the payload and
    /// mark the form as submitting. A missing field raises an error banner.
    pub fn begin_submit(&mut self) -> Option<ContactFormData> {
        if self.submitting {
            return None;
        }
        if let Err(msg) = validate(&self.form) {
            self.show(BannerKind::Error, msg.to_owned());
            return None;
        }
        self.submitting = true;
        Some(self.form.clone())
    }

    /// Clear the form and show the success banner. Returns the banner id to
    /// dismiss once [`SUCCESS_BANNER_SECS`] have elapsed.
    pub fn on_success(&mut self) -> u64 {
        self.submitting = false;
        self.form = ContactFormData::default();
        self.show(BannerKind::Success, CONTACT_SUCCESS_MESSAGE.to_owned())
    }

    /// Show a persistent error banner; the form keeps its contents.
    pub fn on_failure(&mut self, message: String) {
        self.submitting = false;
        self.show(BannerKind::Error, message);
    }

    /// Hide the banner only if it is still the one identified by `id`.
    pub fn dismiss(&mut self, id: u64) {
        if self.banner.as_ref().is_some_and(|b| b.id == id) {
            self.banner = None;
        }
    }

    fn show(&mut self, kind: BannerKind, message: String) -> u64 {
        self.next_banner_id += 1;
        let id = self.next_banner_id;
        self.banner = Some(Banner { id, kind, message });
        id
    }
}

/// # Errors
///
/// Returns the message to show when any field is blank.
pub fn validate(form: &ContactFormData) -> Result<(), &'static str> {
    let fields = [&form.name, &form.email, &form.subject, &form.message];
    if fields.iter().any(|v| v.trim().is_empty()) {
        return Err(CONTACT_MISSING_FIELDS_MESSAGE);
    }
    Ok(())
}
