//! Hand-off from the application wizard to the payment step.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use crate::net::types::{ApplicationData, SubmittedApplication};

#[derive(Clone, Debug, Default)]
pub struct PaymentState {
    pub application: Option<SubmittedApplication>,
}

impl PaymentState {
    /// Record the accepted application. The password never leaves the wizard.
    pub fn publish(&mut self, data: &ApplicationData) {
        self.application = Some(SubmittedApplication::from(data));
    }

    /// Applicant's display name for the summary header.
    pub fn applicant_name(&self) -> Option<String> {
        self.application.as_ref().map(|a| {
            format!("{} {}", a.first_name.trim(), a.last_name.trim())
                .trim()
                .to_owned()
        })
    }
}
