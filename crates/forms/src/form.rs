//! Contact form aggregation and simulated submission

use crate::rules::{validate_field, FieldError, FieldName};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Notification shown when validation fails at submit time.
pub const VALIDATION_NOTICE: &str = "Please correct the errors below";

/// A contact form's field values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    pub message: String,
}

impl ContactForm {
    /// Fields that must be filled in, with the rest validated only when
    /// non-empty
    const REQUIRED: [FieldName; 4] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Message,
    ];

    fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Company => &self.company,
            FieldName::Message => &self.message,
        }
    }

    /// Validate every field, collecting all failures
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let all = [
            FieldName::FirstName,
            FieldName::LastName,
            FieldName::Email,
            FieldName::Phone,
            FieldName::Company,
            FieldName::Message,
        ];

        let errors: Vec<FieldError> = all
            .into_iter()
            .filter_map(|field| {
                let required = Self::REQUIRED.contains(&field);
                validate_field(field, self.value(field), required).err()
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Result of a (simulated) form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    /// Accepted; carries the personalized thank-you heading and the
    /// notification copy
    Sent { heading: String, notice: String },
    /// The simulated gateway rejected the request
    Failed { notice: String },
}

/// Validate and submit the form against a simulated gateway.
///
/// There is no real backend; the gateway accepts 90% of requests, with the
/// outcome drawn from `rng` so tests can pin it.
pub fn submit<R: Rng>(form: &ContactForm, rng: &mut R) -> Result<SubmissionOutcome, Vec<FieldError>> {
    form.validate()?;

    let accepted = rng.gen::<f64>() > 0.1;
    if accepted {
        tracing::info!(email = %form.email, "contact form submitted");
        Ok(SubmissionOutcome::Sent {
            heading: format!("Thank You, {}!", form.first_name.trim()),
            notice: "Message sent successfully! We'll get back to you within 24 hours."
                .to_string(),
        })
    } else {
        tracing::warn!("simulated gateway rejected submission");
        Ok(SubmissionOutcome::Failed {
            notice: "There was an error sending your message. Please try again.".to_string(),
        })
    }
}
