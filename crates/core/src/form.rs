//! The reimbursement request form: input rules and submission state.
//!
//! [`FormInput`] carries what the user typed plus the chosen receipt and is
//! checked before any request is built. [`FormState`] tracks the four UI
//! states of a single submission; nothing is kept between submissions.

use std::borrow::Cow;
use std::collections::BTreeMap;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::submission::ReceiptUpload;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Smallest amount the form accepts (the amount input's `min`/`step`).
pub const MIN_AMOUNT: f64 = 0.01;

/// Minimum description length in characters.
pub const MIN_DESCRIPTION_LENGTH: usize = 10;

/// Shown when the request was stored.
pub const SUCCESS_MESSAGE: &str = "Reimbursement request submitted successfully!";

/// Shown for any failed request, whatever the cause.
pub const SUBMIT_ERROR_MESSAGE: &str = "An error occurred while submitting your request";

/// Shown when the form is submitted without a receipt.
pub const MISSING_RECEIPT_MESSAGE: &str = "Please upload a receipt file";

pub const SUBMIT_LABEL: &str = "Submit Reimbursement Request";
pub const SUBMITTING_LABEL: &str = "Submitting...";

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Values entered in the form.
#[derive(Debug, Clone, Default, Validate)]
pub struct FormInput {
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,

    #[validate(custom(function = "validate_amount"))]
    pub amount: String,

    #[validate(custom(function = "validate_description"))]
    pub description: String,

    #[validate(required(message = "Please upload a receipt file"))]
    pub receipt: Option<ReceiptUpload>,
}

impl FormInput {
    /// Run every field rule. Returns the first message per failing field.
    pub fn check(&self) -> Result<(), FormErrors> {
        self.validate().map_err(FormErrors::from)
    }

    /// Clear all values after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn validate_amount(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(field_error("required", "Amount is required"));
    }
    let amount: f64 = value
        .parse()
        .map_err(|_| field_error("number", "Amount must be a number"))?;
    if !amount.is_finite() || amount < MIN_AMOUNT {
        return Err(field_error("min", "Amount must be greater than zero"));
    }
    Ok(())
}

fn validate_description(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(field_error("required", "Description is required"));
    }
    if value.chars().count() < MIN_DESCRIPTION_LENGTH {
        return Err(field_error(
            "min_length",
            "Description must be at least 10 characters",
        ));
    }
    Ok(())
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Per-field messages from a failed [`FormInput::check`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<String, String>,
}

impl FormErrors {
    /// Message for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Failing fields and their messages, ordered by field name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                (field.to_string(), message)
            })
            .collect();
        Self { fields }
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.fields.values().map(String::as_str).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

// ---------------------------------------------------------------------------
// Submission state
// ---------------------------------------------------------------------------

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Submission state of one form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    status: FormStatus,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Start a submission, clearing any previous banner.
    ///
    /// The submit control is disabled while a request is in flight, so a
    /// second start is rejected.
    pub fn begin(&mut self) -> Result<(), CoreError> {
        if self.is_submitting() {
            return Err(CoreError::Validation(
                "A submission is already in progress".into(),
            ));
        }
        self.status = FormStatus::Submitting;
        Ok(())
    }

    /// The request was accepted.
    pub fn succeed(&mut self) {
        if self.is_submitting() {
            self.status = FormStatus::Succeeded;
        }
    }

    /// The request failed; the cause is not shown to the user.
    pub fn fail(&mut self) {
        if self.is_submitting() {
            self.status = FormStatus::Failed(SUBMIT_ERROR_MESSAGE.into());
        }
    }

    /// Refuse to submit without sending anything, e.g. when no receipt
    /// was chosen.
    pub fn reject(&mut self, message: impl Into<String>) {
        if !self.is_submitting() {
            self.status = FormStatus::Failed(message.into());
        }
    }

    pub fn reset(&mut self) {
        self.status = FormStatus::Idle;
    }

    /// Banner text for the current state, if any.
    pub fn banner(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Succeeded => Some(SUCCESS_MESSAGE),
            FormStatus::Failed(msg) => Some(msg),
            FormStatus::Idle | FormStatus::Submitting => None,
        }
    }

    /// Label of the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}
