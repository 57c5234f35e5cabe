//! Ordered, cumulative validation of a submitted feedback form.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::form::{A_SPECIFIC_PAGE, FORM_LOCATION_FOOTER, FeedbackForm};
use crate::domain::site_url::is_site_domain_url;

/// Standard email syntax: local-part characters, `@`, domain labels, and a
/// 2-6 letter TLD.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,6}$").unwrap()
});

/// Localisable message key for a field-level validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKey {
    ChooseType,
    EnterUrl,
    ValidUrl,
    EnterFeedback,
    ValidEmail,
}

impl ErrorKey {
    /// Key handed to the localisation layer.
    pub fn locale_key(&self) -> &'static str {
        match self {
            Self::ChooseType => "FeedbackChooseType",
            Self::EnterUrl => "FeedbackWhatEnterURL",
            Self::ValidUrl => "FeedbackValidURL",
            Self::EnterFeedback => "FeedbackAlertEntry",
            Self::ValidEmail => "FeedbackAlertEmail",
        }
    }

    /// English fallback shown by the bundled templates.
    pub fn message(&self) -> &'static str {
        match self {
            Self::ChooseType => "Select what your feedback is about",
            Self::EnterUrl => "Enter the URL of the page",
            Self::ValidUrl => "Enter a valid page URL for this site",
            Self::EnterFeedback => "Enter your feedback",
            Self::ValidEmail => "Enter an email address in a valid format",
        }
    }
}

/// A single field error: which message to show and which form section the
/// error-summary link anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub key: ErrorKey,
    pub target: &'static str,
}

impl ValidationError {
    fn new(key: ErrorKey, target: &'static str) -> Self {
        Self { key, target }
    }
}

/// Validates `form` in place and returns errors in presentation order:
/// type/URL first, then description, then email.
///
/// Every applicable check runs and contributes; nothing short-circuits. The
/// per-field error flags are set as a side effect for the renderer. When the
/// type is anything other than "a specific page" the URL field is cleared,
/// so a stale page URL never leaks into a whole-site submission.
///
/// This function never fails: malformed input (e.g. an unparseable URL) is a
/// validation outcome, not a system error.
pub fn validate_form(form: &mut FeedbackForm, site_domain: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if form.kind.is_empty() && form.form_location != FORM_LOCATION_FOOTER {
        errors.push(ValidationError::new(ErrorKey::ChooseType, "#type-error"));
        form.is_type_err = true;
    }

    form.url = form.url.trim().to_string();
    if form.kind == A_SPECIFIC_PAGE {
        if form.url.is_empty() {
            errors.push(ValidationError::new(ErrorKey::EnterUrl, "#type-error"));
            form.is_url_err = true;
        } else if !is_site_domain_url(&form.url, site_domain) {
            errors.push(ValidationError::new(ErrorKey::ValidUrl, "#type-error"));
            form.is_url_err = true;
        }
    } else {
        form.url.clear();
    }

    if form.description.trim().is_empty() {
        errors.push(ValidationError::new(ErrorKey::EnterFeedback, "#feedback-error"));
        form.is_description_err = true;
    }

    if !form.email.is_empty() && !EMAIL_REGEX.is_match(&form.email) {
        errors.push(ValidationError::new(ErrorKey::ValidEmail, "#email-error"));
        form.is_email_err = true;
    }

    errors
}
