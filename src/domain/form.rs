//! The in-flight feedback submission.

use serde::{Deserialize, Serialize};

/// Sentinel value for the `type`/`url` fields meaning "feedback about the
/// site in general", as opposed to a specific page URL.
pub const WHOLE_SITE: &str = "Whole site";

/// The feedback type that requires a page URL to be supplied.
pub const A_SPECIFIC_PAGE: &str = "A specific page";

/// Form-embedding context that relaxes the type-selection requirement.
pub const FORM_LOCATION_FOOTER: &str = "footer";

/// A user's feedback submission, decoded from the posted form fields.
///
/// Constructed fresh per request, validated in place, and discarded once the
/// request completes. The `is_*_err` flags are mutated by
/// [`crate::domain::validation::validate_form`] and consumed by the renderer
/// to highlight invalid fields; they never arrive on the wire.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedbackForm {
    /// Where on the site the form was embedded (e.g. `footer`).
    #[serde(rename = "feedback-form-type")]
    pub form_location: String,

    /// Selected feedback category (`Whole site`, `A specific page`, ...).
    #[serde(rename = "type")]
    pub kind: String,

    /// Page reference, required only when `kind` is [`A_SPECIFIC_PAGE`].
    pub url: String,

    /// Free-text feedback body; always required.
    pub description: String,

    /// Optional contact name.
    pub name: String,

    /// Optional contact email; must be well-formed when present.
    pub email: String,

    #[serde(skip)]
    pub is_type_err: bool,
    #[serde(skip)]
    pub is_url_err: bool,
    #[serde(skip)]
    pub is_description_err: bool,
    #[serde(skip)]
    pub is_email_err: bool,
}

impl FeedbackForm {
    /// True when any field failed validation.
    pub fn has_errors(&self) -> bool {
        self.is_type_err || self.is_url_err || self.is_description_err || self.is_email_err
    }
}
