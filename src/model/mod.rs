//! Page models handed to the rendering collaborator.

use serde::Serialize;

use crate::domain::form::FeedbackForm;
use crate::domain::validation::ValidationError;

/// Base page model with site-wide defaults, produced by
/// [`crate::clients::Renderer::new_base_page_model`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Page type tag consumed by the rendering layer (always `feedback`).
    pub page_type: String,
    pub language: String,
    pub uri: String,
    pub title: String,
    /// Short metadata description; for the form page this is the tail of the
    /// page URL the feedback is about.
    pub description: String,
}

/// A single entry of the navigation bar content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: String,
    pub uri: String,
}

/// Model for the `feedback` and `feedback-thanks` templates.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackPage {
    pub page: Page,

    /// The submitted form, echoed back so invalid submissions keep the
    /// user's input.
    pub form: FeedbackForm,

    /// Field errors in presentation order; empty on a fresh form.
    pub errors: Vec<ValidationError>,

    /// Human-readable label for the "this service" radio option; empty when
    /// the request did not name a known service.
    pub service_description: String,

    /// The page the user came from, used as the back link.
    pub previous_url: String,

    /// Sanitised navigable target shown on the thanks page.
    pub return_to: String,

    /// Navigation bar content; empty unless the navigation feature flag is
    /// enabled and the cache lookup succeeded.
    pub navigation: Vec<NavItem>,
}
