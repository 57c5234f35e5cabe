//! Page rendering collaborator.

use askama::Template;

use crate::model::{FeedbackPage, Page};

/// Template names understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTemplate {
    /// The feedback form, possibly annotated with validation errors.
    Feedback,
    /// The post-submission acknowledgement page.
    FeedbackThanks,
}

impl PageTemplate {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Feedback => "feedback",
            Self::FeedbackThanks => "feedback-thanks",
        }
    }
}

/// Errors from the rendering collaborator.
#[derive(Debug, thiserror::Error)]
#[error("failed to render template {template}: {reason}")]
pub struct RenderError {
    pub template: &'static str,
    pub reason: String,
}

/// Renders page models into HTML responses.
#[cfg_attr(test, mockall::automock)]
pub trait Renderer: Send + Sync {
    /// Renders `page` with the named template, returning the HTML body.
    fn build_page(&self, page: &FeedbackPage, template: PageTemplate)
    -> Result<String, RenderError>;

    /// Returns a fresh base page model with site-wide defaults applied.
    fn new_base_page_model(&self) -> Page;
}

#[derive(Template)]
#[template(path = "feedback.html")]
struct FeedbackHtml<'a> {
    page: &'a FeedbackPage,
}

#[derive(Template)]
#[template(path = "feedback-thanks.html")]
struct FeedbackThanksHtml<'a> {
    page: &'a FeedbackPage,
}

/// Production renderer backed by the bundled Askama templates.
///
/// Askama escapes interpolated values, so attacker-influenced fields such as
/// the thanks-page `return_to` are HTML-escaped on output.
pub struct AskamaRenderer;

impl AskamaRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AskamaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for AskamaRenderer {
    fn build_page(
        &self,
        page: &FeedbackPage,
        template: PageTemplate,
    ) -> Result<String, RenderError> {
        let rendered = match template {
            PageTemplate::Feedback => FeedbackHtml { page }.render(),
            PageTemplate::FeedbackThanks => FeedbackThanksHtml { page }.render(),
        };

        rendered.map_err(|e| RenderError {
            template: template.name(),
            reason: e.to_string(),
        })
    }

    fn new_base_page_model(&self) -> Page {
        Page {
            language: "en".to_string(),
            ..Page::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::FeedbackForm;
    use crate::domain::validation::{ErrorKey, ValidationError};

    #[test]
    fn test_renders_feedback_template() {
        let renderer = AskamaRenderer::new();
        let page = FeedbackPage {
            form: FeedbackForm {
                description: "some feedback".to_string(),
                ..FeedbackForm::default()
            },
            ..FeedbackPage::default()
        };

        let html = renderer.build_page(&page, PageTemplate::Feedback).unwrap();

        assert!(html.contains("some feedback"));
        assert!(html.contains("form"));
    }

    #[test]
    fn test_renders_error_summary() {
        let renderer = AskamaRenderer::new();
        let page = FeedbackPage {
            errors: vec![ValidationError {
                key: ErrorKey::EnterFeedback,
                target: "#feedback-error",
            }],
            ..FeedbackPage::default()
        };

        let html = renderer.build_page(&page, PageTemplate::Feedback).unwrap();

        assert!(html.contains("#feedback-error"));
        assert!(html.contains(ErrorKey::EnterFeedback.message()));
    }

    #[test]
    fn test_thanks_template_escapes_return_to() {
        let renderer = AskamaRenderer::new();
        let page = FeedbackPage {
            return_to: "https://www.ons.gov.uk/\"><script>".to_string(),
            ..FeedbackPage::default()
        };

        let html = renderer
            .build_page(&page, PageTemplate::FeedbackThanks)
            .unwrap();

        assert!(!html.contains("\"><script>"));
    }
}
