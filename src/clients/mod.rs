//! External collaborators consumed by the handlers.
//!
//! Each collaborator is a trait so handlers can be exercised against test
//! doubles, with one production implementation apiece:
//!
//! - [`renderer`] - Page rendering ([`AskamaRenderer`])
//! - [`feedback_api`] - The downstream feedback API ([`HttpFeedbackBackend`])
//! - [`navigation`] - Navigation bar content ([`NullNavigationCache`])

pub mod feedback_api;
pub mod navigation;
pub mod renderer;

pub use feedback_api::{BackendError, FeedbackBackend, FeedbackMessage, HttpFeedbackBackend};
pub use navigation::{NavigationCache, NavigationError, NullNavigationCache};
pub use renderer::{AskamaRenderer, PageTemplate, RenderError, Renderer};

#[cfg(test)]
pub use feedback_api::MockFeedbackBackend;
#[cfg(test)]
pub use navigation::MockNavigationCache;
#[cfg(test)]
pub use renderer::MockRenderer;
