//! # Feedback Controller
//!
//! A frontend controller that renders the site feedback form, validates
//! submissions, and forwards accepted feedback to the downstream feedback
//! API. It runs behind a reverse proxy / API router in a larger publishing
//! platform.
//!
//! ## Architecture
//!
//! - **Domain** ([`domain`]) - The feedback form, same-site URL checks, and
//!   field validation
//! - **Clients** ([`clients`]) - Traits for the external collaborators
//!   (renderer, feedback API, navigation cache) and their production
//!   implementations
//! - **Handlers** ([`handlers`]) - HTTP handlers orchestrating parse →
//!   validate → submit → redirect
//! - **Mapper** ([`mapper`]) - Request data to page-model mapping
//!
//! ## Quick Start
//!
//! ```bash
//! # Point at the feedback API and name the site domain
//! export API_ROUTER_URL="http://localhost:23200/v1"
//! export SITE_DOMAIN="ons.gov.uk"
//! export SERVICE_AUTH_TOKEN="..."
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod middleware;
pub mod model;
pub mod routes;
pub mod server;
pub mod state;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::clients::{FeedbackBackend, NavigationCache, PageTemplate, Renderer};
    pub use crate::domain::form::FeedbackForm;
    pub use crate::domain::validation::{ValidationError, validate_form};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
