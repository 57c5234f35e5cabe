//! Navigation-bar content collaborator.
//!
//! Only consulted when the navigation feature flag is enabled; a lookup
//! failure is logged and the page renders without navigation content.

use async_trait::async_trait;

use crate::model::NavItem;

/// Errors from the navigation content lookup.
#[derive(Debug, thiserror::Error)]
#[error("navigation content unavailable: {0}")]
pub struct NavigationError(pub String);

/// Provides the mapped navigation content for a language.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NavigationCache: Send + Sync {
    async fn mapped_navigation_content(&self, lang: &str)
    -> Result<Vec<NavItem>, NavigationError>;
}

/// Implementation that always returns empty navigation content.
///
/// Used when no navigation cache service is wired up, and as the fallback in
/// tests.
pub struct NullNavigationCache;

impl NullNavigationCache {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullNavigationCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NavigationCache for NullNavigationCache {
    async fn mapped_navigation_content(
        &self,
        _lang: &str,
    ) -> Result<Vec<NavItem>, NavigationError> {
        Ok(Vec::new())
    }
}
