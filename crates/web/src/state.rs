// =============================================================================
// IgniteX Web - Application State
// =============================================================================

use std::sync::Arc;

use crate::config::{PageFeatures, SiteConfig};
use crate::content::ContentFeed;

/// Read-only page state provided via Leptos context.
///
/// Interactive state (header density, carousel cursor, video reveal) is owned
/// by the components that use it, not stored here.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub feed: &'static ContentFeed,
}

impl AppState {
    pub fn new(config: SiteConfig, feed: &'static ContentFeed) -> Self {
        Self {
            config: Arc::new(config),
            feed,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            SiteConfig::ignitex().with_features(PageFeatures::current()),
            ContentFeed::ignitex(),
        )
    }
}
