// =============================================================================
// IgniteX Web - Error Types
// =============================================================================

use thiserror::Error;

/// Construction-time errors raised while assembling the page from the feed.
///
/// None of these are fatal to the page: callers log and omit the affected
/// section instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("story carousel requires at least one entry")]
    EmptyStories,
}
