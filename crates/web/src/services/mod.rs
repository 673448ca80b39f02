// =============================================================================
// IgniteX Web - Browser Services
// =============================================================================

pub mod scroll;

pub use scroll::{use_header_density, BrowserWindow};
