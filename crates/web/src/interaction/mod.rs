// =============================================================================
// IgniteX Web - Interaction State
// =============================================================================
// Table of Contents:
// 1. Video Reveal
// 2. Header Density
// 3. Story Cursor
// 4. Image Fallback
// 5. Scroll Watch
// =============================================================================
//
// Plain state machines behind the interactive components. Components wrap them
// in signals; keeping them free of the DOM lets them be tested natively.

pub mod reveal;
pub mod density;
pub mod cursor;
pub mod fallback;
pub mod scroll;

pub use reveal::VideoReveal;
pub use density::{HeaderDensity, COMPACT_THRESHOLD_PX};
pub use cursor::StoryCursor;
pub use fallback::ImageSource;
pub use scroll::{ListenerRegistration, ScrollTarget, ScrollWatch};
