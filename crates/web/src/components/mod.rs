// =============================================================================
// IgniteX Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Common Components
// 2. Cards
// 3. Interactive Components
// 4. Page Chrome
// =============================================================================

pub mod common;
pub mod icons;
pub mod cards;
pub mod video;
pub mod carousel;
pub mod header;
pub mod footer;

pub use common::{FallbackImage, SectionTitle};
pub use icons::{Icon, IconSvg};
pub use cards::{AchievementCard, ArchiveLinkCard, EventPhotoCard, LeaderCard, TeamMemberCard, TimelineItem};
pub use video::VideoCard;
pub use carousel::StoryCarousel;
pub use header::SiteHeader;
pub use footer::Footer;
