// =============================================================================
// IgniteX Web - Site Configuration
// =============================================================================
// Table of Contents:
// 1. Placeholders
// 2. Page Features
// 3. Site Config
// 4. Build Environment
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Placeholders
// -----------------------------------------------------------------------------

/// Placeholder images served by the asset host, by slot size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholders {
    /// Cards, event photos and video thumbnails.
    pub card: String,
    /// Logos and round portraits.
    pub portrait: String,
    /// Full-width hero background.
    pub hero: String,
}

impl Placeholders {
    /// Placeholder URL of the given size on the asset host.
    pub fn sized(width: u32, height: u32) -> String {
        format!("/api/placeholder/{}/{}", width, height)
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            card: Self::sized(400, 320),
            portrait: Self::sized(200, 200),
            hero: Self::sized(1200, 700),
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Page Features
// -----------------------------------------------------------------------------

/// Optional page sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageFeatures {
    pub leadership: bool,
    pub story_carousel: bool,
    pub video_showcase: bool,
}

impl PageFeatures {
    /// Sections chosen at build time: `IGNITEX_HIDDEN_SECTIONS` lists the ones
    /// to leave out, e.g. `leadership,stories`.
    pub fn current() -> Self {
        Self::without(option_env!("IGNITEX_HIDDEN_SECTIONS").unwrap_or(""))
    }

    /// All sections except those named in the comma-separated `hidden` list.
    /// Unknown names are logged and ignored.
    pub fn without(hidden: &str) -> Self {
        let mut features = Self::default();
        for name in hidden.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match name.to_ascii_lowercase().as_str() {
                "leadership" => features.leadership = false,
                "stories" | "story_carousel" => features.story_carousel = false,
                "videos" | "video_showcase" => features.video_showcase = false,
                other => log::warn!("Unknown page section '{}', ignoring", other),
            }
        }
        features
    }
}

impl Default for PageFeatures {
    fn default() -> Self {
        Self {
            leadership: true,
            story_carousel: true,
            video_showcase: true,
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Site Config
// -----------------------------------------------------------------------------

/// Branding and layout settings for the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub club_name: String,
    pub tagline: String,
    pub description: String,
    pub club_logo: String,
    pub college_logo: String,
    pub hero_background: String,
    /// Lines of the college letterhead shown in the header.
    pub college_lines: Vec<String>,
    pub college_name: String,
    pub footer_motto: String,
    pub placeholders: Placeholders,
    pub features: PageFeatures,
}

impl SiteConfig {
    /// Configuration for the IgniteX E-Cell site.
    pub fn ignitex() -> Self {
        Self {
            club_name: "IgniteX".to_string(),
            tagline: "Empowering Tomorrow's Entrepreneurs Today.".to_string(),
            description: "We provide students with the platform, mentorship, and resources to launch impactful startups.".to_string(),
            club_logo: "/images/ecell.jpg".to_string(),
            college_logo: "/images/clglogo.jpg".to_string(),
            hero_background: "/images/ecell.jpg".to_string(),
            college_lines: vec![
                "Children's Education Society ®".to_string(),
                "THE OXFORD COLLEGE OF ENGINEERING".to_string(),
                "Hosur Road, Bommanahalli, Bengaluru-560 068.".to_string(),
                "Approved by AICTE, New Delhi | Accredited by NBA, NAAC | Affiliated to VTU, Belgaum".to_string(),
            ],
            college_name: "The Oxford College of Engineering".to_string(),
            footer_motto: "Fostering Innovation & Entrepreneurship".to_string(),
            placeholders: Placeholders::default(),
            features: PageFeatures::default(),
        }
    }

    /// Builder-style override of the optional sections.
    pub fn with_features(mut self, features: PageFeatures) -> Self {
        self.features = features;
        self
    }

    /// Browser tab title.
    pub fn page_title(&self) -> String {
        format!("{} | E-Cell", self.club_name)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::ignitex()
    }
}

// -----------------------------------------------------------------------------
// 4. Build Environment
// -----------------------------------------------------------------------------

/// Deployment environment, fixed at compile time via `ENVIRONMENT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Read the environment baked in at build time.
    pub fn current() -> Self {
        Self::parse(option_env!("ENVIRONMENT").unwrap_or("production"))
    }

    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("development") {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn log_level(&self) -> log::Level {
        match self {
            Environment::Development => log::Level::Debug,
            Environment::Production => log::Level::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_sizes() {
        let placeholders = Placeholders::default();
        assert_eq!(placeholders.card, "/api/placeholder/400/320");
        assert_eq!(placeholders.portrait, "/api/placeholder/200/200");
        assert_eq!(placeholders.hero, "/api/placeholder/1200/700");
    }

    #[test]
    fn test_all_features_on_by_default() {
        let config = SiteConfig::ignitex();
        assert!(config.features.leadership);
        assert!(config.features.story_carousel);
        assert!(config.features.video_showcase);
    }

    #[test]
    fn test_with_features_overrides_sections() {
        let config = SiteConfig::ignitex().with_features(PageFeatures {
            leadership: false,
            story_carousel: false,
            video_showcase: true,
        });
        assert!(!config.features.leadership);
        assert!(!config.features.story_carousel);
        assert_eq!(config.club_name, "IgniteX");
    }

    #[test]
    fn test_hidden_sections_are_switched_off() {
        let features = PageFeatures::without("leadership, Stories");
        assert!(!features.leadership);
        assert!(!features.story_carousel);
        assert!(features.video_showcase);

        assert_eq!(PageFeatures::without(""), PageFeatures::default());
        assert_eq!(PageFeatures::without("footer,,"), PageFeatures::default());
        assert!(!PageFeatures::without("video_showcase").video_showcase);
    }

    #[test]
    fn test_default_state_uses_build_features() {
        let state = crate::state::AppState::default();
        assert_eq!(state.config.features, PageFeatures::current());
    }

    #[test]
    fn test_page_title() {
        assert_eq!(SiteConfig::ignitex().page_title(), "IgniteX | E-Cell");
    }

    #[test]
    fn test_environment_log_level() {
        assert_eq!(Environment::parse("development").log_level(), log::Level::Debug);
        assert_eq!(Environment::parse("Development"), Environment::Development);
        assert_eq!(Environment::parse("staging").log_level(), log::Level::Info);
        assert_eq!(Environment::parse(""), Environment::Production);
    }
}
