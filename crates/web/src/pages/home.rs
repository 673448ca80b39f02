// =============================================================================
// IgniteX Web - Home Page
// =============================================================================
// Table of Contents:
// 1. Home Page
// 2. Hero
// 3. Leadership
// 4. Event Highlights
// 5. Video Showcase
// 6. Journey Timeline
// 7. Achievements
// 8. Team
// 9. Photo Archives
// =============================================================================

use leptos::prelude::*;

use crate::components::{
    AchievementCard, ArchiveLinkCard, EventPhotoCard, FallbackImage, Footer, Icon, IconSvg,
    LeaderCard, SectionTitle, SiteHeader, StoryCarousel, TeamMemberCard, TimelineItem, VideoCard,
};
use crate::services::use_header_density;
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 1. Home Page
// -----------------------------------------------------------------------------

/// The whole site: fixed sections top to bottom, optional ones gated by
/// `PageFeatures`.
///
/// Owns the page-wide header density; the scroll listener behind it lives as
/// long as this page is mounted.
#[component]
pub fn HomePage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let features = app_state.config.features;
    let stories = app_state.feed.stories;

    let density = use_header_density();

    view! {
        <div class="page page-home">
            <SiteHeader density=density />
            <HeroSection />
            {features.leadership.then(|| view! { <LeadershipSection /> })}
            <EventsSection />
            {features.video_showcase.then(|| view! { <VideoShowcase /> })}
            <TimelineSection />
            <AchievementsSection />
            <TeamSection />
            {features.story_carousel.then(|| view! { <StoryCarousel stories=stories /> })}
            <ArchiveSection />
            <Footer />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Hero
// -----------------------------------------------------------------------------

#[component]
fn HeroSection() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let config = app_state.config.clone();

    view! {
        <section id="hero" class="hero">
            <FallbackImage
                src=config.hero_background.clone()
                placeholder=config.placeholders.hero.clone()
                alt="E-Cell Hero"
                class="hero-bg"
            />
            <div class="hero-shade"></div>
            <div class="hero-content">
                <div class="hero-brand">
                    <IconSvg icon=Icon::Zap class="hero-icon" />
                    <h1 class="hero-title">{config.club_name.clone()}</h1>
                </div>
                <p class="hero-tagline">{config.tagline.clone()}</p>
                <p class="hero-description">{config.description.clone()}</p>
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 3. Leadership
// -----------------------------------------------------------------------------

#[component]
fn LeadershipSection() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <section class="section leadership-section">
            <h2 class="section-title section-title-accent">"Our Leadership"</h2>
            <div class="leader-grid">
                {app_state.feed.leaders.iter().map(|member| view! {
                    <LeaderCard member=*member />
                }).collect_view()}
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 4. Event Highlights
// -----------------------------------------------------------------------------

#[component]
fn EventsSection() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <section class="section events-section">
            <SectionTitle text="Events Highlights" />
            <div class="card-grid card-grid-3">
                {app_state.feed.events.iter().map(|event| view! {
                    <EventPhotoCard event=*event />
                }).collect_view()}
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 5. Video Showcase
// -----------------------------------------------------------------------------

#[component]
fn VideoShowcase() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <section class="section videos-section">
            <SectionTitle text="Featured Videos" />
            <div class="card-grid card-grid-2">
                {app_state.feed.videos.iter().map(|video| view! {
                    <VideoCard video=*video />
                }).collect_view()}
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 6. Journey Timeline
// -----------------------------------------------------------------------------

#[component]
fn TimelineSection() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <section class="section timeline-section">
            <SectionTitle text="Our Journey to Excellence" />
            <div class="timeline">
                <div class="timeline-axis"></div>
                {app_state.feed.milestones.iter().map(|milestone| view! {
                    <TimelineItem milestone=*milestone />
                }).collect_view()}
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 7. Achievements
// -----------------------------------------------------------------------------

#[component]
fn AchievementsSection() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <section class="section achievements-section">
            <SectionTitle text="Impact & Achievements" />
            <div class="card-grid card-grid-3">
                {app_state.feed.achievements.iter().map(|achievement| view! {
                    <AchievementCard achievement=*achievement />
                }).collect_view()}
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 8. Team
// -----------------------------------------------------------------------------

/// Core team in a grid, extended team in a horizontal snap scroller.
#[component]
fn TeamSection() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let feed = app_state.feed;

    view! {
        <section class="section team-section">
            <SectionTitle text="Meet Our Team" />
            <div class="card-grid card-grid-3 core-team">
                {feed.core_team.iter().map(|member| view! {
                    <TeamMemberCard member=*member />
                }).collect_view()}
            </div>
            <div class="team-scroller">
                {feed.extended_team.iter().map(|member| view! {
                    <div class="team-scroller-item">
                        <TeamMemberCard member=*member />
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 9. Photo Archives
// -----------------------------------------------------------------------------

#[component]
fn ArchiveSection() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <section class="section archive-section">
            <SectionTitle text="Event Gallery" />
            <div class="archive-list">
                {app_state.feed.archives.iter().map(|link| view! {
                    <ArchiveLinkCard link=*link />
                }).collect_view()}
            </div>
        </section>
    }
}
