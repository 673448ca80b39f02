// =============================================================================
// IgniteX Web - Presentational Cards
// =============================================================================
// Table of Contents:
// 1. Leader Card
// 2. Team Member Card
// 3. Event Photo Card
// 4. Achievement Card
// 5. Timeline Item
// 6. Archive Link Card
// =============================================================================
//
// Stateless renderers: each is a pure function of its record. Placeholders come
// from the site config in context.

use leptos::prelude::*;

use crate::components::common::FallbackImage;
use crate::components::icons::{Icon, IconSvg};
use crate::content::{Achievement, ArchiveLink, EventRecord, Member, Milestone, Side};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 1. Leader Card
// -----------------------------------------------------------------------------

/// Round portrait, position and quote for a faculty leader.
#[component]
pub fn LeaderCard(member: Member) -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <div class="leader-card">
            <FallbackImage
                src=member.image
                placeholder=app_state.config.placeholders.portrait.clone()
                alt=member.name
                class="leader-portrait"
            />
            <h3 class="leader-name">{member.name}</h3>
            <p class="leader-position">{member.role}</p>
            <p class="leader-quote">{format!("\"{}\"", member.message)}</p>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Team Member Card
// -----------------------------------------------------------------------------

#[component]
pub fn TeamMemberCard(member: Member) -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <div class="team-card">
            <FallbackImage
                src=member.image
                placeholder=app_state.config.placeholders.card.clone()
                alt=member.name
                class="team-photo"
            />
            <div class="team-body">
                <h3 class="team-name">{member.name}</h3>
                <p class="team-role">{member.role}</p>
                <p class="team-story">{member.message}</p>
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Event Photo Card
// -----------------------------------------------------------------------------

#[component]
pub fn EventPhotoCard(event: EventRecord) -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <div class="event-card">
            <FallbackImage
                src=event.image
                placeholder=app_state.config.placeholders.card.clone()
                alt=event.title
                class="event-photo"
            />
            <div class="event-overlay">
                <div class="event-caption">
                    <h3>{event.title}</h3>
                    <p>{event.description}</p>
                </div>
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 4. Achievement Card
// -----------------------------------------------------------------------------

#[component]
pub fn AchievementCard(achievement: Achievement) -> impl IntoView {
    view! {
        <div class="achievement-card">
            <div class="achievement-icon">
                <IconSvg icon=achievement.icon />
            </div>
            <h3 class="achievement-title">{achievement.title}</h3>
            <p class="achievement-stat">{achievement.stat}</p>
            <p class="achievement-desc">{achievement.description}</p>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 5. Timeline Item
// -----------------------------------------------------------------------------

/// One milestone; `side` picks the column on wide screens.
#[component]
pub fn TimelineItem(milestone: Milestone) -> impl IntoView {
    let row_class = match milestone.side {
        Side::Left => "timeline-row timeline-left",
        Side::Right => "timeline-row timeline-right",
    };

    view! {
        <div class=row_class>
            <div class="timeline-content">
                <div class="timeline-card">
                    <h3>{milestone.title}</h3>
                    <p class="timeline-date">{milestone.date}</p>
                    <p class="timeline-text">{milestone.content}</p>
                </div>
            </div>
            <div class="timeline-marker">
                <IconSvg icon=milestone.icon />
            </div>
            <div class="timeline-spacer"></div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 6. Archive Link Card
// -----------------------------------------------------------------------------

/// External photo archive, opened in a new tab.
#[component]
pub fn ArchiveLinkCard(link: ArchiveLink) -> impl IntoView {
    view! {
        <a href=link.url target="_blank" rel="noopener noreferrer" class="archive-link">
            <div class="archive-main">
                <IconSvg icon=Icon::Image class="archive-icon" />
                <div>
                    <h3 class="archive-title">{link.title}</h3>
                    <p class="archive-desc">{link.description}</p>
                </div>
            </div>
            <IconSvg icon=Icon::Link class="archive-arrow" />
        </a>
    }
}
