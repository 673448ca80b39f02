// =============================================================================
// IgniteX Web - Story Carousel
// =============================================================================

use leptos::prelude::*;

use crate::components::common::{FallbackImage, SectionTitle};
use crate::components::icons::{Icon, IconSvg};
use crate::content::Member;
use crate::interaction::StoryCursor;
use crate::state::AppState;

/// One story at a time with a "next" button that wraps around.
///
/// Renders nothing if there are no stories.
#[component]
pub fn StoryCarousel(stories: &'static [Member]) -> impl IntoView {
    let cursor = match StoryCursor::new(stories.len()) {
        Ok(cursor) => RwSignal::new(cursor),
        Err(e) => {
            log::warn!("Skipping stories section: {}", e);
            return ().into_any();
        }
    };

    let app_state = expect_context::<AppState>();
    let placeholder = app_state.config.placeholders.portrait.clone();

    let current = move || stories[cursor.get().index()];
    let next = move |_| {
        cursor.update(|cursor| {
            let index = cursor.next();
            log::debug!("Story carousel at {}/{}", index + 1, cursor.len());
        });
    };

    view! {
        <section class="stories-section">
            <SectionTitle text="Our Stories" />
            <div class="story-layout">
                // Rebuilt per story so each portrait gets its own fallback state
                <div class="story-portrait">
                    {move || {
                        let story = current();
                        view! {
                            <FallbackImage
                                src=story.image
                                placeholder=placeholder.clone()
                                alt=story.name
                                class="story-image"
                            />
                        }
                    }}
                </div>
                <div class="story-text">
                    <h2 class="story-name">{move || current().name}</h2>
                    <p class="story-body">{move || current().message}</p>
                </div>
            </div>
            <button class="story-next" aria-label="Next story" on:click=next>
                <IconSvg icon=Icon::ChevronRight />
            </button>
        </section>
    }
    .into_any()
}
