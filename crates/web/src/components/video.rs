// =============================================================================
// IgniteX Web - Video Card
// =============================================================================

use leptos::prelude::*;

use crate::components::common::FallbackImage;
use crate::components::icons::{Icon, IconSvg};
use crate::content::VideoRecord;
use crate::interaction::VideoReveal;
use crate::media::{resolve_video_source, VideoSource};
use crate::state::AppState;

/// Showcase card: thumbnail with play button until clicked, then the player.
///
/// There is no way back to the thumbnail once the player is shown.
#[component]
pub fn VideoCard(video: VideoRecord) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let placeholder = app_state.config.placeholders.card.clone();

    let reveal = RwSignal::new(VideoReveal::default());
    let play = move |_| {
        reveal.maybe_update(|state| {
            let revealed = state.activate();
            if revealed {
                log::debug!("Playing video: {}", video.title);
            }
            revealed
        });
    };

    view! {
        <div class="video-card">
            {move || if reveal.get().is_playing() {
                view! {
                    <VideoPlayer source=resolve_video_source(video.source) title=video.title />
                }.into_any()
            } else {
                view! {
                    <div class="video-thumb" on:click=play>
                        <FallbackImage
                            src=video.thumbnail
                            placeholder=placeholder.clone()
                            alt=video.title
                            class="video-thumb-image"
                        />
                        <div class="video-play-overlay">
                            <span class="video-play-button">
                                <IconSvg icon=Icon::Play />
                            </span>
                        </div>
                        <span class="video-duration">{video.duration}</span>
                    </div>
                }.into_any()
            }}
            <div class="video-info">
                <h3>{video.title}</h3>
                <p>{video.description}</p>
            </div>
        </div>
    }
}

/// Player for a revealed video: a frame for drive links, a native `<video>`
/// otherwise.
#[component]
fn VideoPlayer(source: VideoSource, #[prop(into)] title: String) -> impl IntoView {
    let url = source.url().to_string();

    if source.is_framed() {
        view! {
            <div class="video-frame">
                <iframe src=url title=title allowfullscreen=true allow="autoplay"></iframe>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="video-frame">
                <video controls=true autoplay=true>
                    <source src=url type="video/mp4" />
                    "Your browser does not support the video tag."
                </video>
            </div>
        }
        .into_any()
    }
}
