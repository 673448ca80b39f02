// =============================================================================
// IgniteX Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Fallback Image
// 2. Section Heading
// =============================================================================

use leptos::prelude::*;

use crate::interaction::ImageSource;

// -----------------------------------------------------------------------------
// 1. Fallback Image
// -----------------------------------------------------------------------------

/// Image that swaps to `placeholder` the first time it fails to load.
///
/// Every image on the page goes through this component. A failure only
/// affects this instance, and a failing placeholder does not trigger another
/// reload.
#[component]
pub fn FallbackImage(
    #[prop(into)] src: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let source = RwSignal::new(ImageSource::new(src, placeholder));

    let on_error = move |_| {
        source.maybe_update(|image| {
            let swapped = image.fail();
            if swapped {
                log::warn!("Image failed to load, using placeholder: {}", image.primary());
            }
            swapped
        });
    };

    view! {
        <img
            src=move || source.with(|image| image.current().to_string())
            alt=alt
            class=class
            on:error=on_error
        />
    }
}

// -----------------------------------------------------------------------------
// 2. Section Heading
// -----------------------------------------------------------------------------

/// Centered section title.
#[component]
pub fn SectionTitle(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <h2 class="section-title">{text}</h2>
    }
}
