// =============================================================================
// IgniteX Web - Site Header
// =============================================================================

use leptos::prelude::*;

use crate::components::common::FallbackImage;
use crate::interaction::HeaderDensity;
use crate::state::AppState;

/// College letterhead flanked by the college and club logos.
///
/// Sizing is a pure function of `density`, which the page derives from the
/// scroll position and passes in.
#[component]
pub fn SiteHeader(#[prop(into)] density: Signal<HeaderDensity>) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let config = app_state.config.clone();

    let lines = config
        .college_lines
        .iter()
        .map(|line| view! { <span class="header-line">{line.clone()}</span> })
        .collect_view();

    view! {
        <header class=move || density.get().header_class()>
            <div class="header-bar">
                <div class=move || density.get().logo_class()>
                    <FallbackImage
                        src=config.college_logo.clone()
                        placeholder=config.placeholders.portrait.clone()
                        alt="College Logo"
                    />
                </div>
                <h2 class=move || density.get().title_class()>{lines}</h2>
                <div class=move || density.get().logo_class()>
                    <FallbackImage
                        src=config.club_logo.clone()
                        placeholder=config.placeholders.portrait.clone()
                        alt="E-Cell Logo"
                    />
                </div>
            </div>
        </header>
    }
}
