// =============================================================================
// IgniteX Web - Main App Component
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};

use crate::pages::HomePage;
use crate::state::AppState;

/// Root component: provides state and document head, renders the page.
///
/// The site is a single view, so there is no router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app_state = AppState::default();
    let title = app_state.config.page_title();
    let description = app_state.config.description.clone();

    provide_context(app_state);

    view! {
        <Title text=title />
        <Meta name="description" content=description />
        <HomePage />
    }
}
