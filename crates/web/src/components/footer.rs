// =============================================================================
// IgniteX Web - Footer Component
// =============================================================================

use leptos::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::state::AppState;

#[component]
pub fn Footer() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let config = app_state.config.clone();

    view! {
        <footer class="site-footer">
            <div class="footer-brand">
                <IconSvg icon=Icon::Zap class="footer-icon" />
                <span class="footer-name">{config.club_name.clone()}</span>
            </div>
            <p class="footer-college">{config.college_name.clone()}</p>
            <p class="footer-motto">{config.footer_motto.clone()}</p>
        </footer>
    }
}
