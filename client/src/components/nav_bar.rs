//! Top navigation between the play field and the scores table.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionState;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let user_name = move || session.with(|s| s.user_name.clone());

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__title">"Cut Here"</span>
            <A href="/">"Play"</A>
            <A href="/scores">"Scores"</A>
            <Show when=move || !user_name().is_empty()>
                <span class="nav-bar__user">{user_name}</span>
            </Show>
        </nav>
    }
}
