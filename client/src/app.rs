//! Root application component: the container that owns shared state.

use cutting::scores::ScoreMap;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::config::ClientConfig;
use crate::pages::{play::PlayPage, scores::ScoresPage};
use crate::state::session::SessionState;

/// Root application component.
///
/// Owns the score map shared by Play (writer) and Scores (reader), the
/// session, and the resolved client configuration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ClientConfig::from_build_env());
    provide_context(RwSignal::new(SessionState::load()));
    provide_context(RwSignal::new(ScoreMap::default()));

    view! {
        <Title text="Cut Here"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PlayPage/>
                <Route path=StaticSegment("scores") view=ScoresPage/>
            </Routes>
        </Router>
    }
}
