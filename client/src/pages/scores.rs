//! Scores page: the last message cut for each color.

use cutting::scores::ScoreMap;
use leptos::prelude::*;

/// Route wrapper: hands the container's score map to `Scores` read-only.
#[component]
pub fn ScoresPage() -> impl IntoView {
    let scores = expect_context::<RwSignal<ScoreMap>>();

    view! { <Scores scores=scores.read_only()/> }
}

/// Fixed five-row table of color → message.
#[component]
pub fn Scores(#[prop(into)] scores: Signal<ScoreMap>) -> impl IntoView {
    view! {
        <main class="scores">
            <div>
                <h1 class="old-messages">"Old Messages"</h1>
            </div>
            <div>
                <table class="colorful-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Color"</th>
                            <th>"Message"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            scores.with(|s| {
                                s.rows()
                                    .map(|row| {
                                        let message = row.message.to_owned();
                                        view! {
                                            <tr>
                                                <th>{row.rank}</th>
                                                <th>{row.color.label()}</th>
                                                <td>
                                                    <input type="text" prop:value=message readonly=true/>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </tbody>
                </table>
            </div>
        </main>
    }
}
