//! Quote panel with a refresh button.

use cutting::quote::QuoteState;
use leptos::prelude::*;

#[component]
pub fn QuotePanel(quote: RwSignal<QuoteState>, on_request: Callback<()>) -> impl IntoView {
    view! {
        <div class="grid-3">
            <h1 class="quote">"Ron Swanson Quote"</h1>
            <div class="quote-display">
                {move || {
                    let state = quote.get();
                    if state.error().is_empty() {
                        view! {
                            <input
                                type="text"
                                class="quote-input"
                                prop:value=state.display_text().to_owned()
                                readonly=true
                            />
                        }
                            .into_any()
                    } else {
                        view! { <p style:color="red">{state.error().to_owned()}</p> }.into_any()
                    }
                }}
            </div>
            <button class="generate-quote-btn" on:click=move |_| on_request.run(())>
                "Get New Quote"
            </button>
        </div>
    }
}
