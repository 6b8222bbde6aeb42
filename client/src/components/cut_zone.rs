//! The fixed "Cut Here" drop target.

use leptos::prelude::*;

/// Drop target. The page measures it through `node_ref` on every drag move.
#[component]
pub fn CutZone(node_ref: NodeRef<leptos::html::Div>, message: Signal<String>) -> impl IntoView {
    view! {
        <div class="cutter" node_ref=node_ref>
            <h1 class="cut-here">"Cut Here"</h1>
            <div class="cut-message">
                <input type="text" prop:value=move || message.get() placeholder="Display message" readonly=true/>
            </div>
        </div>
    }
}
