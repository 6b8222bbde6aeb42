//! Messages broadcast by other players.

use cutting::socket::{SocketState, SocketStatus};
use leptos::prelude::*;

/// Lists every peer message in arrival order, plus the socket status.
#[component]
pub fn PeerMessages(socket: RwSignal<SocketState>) -> impl IntoView {
    let status_label = move || match socket.with(|s| s.status) {
        SocketStatus::Connecting => "connecting",
        SocketStatus::Open => "connected",
        SocketStatus::Closed => "disconnected",
    };

    // The log is append-only, so an index is a stable key.
    let entries = move || {
        socket.with(|s| {
            s.peers
                .iter()
                .enumerate()
                .map(|(i, msg)| (i, msg.to_owned()))
                .collect::<Vec<_>>()
        })
    };
    let has_messages = move || socket.with(|s| !s.peers.is_empty());

    view! {
        <div class="peer-messages">
            <h1 class="peer-quotes">"Peer Messages"</h1>
            <span class="peer-status" data-status=status_label>{status_label}</span>
            <Show when=has_messages fallback=|| view! { <input type="text"/> }>
                <div>
                    <For
                        each=entries
                        key=|(i, _)| *i
                        children=|(_, message)| {
                            view! {
                                <div class="peer-message">
                                    <input type="text" prop:value=message readonly=true/>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
