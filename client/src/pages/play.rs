//! Play page: five draggable tiles, the cut zone, peer messages and a quote.

use cutting::quote::QuoteState;
use cutting::scores::ScoreMap;
use cutting::socket::SocketState;
use cutting::{PlayState, TileColor};
use leptos::prelude::*;

use crate::components::cut_zone::CutZone;
use crate::components::peer_messages::PeerMessages;
use crate::components::quote_panel::QuotePanel;
use crate::components::tile::Tile;
use crate::config::ClientConfig;
use crate::net::peer_socket::PeerSender;
use crate::state::session::SessionState;

/// Route wrapper: feeds `Play` from the container's session and score map.
#[component]
pub fn PlayPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let scores = expect_context::<RwSignal<ScoreMap>>();
    let user_name = Signal::derive(move || session.with(|s| s.user_name.clone()));

    view! { <Play user_name=user_name set_scores=scores.write_only()/> }
}

/// The game field.
///
/// Owns drag, socket and quote state for as long as it is mounted. Opens the
/// broadcast socket on mount and closes it on unmount. A cut is written
/// through `set_scores` and sent to peers if the socket is open. The quote
/// panel stays on its loading text until the first button click.
#[component]
pub fn Play(user_name: Signal<String>, set_scores: WriteSignal<ScoreMap>) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let play = RwSignal::new(PlayState::default());
    let socket = RwSignal::new(SocketState::default());
    let quote = RwSignal::new(QuoteState::default());
    let cut_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    let peer_sender = {
        let (protocol, hostname) = crate::util::dom::page_location();
        crate::net::peer_socket::spawn_peer_socket(config.socket_url(&protocol, &hostname), socket)
    };
    #[cfg(not(feature = "csr"))]
    let peer_sender = PeerSender::default();
    let sender = StoredValue::new(peer_sender);

    let quote_url = config.quote_url.clone();
    let request_quote = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let url = quote_url.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::quote_api::fetch_quotes(&url).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("quote fetch failed: {e}");
                }
                quote.try_update(|q| q.apply(result));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &quote_url;
        }
    });

    let track_pointer = move |ev: leptos::ev::MouseEvent| {
        if !play.with_untracked(PlayState::is_dragging) {
            return;
        }
        let pointer = crate::util::dom::pointer(&ev);
        #[cfg(feature = "csr")]
        let zone = cut_ref.get_untracked().map(|el| crate::util::dom::element_rect(&el));
        #[cfg(not(feature = "csr"))]
        let zone = None;
        play.update(|p| p.continue_drag(pointer, zone));
    };

    let finish_drag = move || {
        if !play.with_untracked(PlayState::is_dragging) {
            return;
        }
        let Some(cut) = play.try_update(PlayState::end_drag).flatten() else {
            return;
        };
        set_scores.update(|s| s.apply_cut(&cut));
        let sent = socket.with_untracked(|state| sender.with_value(|tx| tx.send(state, &cut.message)));
        if !sent {
            leptos::logging::log!("socket not open; {} cut was not broadcast", cut.tile);
        }
    };

    #[cfg(feature = "csr")]
    {
        let move_handle = window_event_listener(leptos::ev::mousemove, track_pointer);
        let up_handle = window_event_listener(leptos::ev::mouseup, move |_| finish_drag());
        on_cleanup(move || {
            move_handle.remove();
            up_handle.remove();
            sender.with_value(PeerSender::close);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (track_pointer, finish_drag);
    }

    view! {
        <main class="play">
            <Show when=move || !user_name.get().is_empty()>
                <p class="player-name">"Playing as " {move || user_name.get()}</p>
            </Show>

            <div class="place-2">
                {TileColor::ALL
                    .into_iter()
                    .map(|color| view! { <Tile color=color play=play/> })
                    .collect::<Vec<_>>()}
                <CutZone
                    node_ref=cut_ref
                    message=Signal::derive(move || play.with(|p| p.cut_message.clone()))
                />
            </div>

            <PeerMessages socket=socket/>
            <QuotePanel quote=quote on_request=request_quote/>
        </main>
    }
}
