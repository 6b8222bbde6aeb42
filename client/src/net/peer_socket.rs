//! Broadcast socket client.
//!
//! One connection per mounted play page, no reconnect. The transport task
//! never touches UI state directly: it reports `SocketEvent`s into a queue,
//! and a second task folds them into the page's `SocketState` signal.
//! Outbound cut messages travel the other way through the `PeerSender`
//! channel.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors are logged and end the connection (status `Closed`).
//! Sends while the socket is not open are dropped without notice.

#[cfg(test)]
#[path = "peer_socket_test.rs"]
mod peer_socket_test;

use cutting::socket::SocketState;
#[cfg(any(feature = "csr", test))]
use cutting::socket::SocketEvent;
#[cfg(any(feature = "csr", test))]
use futures::channel::mpsc::UnboundedSender;
#[cfg(feature = "csr")]
use futures::channel::mpsc::UnboundedReceiver;
#[cfg(any(feature = "csr", test))]
use futures::{Sink, SinkExt};
#[cfg(feature = "csr")]
use leptos::prelude::RwSignal;

/// Handle for sending text frames to peers.
///
/// A default handle has no connection behind it and sends nothing.
#[derive(Clone, Debug, Default)]
pub struct PeerSender {
    #[cfg(feature = "csr")]
    tx: Option<UnboundedSender<String>>,
}

impl PeerSender {
    /// Queue `message` verbatim for the socket if `state` says it is open.
    ///
    /// Returns `false` when the message was skipped.
    pub fn send(&self, state: &SocketState, message: &str) -> bool {
        state.can_send() && self.forward(message)
    }

    #[cfg(feature = "csr")]
    fn forward(&self, message: &str) -> bool {
        self.tx
            .as_ref()
            .is_some_and(|tx| tx.unbounded_send(message.to_owned()).is_ok())
    }

    #[cfg(not(feature = "csr"))]
    fn forward(&self, _message: &str) -> bool {
        false
    }

    /// Close the outbound channel, which closes the socket.
    pub fn close(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(tx) = &self.tx {
                tx.close_channel();
            }
        }
    }
}

/// Hand `event` to the state consumer. Returns `false` once the page that
/// owned the socket has gone away.
#[cfg(any(feature = "csr", test))]
fn report(events: &UnboundedSender<SocketEvent>, event: SocketEvent) -> bool {
    if events.unbounded_send(event).is_err() {
        leptos::logging::warn!("peer socket event dropped: page state is gone");
        return false;
    }
    true
}

/// Wait out the handshake on the unsplit socket, then report `Opened`.
///
/// A `SplitSink` is ready whenever its own slot is free, so readiness must be
/// polled before splitting. `is_open` tells a completed handshake apart from
/// one that failed, since a closed socket is also "ready".
///
/// Returns `Ok(false)` when the socket ended without opening.
#[cfg(any(feature = "csr", test))]
async fn await_open<S, T>(
    ws: &mut S,
    is_open: impl Fn(&S) -> bool,
    events: &UnboundedSender<SocketEvent>,
) -> Result<bool, S::Error>
where
    S: Sink<T> + Unpin,
{
    futures::future::poll_fn(|cx| ws.poll_ready_unpin(cx)).await?;
    if !is_open(ws) {
        return Ok(false);
    }
    report(events, SocketEvent::Opened);
    Ok(true)
}

/// Open the socket at `url` and keep `socket` in sync with it.
#[cfg(feature = "csr")]
pub fn spawn_peer_socket(url: String, socket: RwSignal<SocketState>) -> PeerSender {
    use futures::channel::mpsc;

    let (out_tx, out_rx) = mpsc::unbounded::<String>();
    let (event_tx, event_rx) = mpsc::unbounded::<SocketEvent>();

    leptos::task::spawn_local(apply_socket_events(event_rx, socket));
    leptos::task::spawn_local(async move {
        if let Err(e) = run_socket(&url, out_rx, &event_tx).await {
            log::warn!("peer socket error: {e}");
        }
        report(&event_tx, SocketEvent::Closed);
        log::info!("peer socket disconnected");
    });

    PeerSender { tx: Some(out_tx) }
}

/// Drain transport events into the page state until the page goes away.
#[cfg(feature = "csr")]
async fn apply_socket_events(mut events: UnboundedReceiver<SocketEvent>, socket: RwSignal<SocketState>) {
    use futures::StreamExt;
    use leptos::prelude::Update;

    while let Some(event) = events.next().await {
        if socket.try_update(|s| s.apply(event)).is_none() {
            break;
        }
    }
}

/// Connect, then pump frames both ways until either side ends.
#[cfg(feature = "csr")]
async fn run_socket(
    url: &str,
    mut outbound: UnboundedReceiver<String>,
    events: &UnboundedSender<SocketEvent>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::futures::WebSocket;
    use gloo_net::websocket::{Message, State};

    let mut ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let is_open = |ws: &WebSocket| matches!(ws.state(), State::Open);
    let opened = await_open::<_, Message>(&mut ws, is_open, events)
        .await
        .map_err(|e| e.to_string())?;
    if !opened {
        return Err(format!("handshake with {url} failed"));
    }
    log::info!("peer socket connected: {url}");

    let (mut ws_write, mut ws_read) = ws.split();
    {
        let send_task = async {
            while let Some(msg) = outbound.next().await {
                if ws_write.send(Message::Text(msg)).await.is_err() {
                    break;
                }
            }
        };

        let recv_task = async {
            while let Some(msg) = ws_read.next().await {
                match msg {
                    Ok(Message::Text(text)) => {
                        if !report(events, SocketEvent::Received(text)) {
                            break;
                        }
                    }
                    Ok(Message::Bytes(_)) => {}
                    Err(e) => {
                        log::warn!("peer socket recv error: {e}");
                        break;
                    }
                }
            }
        };

        futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    }

    ws_write.close().await.map_err(|e| e.to_string())
}
