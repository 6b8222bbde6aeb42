//! `cut-cli`: a terminal peer for the Cut Here broadcast socket.
//!
//! Speaks the same raw-text WebSocket the browser client uses, so it can cut
//! a message, watch what other players cut, or sit in the room as an
//! interactive peer. It can also fetch a quote with the browser's rules.


use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use cutting::endpoint::{QUOTE_URL, SOCKET_PATH, SOCKET_PORT, Scheme, SocketEndpoint};
use cutting::peer::PeerLog;
use cutting::quote::{QuoteError, QuoteState, check_status, decode_quotes};
use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::{self, Message};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("refusing to send an empty message")]
    EmptyMessage,
    #[error("{0}")]
    Quote(String),
    #[error("websocket connect failed: {0}")]
    WsConnect(Box<tungstenite::Error>),
    #[error("websocket error: {0}")]
    Ws(Box<tungstenite::Error>),
    #[error("websocket closed after {received} of {expected} messages")]
    WsClosed { received: usize, expected: usize },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

fn ws_error(error: tungstenite::Error) -> CliError {
    CliError::Ws(Box::new(error))
}

/// Errors that just mean the other side already finished the close handshake.
fn is_closed(error: &tungstenite::Error) -> bool {
    matches!(error, tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed)
}

#[derive(Parser, Debug)]
#[command(name = "cut-cli", about = "Terminal peer for the Cut Here broadcast socket")]
struct Cli {
    /// Host running the broadcast socket.
    #[arg(long, env = "CUT_HERE_HOST", default_value = "localhost")]
    host: String,

    #[arg(long, env = "CUT_HERE_PORT", default_value_t = SOCKET_PORT)]
    port: u16,

    #[arg(long, env = "CUT_HERE_SOCKET_PATH", default_value = SOCKET_PATH)]
    path: String,

    /// Connect with `wss` instead of `ws`.
    #[arg(long)]
    secure: bool,

    #[arg(long, env = "CUT_HERE_QUOTE_URL", default_value = QUOTE_URL)]
    quote_url: String,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn socket_url(&self) -> String {
        let endpoint = SocketEndpoint { port: self.port, path: self.path.clone() };
        endpoint.url(Scheme::from_secure(self.secure), &self.host)
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Fetch and print a quote.
    Quote,
    /// Cut a message: send it to every peer, then disconnect.
    Send { message: String },
    /// Print peer messages as they arrive.
    Listen {
        /// Stop after this many messages.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Send each stdin line while printing peer messages.
    Peer,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let url = cli.socket_url();
    let mut stdout = io::stdout();

    match cli.command {
        Command::Quote => {
            let client = reqwest::Client::new();
            let quote = resolve_quote(&client, &cli.quote_url).await?;
            writeln!(stdout, "{quote}")?;
            Ok(())
        }
        Command::Send { message } => send_message(&url, &message).await,
        Command::Listen { limit } => listen(&url, limit, &mut stdout).await.map(|_| ()),
        Command::Peer => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            peer(&url, stdin, &mut stdout).await.map(|_| ())
        }
    }
}

/// `GET` the quote provider and return its decoded list.
async fn fetch_quotes(client: &reqwest::Client, url: &str) -> Result<Vec<String>, QuoteError> {
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| QuoteError::Network(e.to_string()))?;
    let status = resp.status();
    check_status(status.as_u16(), status.canonical_reason().unwrap_or_default())?;
    let body = resp
        .text()
        .await
        .map_err(|e| QuoteError::Network(e.to_string()))?;
    decode_quotes(&body)
}

/// Fetch a quote and apply the panel rules: the quote text on success, the
/// user-facing failure message as an error otherwise.
async fn resolve_quote(client: &reqwest::Client, url: &str) -> Result<String, CliError> {
    let result = fetch_quotes(client, url).await;
    if let Err(e) = &result {
        tracing::warn!(error = %e, url, "quote fetch failed");
    }

    let mut state = QuoteState::default();
    state.apply(result);
    match state {
        QuoteState::Ready(quote) => Ok(quote),
        other => Err(CliError::Quote(other.error().to_owned())),
    }
}

/// Send one text frame with `message` verbatim and close the connection.
async fn send_message(url: &str, message: &str) -> Result<(), CliError> {
    if message.is_empty() {
        return Err(CliError::EmptyMessage);
    }

    let (mut stream, _) = connect_async(url)
        .await
        .map_err(|error| CliError::WsConnect(Box::new(error)))?;
    tracing::info!(url, "connected");

    stream.send(Message::text(message)).await.map_err(ws_error)?;
    stream.close(None).await.map_err(ws_error)?;

    // Drain until the server answers the close.
    while let Some(msg) = stream.next().await {
        if let Err(e) = msg {
            if !is_closed(&e) {
                tracing::debug!(error = %e, "close handshake incomplete");
            }
            break;
        }
    }
    Ok(())
}

/// Print `[n] text` for each peer message until the socket closes or
/// `limit` messages have arrived.
async fn listen(url: &str, limit: Option<usize>, out: &mut impl Write) -> Result<PeerLog, CliError> {
    let (mut stream, _) = connect_async(url)
        .await
        .map_err(|error| CliError::WsConnect(Box::new(error)))?;
    tracing::info!(url, "listening");

    let mut log = PeerLog::default();
    if limit == Some(0) {
        stream.close(None).await.map_err(ws_error)?;
        return Ok(log);
    }

    while let Some(msg) = stream.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                log.push(text.as_str());
                writeln!(out, "[{}] {}", log.len(), text.as_str())?;
                if limit == Some(log.len()) {
                    stream.close(None).await.map_err(ws_error)?;
                    return Ok(log);
                }
            }
            Ok(_) => {}
            Err(e) if is_closed(&e) => break,
            Err(e) => return Err(ws_error(e)),
        }
    }

    match limit {
        Some(expected) => Err(CliError::WsClosed { received: log.len(), expected }),
        None => Ok(log),
    }
}

/// Interactive peer: every non-empty input line is sent as a cut, every
/// incoming text frame is printed. Ends when the socket closes; end of input
/// starts a graceful close.
async fn peer<R>(url: &str, input: R, out: &mut impl Write) -> Result<PeerLog, CliError>
where
    R: AsyncBufRead + Unpin,
{
    let (stream, _) = connect_async(url)
        .await
        .map_err(|error| CliError::WsConnect(Box::new(error)))?;
    tracing::info!(url, "peer connected");
    let (mut write, mut read) = stream.split();

    let mut lines = input.lines();
    let mut input_done = false;
    let mut log = PeerLog::default();

    loop {
        tokio::select! {
            line = lines.next_line(), if !input_done => {
                match line? {
                    Some(line) if line.is_empty() => {}
                    Some(line) => write.send(Message::text(line)).await.map_err(ws_error)?,
                    None => {
                        input_done = true;
                        write.close().await.map_err(ws_error)?;
                    }
                }
            }
            incoming = read.next() => {
                match incoming {
                    Some(Ok(Message::Text(text))) => {
                        log.push(text.as_str());
                        writeln!(out, "[{}] {}", log.len(), text.as_str())?;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) if is_closed(&e) => break,
                    Some(Err(e)) => return Err(ws_error(e)),
                    None => break,
                }
            }
        }
    }

    Ok(log)
}
