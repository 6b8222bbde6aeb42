use super::*;

#[test]
fn starts_connecting_and_cannot_send() {
    let state = SocketState::default();
    assert_eq!(state.status, SocketStatus::Connecting);
    assert!(!state.can_send());
}

#[test]
fn opened_then_closed() {
    let mut state = SocketState::default();
    state.apply(SocketEvent::Opened);
    assert!(state.can_send());
    state.apply(SocketEvent::Closed);
    assert_eq!(state.status, SocketStatus::Closed);
    assert!(!state.can_send());
}

#[test]
fn late_open_does_not_reopen_closed_socket() {
    let mut state = SocketState::default();
    state.apply(SocketEvent::Closed);
    state.apply(SocketEvent::Opened);
    assert_eq!(state.status, SocketStatus::Closed);
}

#[test]
fn received_messages_append_in_order() {
    let mut state = SocketState::default();
    state.apply(SocketEvent::Opened);
    state.apply(SocketEvent::Received("one".to_owned()));
    state.apply(SocketEvent::Received("two".to_owned()));
    state.apply(SocketEvent::Closed);

    assert_eq!(state.peers.iter().collect::<Vec<_>>(), ["one", "two"]);
}
