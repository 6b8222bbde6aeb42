use super::*;

#[test]
fn default_log_is_empty() {
    let log = PeerLog::default();
    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
}

#[test]
fn keeps_arrival_order_and_duplicates() {
    let mut log = PeerLog::default();
    for msg in ["b", "a", "b", "", "c"] {
        log.push(msg);
    }
    assert_eq!(log.iter().collect::<Vec<_>>(), ["b", "a", "b", "", "c"]);
    assert_eq!(log.len(), 5);
}

#[test]
fn grows_without_pruning() {
    let mut log = PeerLog::default();
    for i in 0..10_000 {
        log.push(i.to_string());
    }
    assert_eq!(log.len(), 10_000);
    assert_eq!(log.iter().next(), Some("0"));
    assert_eq!(log.iter().last(), Some("9999"));
}
