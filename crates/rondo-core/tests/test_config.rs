use rondo_core::{SeqConfig, SeqConfigError, WorkerId};

#[test]
fn test_validation() {
    assert!(SeqConfig::new(1, 0).is_ok());
    assert!(SeqConfig::new(3, 9).is_ok());
    assert_eq!(SeqConfig::new(0, 9), Err(SeqConfigError::NoWorkers(0)));
}

#[test]
fn test_turn_ownership() {
    let config = SeqConfig::new(3, 9).expect("a valid config");
    assert_eq!(config.owner(0), WorkerId::from(0));
    assert_eq!(config.owner(4), WorkerId::from(1));
    assert_eq!(config.owner(8), WorkerId::from(2));
}

#[test]
fn test_worker_display() {
    let id = WorkerId::from(2);
    assert_eq!(id.to_string(), "w2");
    assert_eq!(id.index(), 2);
}
