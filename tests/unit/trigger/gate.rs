use super::*;

#[test]
fn starts_closed() {
    let gate = SequenceGate::new();
    assert!(!gate.sequence_started());
    assert!(!gate.trigger_scheduled());
}

#[test]
fn only_one_schedule_at_a_time() {
    let mut gate = SequenceGate::new();
    assert!(gate.try_schedule());
    assert!(!gate.try_schedule());
    assert!(gate.trigger_scheduled());
}

#[test]
fn start_happens_once_and_never_resets() {
    let mut gate = SequenceGate::new();
    assert!(gate.try_schedule());
    assert!(gate.try_start());
    assert!(gate.sequence_started());
    assert!(!gate.trigger_scheduled());

    assert!(!gate.try_schedule());
    assert!(!gate.try_start());
    assert!(gate.sequence_started());
}
