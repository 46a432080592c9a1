use super::*;

#[test]
fn only_first_request_schedules() {
    let mut gate = FrameGate::new();
    assert!(gate.request());
    for _ in 0..10 {
        assert!(!gate.request());
    }
    assert!(gate.is_pending());
}

#[test]
fn release_rearms_gate() {
    let mut gate = FrameGate::new();
    assert!(!gate.release());
    assert!(gate.request());
    assert!(gate.release());
    assert!(!gate.is_pending());
    assert!(gate.request());
}
