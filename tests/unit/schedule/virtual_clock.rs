use super::*;

#[test]
fn sleep_advances_to_deadline() {
    let clock = VirtualClock::new();
    let out = clock.run(async {
        clock.sleep(Millis(400)).await;
        clock.now()
    });
    assert_eq!(out, Some(Millis(400)));
}

#[test]
fn sequential_sleeps_accumulate() {
    let clock = VirtualClock::new();
    clock
        .run(async {
            clock.sleep(Millis(400)).await;
            clock.sleep(Millis(1600)).await;
        })
        .unwrap();
    assert_eq!(clock.now(), Millis(2000));
}

#[test]
fn concurrent_sleeps_finish_at_the_latest_deadline() {
    let clock = VirtualClock::new();
    clock
        .run(futures::future::join3(
            clock.sleep(Millis(120)),
            clock.sleep(Millis(200)),
            clock.sleep(Millis(50)),
        ))
        .unwrap();
    assert_eq!(clock.now(), Millis(200));
}

#[test]
fn next_frame_uses_frame_interval() {
    let clock = VirtualClock::with_frame_interval(Millis(10));
    clock.run(clock.next_frame()).unwrap();
    assert_eq!(clock.now(), Millis(10));
}

#[test]
fn pending_future_stalls_without_advancing_forever() {
    let clock = VirtualClock::new();
    let out = clock.run(futures::future::pending::<()>());
    assert!(out.is_none());
    assert_eq!(clock.now(), Millis::ZERO);
}

#[test]
fn select_resolves_with_earliest_timer() {
    use futures::future::{Either, select};

    let clock = VirtualClock::new();
    let out = clock
        .run(async {
            let slow = std::pin::pin!(clock.sleep(Millis(1500)));
            let fast = std::pin::pin!(clock.sleep(Millis(200)));
            match select(slow, fast).await {
                Either::Left(_) => "slow",
                Either::Right(_) => "fast",
            }
        })
        .unwrap();
    assert_eq!(out, "fast");
    assert_eq!(clock.now(), Millis(200));
}

#[test]
fn many_timers_inside_join_all_are_woken() {
    let clock = VirtualClock::new();
    let sleeps: Vec<_> = (1..=64).map(|i| clock.sleep(Millis(i * 10))).collect();
    clock.run(futures::future::join_all(sleeps)).unwrap();
    assert_eq!(clock.now(), Millis(640));
}
