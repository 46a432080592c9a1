use super::*;

#[test]
fn progress_is_offset_over_height() {
    let cache = ViewportCache::new(250.0, 1000.0);
    assert_eq!(cache.progress(), Some(0.25));
}

#[test]
fn progress_clamps_both_ends() {
    assert_eq!(ViewportCache::new(-40.0, 1000.0).progress(), Some(0.0));
    assert_eq!(ViewportCache::new(1800.0, 1000.0).progress(), Some(1.0));
}

#[test]
fn degenerate_heights_have_no_progress() {
    assert_eq!(ViewportCache::new(10.0, 0.0).progress(), None);
    assert_eq!(ViewportCache::new(10.0, -120.0).progress(), None);
    assert_eq!(ViewportCache::new(10.0, f64::NAN).progress(), None);
}

#[test]
fn scrollable_height_can_be_negative_for_short_pages() {
    assert_eq!(ViewportCache::scrollable_height_of(3000.0, 800.0), 2200.0);
    assert_eq!(ViewportCache::scrollable_height_of(600.0, 800.0), -200.0);
}
