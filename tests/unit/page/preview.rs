use super::*;

fn loads(ms: u32) -> ImageTiming {
    ImageTiming::Settles {
        at: Millis(ms),
        outcome: ImageOutcome::Loaded,
    }
}

fn at(entries: &[TimelineEntry], event: &PreviewEvent) -> Option<Millis> {
    entries.iter().find(|e| &e.event == event).map(|e| e.at)
}

#[test]
fn image_timing_parses_cli_forms() {
    assert_eq!("never".parse::<ImageTiming>().unwrap(), ImageTiming::Never);
    assert_eq!("120".parse::<ImageTiming>().unwrap(), loads(120));
    assert_eq!(
        "80!".parse::<ImageTiming>().unwrap(),
        ImageTiming::Settles {
            at: Millis(80),
            outcome: ImageOutcome::Failed,
        }
    );
    assert!("soon".parse::<ImageTiming>().is_err());
}

#[test]
fn stalled_image_timeline_matches_timeout() {
    let timeline = simulate_timeline(
        &SunfadeConfig::default(),
        &[loads(120), loads(200), ImageTiming::Never],
    );
    assert_eq!(timeline.gate, GateOutcome::TimedOut);
    let e = &timeline.entries;
    assert_eq!(at(e, &PreviewEvent::TitleVisible), Some(Millis(16)));
    assert_eq!(at(e, &PreviewEvent::OverlayHidden), Some(Millis(1500)));
    assert_eq!(at(e, &PreviewEvent::FloatingStarted), Some(Millis(2000)));
    assert_eq!(at(e, &PreviewEvent::OverlayRemoved), Some(Millis(2400)));
    assert!(e.windows(2).all(|w| w[0].at <= w[1].at));
}

#[test]
fn no_images_hide_overlay_at_start() {
    let timeline = simulate_timeline(&SunfadeConfig::default(), &[]);
    assert_eq!(timeline.gate, GateOutcome::NoImages);
    assert_eq!(timeline.entries[0].event, PreviewEvent::OverlayHidden);
    assert_eq!(timeline.entries[0].at, Millis::ZERO);
}

#[test]
fn timeline_entries_serialize_flat() {
    let entry = TimelineEntry {
        at: Millis(400),
        event: PreviewEvent::ShimmerStarted {
            background_position: "100% 50%".to_string(),
        },
    };
    assert_eq!(
        serde_json::to_string(&entry).unwrap(),
        r#"{"at":400,"event":"shimmer_started","background_position":"100% 50%"}"#
    );
}

#[test]
fn curve_samples_cover_range() {
    let samples = sample_curve(&SunfadeConfig::default(), 1000.0, 4);
    assert_eq!(samples.len(), 5);
    assert_eq!(samples[0].frame.gamma, 0.0);
    assert_eq!(samples[4].frame.gamma, 1.0);
    assert_eq!(samples[2].scroll_offset, 500.0);
    assert!(sample_curve(&SunfadeConfig::default(), 0.0, 4).is_empty());
}
