use super::*;
use crate::config::SunfadeConfig;

fn full_page() -> PagePresence {
    PagePresence {
        hero_title: true,
        title_text: true,
        loader: true,
        background_images: 3,
        sunrise: true,
        sunset: true,
        tint: true,
        reveal_targets: 5,
        orbs: 2,
        precise_pointer: true,
        reduced_motion: false,
    }
}

#[test]
fn full_page_activates_everything() {
    let a = Activation::decide(&full_page(), SunfadeConfig::default().respect_reduced_motion);
    assert_eq!(a.intro, IntroMode::Animated);
    assert_eq!(a.loader, LoaderMode::Race { images: 3 });
    assert_eq!(a.blend, BlendMode::On { tint: true });
    assert_eq!(a.reveal, RevealMode::Observe { targets: 5 });
    assert!(a.pointer);
    assert!(!a.is_idle());
}

#[test]
fn empty_page_is_idle() {
    assert!(Activation::decide(&PagePresence::default(), true).is_idle());
}

#[test]
fn missing_title_text_disables_intro() {
    let page = PagePresence {
        title_text: false,
        ..full_page()
    };
    assert_eq!(Activation::decide(&page, true).intro, IntroMode::Off);
}

#[test]
fn zero_images_dismiss_immediately() {
    let page = PagePresence {
        background_images: 0,
        ..full_page()
    };
    assert_eq!(Activation::decide(&page, true).loader, LoaderMode::Immediate);

    let page = PagePresence {
        loader: false,
        ..full_page()
    };
    assert_eq!(Activation::decide(&page, true).loader, LoaderMode::Off);
}

#[test]
fn either_layer_missing_disables_blend() {
    for (sunrise, sunset) in [(true, false), (false, true), (false, false)] {
        let page = PagePresence {
            sunrise,
            sunset,
            ..full_page()
        };
        assert_eq!(Activation::decide(&page, true).blend, BlendMode::Off);
    }
    let page = PagePresence {
        tint: false,
        ..full_page()
    };
    assert_eq!(
        Activation::decide(&page, true).blend,
        BlendMode::On { tint: false }
    );
}

#[test]
fn pointer_needs_precise_device_and_orbs() {
    let touch = PagePresence {
        precise_pointer: false,
        ..full_page()
    };
    assert!(!Activation::decide(&touch, true).pointer);
    let no_orbs = PagePresence {
        orbs: 0,
        ..full_page()
    };
    assert!(!Activation::decide(&no_orbs, true).pointer);
}

#[test]
fn default_config_keeps_timed_effects_under_reduced_motion() {
    let page = PagePresence {
        reduced_motion: true,
        ..full_page()
    };
    let a = Activation::decide(&page, SunfadeConfig::default().respect_reduced_motion);
    assert_eq!(a.intro, IntroMode::Animated);
    assert_eq!(a.reveal, RevealMode::Observe { targets: 5 });
}

#[test]
fn reduced_motion_collapses_timed_effects_when_opted_in() {
    let page = PagePresence {
        reduced_motion: true,
        ..full_page()
    };
    let calm = Activation::decide(&page, true);
    assert_eq!(calm.intro, IntroMode::Immediate);
    assert_eq!(calm.reveal, RevealMode::Immediate { targets: 5 });
    assert_eq!(calm.blend, BlendMode::On { tint: true });

    let ignored = Activation::decide(&page, false);
    assert_eq!(ignored.intro, IntroMode::Animated);
    assert_eq!(ignored.reveal, RevealMode::Observe { targets: 5 });
}
