//! Wires each activated effect to its browser events.
//!
//! Listeners and observers live for the lifetime of the page, so their handles
//! are leaked once attached.

use std::{cell::RefCell, rc::Rc};

use gloo::{
    events::EventListener,
    render::{AnimationFrame, request_animation_frame},
};
use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use web_sys::{
    Element, HtmlElement, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, Window,
};

use super::{
    dom::{
        DomLayers, DomOrb, DomOverlay, DomTitle, add_class, dom_error, scroll_offset,
        scrollable_height,
    },
    schedule::{WebScheduler, image_signal},
};
use crate::{
    config::{BlendConfig, Classes, IntroConfig, LoaderConfig, PointerConfig, RevealConfig},
    effects::{
        blend::{BlendEngine, BlendTargets},
        intro::IntroSequence,
        loader::LoaderGate,
        pointer::PointerFollower,
        reveal::{RevealAction, RevealTracker},
    },
    foundation::{
        core::{Intersection, Point},
        error::SunfadeResult,
    },
};

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Keeps the pending frame handle alive until it fires; a later request
/// replaces the spent handle.
fn schedule_frame(slot: &FrameSlot, callback: impl FnOnce(f64) + 'static) {
    *slot.borrow_mut() = Some(request_animation_frame(callback));
}

pub(crate) fn mount_intro(
    config: &IntroConfig,
    classes: &Classes,
    title: Element,
    text: HtmlElement,
    immediate: bool,
) {
    let intro = IntroSequence::new(config.clone());
    let targets = DomTitle::new(title, text, classes);
    if immediate {
        intro.apply_immediately(&targets);
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        intro.run(&WebScheduler, &targets).await;
    });
}

pub(crate) fn mount_loader(
    config: LoaderConfig,
    classes: &Classes,
    loader: Element,
    images: &[HtmlImageElement],
) {
    let gate = LoaderGate::new(
        DomOverlay {
            element: loader,
            hidden_class: classes.hidden.clone(),
        },
        config,
    );
    if images.is_empty() {
        gate.dismiss();
        tracing::info!("loader gate opened without images");
        wasm_bindgen_futures::spawn_local(async move {
            gate.remove_after_delay(&WebScheduler).await;
        });
        return;
    }
    let signals = images.iter().map(image_signal).collect::<Vec<_>>();
    wasm_bindgen_futures::spawn_local(async move {
        gate.run(&WebScheduler, signals).await;
    });
}

pub(crate) fn mount_blend(window: &Window, config: BlendConfig, layers: DomLayers) {
    let engine = Rc::new(RefCell::new(BlendEngine::new(
        config,
        scroll_offset(window),
        scrollable_height(window),
    )));
    let layers = Rc::new(layers);

    if let Some(frame) = engine.borrow_mut().prime() {
        layers.apply(&frame);
    }

    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let on_scroll = {
        let engine = engine.clone();
        let win = window.clone();
        EventListener::new(window, "scroll", move |_| {
            if !engine.borrow_mut().on_scroll(scroll_offset(&win)) {
                return;
            }
            let engine = engine.clone();
            let layers = layers.clone();
            schedule_frame(&slot, move |_| {
                engine.borrow_mut().flush(&*layers);
            });
        })
    };
    let on_resize = {
        let win = window.clone();
        EventListener::new(window, "resize", move |_| {
            engine.borrow_mut().on_resize(scrollable_height(&win));
        })
    };
    on_scroll.forget();
    on_resize.forget();
}

pub(crate) fn mount_pointer(window: &Window, config: &PointerConfig, orbs: Vec<HtmlElement>) {
    let orbs: Rc<Vec<DomOrb>> = Rc::new(
        orbs.into_iter()
            .map(|element| DomOrb {
                element,
                vars: config.clone(),
            })
            .collect(),
    );
    let follower = Rc::new(RefCell::new(PointerFollower::new()));
    let slot: FrameSlot = Rc::new(RefCell::new(None));

    EventListener::new(window, "pointermove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let client = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
        if !follower.borrow_mut().on_move(client) {
            return;
        }
        let follower = follower.clone();
        let orbs = orbs.clone();
        schedule_frame(&slot, move |_| {
            follower.borrow_mut().flush(orbs.as_slice());
        });
    })
    .forget();
}

pub(crate) fn reveal_all(classes: &Classes, targets: &[Element]) {
    for target in targets {
        add_class(target, &classes.visible);
    }
}

pub(crate) fn mount_reveal(
    config: &RevealConfig,
    classes: &Classes,
    targets: Vec<Element>,
) -> SunfadeResult<()> {
    let mut tracker = RevealTracker::new();
    for index in 0..targets.len() {
        tracker.observe(index);
    }
    let targets = Rc::new(targets);
    let visible = classes.visible.clone();

    let callback = {
        let targets = targets.clone();
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = targets
                        .iter()
                        .position(|el| js_sys::Object::is(el, &target))
                    else {
                        continue;
                    };
                    let hit = if entry.is_intersecting() {
                        Intersection::entering(entry.intersection_ratio())
                    } else {
                        Intersection::leaving()
                    };
                    if tracker.on_intersection(&index, hit) == RevealAction::Reveal {
                        add_class(&target, &visible);
                        observer.unobserve(&target);
                    }
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&config.root_margin);
    options.set_threshold(&JsValue::from_f64(config.threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(dom_error)?;
    for target in targets.iter() {
        observer.observe(target);
    }
    callback.forget();
    Ok(())
}
