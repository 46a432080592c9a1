//! Element lookup and the DOM-backed implementations of the effect targets.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, Window};

use crate::{
    config::{Classes, PointerConfig, Selectors},
    effects::{
        blend::{BlendFrame, BlendTargets},
        intro::IntroTargets,
        loader::Overlay,
        pointer::{Orb, px},
    },
    foundation::{
        core::{Point, Rect},
        error::SunfadeError,
    },
    page::activation::PagePresence,
};

pub(crate) fn dom_error(err: JsValue) -> SunfadeError {
    SunfadeError::dom(format!("{err:?}"))
}

pub(crate) fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            tracing::warn!(selector, error = ?err, "invalid selector");
            None
        }
    }
}

pub(crate) fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            tracing::warn!(selector, error = ?err, "invalid selector");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        tracing::warn!(property, value, error = ?err, "style write failed");
    }
}

pub(crate) fn add_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().add_1(class) {
        tracing::warn!(class, error = ?err, "class toggle failed");
    }
}

pub(crate) fn media_matches(window: &Window, query: &str) -> bool {
    matches!(window.match_media(query), Ok(Some(list)) if list.matches())
}

pub(crate) fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Document height minus viewport height; zero or negative when nothing scrolls.
pub(crate) fn scrollable_height(window: &Window) -> f64 {
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let document = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);
    crate::effects::viewport::ViewportCache::scrollable_height_of(document, viewport)
}

/// Everything the effects may touch, resolved once at start-up.
pub(crate) struct PageElements {
    pub(crate) hero_title: Option<Element>,
    pub(crate) title_text: Option<HtmlElement>,
    pub(crate) loader: Option<Element>,
    pub(crate) images: Vec<HtmlImageElement>,
    pub(crate) sunrise: Option<HtmlElement>,
    pub(crate) sunset: Option<HtmlElement>,
    pub(crate) tint: Option<HtmlElement>,
    pub(crate) reveal: Vec<Element>,
    pub(crate) orbs: Vec<HtmlElement>,
}

impl PageElements {
    pub(crate) fn scan(document: &Document, selectors: &Selectors) -> Self {
        let html = |selector: &str| query(document, selector).and_then(|el| el.dyn_into().ok());
        Self {
            hero_title: query(document, &selectors.hero_title),
            title_text: html(&selectors.title_text),
            loader: query(document, &selectors.loader),
            images: query_all(document, &selectors.background_images),
            sunrise: html(&selectors.sunrise),
            sunset: html(&selectors.sunset),
            tint: html(&selectors.tint),
            reveal: query_all(document, &selectors.reveal),
            orbs: query_all(document, &selectors.orbs),
        }
    }

    pub(crate) fn presence(&self, precise_pointer: bool, reduced_motion: bool) -> PagePresence {
        PagePresence {
            hero_title: self.hero_title.is_some(),
            title_text: self.title_text.is_some(),
            loader: self.loader.is_some(),
            background_images: self.images.len(),
            sunrise: self.sunrise.is_some(),
            sunset: self.sunset.is_some(),
            tint: self.tint.is_some(),
            reveal_targets: self.reveal.len(),
            orbs: self.orbs.len(),
            precise_pointer,
            reduced_motion,
        }
    }
}

pub(crate) struct DomLayers {
    pub(crate) sunrise: HtmlElement,
    pub(crate) sunset: HtmlElement,
    pub(crate) tint: Option<HtmlElement>,
}

impl BlendTargets for DomLayers {
    fn apply(&self, frame: &BlendFrame) {
        set_style(&self.sunrise, "opacity", &frame.sunrise.opacity_css());
        set_style(&self.sunset, "opacity", &frame.sunset.opacity_css());
        set_style(&self.sunrise, "transform", &frame.sunrise.transform_css());
        set_style(&self.sunset, "transform", &frame.sunset.transform_css());
        if let Some(tint) = &self.tint {
            set_style(tint, "opacity", &frame.tint_opacity_css());
        }
    }
}

pub(crate) struct DomOverlay {
    pub(crate) element: Element,
    pub(crate) hidden_class: String,
}

impl Overlay for DomOverlay {
    fn hide(&self) {
        add_class(&self.element, &self.hidden_class);
    }

    fn remove(&self) {
        self.element.remove();
    }
}

pub(crate) struct DomTitle {
    pub(crate) title: Element,
    pub(crate) text: HtmlElement,
    pub(crate) classes: Classes,
}

impl DomTitle {
    pub(crate) fn new(title: Element, text: HtmlElement, classes: &Classes) -> Self {
        Self {
            title,
            text,
            classes: classes.clone(),
        }
    }
}

impl IntroTargets for DomTitle {
    fn show_title(&self) {
        add_class(&self.title, &self.classes.visible);
    }

    fn start_shimmer(&self, background_position: &str) {
        set_style(&self.text, "background-position", background_position);
    }

    fn start_floating(&self) {
        add_class(&self.title, &self.classes.floating);
    }
}

pub(crate) struct DomOrb {
    pub(crate) element: HtmlElement,
    pub(crate) vars: PointerConfig,
}

impl Orb for DomOrb {
    fn bounds(&self) -> Rect {
        let r = self.element.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.right(), r.bottom())
    }

    fn set_glow(&self, local: Point) {
        set_style(&self.element, &self.vars.x_var, &px(local.x));
        set_style(&self.element, &self.vars.y_var, &px(local.y));
    }
}
