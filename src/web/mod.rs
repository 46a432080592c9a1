//! Browser entry point.
//!
//! `start` runs once when the module is instantiated: it reads the optional page
//! configuration, resolves the elements, decides which effects apply and
//! attaches them. A missing element only disables the effect that needs it.

mod dom;
mod mount;
mod schedule;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use self::dom::{DomLayers, PageElements, media_matches};
use crate::{
    config::SunfadeConfig,
    foundation::error::{SunfadeError, SunfadeResult},
    page::activation::{Activation, BlendMode, IntroMode, LoaderMode, RevealMode},
};

/// Id of the `<script type="application/json">` element holding overrides.
const CONFIG_ELEMENT_ID: &str = "sunfade-config";

fn page_config(document: &Document) -> SunfadeResult<SunfadeConfig> {
    let Some(script) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(SunfadeConfig::default());
    };
    let text = script.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(SunfadeConfig::default());
    }
    SunfadeConfig::from_json(&text)
        .map_err(|err| SunfadeError::config(format!("#{CONFIG_ELEMENT_ID}: {err}")))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second instantiation finds the logger already installed.
    let _ = console_log::init_with_level(log::Level::Info);

    attach().map_err(|err| JsValue::from_str(&err.to_string()))
}

#[tracing::instrument(skip_all)]
fn attach() -> SunfadeResult<()> {
    let window = web_sys::window().ok_or_else(|| SunfadeError::dom("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| SunfadeError::dom("no document"))?;

    let config = page_config(&document).unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring page configuration");
        SunfadeConfig::default()
    });

    let elements = PageElements::scan(&document, &config.selectors);
    let presence = elements.presence(
        media_matches(&window, "(pointer: fine)"),
        media_matches(&window, "(prefers-reduced-motion: reduce)"),
    );
    let activation = Activation::decide(&presence, config.respect_reduced_motion);
    tracing::debug!(?activation, "effects decided");
    if activation.is_idle() {
        return Ok(());
    }

    let PageElements {
        hero_title,
        title_text,
        loader,
        images,
        sunrise,
        sunset,
        tint,
        reveal,
        orbs,
    } = elements;

    if activation.intro != IntroMode::Off
        && let (Some(title), Some(text)) = (hero_title, title_text)
    {
        mount::mount_intro(
            &config.intro,
            &config.classes,
            title,
            text,
            activation.intro == IntroMode::Immediate,
        );
    }

    if let (LoaderMode::Immediate | LoaderMode::Race { .. }, Some(loader)) =
        (activation.loader, loader)
    {
        mount::mount_loader(config.loader, &config.classes, loader, &images);
    }

    if let (BlendMode::On { .. }, Some(sunrise), Some(sunset)) =
        (activation.blend, sunrise, sunset)
    {
        mount::mount_blend(
            &window,
            config.blend,
            DomLayers {
                sunrise,
                sunset,
                tint,
            },
        );
    }

    match activation.reveal {
        RevealMode::Off => {}
        RevealMode::Observe { .. } => {
            mount::mount_reveal(&config.reveal, &config.classes, reveal)?;
        }
        RevealMode::Immediate { .. } => mount::reveal_all(&config.classes, &reveal),
    }

    if activation.pointer {
        mount::mount_pointer(&window, &config.pointer, orbs);
    }

    Ok(())
}
