//! Page contract and tuning knobs.
//!
//! Every field has a default matching the stock landing page, so an empty JSON
//! object (or no configuration at all) is a valid configuration.

use crate::{
    animation::{ease::Ease, lerp::Span},
    foundation::{
        core::Millis,
        error::{SunfadeError, SunfadeResult},
    },
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SunfadeConfig {
    pub selectors: Selectors,
    pub classes: Classes,
    pub intro: IntroConfig,
    pub loader: LoaderConfig,
    pub blend: BlendConfig,
    pub reveal: RevealConfig,
    pub pointer: PointerConfig,
    /// Opt-in: apply the intro and reveals at once when the page prefers
    /// reduced motion.
    pub respect_reduced_motion: bool,
}

/// CSS selectors locating each structural role on the page.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selectors {
    pub hero_title: String,
    pub title_text: String,
    pub loader: String,
    pub background_images: String,
    pub sunrise: String,
    pub sunset: String,
    pub tint: String,
    pub reveal: String,
    pub orbs: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            hero_title: "#hero-title".to_string(),
            title_text: "#hero-title .title-text".to_string(),
            loader: "#loader".to_string(),
            background_images: ".bg-layer img".to_string(),
            sunrise: ".layer-sunrise".to_string(),
            sunset: ".layer-sunset".to_string(),
            tint: ".tint-overlay".to_string(),
            reveal: "[data-reveal]".to_string(),
            orbs: ".orb".to_string(),
        }
    }
}

impl Selectors {
    fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("hero_title", self.hero_title.as_str()),
            ("title_text", self.title_text.as_str()),
            ("loader", self.loader.as_str()),
            ("background_images", self.background_images.as_str()),
            ("sunrise", self.sunrise.as_str()),
            ("sunset", self.sunset.as_str()),
            ("tint", self.tint.as_str()),
            ("reveal", self.reveal.as_str()),
            ("orbs", self.orbs.as_str()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Classes {
    /// Added to the hero title and to revealed elements.
    pub visible: String,
    pub floating: String,
    /// Added to the loader overlay when it starts fading out.
    pub hidden: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            visible: "visible".to_string(),
            floating: "floating".to_string(),
            hidden: "hidden".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntroConfig {
    /// Offset from start at which the shimmer sweep begins.
    pub shimmer_at_ms: Millis,
    /// Offset from start at which the title starts floating.
    pub float_at_ms: Millis,
    /// `background-position` written to the title text for the shimmer.
    pub shimmer_position: String,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            shimmer_at_ms: Millis(400),
            float_at_ms: Millis(2000),
            shimmer_position: "100% 50%".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    pub timeout_ms: Millis,
    /// Delay between hiding the overlay and detaching it.
    pub removal_delay_ms: Millis,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            timeout_ms: Millis(1500),
            removal_delay_ms: Millis(900),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlendConfig {
    pub curve: Ease,
    /// Upward travel of the sunrise layer at full progress.
    pub sunrise_shift_px: f64,
    /// Upward travel of the sunset layer at full progress.
    pub sunset_shift_px: f64,
    pub tint: Span<f64>,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            curve: Ease::SCROLL_BLEND,
            sunrise_shift_px: 8.0,
            sunset_shift_px: 12.0,
            tint: Span::new(0.08, 0.26),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Passed verbatim as the observer's `rootMargin`.
    pub root_margin: String,
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            root_margin: "0px 0px 10% 0px".to_string(),
            threshold: 0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PointerConfig {
    pub x_var: String,
    pub y_var: String,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            x_var: "--mx".to_string(),
            y_var: "--my".to_string(),
        }
    }
}

impl SunfadeConfig {
    /// Parses a JSON document and validates the result.
    pub fn from_json(s: &str) -> SunfadeResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> SunfadeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> SunfadeResult<()> {
        for (name, selector) in self.selectors.entries() {
            if selector.trim().is_empty() {
                return Err(SunfadeError::validation(format!(
                    "selector '{name}' must not be empty"
                )));
            }
        }
        for (name, class) in [
            ("visible", &self.classes.visible),
            ("floating", &self.classes.floating),
            ("hidden", &self.classes.hidden),
        ] {
            if class.is_empty() || class.contains(char::is_whitespace) {
                return Err(SunfadeError::validation(format!(
                    "class '{name}' must be a single non-empty class name"
                )));
            }
        }

        if self.intro.float_at_ms < self.intro.shimmer_at_ms {
            return Err(SunfadeError::validation(
                "intro.float_at_ms must not precede intro.shimmer_at_ms",
            ));
        }

        let blend = &self.blend;
        if !blend.curve.is_well_formed() {
            return Err(SunfadeError::validation(
                "blend.curve exponent must be finite and > 0",
            ));
        }
        for (name, v) in [
            ("blend.sunrise_shift_px", blend.sunrise_shift_px),
            ("blend.sunset_shift_px", blend.sunset_shift_px),
        ] {
            if !v.is_finite() {
                return Err(SunfadeError::validation(format!("{name} must be finite")));
            }
        }
        for (name, v) in [
            ("blend.tint.from", blend.tint.from),
            ("blend.tint.to", blend.tint.to),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(SunfadeError::validation(format!(
                    "{name} must be an opacity in [0, 1]"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(SunfadeError::validation(
                "reveal.threshold must be in [0, 1]",
            ));
        }

        for (name, var) in [
            ("pointer.x_var", &self.pointer.x_var),
            ("pointer.y_var", &self.pointer.y_var),
        ] {
            if !var.starts_with("--") || var.len() <= 2 {
                return Err(SunfadeError::validation(format!(
                    "{name} must be a CSS custom property (\"--name\")"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
