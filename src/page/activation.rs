/// What the start-up scan found on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct PagePresence {
    pub hero_title: bool,
    pub title_text: bool,
    pub loader: bool,
    pub background_images: usize,
    pub sunrise: bool,
    pub sunset: bool,
    pub tint: bool,
    pub reveal_targets: usize,
    pub orbs: usize,
    /// `(pointer: fine)` matched.
    pub precise_pointer: bool,
    /// `(prefers-reduced-motion: reduce)` matched.
    pub reduced_motion: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum IntroMode {
    Off,
    Animated,
    Immediate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum LoaderMode {
    Off,
    /// No images to wait for; dismiss right away.
    Immediate,
    Race { images: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum BlendMode {
    Off,
    On { tint: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum RevealMode {
    Off,
    Observe { targets: usize },
    Immediate { targets: usize },
}

/// Per-component decision, made once at start-up and never revisited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Activation {
    pub intro: IntroMode,
    pub loader: LoaderMode,
    pub blend: BlendMode,
    pub reveal: RevealMode,
    pub pointer: bool,
}

impl Activation {
    pub fn decide(page: &PagePresence, respect_reduced_motion: bool) -> Self {
        let calm = respect_reduced_motion && page.reduced_motion;

        let intro = match (page.hero_title && page.title_text, calm) {
            (false, _) => IntroMode::Off,
            (true, false) => IntroMode::Animated,
            (true, true) => IntroMode::Immediate,
        };

        let loader = match (page.loader, page.background_images) {
            (false, _) => LoaderMode::Off,
            (true, 0) => LoaderMode::Immediate,
            (true, images) => LoaderMode::Race { images },
        };

        let blend = if page.sunrise && page.sunset {
            BlendMode::On { tint: page.tint }
        } else {
            BlendMode::Off
        };

        let reveal = match (page.reveal_targets, calm) {
            (0, _) => RevealMode::Off,
            (targets, false) => RevealMode::Observe { targets },
            (targets, true) => RevealMode::Immediate { targets },
        };

        Self {
            intro,
            loader,
            blend,
            reveal,
            pointer: page.precise_pointer && page.orbs > 0,
        }
    }

    /// `true` when no component will attach anything.
    pub fn is_idle(&self) -> bool {
        self.intro == IntroMode::Off
            && self.loader == LoaderMode::Off
            && self.blend == BlendMode::Off
            && self.reveal == RevealMode::Off
            && !self.pointer
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/activation.rs"]
mod tests;
