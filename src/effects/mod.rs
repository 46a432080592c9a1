pub(crate) mod blend;
pub(crate) mod intro;
pub(crate) mod loader;
pub(crate) mod pointer;
pub(crate) mod reveal;
pub(crate) mod viewport;
