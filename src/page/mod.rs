pub(crate) mod activation;
pub(crate) mod preview;
