//! CLI command implementations

pub(crate) mod emit;
pub(crate) mod kinds;
