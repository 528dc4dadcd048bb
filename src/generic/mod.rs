//! Generic items, not specific to knowledge bases.

pub mod minimal_pcg;
pub mod random;
