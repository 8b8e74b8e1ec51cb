#![forbid(unsafe_code)]

pub mod model;
pub mod random;

pub use random::{RandomIndex, RandomSource};
