//! Cache operations module

pub mod get;
pub mod misc;
pub mod put;
pub(super) mod utils;

// Operations are implemented directly on the Cache type
