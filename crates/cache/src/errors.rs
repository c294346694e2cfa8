//! Error handling for the cache engine
//!
//! Every failure carries enough context to tell a miss from an expired entry
//! from a real error, plus a recovery hint for the caller.

mod conversions;
mod display;
mod recovery;
mod types;

pub use types::*;
