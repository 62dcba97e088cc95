//! Dictionary construction: counting, overrides, validation and misfits.
//!
//! This module turns tokenized corpus text into the curated word-frequency
//! dictionary consumed by an external spell-checking engine.

pub mod accumulator;
pub mod dictionary;
pub mod misfit;
pub mod overrides;
pub mod validator;

// Re-export commonly used types
pub use accumulator::*;
pub use dictionary::*;
pub use misfit::*;
pub use overrides::*;
pub use validator::*;
