//! Persistence of dictionary artifacts.

pub mod dictionary_store;

pub use dictionary_store::*;
