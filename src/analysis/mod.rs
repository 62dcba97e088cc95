//! Text analysis: turning lines of text into word tokens.

pub mod tokenizer;

pub use tokenizer::*;
