//! Language-model summarization layer.

pub mod summarize;

pub use summarize::{Summarizer, UNAVAILABLE};
