//! Text normalization shared by extraction and matching.

mod patterns;
mod tokenizer;

pub use patterns::{first_capture, first_number};
pub use tokenizer::{is_stop_word, term_frequencies, tokenize, STOP_WORDS};
