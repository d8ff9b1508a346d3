//! Text preparation: markup stripping, sentence boundaries, and tokenization.
//!
//! Every function here is total over `&str`; none of them can fail.

mod normalize;
mod sentence;
mod tokenize;

pub use normalize::normalize;
pub use sentence::{segment, sentence_slices};
pub use tokenize::tokenize;
