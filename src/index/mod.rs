//! Token → document inverted index.

mod inverted;

pub use inverted::{InvertedIndex, Multiplicity};
