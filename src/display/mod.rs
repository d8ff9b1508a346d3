//! Terminal table rendering for CLI results.

pub mod tables;

pub use tables::{TableBuilder, create_comparison_table, create_pairing_table, create_stats_table};
