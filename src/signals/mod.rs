//! Crossover detection over computed EMA series.

pub mod crossover;

// Re-exports for convenience
pub use crossover::{detect_crossovers, last_n, CrossoverEvent, Direction, EmaPair};
