// Query complexity analysis
// Public interface for scoring queries and recommending an execution path

mod complexity;
mod indicators;

pub use complexity::{ComplexityAnalysis, ComplexityAnalyzer, ComplexityTier};
pub use indicators::QueryIndicators;
