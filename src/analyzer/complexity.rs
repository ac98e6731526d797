// Complexity scoring and tier classification
//
// Pure function of the query text and static configuration: no side effects,
// no I/O, never fails. The score drives the fast-vs-langgraph routing
// decision in the orchestrator.

use serde::Serialize;

use super::indicators::QueryIndicators;
use crate::config::AnalyzerConfig;
use crate::router::Approach;

const BASE_SCORE: f64 = 50.0;

const COMPARISON_WEIGHT: f64 = 15.0;
const ANALYSIS_WEIGHT: f64 = 20.0;
const SYNTHESIS_WEIGHT: f64 = 20.0;
const REASONING_WEIGHT: f64 = 25.0;
const MULTI_STEP_WEIGHT: f64 = 15.0;
const SIMPLE_PATTERN_WEIGHT: f64 = -30.0;
const MULTIPLE_QUESTIONS_WEIGHT: f64 = 10.0;
const LONG_QUERY_WEIGHT: f64 = 10.0;
const CONDITIONAL_WEIGHT: f64 = 10.0;
const MULTIPLE_ENTITIES_WEIGHT: f64 = 15.0;

/// Ordinal query difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplexityTier {
    Simple,
    Moderate,
    Complex,
    VeryComplex,
}

impl ComplexityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityTier::Simple => "simple",
            ComplexityTier::Moderate => "moderate",
            ComplexityTier::Complex => "complex",
            ComplexityTier::VeryComplex => "very_complex",
        }
    }
}

/// Result of analyzing one query. Constructed fresh per call, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ComplexityAnalysis {
    /// Difficulty tier derived from the score (with the simple-pattern override)
    pub complexity: ComplexityTier,
    /// Continuous estimate, always in [0, 100]
    pub score: f64,
    /// Human-readable summary of which heuristics fired
    pub reasoning: String,
    /// Full record of the individual signals
    pub indicators: QueryIndicators,
    /// Execution path the analyzer recommends
    pub recommended_approach: Approach,
}

/// Scores queries 0-100 using keyword/pattern heuristics and recommends an
/// execution path.
#[derive(Debug, Clone, Default)]
pub struct ComplexityAnalyzer {
    config: AnalyzerConfig,
}

impl ComplexityAnalyzer {
    /// Create an analyzer with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with explicit configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Analyze a query. Total over all inputs, including the empty string.
    pub fn analyze(&self, query: &str) -> ComplexityAnalysis {
        let lowered = query.to_lowercase().trim().to_string();
        let indicators = QueryIndicators::evaluate(query.trim(), &lowered);

        let score = Self::score(&indicators);
        let complexity = Self::tier(score, &indicators);
        let recommended_approach = self.recommend(complexity);

        tracing::debug!(
            score,
            threshold = self.config.complexity_threshold,
            tier = complexity.as_str(),
            approach = recommended_approach.as_str(),
            "Query complexity analyzed"
        );

        ComplexityAnalysis {
            complexity,
            score,
            reasoning: Self::reasoning(score, &indicators),
            indicators,
            recommended_approach,
        }
    }

    /// Additive scoring over a base of 50, clamped to [0, 100].
    fn score(indicators: &QueryIndicators) -> f64 {
        let mut score = BASE_SCORE;

        let weighted: &[(bool, f64)] = &[
            (indicators.has_comparison, COMPARISON_WEIGHT),
            (indicators.has_analysis, ANALYSIS_WEIGHT),
            (indicators.has_synthesis, SYNTHESIS_WEIGHT),
            (indicators.has_reasoning, REASONING_WEIGHT),
            (indicators.has_multi_step, MULTI_STEP_WEIGHT),
            (indicators.is_simple_pattern, SIMPLE_PATTERN_WEIGHT),
            (indicators.has_multiple_questions, MULTIPLE_QUESTIONS_WEIGHT),
            (indicators.is_long_query, LONG_QUERY_WEIGHT),
            (indicators.has_conditional, CONDITIONAL_WEIGHT),
            (indicators.has_multiple_entities, MULTIPLE_ENTITIES_WEIGHT),
        ];

        for (fired, weight) in weighted {
            if *fired {
                score += weight;
            }
        }

        score.clamp(0.0, 100.0)
    }

    /// Tier classification. A simple-pattern match with score < 40
    /// short-circuits the score bands.
    fn tier(score: f64, indicators: &QueryIndicators) -> ComplexityTier {
        if indicators.is_simple_pattern && score < 40.0 {
            return ComplexityTier::Simple;
        }
        if score < 30.0 {
            ComplexityTier::Simple
        } else if score < 50.0 {
            ComplexityTier::Moderate
        } else if score < 75.0 {
            ComplexityTier::Complex
        } else {
            ComplexityTier::VeryComplex
        }
    }

    /// Recommendation is tier-driven; SIMPLE always routes fast regardless
    /// of the configured threshold.
    fn recommend(&self, complexity: ComplexityTier) -> Approach {
        match complexity {
            ComplexityTier::Simple => Approach::Fast,
            ComplexityTier::Moderate => {
                if self.config.use_langgraph_for_moderate {
                    Approach::LangGraph
                } else {
                    Approach::Fast
                }
            }
            ComplexityTier::Complex | ComplexityTier::VeryComplex => Approach::LangGraph,
        }
    }

    /// Summary line for logs and responses. The score is rendered to one
    /// decimal place so the text stays stable across float-noise reruns.
    fn reasoning(score: f64, indicators: &QueryIndicators) -> String {
        let details = if indicators.any() {
            indicators.descriptions().join("; ")
        } else {
            "Standard information retrieval query".to_string()
        };
        format!("Complexity score: {score:.1}/100. {details}")
    }
}
