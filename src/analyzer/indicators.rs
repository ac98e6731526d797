// Heuristic indicators for query complexity
//
// Each indicator is a cheap substring/regex check against static word lists.
// No LLM calls, no I/O - these run on every incoming query.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

const COMPARISON_WORDS: &[&str] = &[
    "compare",
    "contrast",
    "difference",
    "versus",
    "vs",
    "better",
    "worse",
    "similar",
    "dissimilar",
    "alike",
    "unlike",
];

const ANALYSIS_WORDS: &[&str] = &[
    "analyze",
    "evaluate",
    "assess",
    "examine",
    "investigate",
    "study",
    "explain why",
    "how does",
    "what causes",
    "implications",
    "impact",
];

const SYNTHESIS_WORDS: &[&str] = &[
    "summarize",
    "synthesize",
    "integrate",
    "combine",
    "overall",
    "comprehensive",
    "complete picture",
    "all information",
];

const REASONING_WORDS: &[&str] = &[
    "recommend",
    "suggest",
    "advise",
    "should",
    "best approach",
    "strategy",
    "plan",
    "solution",
    "resolve",
];

const MULTI_STEP_WORDS: &[&str] = &[
    "first",
    "then",
    "next",
    "finally",
    "step by step",
    "process",
    "procedure",
    "workflow",
    "sequence",
];

const CONDITIONAL_WORDS: &[&str] = &["if", "when", "unless", "provided"];

/// Anchored prefixes for lookup-style queries ("what is X", "list Y", ...)
static SIMPLE_PATTERN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(what is|define|who is|when|where|list|show|find)")
        .expect("Failed to compile simple pattern regex")
});

/// Capitalized word, e.g. "Bylaws" (matched against the original query)
static CAPITALIZED_WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-z]+").expect("Failed to compile capitalized word regex")
});

/// Double-quoted phrase, e.g. "board structure"
static QUOTED_PHRASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"]+""#).expect("Failed to compile quoted phrase regex"));

/// Boolean record of which complexity signals matched a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryIndicators {
    pub has_comparison: bool,
    pub has_analysis: bool,
    pub has_synthesis: bool,
    pub has_reasoning: bool,
    pub has_multi_step: bool,
    pub is_simple_pattern: bool,
    pub has_multiple_questions: bool,
    pub is_long_query: bool,
    pub has_conditional: bool,
    pub has_multiple_entities: bool,
}

impl QueryIndicators {
    /// Evaluate all ten indicators.
    ///
    /// `original` is the query as given (entity detection needs the original
    /// capitalization); `lowered` is its lowercased, trimmed form.
    pub fn evaluate(original: &str, lowered: &str) -> Self {
        let word_count = lowered.split_whitespace().count();

        // Conditional words are matched per-word, not as substrings:
        // "difference" must not fire the "if" indicator.
        let has_conditional = lowered
            .split_whitespace()
            .any(|word| CONDITIONAL_WORDS.contains(&word));

        let entity_count = CAPITALIZED_WORD_REGEX.find_iter(original).count()
            + QUOTED_PHRASE_REGEX.find_iter(original).count();

        Self {
            has_comparison: contains_any(lowered, COMPARISON_WORDS),
            has_analysis: contains_any(lowered, ANALYSIS_WORDS),
            has_synthesis: contains_any(lowered, SYNTHESIS_WORDS),
            has_reasoning: contains_any(lowered, REASONING_WORDS),
            has_multi_step: contains_any(lowered, MULTI_STEP_WORDS),
            is_simple_pattern: SIMPLE_PATTERN_REGEX.is_match(lowered),
            has_multiple_questions: lowered.matches('?').count() > 1,
            is_long_query: word_count > 20,
            has_conditional,
            has_multiple_entities: entity_count > 2,
        }
    }

    /// True if any indicator fired.
    pub fn any(&self) -> bool {
        !self.descriptions().is_empty()
    }

    /// Human-readable phrase for every indicator that fired.
    pub fn descriptions(&self) -> Vec<&'static str> {
        let mut phrases = Vec::new();
        if self.has_comparison {
            phrases.push("Requires comparison across sources");
        }
        if self.has_analysis {
            phrases.push("Requires analytical reasoning");
        }
        if self.has_synthesis {
            phrases.push("Requires synthesis of multiple pieces of information");
        }
        if self.has_reasoning {
            phrases.push("Asks for a recommendation or strategy");
        }
        if self.has_multi_step {
            phrases.push("Describes a multi-step process");
        }
        if self.is_simple_pattern {
            phrases.push("Matches a simple lookup pattern");
        }
        if self.has_multiple_questions {
            phrases.push("Contains multiple questions");
        }
        if self.is_long_query {
            phrases.push("Long query (more than 20 words)");
        }
        if self.has_conditional {
            phrases.push("Contains conditional clauses");
        }
        if self.has_multiple_entities {
            phrases.push("References multiple named entities");
        }
        phrases
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
