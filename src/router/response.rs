// Request and response types for the orchestrator's public surface

use serde::Serialize;

use super::collaborators::{ChatTurn, ReasoningStep};
use crate::analyzer::ComplexityAnalysis;
use crate::metrics::QueryMetrics;

/// Execution path label.
///
/// Only `Fast` and `LangGraph` are valid as a forced approach or an analyzer
/// recommendation; `FastFallback` and `Error` appear solely as the approach
/// actually taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Approach {
    Fast,
    #[serde(rename = "langgraph")]
    LangGraph,
    FastFallback,
    Error,
}

impl Approach {
    pub fn as_str(&self) -> &'static str {
        match self {
            Approach::Fast => "fast",
            Approach::LangGraph => "langgraph",
            Approach::FastFallback => "fast_fallback",
            Approach::Error => "error",
        }
    }
}

/// One routed query. Built with defaults and adjusted via the `with_` methods.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub query: String,
    /// Index to search; the orchestrator's configured default applies when unset
    pub index_name: Option<String>,
    /// Bypass analysis and dispatch directly to this path
    pub force_approach: Option<Approach>,
    pub chat_history: Option<Vec<ChatTurn>>,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            index_name: None,
            force_approach: None,
            chat_history: None,
        }
    }

    pub fn with_index(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = Some(index_name.into());
        self
    }

    pub fn with_forced_approach(mut self, approach: Approach) -> Self {
        self.force_approach = Some(approach);
        self
    }

    pub fn with_chat_history(mut self, chat_history: Vec<ChatTurn>) -> Self {
        self.chat_history = Some(chat_history);
        self
    }
}

/// What the caller gets back from every routed query.
///
/// The orchestrator never returns an error directly: `success` and `error`
/// are the sole failure signal.
#[derive(Debug, Clone)]
pub struct HybridResponse {
    /// The textual answer (or the failure message when `success` is false)
    pub response: String,
    pub approach_used: Approach,
    /// Analysis that drove the routing; `None` when the approach was forced
    /// or the call errored before analysis
    pub complexity_analysis: Option<ComplexityAnalysis>,
    /// Wall-clock seconds for the entire routed call, fallback included
    pub execution_time: f64,
    pub success: bool,
    /// Empty for the fast path; populated by the agent for the reasoning path
    pub reasoning_steps: Vec<ReasoningStep>,
    /// Metrics record appended to the history for this call; `None` on a
    /// top-level routing error
    pub metrics: Option<QueryMetrics>,
    pub error: Option<String>,
}

impl HybridResponse {
    /// Response for a failure that escaped both dispatch wrappers.
    pub(crate) fn routing_error(message: String, execution_time: f64) -> Self {
        Self {
            response: message.clone(),
            approach_used: Approach::Error,
            complexity_analysis: None,
            execution_time,
            success: false,
            reasoning_steps: Vec::new(),
            metrics: None,
            error: Some(message),
        }
    }
}
