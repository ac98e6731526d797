// Collaborator seams for the two execution paths
//
// The orchestrator treats both paths as opaque: a retriever that answers in
// one pass against a vector index, and an agent that reasons over multiple
// steps. Their failures are caught and reported, never propagated.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One turn of prior conversation handed to the reasoning agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// A single step in a reasoning trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasoningStep {
    #[serde(rename = "type")]
    pub step_type: String,
    pub content: String,
}

impl ReasoningStep {
    pub fn new(step_type: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            step_type: step_type.into(),
            content: content.into(),
        }
    }
}

/// What the reasoning agent reports back for one question.
///
/// `success` is the agent's own verdict; an `Err` from [`ReasoningAgent::query`]
/// additionally covers transport-level failures.
#[derive(Debug, Clone)]
pub struct AgentReply {
    pub response: String,
    pub success: bool,
    pub steps: Vec<ReasoningStep>,
    pub error: Option<String>,
}

/// Single-pass vector retrieval.
#[async_trait]
pub trait FastRetriever: Send + Sync {
    /// Answer `query` against the named index and return the answer text.
    async fn retrieve(&self, query: &str, index_name: &str) -> Result<String>;
}

/// Multi-step agentic reasoning.
#[async_trait]
pub trait ReasoningAgent: Send + Sync {
    /// Answer `question`, optionally grounded in prior conversation.
    async fn query(
        &self,
        question: &str,
        chat_history: Option<&[ChatTurn]>,
    ) -> Result<AgentReply>;
}
