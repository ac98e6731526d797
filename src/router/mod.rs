// Router module
// Public interface for hybrid query orchestration

mod collaborators;
mod orchestrator;
mod response;

pub use collaborators::{AgentReply, ChatTurn, FastRetriever, ReasoningAgent, ReasoningStep};
pub use orchestrator::HybridOrchestrator;
pub use response::{Approach, HybridResponse, QueryRequest};
