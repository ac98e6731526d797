// Integration tests for the JSON metrics export

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use vaultmind_router::router::{
    AgentReply, Approach, ChatTurn, FastRetriever, HybridOrchestrator, QueryRequest,
    ReasoningAgent,
};

struct StubRetriever;

#[async_trait]
impl FastRetriever for StubRetriever {
    async fn retrieve(&self, _query: &str, _index_name: &str) -> Result<String> {
        Ok("answer".to_string())
    }
}

struct StubAgent;

#[async_trait]
impl ReasoningAgent for StubAgent {
    async fn query(
        &self,
        _question: &str,
        _chat_history: Option<&[ChatTurn]>,
    ) -> Result<AgentReply> {
        Ok(AgentReply {
            response: "agent answer".to_string(),
            success: true,
            steps: Vec::new(),
            error: None,
        })
    }
}

async fn orchestrator_with_queries(count: usize) -> HybridOrchestrator {
    let mut orch = HybridOrchestrator::new(Arc::new(StubRetriever), Arc::new(StubAgent));
    for i in 0..count {
        orch.query(QueryRequest::new(format!("query {i}")).with_forced_approach(Approach::Fast))
            .await;
    }
    orch
}

#[tokio::test]
async fn exported_history_length_matches_live_history() -> Result<()> {
    let orch = orchestrator_with_queries(4).await;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("metrics.json");
    assert!(orch.export_metrics(&path));

    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    let history = value["query_history"].as_array().unwrap();
    assert_eq!(history.len(), orch.query_history().len());
    assert_eq!(value["statistics"]["total_queries"], 4);
    assert_eq!(history[0]["approach"], "fast");
    // Timestamps are serialized as RFC 3339 strings
    assert!(history[0]["timestamp"].as_str().unwrap().contains('T'));
    Ok(())
}

#[tokio::test]
async fn export_overwrites_existing_file() -> Result<()> {
    let orch = orchestrator_with_queries(1).await;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("metrics.json");
    std::fs::write(&path, "stale contents")?;

    assert!(orch.export_metrics(&path));
    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(value["query_history"].as_array().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn export_before_any_query_writes_empty_snapshot() -> Result<()> {
    let orch = HybridOrchestrator::new(Arc::new(StubRetriever), Arc::new(StubAgent));

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("metrics.json");
    assert!(orch.export_metrics(&path));

    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(value["statistics"]["total_queries"], 0);
    assert_eq!(value["statistics"]["message"], "No queries processed yet");
    assert_eq!(value["query_history"].as_array().unwrap().len(), 0);
    Ok(())
}

#[tokio::test]
async fn export_to_unwritable_path_returns_false() {
    let orch = orchestrator_with_queries(1).await;
    assert!(!orch.export_metrics("/nonexistent/dir/metrics.json"));
}
