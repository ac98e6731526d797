// Hybrid query orchestrator
//
// Routes each query to one of two injected execution paths based on the
// complexity analysis (or a caller-forced override), applies the fallback
// policy when the agentic path fails, and keeps process-lifetime metrics.
//
// Failures never propagate to the caller: query() always returns a
// HybridResponse and signals failure through its success/error fields.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Result};

use crate::analyzer::{ComplexityAnalysis, ComplexityAnalyzer};
use crate::config::RoutingConfig;
use crate::metrics::{write_json, MetricsExport, QueryMetrics, RoutingStatistics, StatisticsSummary};

use super::collaborators::{FastRetriever, ReasoningAgent, ReasoningStep};
use super::response::{Approach, HybridResponse, QueryRequest};

/// What one dispatch attempt produced, before fallback handling.
struct DispatchOutcome {
    response: String,
    success: bool,
    steps: Vec<ReasoningStep>,
    error: Option<String>,
}

/// Routes queries between fast retrieval and agentic reasoning.
///
/// Owns the append-only query history and running counters for its lifetime;
/// not safe for concurrent use without external synchronization (`query`
/// takes `&mut self`).
pub struct HybridOrchestrator {
    retriever: Arc<dyn FastRetriever>,
    agent: Arc<dyn ReasoningAgent>,
    analyzer: ComplexityAnalyzer,
    config: RoutingConfig,
    query_history: Vec<QueryMetrics>,
    total_queries: usize,
    fast_queries: usize,
    langgraph_queries: usize,
    fallback_count: usize,
}

impl HybridOrchestrator {
    /// Create an orchestrator with default configuration.
    pub fn new(retriever: Arc<dyn FastRetriever>, agent: Arc<dyn ReasoningAgent>) -> Self {
        Self::with_config(retriever, agent, RoutingConfig::default())
    }

    /// Create an orchestrator with explicit configuration.
    pub fn with_config(
        retriever: Arc<dyn FastRetriever>,
        agent: Arc<dyn ReasoningAgent>,
        config: RoutingConfig,
    ) -> Self {
        Self {
            analyzer: ComplexityAnalyzer::with_config(config.analyzer.clone()),
            retriever,
            agent,
            config,
            query_history: Vec::new(),
            total_queries: 0,
            fast_queries: 0,
            langgraph_queries: 0,
            fallback_count: 0,
        }
    }

    /// Route one query and return its response.
    ///
    /// Every call increments `total_queries`. Calls that reach a dispatch
    /// append exactly one history entry; a failure before dispatch returns an
    /// error response without one, so `total_queries` can exceed the history
    /// length. That asymmetry is part of the contract and covered by tests.
    pub async fn query(&mut self, request: QueryRequest) -> HybridResponse {
        let start = Instant::now();
        self.total_queries += 1;

        match self.route(&request, start).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Routing failed: {e:#}");
                HybridResponse::routing_error(e.to_string(), start.elapsed().as_secs_f64())
            }
        }
    }

    async fn route(&mut self, request: &QueryRequest, start: Instant) -> Result<HybridResponse> {
        let (analysis, approach) = self.choose_approach(request)?;
        let index_name = request
            .index_name
            .clone()
            .unwrap_or_else(|| self.config.default_index.clone());

        tracing::info!(
            approach = approach.as_str(),
            index = %index_name,
            forced = request.force_approach.is_some(),
            "Routing query"
        );

        let mut outcome = match approach {
            Approach::LangGraph => {
                self.langgraph_queries += 1;
                self.run_agent(request).await
            }
            _ => {
                self.fast_queries += 1;
                self.run_fast(request, &index_name).await
            }
        };

        let mut approach_used = approach;
        if !outcome.success && approach == Approach::LangGraph && self.config.enable_fallback {
            tracing::warn!(
                error = outcome.error.as_deref().unwrap_or("unknown"),
                "Agentic path failed, retrying via fast retrieval"
            );
            outcome = self.run_fast(request, &index_name).await;
            approach_used = Approach::FastFallback;
            self.fallback_count += 1;
        }

        let execution_time = start.elapsed().as_secs_f64();
        let complexity_score = analysis.as_ref().map(|a| a.score).unwrap_or(0.0);

        let metrics = QueryMetrics::new(
            request.query.clone(),
            approach_used,
            complexity_score,
            execution_time,
            outcome.success,
            outcome.error.clone(),
        );
        self.query_history.push(metrics.clone());

        Ok(HybridResponse {
            response: outcome.response,
            approach_used,
            complexity_analysis: analysis,
            execution_time,
            success: outcome.success,
            reasoning_steps: outcome.steps,
            metrics: Some(metrics),
            error: outcome.error,
        })
    }

    /// A forced approach bypasses analysis entirely; only the two dispatch
    /// targets are forcible.
    fn choose_approach(
        &self,
        request: &QueryRequest,
    ) -> Result<(Option<ComplexityAnalysis>, Approach)> {
        match request.force_approach {
            Some(approach @ (Approach::Fast | Approach::LangGraph)) => Ok((None, approach)),
            Some(other) => bail!("Cannot force approach \"{}\"", other.as_str()),
            None => {
                let analysis = self.analyzer.analyze(&request.query);
                let approach = analysis.recommended_approach;
                Ok((Some(analysis), approach))
            }
        }
    }

    async fn run_fast(&self, request: &QueryRequest, index_name: &str) -> DispatchOutcome {
        let started = Instant::now();
        let result = self.retriever.retrieve(&request.query, index_name).await;

        let elapsed = started.elapsed();
        if elapsed > self.config.max_fast_time() {
            tracing::warn!(
                elapsed_secs = elapsed.as_secs_f64(),
                budget_secs = self.config.max_fast_time_secs,
                "Fast retrieval exceeded its soft time budget"
            );
        }

        match result {
            Ok(text) => DispatchOutcome {
                response: text,
                success: true,
                steps: vec![ReasoningStep::new("fast_retrieval", "completed")],
                error: None,
            },
            Err(e) => {
                tracing::warn!("Fast retrieval failed: {e:#}");
                let message = e.to_string();
                DispatchOutcome {
                    response: message.clone(),
                    success: false,
                    steps: Vec::new(),
                    error: Some(message),
                }
            }
        }
    }

    async fn run_agent(&self, request: &QueryRequest) -> DispatchOutcome {
        let started = Instant::now();
        let result = self
            .agent
            .query(&request.query, request.chat_history.as_deref())
            .await;

        let elapsed = started.elapsed();
        if elapsed > self.config.max_langgraph_time() {
            tracing::warn!(
                elapsed_secs = elapsed.as_secs_f64(),
                budget_secs = self.config.max_langgraph_time_secs,
                "Agentic reasoning exceeded its soft time budget"
            );
        }

        match result {
            Ok(reply) => DispatchOutcome {
                response: reply.response,
                success: reply.success,
                steps: reply.steps,
                error: reply.error,
            },
            Err(e) => {
                tracing::warn!("Agentic reasoning failed: {e:#}");
                let message = e.to_string();
                DispatchOutcome {
                    response: message.clone(),
                    success: false,
                    steps: Vec::new(),
                    error: Some(message),
                }
            }
        }
    }

    /// Statistics snapshot derived from the history and counters.
    pub fn get_statistics(&self) -> RoutingStatistics {
        if self.total_queries == 0 {
            return RoutingStatistics::empty();
        }
        RoutingStatistics::Summary(StatisticsSummary::compute(
            &self.query_history,
            self.total_queries,
            self.fast_queries,
            self.langgraph_queries,
            self.fallback_count,
        ))
    }

    /// Clear the history and all counters. No partial reset.
    pub fn reset_metrics(&mut self) {
        self.query_history.clear();
        self.total_queries = 0;
        self.fast_queries = 0;
        self.langgraph_queries = 0;
        self.fallback_count = 0;
        tracing::info!("Routing metrics reset");
    }

    /// Write the statistics snapshot and full history as JSON, overwriting
    /// any existing file. Returns whether the write succeeded.
    pub fn export_metrics<P: AsRef<Path>>(&self, path: P) -> bool {
        let export = MetricsExport {
            statistics: self.get_statistics(),
            query_history: self.query_history.clone(),
        };
        match write_json(path.as_ref(), &export) {
            Ok(()) => {
                tracing::info!(
                    path = %path.as_ref().display(),
                    entries = self.query_history.len(),
                    "Exported routing metrics"
                );
                true
            }
            Err(e) => {
                tracing::error!("Failed to export metrics: {e:#}");
                false
            }
        }
    }

    /// The append-only query history.
    pub fn query_history(&self) -> &[QueryMetrics] {
        &self.query_history
    }

    /// Queries seen so far, including those that failed before dispatch.
    pub fn total_queries(&self) -> usize {
        self.total_queries
    }
}
