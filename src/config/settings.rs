// Configuration structs

use std::time::Duration;

use serde::Deserialize;

/// Complexity analyzer tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    /// Score at/above which, absent tier overrides, the agentic path is
    /// recommended (default: 50.0)
    #[serde(default = "default_complexity_threshold")]
    pub complexity_threshold: f64,

    /// Route MODERATE-tier queries through the agentic path (default: false)
    #[serde(default)]
    pub use_langgraph_for_moderate: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            complexity_threshold: default_complexity_threshold(),
            use_langgraph_for_moderate: false,
        }
    }
}

/// Orchestrator behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingConfig {
    /// Analyzer settings, forwarded to the internally constructed analyzer
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Retry a failed agentic call via the fast path (default: true)
    #[serde(default = "default_enable_fallback")]
    pub enable_fallback: bool,

    /// Soft time budget for the fast path in seconds (default: 5.0).
    /// Advisory only: overruns are logged, never cancelled.
    #[serde(default = "default_max_fast_time_secs")]
    pub max_fast_time_secs: f64,

    /// Soft time budget for the agentic path in seconds (default: 30.0).
    /// Advisory only, like `max_fast_time_secs`.
    #[serde(default = "default_max_langgraph_time_secs")]
    pub max_langgraph_time_secs: f64,

    /// Vector index queried when the caller does not name one
    #[serde(default = "default_index")]
    pub default_index: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            analyzer: AnalyzerConfig::default(),
            enable_fallback: default_enable_fallback(),
            max_fast_time_secs: default_max_fast_time_secs(),
            max_langgraph_time_secs: default_max_langgraph_time_secs(),
            default_index: default_index(),
        }
    }
}

impl RoutingConfig {
    pub fn max_fast_time(&self) -> Duration {
        Duration::from_secs_f64(self.max_fast_time_secs)
    }

    pub fn max_langgraph_time(&self) -> Duration {
        Duration::from_secs_f64(self.max_langgraph_time_secs)
    }
}

fn default_complexity_threshold() -> f64 {
    50.0
}

fn default_enable_fallback() -> bool {
    true
}

fn default_max_fast_time_secs() -> f64 {
    5.0
}

fn default_max_langgraph_time_secs() -> f64 {
    30.0
}

fn default_index() -> String {
    "default_faiss".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RoutingConfig::default();
        assert_eq!(config.analyzer.complexity_threshold, 50.0);
        assert!(!config.analyzer.use_langgraph_for_moderate);
        assert!(config.enable_fallback);
        assert_eq!(config.max_fast_time(), Duration::from_secs(5));
        assert_eq!(config.max_langgraph_time(), Duration::from_secs(30));
        assert_eq!(config.default_index, "default_faiss");
    }
}
