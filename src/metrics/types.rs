// Metrics data types

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::router::Approach;

/// One entry in the orchestrator's append-only query history.
#[derive(Debug, Clone, Serialize)]
pub struct QueryMetrics {
    /// Original query text
    pub query: String,
    /// Approach actually used (may differ from the recommendation)
    pub approach: Approach,
    /// Analyzer score, 0.0 when the approach was forced
    pub complexity_score: f64,
    /// Wall-clock seconds for the routed call
    pub execution_time: f64,
    pub success: bool,
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl QueryMetrics {
    pub fn new(
        query: String,
        approach: Approach,
        complexity_score: f64,
        execution_time: f64,
        success: bool,
        error: Option<String>,
    ) -> Self {
        Self {
            query,
            approach,
            complexity_score,
            execution_time,
            success,
            error,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_approach_label_and_rfc3339_timestamp() {
        let metric = QueryMetrics::new(
            "test query".to_string(),
            Approach::FastFallback,
            42.0,
            0.25,
            true,
            None,
        );
        let json = serde_json::to_value(&metric).unwrap();
        assert_eq!(json["approach"], "fast_fallback");
        assert_eq!(json["complexity_score"], 42.0);
        // chrono's serde emits RFC 3339
        let timestamp = json["timestamp"].as_str().unwrap();
        assert!(timestamp.contains('T'));
    }
}
