// Statistics snapshot derived from the query history

use serde::Serialize;

use super::types::QueryMetrics;
use crate::router::Approach;

/// Longest query text echoed into a recent-query preview entry.
const PREVIEW_QUERY_LEN: usize = 60;

/// How many history entries the preview shows.
const PREVIEW_COUNT: usize = 10;

/// Snapshot returned by `HybridOrchestrator::get_statistics`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RoutingStatistics {
    /// No queries processed yet
    Empty { total_queries: usize, message: String },
    Summary(StatisticsSummary),
}

impl RoutingStatistics {
    pub fn empty() -> Self {
        RoutingStatistics::Empty {
            total_queries: 0,
            message: "No queries processed yet".to_string(),
        }
    }

    pub fn total_queries(&self) -> usize {
        match self {
            RoutingStatistics::Empty { total_queries, .. } => *total_queries,
            RoutingStatistics::Summary(summary) => summary.total_queries,
        }
    }
}

/// Aggregate counters and averages over the process lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsSummary {
    pub total_queries: usize,
    pub fast_queries: usize,
    pub langgraph_queries: usize,
    pub fallback_count: usize,
    /// Share of queries dispatched fast, in percent
    pub fast_percentage: f64,
    /// Share of queries dispatched to the agent, in percent
    pub langgraph_percentage: f64,
    /// Average execution time of fast-path history entries, seconds
    pub avg_fast_time: f64,
    /// Average execution time of agentic history entries, seconds
    pub avg_langgraph_time: f64,
    /// Successful history entries over total queries, in percent
    pub success_rate: f64,
    /// The 10 most recent history entries, newest last
    pub recent_queries: Vec<RecentQuery>,
}

/// Compact view of one history entry for the statistics preview.
#[derive(Debug, Clone, Serialize)]
pub struct RecentQuery {
    pub query: String,
    pub approach: Approach,
    pub time: String,
    pub success: bool,
}

impl RecentQuery {
    fn from_metric(metric: &QueryMetrics) -> Self {
        Self {
            query: truncate_query(&metric.query, PREVIEW_QUERY_LEN),
            approach: metric.approach,
            time: format!("{:.2}s", metric.execution_time),
            success: metric.success,
        }
    }
}

impl StatisticsSummary {
    /// Build a summary from the history and the orchestrator's counters.
    pub(crate) fn compute(
        history: &[QueryMetrics],
        total_queries: usize,
        fast_queries: usize,
        langgraph_queries: usize,
        fallback_count: usize,
    ) -> Self {
        let successes = history.iter().filter(|m| m.success).count();

        Self {
            total_queries,
            fast_queries,
            langgraph_queries,
            fallback_count,
            fast_percentage: percentage(fast_queries, total_queries),
            langgraph_percentage: percentage(langgraph_queries, total_queries),
            avg_fast_time: average_time(history, Approach::Fast),
            avg_langgraph_time: average_time(history, Approach::LangGraph),
            success_rate: percentage(successes, total_queries),
            recent_queries: history
                .iter()
                .rev()
                .take(PREVIEW_COUNT)
                .rev()
                .map(RecentQuery::from_metric)
                .collect(),
        }
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Mean execution time over entries that used exactly `approach`; 0 if none.
fn average_time(history: &[QueryMetrics], approach: Approach) -> f64 {
    let times: Vec<f64> = history
        .iter()
        .filter(|m| m.approach == approach)
        .map(|m| m.execution_time)
        .collect();
    if times.is_empty() {
        0.0
    } else {
        times.iter().sum::<f64>() / times.len() as f64
    }
}

fn truncate_query(query: &str, max_chars: usize) -> String {
    if query.chars().count() <= max_chars {
        query.to_string()
    } else {
        let truncated: String = query.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(approach: Approach, time: f64, success: bool) -> QueryMetrics {
        QueryMetrics::new("q".to_string(), approach, 50.0, time, success, None)
    }

    #[test]
    fn test_empty_snapshot() {
        let stats = RoutingStatistics::empty();
        assert_eq!(stats.total_queries(), 0);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total_queries"], 0);
        assert_eq!(json["message"], "No queries processed yet");
    }

    #[test]
    fn test_percentages_and_averages() {
        let history = vec![
            metric(Approach::Fast, 0.2, true),
            metric(Approach::Fast, 0.4, true),
            metric(Approach::LangGraph, 3.0, true),
        ];
        let summary = StatisticsSummary::compute(&history, 3, 2, 1, 0);
        assert!((summary.fast_percentage - 66.7).abs() < 0.1);
        assert!((summary.langgraph_percentage - 33.3).abs() < 0.1);
        assert!((summary.avg_fast_time - 0.3).abs() < 1e-9);
        assert!((summary.avg_langgraph_time - 3.0).abs() < 1e-9);
        assert_eq!(summary.success_rate, 100.0);
    }

    #[test]
    fn test_fallback_entries_do_not_skew_per_path_averages() {
        let history = vec![
            metric(Approach::Fast, 0.2, true),
            metric(Approach::FastFallback, 9.0, true),
        ];
        let summary = StatisticsSummary::compute(&history, 2, 1, 1, 1);
        assert!((summary.avg_fast_time - 0.2).abs() < 1e-9);
        assert_eq!(summary.avg_langgraph_time, 0.0);
    }

    #[test]
    fn test_recent_preview_keeps_last_ten_in_order() {
        let history: Vec<QueryMetrics> = (0..15)
            .map(|i| {
                QueryMetrics::new(
                    format!("query {i}"),
                    Approach::Fast,
                    50.0,
                    0.1,
                    true,
                    None,
                )
            })
            .collect();
        let summary = StatisticsSummary::compute(&history, 15, 15, 0, 0);
        assert_eq!(summary.recent_queries.len(), 10);
        assert_eq!(summary.recent_queries[0].query, "query 5");
        assert_eq!(summary.recent_queries[9].query, "query 14");
    }

    #[test]
    fn test_query_truncation() {
        assert_eq!(truncate_query("short", 60), "short");
        let long = "x".repeat(80);
        let truncated = truncate_query(&long, 60);
        assert_eq!(truncated.chars().count(), 63);
        assert!(truncated.ends_with("..."));
    }
}
