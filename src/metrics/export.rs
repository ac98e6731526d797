// JSON export of the statistics snapshot plus the full query history

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::statistics::RoutingStatistics;
use super::types::QueryMetrics;

/// Everything `export_metrics` writes to disk. No schema versioning; the
/// file at the target path is overwritten.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsExport {
    pub statistics: RoutingStatistics,
    pub query_history: Vec<QueryMetrics>,
}

pub(crate) fn write_json(path: &Path, export: &MetricsExport) -> Result<()> {
    let json = serde_json::to_string_pretty(export).context("Failed to serialize metrics")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Approach;

    #[test]
    fn test_written_file_contains_history_and_statistics() -> Result<()> {
        let history = vec![QueryMetrics::new(
            "What is a quorum?".to_string(),
            Approach::Fast,
            20.0,
            0.12,
            true,
            None,
        )];
        let export = MetricsExport {
            statistics: RoutingStatistics::empty(),
            query_history: history,
        };

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("metrics.json");
        write_json(&path, &export)?;

        let contents = std::fs::read_to_string(&path)?;
        let value: serde_json::Value = serde_json::from_str(&contents)?;
        assert_eq!(value["query_history"].as_array().unwrap().len(), 1);
        assert_eq!(value["query_history"][0]["approach"], "fast");
        assert_eq!(value["statistics"]["message"], "No queries processed yet");
        Ok(())
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let export = MetricsExport {
            statistics: RoutingStatistics::empty(),
            query_history: Vec::new(),
        };
        let result = write_json(Path::new("/nonexistent/dir/metrics.json"), &export);
        assert!(result.is_err());
    }
}
