// Metrics module
// Public interface for the query history, statistics, and JSON export

mod export;
mod statistics;
mod types;

pub use export::MetricsExport;
pub use statistics::{RecentQuery, RoutingStatistics, StatisticsSummary};
pub use types::QueryMetrics;

pub(crate) use export::write_json;
