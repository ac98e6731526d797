// Configuration module
// Public interface for routing configuration

mod loader;
mod settings;

pub use loader::load_config;
pub use settings::{AnalyzerConfig, RoutingConfig};
