// VaultMind Router - hybrid query routing core
// Library exports

pub mod analyzer;
pub mod config;
pub mod metrics;
pub mod router;
