//! Error types for the dashboard crate.

use thiserror::Error;

/// Dashboard errors. Aggregation itself never fails; only loading,
/// configuration and rendering do.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("failed to load: {0}")]
    Fetch(#[from] battlecard_client::BattlecardError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;
