//! AetherGo Error Types
//!
//! Centralized error handling for the glue around the matcher. Matching
//! itself never fails; these cover catalogs and teleporting. Configuration
//! loading reports through `anyhow`.

use thiserror::Error;

/// Central error type for AetherGo
#[derive(Error, Debug)]
pub enum GoError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Teleport failed: {0}")]
    Teleport(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for AetherGo operations
pub type GoResult<T> = Result<T, GoError>;
