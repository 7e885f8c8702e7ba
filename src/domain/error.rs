// Error taxonomy for sizing and catalog loading
use thiserror::Error;

/// Failures raised by the sizing engine for programmer or data errors.
///
/// Expected bad input is reported as [`crate::application::validator::Warning`]
/// instead and never reaches the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    #[error("Invalid board selected: {board_id:?} is not in the catalog")]
    InvalidBoard { board_id: String },

    #[error("Malformed resolution {resolution:?}: expected WIDTHxHEIGHT with positive integers")]
    MalformedResolution { resolution: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read board catalog {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON board catalog")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse TOML board catalog")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported board catalog format {extension:?} (expected json or toml)")]
    UnsupportedFormat { extension: String },

    #[error("board {id:?} is invalid: {reason}")]
    InvalidBoard { id: String, reason: String },
}
