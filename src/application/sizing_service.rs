// Sizing service - Use case for validating and sizing a camera deployment
use crate::application::board_catalog::BoardCatalog;
use crate::application::engine;
use crate::application::validator::{validate, Warning};
use crate::domain::board::BoardSpec;
use crate::domain::error::SizingError;
use crate::domain::sizing::SizingResult;
use crate::domain::stream::StreamConfig;
use serde::Serialize;
use std::sync::Arc;

/// What the presenter receives for one recomputation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum SizingOutcome {
    /// Input was rejected; any displayed result must be cleared
    Rejected(Vec<Warning>),
    Sized(SizingResult),
}

#[derive(Clone)]
pub struct SizingService {
    catalog: Arc<dyn BoardCatalog>,
}

impl SizingService {
    pub fn new(catalog: Arc<dyn BoardCatalog>) -> Self {
        Self { catalog }
    }

    pub fn boards(&self) -> Vec<&BoardSpec> {
        self.catalog.boards()
    }

    pub fn evaluate(&self, input: &StreamConfig) -> Result<SizingOutcome, SizingError> {
        let warnings = validate(input);
        if !warnings.is_empty() {
            tracing::warn!(
                "Rejected sizing request with {} warning(s): {:?}",
                warnings.len(),
                warnings
            );
            return Ok(SizingOutcome::Rejected(warnings));
        }

        let result = engine::compute_from_catalog(input, self.catalog.as_ref()).inspect_err(|e| {
            tracing::error!("Sizing failed for board {}: {}", input.board_id, e);
        })?;

        if result.is_feasible() {
            tracing::debug!("Board {} has headroom for the deployment", result.board_id);
        } else {
            for warning in result.limit_warnings() {
                tracing::debug!("Board {}: {}", result.board_id, warning);
            }
        }

        Ok(SizingOutcome::Sized(result))
    }
}
