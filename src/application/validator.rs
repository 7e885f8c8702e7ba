// Input validation - Collects every problem with a sizing request
use crate::domain::stream::StreamConfig;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Warning {
    MissingBoard,
    CameraCountTooLow,
    FpsTooLow,
    StorageDaysTooLow,
}

impl Warning {
    pub fn message(&self) -> &'static str {
        match self {
            Warning::MissingBoard => "Please select a board",
            Warning::CameraCountTooLow => "Camera count must be at least 1",
            Warning::FpsTooLow => "FPS must be at least 1",
            Warning::StorageDaysTooLow => "Storage days must be at least 1",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Check a request without touching it. Rules are independent, so every
/// applicable warning is returned.
pub fn validate(input: &StreamConfig) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if input.board_id.trim().is_empty() {
        warnings.push(Warning::MissingBoard);
    }
    if input.camera_count < 1 {
        warnings.push(Warning::CameraCountTooLow);
    }
    if input.fps.is_nan() || input.fps < 1.0 {
        warnings.push(Warning::FpsTooLow);
    }
    if input.storage_days_retained < 1 {
        warnings.push(Warning::StorageDaysTooLow);
    }

    warnings
}
