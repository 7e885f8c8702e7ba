//! Hardware sizing for video-surveillance deployments.
//!
//! Given a board catalog and a camera configuration, the engine estimates
//! network bandwidth, recording storage and RAM, and compares each against
//! the selected board's limits.
//!
//! - `domain`: boards, stream parameters, sizing results and errors
//! - `application`: validation, the sizing engine and the sizing use case
//! - `infrastructure`: configuration and catalog documents
//! - `presentation`: result presenters and the form session

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::engine::{compute, compute_from_catalog};
pub use application::sizing_service::{SizingOutcome, SizingService};
pub use application::validator::{validate, Warning};
pub use domain::error::{CatalogError, SizingError};
