// Form session - The UI-owned state between edits and renders
use crate::application::sizing_service::{SizingOutcome, SizingService};
use crate::domain::error::SizingError;
use crate::domain::stream::{BitrateMode, Codec, Quality, StreamConfig};
use std::time::{Duration, Instant};

pub const DEFAULT_SETTLE_MS: u64 = 300;
pub const DEFAULT_SETTLE_INTERVAL: Duration = Duration::from_millis(DEFAULT_SETTLE_MS);

/// One change to a form control
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Board(String),
    Resolution(String),
    Fps(f64),
    Codec(Codec),
    Quality(Quality),
    BitrateMode(BitrateMode),
    CameraCount(i64),
    RecordHours(f64),
    StorageDays(i64),
    AdditionalStorageGb(f64),
}

fn clamp_count(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Holds the current form values and the last rendered outcome.
///
/// Edits are coalesced: `poll` only recomputes once `settle` has elapsed
/// since the most recent edit, so a burst of edits costs one computation on
/// the latest values.
#[derive(Debug, Clone)]
pub struct FormSession {
    input: StreamConfig,
    settle: Duration,
    pending_since: Option<Instant>,
    last: Option<SizingOutcome>,
}

impl FormSession {
    /// `input` is clamped the same way edits are, so values loaded from
    /// configuration get no wider range than the form controls allow.
    pub fn new(input: StreamConfig, settle: Duration) -> Self {
        Self {
            input: input.normalized(),
            settle,
            pending_since: None,
            last: None,
        }
    }

    pub fn input(&self) -> &StreamConfig {
        &self.input
    }

    pub fn last_outcome(&self) -> Option<&SizingOutcome> {
        self.last.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    pub fn apply(&mut self, edit: FieldEdit, now: Instant) {
        let mut input = std::mem::take(&mut self.input);
        match edit {
            FieldEdit::Board(id) => input.board_id = id,
            FieldEdit::Resolution(resolution) => input.resolution = resolution,
            FieldEdit::Fps(fps) => input.fps = fps,
            FieldEdit::Codec(codec) => input.codec = codec,
            FieldEdit::Quality(quality) => input.quality = quality,
            FieldEdit::BitrateMode(mode) => input.bitrate_mode = mode,
            FieldEdit::CameraCount(count) => input.camera_count = clamp_count(count),
            FieldEdit::RecordHours(hours) => input.record_hours = hours,
            FieldEdit::StorageDays(days) => input.storage_days_retained = clamp_count(days),
            FieldEdit::AdditionalStorageGb(gb) => input.additional_storage_gb = gb,
        }
        self.input = input.normalized();
        self.pending_since = Some(now);
    }

    /// Recompute if the latest edit has settled. Returns the new outcome, or
    /// `None` when nothing was due.
    pub fn poll(
        &mut self,
        service: &SizingService,
        now: Instant,
    ) -> Result<Option<&SizingOutcome>, SizingError> {
        let due = matches!(
            self.pending_since,
            Some(since) if now.duration_since(since) >= self.settle
        );
        if !due {
            return Ok(None);
        }

        self.recompute(service).map(Some)
    }

    /// Recompute immediately, e.g. on first load
    pub fn recompute(&mut self, service: &SizingService) -> Result<&SizingOutcome, SizingError> {
        self.pending_since = None;
        match service.evaluate(&self.input) {
            Ok(outcome) => Ok(self.last.insert(outcome)),
            Err(e) => {
                self.last = None;
                Err(e)
            }
        }
    }
}
