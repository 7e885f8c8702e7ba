// Stream configuration domain models
use crate::domain::error::SizingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Codec {
    Mjpeg,
    Mpeg4,
    H264,
    H265,
}

impl Codec {
    pub const ALL: [Codec; 4] = [Codec::Mjpeg, Codec::Mpeg4, Codec::H264, Codec::H265];

    pub fn as_str(&self) -> &'static str {
        match self {
            Codec::Mjpeg => "MJPEG",
            Codec::Mpeg4 => "MPEG4",
            Codec::H264 => "H264",
            Codec::H265 => "H265",
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Highest,
    High,
    Medium,
    Low,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Highest => "highest",
            Quality::High => "high",
            Quality::Medium => "medium",
            Quality::Low => "low",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoder rate control. Echoed in results only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BitrateMode {
    #[default]
    Vbr,
    Cbr,
}

impl BitrateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BitrateMode::Vbr => "VBR",
            BitrateMode::Cbr => "CBR",
        }
    }
}

impl fmt::Display for BitrateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed `WIDTHxHEIGHT` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn pixels(&self) -> f64 {
        f64::from(self.width) * f64::from(self.height)
    }
}

impl FromStr for Resolution {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SizingError::MalformedResolution {
            resolution: s.to_string(),
        };

        let (width, height) = s.split_once('x').ok_or_else(malformed)?;
        let width: u32 = width.trim().parse().map_err(|_| malformed())?;
        let height: u32 = height.trim().parse().map_err(|_| malformed())?;

        if width == 0 || height == 0 {
            return Err(malformed());
        }

        Ok(Self { width, height })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The form's record-hours control stops at a full day
pub const MAX_RECORD_HOURS: f64 = 24.0;

fn clamp_non_negative(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}

/// One sizing request, built fresh from the current form state.
///
/// Fields may hold out-of-range values; run
/// [`validate`](crate::application::validator::validate) before computing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub board_id: String,
    pub resolution: String,
    pub fps: f64,
    pub codec: Codec,
    pub quality: Quality,
    pub bitrate_mode: BitrateMode,
    pub camera_count: u32,
    pub record_hours: f64,
    pub storage_days_retained: u32,
    pub additional_storage_gb: f64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            board_id: String::new(),
            resolution: "1920x1080".to_string(),
            fps: 30.0,
            codec: Codec::H265,
            quality: Quality::Medium,
            bitrate_mode: BitrateMode::Vbr,
            camera_count: 1,
            record_hours: 24.0,
            storage_days_retained: 30,
            additional_storage_gb: 0.0,
        }
    }
}

impl StreamConfig {
    /// Pull numeric fields back into the form's ranges: NaN or negative
    /// fps and extra storage become 0, record hours land in [0, 24].
    /// Counts are left alone for the validator to flag.
    pub fn normalized(mut self) -> Self {
        self.fps = clamp_non_negative(self.fps);
        self.record_hours = clamp_non_negative(self.record_hours).min(MAX_RECORD_HOURS);
        self.additional_storage_gb = clamp_non_negative(self.additional_storage_gb);
        self
    }
}

/// M.2 expansion sizes offered next to the board picker, in GB.
pub const EXPANSION_STORAGE_OPTIONS_GB: [u32; 4] = [128, 256, 512, 1024];

pub fn expansion_storage_label(size_gb: u32) -> String {
    if size_gb >= 1024 {
        format!("{} TB", f64::from(size_gb) / 1024.0)
    } else {
        format!("{} GB", size_gb)
    }
}
