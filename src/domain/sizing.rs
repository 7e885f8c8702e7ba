// Sizing result domain models
use crate::domain::stream::{BitrateMode, Codec, Quality};
use serde::Serialize;
use std::fmt;

/// Required-vs-available comparison for one resource dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResourceVerdict<T> {
    pub required: T,
    pub available: T,
    pub exceeded: bool,
}

impl<T: PartialOrd + Copy> ResourceVerdict<T> {
    pub fn compare(required: T, available: T) -> Self {
        Self {
            required,
            available,
            exceeded: required > available,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResourceUsage {
    /// Mbps
    pub network: ResourceVerdict<f64>,
    /// GB
    pub ram: ResourceVerdict<f64>,
    /// Camera streams the board can decode
    pub decoder: ResourceVerdict<u32>,
    /// GB
    pub storage: ResourceVerdict<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingResult {
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

    pub average_frame_size_kb: f64,
    pub bandwidth_per_camera_mbps: f64,
    pub total_bandwidth_mbps: f64,
    pub storage_per_day_gb: f64,
    pub total_storage_required_gb: f64,
    pub ram_usage_gb: f64,
    pub total_available_storage_gb: f64,
    pub storage_sufficient: bool,

    pub resources: ResourceUsage,
}

/// A board limit the configuration runs past
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "resource", rename_all = "snake_case")]
pub enum LimitWarning {
    Network { required_mbps: f64, available_mbps: f64 },
    Ram { required_gb: f64, available_gb: f64 },
    Decoder { cameras: u32, max_cameras: u32 },
    Storage { required_gb: f64, available_gb: f64 },
}

impl fmt::Display for LimitWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitWarning::Network {
                required_mbps,
                available_mbps,
            } => write!(
                f,
                "Network bandwidth requirement ({:.0} Mbps) exceeds interface capacity ({} Mbps)",
                required_mbps, available_mbps
            ),
            LimitWarning::Ram {
                required_gb,
                available_gb,
            } => write!(
                f,
                "RAM requirement ({:.1} GB) exceeds board capacity ({} GB)",
                required_gb, available_gb
            ),
            LimitWarning::Decoder {
                cameras,
                max_cameras,
            } => write!(
                f,
                "Number of cameras ({}) exceeds board capacity ({})",
                cameras, max_cameras
            ),
            LimitWarning::Storage {
                required_gb,
                available_gb,
            } => write!(
                f,
                "Storage requirement ({:.1} GB) exceeds available storage ({:.1} GB)",
                required_gb, available_gb
            ),
        }
    }
}

impl SizingResult {
    pub fn limit_warnings(&self) -> Vec<LimitWarning> {
        let ResourceUsage {
            network,
            ram,
            decoder,
            storage,
        } = self.resources;
        let mut warnings = Vec::new();

        if network.exceeded {
            warnings.push(LimitWarning::Network {
                required_mbps: network.required,
                available_mbps: network.available,
            });
        }
        if ram.exceeded {
            warnings.push(LimitWarning::Ram {
                required_gb: ram.required,
                available_gb: ram.available,
            });
        }
        if decoder.exceeded {
            warnings.push(LimitWarning::Decoder {
                cameras: decoder.required,
                max_cameras: decoder.available,
            });
        }
        if storage.exceeded {
            warnings.push(LimitWarning::Storage {
                required_gb: storage.required,
                available_gb: storage.available,
            });
        }

        warnings
    }

    pub fn is_feasible(&self) -> bool {
        let r = &self.resources;
        !(r.network.exceeded || r.ram.exceeded || r.decoder.exceeded || r.storage.exceeded)
    }
}
