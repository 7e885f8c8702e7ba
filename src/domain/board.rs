// Board domain model
use serde::Serialize;

/// Resolution string that selects the 1080p camera ceiling. Every other
/// resolution falls into the 4k class.
pub const FULL_HD_RESOLUTION: &str = "1920x1080";

/// Per-resolution-class decoder ceilings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaxCameras {
    #[serde(rename = "1080p")]
    pub full_hd: u32,
    #[serde(rename = "4k")]
    pub uhd: u32,
}

impl MaxCameras {
    pub fn new(full_hd: u32, uhd: u32) -> Self {
        Self { full_hd, uhd }
    }

    /// Binary classification on the raw resolution string.
    pub fn for_resolution(&self, resolution: &str) -> u32 {
        if resolution == FULL_HD_RESOLUTION {
            self.full_hd
        } else {
            self.uhd
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSpec {
    pub id: String,
    pub name: String,
    pub cpu: String,
    pub ram_gb: f64,
    pub storage_gb: f64,
    pub lan_gbps: f64,
    pub wifi: String,
    pub npu_tops: f64,
    pub max_cameras: MaxCameras,
}

impl BoardSpec {
    /// Label used by board pickers, e.g. `Rock 5B (16GB RAM)`.
    pub fn select_label(&self) -> String {
        format!("{} ({}GB RAM)", self.name, self.ram_gb)
    }

    pub fn network_summary(&self) -> String {
        if self.wifi.is_empty() {
            format!("{}Gbps", self.lan_gbps)
        } else {
            format!("{}Gbps + {}", self.lan_gbps, self.wifi)
        }
    }

    pub fn npu_summary(&self) -> String {
        format!("{} TOPS", self.npu_tops)
    }

    pub fn lan_capacity_mbps(&self) -> f64 {
        self.lan_gbps * 1000.0
    }
}

#[cfg(test)]
pub(crate) fn sample_board() -> BoardSpec {
    BoardSpec {
        id: "test-board".to_string(),
        name: "Test Board".to_string(),
        cpu: "Quad-core A76".to_string(),
        ram_gb: 4.0,
        storage_gb: 32.0,
        lan_gbps: 1.0,
        wifi: "WiFi 6".to_string(),
        npu_tops: 5.0,
        max_cameras: MaxCameras::new(8, 4),
    }
}
