// Result presenters - Render sizing outcomes for a front end
use crate::application::sizing_service::SizingOutcome;
use crate::domain::board::BoardSpec;
use crate::domain::sizing::SizingResult;
use crate::domain::stream::{expansion_storage_label, Codec, EXPANSION_STORAGE_OPTIONS_GB};
use anyhow::Context;
use std::io::Write;

pub trait ResultPresenter {
    fn render(&mut self, outcome: &SizingOutcome) -> anyhow::Result<()>;
}

fn status_label(exceeded: bool) -> &'static str {
    if exceeded { "❌ Exceeded" } else { "✅ OK" }
}

fn storage_label(sufficient: bool) -> &'static str {
    if sufficient { "✅ Sufficient" } else { "❌ Insufficient" }
}

/// Plain-text result panel and resource table
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Board picker entries with their spec summaries, then the option lists
    /// the other selects offer
    pub fn render_boards(&mut self, boards: &[&BoardSpec]) -> anyhow::Result<()> {
        writeln!(self.out, "Available boards:")?;
        for board in boards {
            writeln!(self.out, "  {:<16} {}", board.id, board.select_label())?;
            writeln!(
                self.out,
                "  {:<16} CPU {} | Network {} | NPU {}",
                "",
                board.cpu,
                board.network_summary(),
                board.npu_summary()
            )?;
        }

        let expansion: Vec<String> = EXPANSION_STORAGE_OPTIONS_GB
            .iter()
            .map(|size| expansion_storage_label(*size))
            .collect();
        writeln!(self.out, "M.2 expansion storage: {}", expansion.join(", "))?;

        let codecs: Vec<&str> = Codec::ALL.iter().map(Codec::as_str).collect();
        writeln!(self.out, "Codecs: {}", codecs.join(", "))?;
        self.out.flush()?;
        Ok(())
    }

    fn render_result(&mut self, result: &SizingResult) -> std::io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "Bandwidth per camera:    {:.3} Mbps", result.bandwidth_per_camera_mbps)?;
        writeln!(out, "Total bandwidth:         {:.3} Mbps", result.total_bandwidth_mbps)?;
        writeln!(out, "Storage per day:         {:.2} GB", result.storage_per_day_gb)?;
        writeln!(out, "Total available storage: {:.2} GB", result.total_available_storage_gb)?;
        writeln!(out, "Storage status:          {}", storage_label(result.storage_sufficient))?;
        writeln!(out)?;
        writeln!(
            out,
            "Stream: {} @ {} fps, {} ({}, {})",
            result.resolution, result.fps, result.codec, result.quality, result.bitrate_mode
        )?;
        writeln!(out, "Average frame size: {:.2} KB", result.average_frame_size_kb)?;
        writeln!(out)?;

        let r = &result.resources;
        let rows = [
            (
                "Network",
                format!("{:.2} Mbps", r.network.required),
                format!("{} Mbps", r.network.available),
                r.network.exceeded,
            ),
            (
                "RAM",
                format!("{:.1} GB", r.ram.required),
                format!("{} GB", r.ram.available),
                r.ram.exceeded,
            ),
            (
                "CPU/Decoder",
                format!("{} cameras", r.decoder.required),
                format!("{} cameras", r.decoder.available),
                r.decoder.exceeded,
            ),
            (
                "Storage",
                format!("{:.2} GB", r.storage.required),
                format!("{:.2} GB", r.storage.available),
                r.storage.exceeded,
            ),
        ];

        writeln!(out, "{:<12} {:<16} {:<16} Status", "Resource", "Required", "Available")?;
        for (name, required, available, exceeded) in rows {
            writeln!(out, "{:<12} {:<16} {:<16} {}", name, required, available, status_label(exceeded))?;
        }

        for warning in result.limit_warnings() {
            writeln!(out, "⚠️ {}", warning)?;
        }

        Ok(())
    }
}

impl<W: Write> ResultPresenter for TextPresenter<W> {
    fn render(&mut self, outcome: &SizingOutcome) -> anyhow::Result<()> {
        match outcome {
            SizingOutcome::Rejected(warnings) => {
                for warning in warnings {
                    writeln!(self.out, "⚠️ {}", warning)?;
                }
            }
            SizingOutcome::Sized(result) => {
                self.render_result(result).context("Failed to write sizing result")?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Pretty JSON, one document per outcome
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultPresenter for JsonPresenter<W> {
    fn render(&mut self, outcome: &SizingOutcome) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, outcome).context("Failed to encode sizing outcome")?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::compute;
    use crate::application::validator::Warning;
    use crate::domain::board::sample_board;
    use crate::domain::stream::{Codec, StreamConfig};

    fn sized() -> SizingOutcome {
        let input = StreamConfig {
            board_id: "test-board".to_string(),
            codec: Codec::H264,
            ..StreamConfig::default()
        };
        SizingOutcome::Sized(compute(&input, &sample_board()).unwrap())
    }

    fn render_text(outcome: &SizingOutcome) -> String {
        let mut presenter = TextPresenter::new(Vec::new());
        presenter.render(outcome).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_text_result_panel() {
        let text = render_text(&sized());

        assert!(text.contains("Bandwidth per camera:    48.600 Mbps"), "{text}");
        assert!(text.contains("Storage per day:         512.58 GB"), "{text}");
        assert!(text.contains("Total available storage: 32.00 GB"), "{text}");
        assert!(text.contains("Storage status:          ❌ Insufficient"), "{text}");
        assert!(text.contains("Stream: 1920x1080 @ 30 fps, H264 (medium, VBR)"), "{text}");
        assert!(text.contains("Average frame size: 202.50 KB"), "{text}");

        let network_row = text.lines().find(|l| l.starts_with("Network")).unwrap();
        assert!(network_row.contains("48.60 Mbps"));
        assert!(network_row.contains("1000 Mbps"));
        assert!(network_row.ends_with("✅ OK"));

        let storage_row = text.lines().find(|l| l.starts_with("Storage      ")).unwrap();
        assert!(storage_row.ends_with("❌ Exceeded"), "{storage_row}");

        assert!(text.contains("⚠️ Storage requirement (15377.3 GB) exceeds available storage (32.0 GB)"));
    }

    #[test]
    fn test_text_warnings_only() {
        let outcome = SizingOutcome::Rejected(vec![Warning::MissingBoard, Warning::FpsTooLow]);
        let text = render_text(&outcome);
        assert_eq!(text, "⚠️ Please select a board\n⚠️ FPS must be at least 1\n");
    }

    #[test]
    fn test_board_listing() {
        let board = sample_board();
        let mut presenter = TextPresenter::new(Vec::new());
        presenter.render_boards(&[&board]).unwrap();
        let text = String::from_utf8(presenter.into_inner()).unwrap();

        assert!(text.contains("Test Board (4GB RAM)"));
        assert!(text.contains("Network 1Gbps + WiFi 6"));
        assert!(text.contains("NPU 5 TOPS"));
        assert!(text.contains("M.2 expansion storage: 128 GB, 256 GB, 512 GB, 1 TB\n"), "{text}");
        assert!(text.ends_with("Codecs: MJPEG, MPEG4, H264, H265\n"), "{text}");
    }

    #[test]
    fn test_json_presenter() {
        let mut presenter = JsonPresenter::new(Vec::new());
        presenter.render(&sized()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&presenter.into_inner()).unwrap();

        assert_eq!(value["status"], "sized");
        assert_eq!(value["data"]["board_id"], "test-board");
        assert_eq!(value["data"]["codec"], "H264");
        assert_eq!(value["data"]["storage_sufficient"], false);
        assert_eq!(value["data"]["resources"]["decoder"]["available"], 8);
        assert_eq!(value["data"]["resources"]["storage"]["exceeded"], true);
    }
}
