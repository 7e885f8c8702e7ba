// Sizing engine - Pure bandwidth, storage and RAM arithmetic
use crate::application::board_catalog::BoardCatalog;
use crate::domain::board::BoardSpec;
use crate::domain::error::SizingError;
use crate::domain::sizing::{ResourceUsage, ResourceVerdict, SizingResult};
use crate::domain::stream::{Codec, Quality, Resolution, StreamConfig};

/// Raw frames are 24-bit colour
const RAW_BYTES_PER_PIXEL: f64 = 3.0;
/// Decoded frames are held as 32-bit buffers
const DECODE_BYTES_PER_PIXEL: f64 = 4.0;
const SYSTEM_RAM_OVERHEAD_GB: f64 = 2.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
/// Megabits to megabytes
const MBPS_TO_MBYTES: f64 = 0.125;

/// Divisor applied to the raw frame size. Larger means smaller output.
pub fn codec_efficiency(codec: Codec) -> f64 {
    match codec {
        Codec::Mjpeg => 10.0,
        Codec::Mpeg4 => 2.0,
        Codec::H264 => 30.0,
        Codec::H265 => 0.7,
    }
}

pub fn quality_factor(quality: Quality) -> f64 {
    match quality {
        Quality::Highest => 1.5,
        Quality::High => 1.2,
        Quality::Medium => 1.0,
        Quality::Low => 0.8,
    }
}

/// Encoded frame size in KB
pub fn average_frame_size_kb(width: u32, height: u32, codec: Codec, quality: Quality) -> f64 {
    let raw_kb = f64::from(width) * f64::from(height) * RAW_BYTES_PER_PIXEL / 1024.0;
    raw_kb / codec_efficiency(codec) * quality_factor(quality)
}

/// Stream rate in Mbps. Transmission units are 1000-based.
pub fn bitrate_mbps(frame_size_kb: f64, fps: f64) -> f64 {
    frame_size_kb * fps * 8.0 / 1000.0
}

pub fn total_bandwidth_mbps(bitrate_per_camera_mbps: f64, camera_count: u32) -> f64 {
    bitrate_per_camera_mbps * f64::from(camera_count)
}

/// Daily recording volume in GB. `total_bandwidth_mbps` already covers every
/// camera.
pub fn storage_per_day_gb(total_bandwidth_mbps: f64, record_hours: f64) -> f64 {
    total_bandwidth_mbps * SECONDS_PER_HOUR * record_hours * MBPS_TO_MBYTES / 1024.0
}

pub fn total_storage_required_gb(storage_per_day_gb: f64, storage_days_retained: u32) -> f64 {
    storage_per_day_gb * f64::from(storage_days_retained)
}

pub fn ram_usage_gb(width: u32, height: u32, camera_count: u32) -> f64 {
    let per_camera_gb =
        f64::from(width) * f64::from(height) * DECODE_BYTES_PER_PIXEL / 1024f64.powi(3);
    per_camera_gb * f64::from(camera_count) + SYSTEM_RAM_OVERHEAD_GB
}

pub fn total_available_storage_gb(board: &BoardSpec, additional_storage_gb: f64) -> f64 {
    board.storage_gb + additional_storage_gb
}

/// Decoder ceiling for the resolution class. Only the exact string
/// `1920x1080` counts as 1080p.
pub fn max_cameras(board: &BoardSpec, resolution: &str) -> u32 {
    board.max_cameras.for_resolution(resolution)
}

/// Size `input` against `board`.
///
/// `board` must be the catalog entry for `input.board_id`; a mismatch is
/// reported as [`SizingError::InvalidBoard`].
pub fn compute(input: &StreamConfig, board: &BoardSpec) -> Result<SizingResult, SizingError> {
    if board.id != input.board_id {
        return Err(SizingError::InvalidBoard {
            board_id: input.board_id.clone(),
        });
    }

    let Resolution { width, height } = input.resolution.parse()?;

    let average_frame_size_kb = average_frame_size_kb(width, height, input.codec, input.quality);
    let bandwidth_per_camera_mbps = bitrate_mbps(average_frame_size_kb, input.fps);
    let total_bandwidth_mbps = total_bandwidth_mbps(bandwidth_per_camera_mbps, input.camera_count);
    let storage_per_day_gb = storage_per_day_gb(total_bandwidth_mbps, input.record_hours);
    let total_storage_required_gb =
        total_storage_required_gb(storage_per_day_gb, input.storage_days_retained);
    let ram_usage_gb = ram_usage_gb(width, height, input.camera_count);
    let total_available_storage_gb = total_available_storage_gb(board, input.additional_storage_gb);
    let max_cameras = max_cameras(board, &input.resolution);

    let resources = ResourceUsage {
        network: ResourceVerdict::compare(total_bandwidth_mbps, board.lan_capacity_mbps()),
        ram: ResourceVerdict::compare(ram_usage_gb, board.ram_gb),
        decoder: ResourceVerdict::compare(input.camera_count, max_cameras),
        storage: ResourceVerdict::compare(total_storage_required_gb, total_available_storage_gb),
    };

    tracing::debug!(
        "Sized {} x {} on {}: {:.3} Mbps, {:.2} GB storage, {:.2} GB RAM",
        input.camera_count,
        input.resolution,
        board.id,
        total_bandwidth_mbps,
        total_storage_required_gb,
        ram_usage_gb
    );

    Ok(SizingResult {
        board_id: input.board_id.clone(),
        resolution: input.resolution.clone(),
        fps: input.fps,
        codec: input.codec,
        quality: input.quality,
        bitrate_mode: input.bitrate_mode,
        camera_count: input.camera_count,
        record_hours: input.record_hours,
        storage_days_retained: input.storage_days_retained,
        additional_storage_gb: input.additional_storage_gb,
        average_frame_size_kb,
        bandwidth_per_camera_mbps,
        total_bandwidth_mbps,
        storage_per_day_gb,
        total_storage_required_gb,
        ram_usage_gb,
        total_available_storage_gb,
        storage_sufficient: !resources.storage.exceeded,
        resources,
    })
}

/// Look the board up first; an unknown id is an [`SizingError::InvalidBoard`].
pub fn compute_from_catalog(
    input: &StreamConfig,
    catalog: &dyn BoardCatalog,
) -> Result<SizingResult, SizingError> {
    let board = catalog
        .board(&input.board_id)
        .ok_or_else(|| SizingError::InvalidBoard {
            board_id: input.board_id.clone(),
        })?;

    compute(input, board)
}
