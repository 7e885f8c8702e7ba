// Board catalog loader - Reads device documents into the in-memory catalog
use crate::application::board_catalog::InMemoryBoardCatalog;
use crate::domain::board::{BoardSpec, MaxCameras};
use crate::domain::error::CatalogError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    boards: BTreeMap<String, BoardRecord>,
}

// Keys follow the device file; the unit-suffixed spellings are accepted too
#[derive(Debug, Deserialize)]
struct BoardRecord {
    name: String,
    #[serde(default)]
    cpu: String,
    #[serde(alias = "ram_gb")]
    ram: f64,
    #[serde(default, alias = "storage_gb")]
    storage: Option<f64>,
    #[serde(alias = "lan_gbps")]
    lan: f64,
    #[serde(default)]
    wifi: Option<String>,
    #[serde(default, alias = "npu_tops")]
    npu: Option<f64>,
    max_cameras: MaxCamerasRecord,
}

#[derive(Debug, Deserialize)]
struct MaxCamerasRecord {
    #[serde(rename = "1080p")]
    full_hd: i64,
    #[serde(rename = "4k")]
    uhd: i64,
}

pub fn parse_json_catalog(document: &str) -> Result<InMemoryBoardCatalog, CatalogError> {
    let document: CatalogDocument = serde_json::from_str(document)?;
    build_catalog(document)
}

pub fn parse_toml_catalog(document: &str) -> Result<InMemoryBoardCatalog, CatalogError> {
    let document: CatalogDocument = toml::from_str(document)?;
    build_catalog(document)
}

/// Load a catalog file, picking the parser from the extension
pub fn load_catalog(path: impl AsRef<Path>) -> Result<InMemoryBoardCatalog, CatalogError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let catalog = match extension.as_str() {
        "json" => parse_json_catalog(&contents)?,
        "toml" => parse_toml_catalog(&contents)?,
        _ => return Err(CatalogError::UnsupportedFormat { extension }),
    };

    tracing::info!("Loaded {} board(s) from {}", catalog.len(), path.display());
    Ok(catalog)
}

fn build_catalog(document: CatalogDocument) -> Result<InMemoryBoardCatalog, CatalogError> {
    let boards = document
        .boards
        .into_iter()
        .map(|(id, record)| record_to_board(id, record))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(InMemoryBoardCatalog::new(boards))
}

fn record_to_board(id: String, record: BoardRecord) -> Result<BoardSpec, CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidBoard {
        id: id.clone(),
        reason,
    };

    if record.ram.is_nan() || record.ram <= 0.0 {
        return Err(invalid(format!("ram must be positive, got {}", record.ram)));
    }
    if record.lan.is_nan() || record.lan <= 0.0 {
        return Err(invalid(format!("lan must be positive, got {}", record.lan)));
    }

    let storage_gb = record.storage.unwrap_or(0.0);
    if storage_gb.is_nan() || storage_gb < 0.0 {
        return Err(invalid(format!("storage must not be negative, got {}", storage_gb)));
    }

    let ceiling = |key: &str, value: i64| {
        u32::try_from(value)
            .ok()
            .filter(|v| *v > 0)
            .ok_or_else(|| invalid(format!("max_cameras.{} must be a positive integer, got {}", key, value)))
    };
    let max_cameras = MaxCameras::new(
        ceiling("1080p", record.max_cameras.full_hd)?,
        ceiling("4k", record.max_cameras.uhd)?,
    );

    Ok(BoardSpec {
        id,
        name: record.name,
        cpu: record.cpu,
        ram_gb: record.ram,
        storage_gb,
        lan_gbps: record.lan,
        wifi: record.wifi.unwrap_or_default(),
        npu_tops: record.npu.unwrap_or(0.0),
        max_cameras,
    })
}
