use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("No orientation data for slice view {view}")]
    MissingOrientationData { view: String },

    #[error("Failed to load figure mesh {}: {reason}", .path.display())]
    AssetLoadFailure { path: PathBuf, reason: String },

    #[error("Render surface of slice view {view} could not be resolved")]
    UnresolvedSurface { view: String },

    #[error("Slice view {view} is not tracked")]
    UnknownView { view: String },

    #[error("Invalid value {value} for {name}")]
    InvalidSetting { name: &'static str, value: f64 },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OverlayError>;
