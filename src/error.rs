use std::io;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Mineral descriptor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum MineralError {
    #[error("specific gravity must be a positive finite number, got {value}")]
    InvalidSpecificGravity { value: f64 },

    #[error("failed to read mineral descriptor: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    #[error("failed to parse mineral descriptor: {source}")]
    Descriptor {
        #[from]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Color-spec errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("unrecognized color name '{0}'")]
    UnknownName(String),

    #[error("invalid hex color '{0}', expected #rrggbb")]
    InvalidHex(String),
}

// ---------------------------------------------------------------------------
// Dataset errors – loading and the numeric pass share one taxonomy
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset file not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse dataset: {details} (at line {line})")]
    Parse { line: usize, details: String },

    #[error("temperature column has {temperatures} values but volume column has {volumes}")]
    LengthMismatch { temperatures: usize, volumes: usize },

    #[error("dataset has {rows} data row(s), finite differences need at least 2")]
    TooShort { rows: usize },

    #[error("temperature step between the first two samples is zero (T = {t} °C)")]
    DegenerateSpacing { t: f64 },

    #[error("volume is zero at sample {index}, cannot normalize the derivative")]
    ZeroVolume { index: usize },
}

impl DatasetError {
    pub(crate) fn parse(line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            line,
            details: details.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not resolve color: {source}")]
    Color {
        #[from]
        source: ColorError,
    },

    #[error("chart backend error: {0}")]
    Backend(String),

    #[error("PNG encoding failed: {source}")]
    Encode {
        #[from]
        source: image::ImageError,
    },
}

/// Failure of the combined compute-and-render operation.
#[derive(Debug, Error)]
pub enum ExpansionError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
