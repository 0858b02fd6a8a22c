use thiserror::Error;

/// Errors that can occur outside the drawing path (export and config I/O)
#[derive(Debug, Error)]
pub enum KaleidoError {
    #[error("Failed to encode canvas image: {0}")]
    Export(#[from] image::ImageError),

    #[error("File I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config data: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for fallible kaleidoscope operations
pub type KaleidoResult<T> = Result<T, KaleidoError>;
