use exif::Error as ExifError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input path: {0:?} is neither a file nor a directory")]
    InvalidInput(PathBuf),

    #[error("Cannot read {path:?}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No usable EXIF metadata in {path:?}: {source}")]
    MetadataUnavailable {
        path: PathBuf,
        #[source]
        source: ExifError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
