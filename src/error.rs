//! Error types for gridview-builder.
//!
//! The taxonomy is small: the only fatal error is failing to
//! find a mount point. Clipboard failures are reported through copy feedback,
//! and configuration values are never rejected.

use std::io;
use std::path::PathBuf;

/// Errors produced by the widget, its options loader and the terminal adapter.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The widget could not be attached to its mount point.
    #[error("mount point not found: {0}")]
    MountNotFound(String),

    /// Writing the generated code to the clipboard failed.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    /// The options document is not valid JSON for `BuilderOptions`.
    #[error("invalid builder options: {0}")]
    OptionsParse(#[from] serde_json::Error),

    /// The options file could not be read.
    #[error("failed to read options file {}: {source}", path.display())]
    OptionsRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Terminal I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_not_found_message() {
        let err = Error::MountNotFound("stdout is not a terminal".to_string());
        assert_eq!(err.to_string(), "mount point not found: stdout is not a terminal");
    }

    #[test]
    fn test_options_parse_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = serde_err.into();
        assert!(matches!(err, Error::OptionsParse(_)));
        assert!(err.to_string().starts_with("invalid builder options"));
    }

    #[test]
    fn test_options_read_carries_path() {
        let err = Error::OptionsRead {
            path: PathBuf::from("missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("missing.json"));
    }
}
