use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the few fallible edges of the workspace app.
///
/// Rendering itself never fails; these surface from launcher
/// configuration and from constructing domain values out of raw input.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Could not read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine the platform config directory")]
    NoConfigDir,

    #[error("Invalid calendar month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Unknown {kind}: {value:?}")]
    UnknownLabel { kind: &'static str, value: String },
}

impl AppError {
    pub fn unknown_label(kind: &'static str, value: &str) -> Self {
        Self::UnknownLabel {
            kind,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::InvalidMonth { year: 2023, month: 13 };
        assert_eq!(err.to_string(), "Invalid calendar month: 2023-13");

        let err = AppError::unknown_label("priority", "URGENT!");
        assert_eq!(err.to_string(), "Unknown priority: \"URGENT!\"");
    }
}
