//! Configuration error types

use thiserror::Error;

/// Errors raised while loading or validating [`crate::Settings`]
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The play field cannot hold an entity without it straddling the border.
    #[error("field {field_width}x{field_height} is too small for {entity} of size {width}x{height}")]
    FieldTooSmall {
        entity: &'static str,
        width: i32,
        height: i32,
        field_width: i32,
        field_height: i32,
    },

    /// A size, speed or count that must be positive was not.
    #[error("{0} must be positive")]
    NotPositive(&'static str),

    /// A value that may be zero but not negative was negative.
    #[error("{0} must not be negative")]
    Negative(&'static str),

    /// Settings file could not be read.
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for [`crate::Settings`].
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
