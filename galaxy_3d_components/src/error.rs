//! Error types for the Galaxy3D component layer
//!
//! Graphics-library failures (bad color strings, unknown fields, type
//! mismatches) are surfaced unchanged through these variants. A missing
//! parent component is NOT an error: it is logged and the component stays
//! inert.

use std::fmt;

/// Result type for Galaxy3D component operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D component errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Backend-side failure (poisoned material lock, etc.)
    BackendError(String),

    /// Invalid resource (disposed material, missing object, etc.)
    InvalidResource(String),

    /// Color value could not be parsed or converted
    InvalidColor(String),

    /// Field does not exist on the material
    UnknownField(String),

    /// Value type is not compatible with the field
    FieldTypeMismatch(String),

    /// No material variant registered under that name
    UnknownVariant(String),

    /// Node key is stale or the node has the wrong kind
    InvalidNode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InvalidColor(msg) => write!(f, "Invalid color: {}", msg),
            Error::UnknownField(msg) => write!(f, "Unknown field: {}", msg),
            Error::FieldTypeMismatch(msg) => write!(f, "Field type mismatch: {}", msg),
            Error::UnknownVariant(msg) => write!(f, "Unknown material variant: {}", msg),
            Error::InvalidNode(msg) => write!(f, "Invalid node: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an error of the given variant and log it at ERROR severity
///
/// # Example
///
/// ```ignore
/// let err = scene_err!("galaxy3d::MaterialObject", UnknownField, "'{}' on {}", key, kind);
/// ```
#[macro_export]
macro_rules! scene_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::galaxy3d::Diagnostics::log_detailed(
            $crate::galaxy3d::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::galaxy3d::Error::$variant(message)
    }};
}

/// Log an error of the given variant and return it from the current function
#[macro_export]
macro_rules! scene_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::scene_err!($source, $variant, $($arg)*))
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
