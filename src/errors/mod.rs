//! Error types for the addon boundary.
//!
//! Only two failures ever surface to the runtime: a call with the wrong
//! number of arguments, and a default value that cannot become a C string.
//! Shape mismatches on individual arguments are deliberately absent from
//! this taxonomy; they degrade to the caller-supplied default instead of
//! rejecting the invocation.

use std::ffi::NulError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum BindingError {
    /// Argument count outside the declared inclusive range. Fatal to the
    /// call; raised before any positional extraction runs.
    #[error("{method}: expected {min}..={max} arguments, got {found}")]
    ArityMismatch {
        method: String,
        min: usize,
        max: usize,
        found: usize,
    },

    /// A caller-supplied default contains an interior NUL and cannot be
    /// handed to the SDK. Never silently defaulted.
    #[error("default value is not a valid C string: {0}")]
    InvalidCString(#[from] NulError),

    /// The host is not one of the platforms the SDK ships binaries for.
    #[error("unsupported platform: {os} {arch}")]
    UnsupportedPlatform { os: String, arch: String },
}

impl BindingError {
    pub fn arity(method: Option<&str>, min: usize, max: usize, found: usize) -> Self {
        BindingError::ArityMismatch {
            method: method.unwrap_or("<call>").to_string(),
            min,
            max,
            found,
        }
    }
}
