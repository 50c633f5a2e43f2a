//! Shared infrastructure for the addon
//!
//! Currently logging only: the tracing pipeline setup and the bridge that
//! routes vendor SDK log callbacks into it.

pub mod logging;

pub use logging::{
    init_logging, log_sdk_message, severity, LogConfig, LogFormat, LogOutput,
};
