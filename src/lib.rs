// Core modules
pub mod coerce;
pub mod core;
pub mod errors;
pub mod ffi;
pub mod infrastructure;
pub mod platform;
pub mod sdk;

// Re-export commonly used items
pub use coerce::{num, Args, FromBoundary};
pub use self::core::{CallInfo, Value, ValueKind};
pub use errors::BindingError;
pub use ffi::{OwnedCStr, StringList};
pub use infrastructure::{init_logging, LogConfig, LogFormat, LogOutput};
pub use platform::Platform;
pub use sdk::{ConnectionHandle, SdkEnum};
