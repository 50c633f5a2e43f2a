//! Core boundary-call components
//!
//! This module contains the dynamic value model and the call representation
//! used throughout the voxbridge marshalling layer.

pub mod call;
pub mod value;

pub use call::CallInfo;
pub use value::{Value, ValueKind};
