//! Positional argument extraction
//!
//! Mirrors the addon's calling convention: every native method first gates
//! the argument count, then reads each optional positional argument with a
//! default. Wrong arity rejects the invocation; a wrong-shaped argument
//! never does.

use crate::coerce::convert::FromBoundary;
use crate::core::call::CallInfo;
use crate::errors::BindingError;
use crate::ffi::{OwnedCStr, StringList};
use crate::sdk::{ConnectionHandle, SdkEnum};

/// Validate the argument count of `call` against the inclusive `[min, max]`
/// range and return the actual count.
///
/// Runs once per call, before any positional extraction. Both bounds default
/// to zero at call sites that expect no arguments.
pub fn num(call: &CallInfo, min: usize, max: usize) -> Result<usize, BindingError> {
    let found = call.len();
    if found < min || found > max {
        tracing::debug!(
            method = call.method().unwrap_or("<call>"),
            min,
            max,
            found,
            "rejecting call with wrong argument count"
        );
        return Err(BindingError::arity(call.method(), min, max, found));
    }
    Ok(found)
}

/// Positional extractor bound to one arity-checked call.
///
/// Constructed by [`Args::bind`], which performs the [`num`] check; the
/// getters afterwards never fail on a shape mismatch, they fall back to the
/// caller-supplied default. The facade does not signal whether a default was
/// used because the argument was omitted or because it was inconvertible;
/// callers that care inspect [`CallInfo::arg`] directly.
#[derive(Debug)]
pub struct Args<'a> {
    call: &'a CallInfo,
}

impl<'a> Args<'a> {
    /// Arity-check `call` against `[min, max]` and bind an extractor to it.
    pub fn bind(call: &'a CallInfo, min: usize, max: usize) -> Result<Self, BindingError> {
        num(call, min, max)?;
        Ok(Self { call })
    }

    /// Number of arguments actually present on the call.
    pub fn len(&self) -> usize {
        self.call.len()
    }

    pub fn is_empty(&self) -> bool {
        self.call.is_empty()
    }

    /// The value at `pos` when present and convertible, `default` otherwise.
    pub fn get<T: FromBoundary>(&self, pos: usize, default: T) -> T {
        self.call
            .arg(pos)
            .and_then(T::from_boundary)
            .unwrap_or(default)
    }

    /// 64-bit server connection handle.
    pub fn handle(&self, pos: usize, default: ConnectionHandle) -> ConnectionHandle {
        self.get(pos, default)
    }

    pub fn uint(&self, pos: usize, default: u32) -> u32 {
        self.get(pos, default)
    }

    pub fn int(&self, pos: usize, default: i32) -> i32 {
        self.get(pos, default)
    }

    /// A freshly allocated, nul-terminated copy of the string at `pos`, or
    /// an equally fresh copy of `default`.
    ///
    /// The returned owner releases the copy on drop unless ownership is
    /// transferred with [`OwnedCStr::into_raw`]. An interior NUL in the
    /// boundary value is a shape mismatch and falls back to the default; an
    /// interior NUL in `default` itself is an error.
    pub fn string(&self, pos: usize, default: &str) -> Result<OwnedCStr, BindingError> {
        if let Some(text) = self.call.arg(pos).and_then(String::from_boundary) {
            if let Ok(copy) = OwnedCStr::new(&text) {
                return Ok(copy);
            }
        }
        OwnedCStr::new(default).map_err(BindingError::from)
    }

    /// Freshly allocated copies of every string in the list at `pos`, in
    /// order, or copies of `defaults`.
    ///
    /// Same ownership and NUL rules as [`Args::string`], one release
    /// obligation per element.
    pub fn string_list(&self, pos: usize, defaults: &[&str]) -> Result<StringList, BindingError> {
        if let Some(items) = self.call.arg(pos).and_then(Vec::<String>::from_boundary) {
            if let Ok(list) = StringList::new(items.iter().map(String::as_str)) {
                return Ok(list);
            }
        }
        StringList::new(defaults.iter().copied()).map_err(BindingError::from)
    }

    /// Decode a numeric argument into an SDK constant, `default` on a shape
    /// mismatch or an unknown discriminant.
    pub fn sdk<T: SdkEnum>(&self, pos: usize, default: T) -> T {
        self.call
            .arg(pos)
            .and_then(u64::from_boundary)
            .and_then(T::from_raw)
            .unwrap_or(default)
    }
}
