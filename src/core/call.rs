//! Boundary call representation
//!
//! One `CallInfo` is the ordered argument list of a single invocation
//! crossing from the scripting runtime into native code. It is read-only to
//! the marshalling layer and lives only for that invocation.

use crate::core::value::Value;
use smallvec::SmallVec;

// Addon methods rarely take more than a handful of arguments.
const INLINE_ARGS: usize = 8;

/// A single invocation's argument list, plus the method name for diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallInfo {
    method: Option<String>,
    args: SmallVec<[Value; INLINE_ARGS]>,
}

impl CallInfo {
    /// A call with no method name attached.
    pub fn new(args: impl IntoIterator<Item = Value>) -> Self {
        Self {
            method: None,
            args: args.into_iter().collect(),
        }
    }

    /// A call tagged with the addon method it targets; the name only appears
    /// in arity errors and log lines.
    pub fn named(method: impl Into<String>, args: impl IntoIterator<Item = Value>) -> Self {
        Self {
            method: Some(method.into()),
            args: args.into_iter().collect(),
        }
    }

    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// The raw value at `pos`, `None` past the end of the list.
    pub fn arg(&self, pos: usize) -> Option<&Value> {
        self.args.get(pos)
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

impl From<Vec<Value>> for CallInfo {
    fn from(args: Vec<Value>) -> Self {
        Self::new(args)
    }
}

impl FromIterator<Value> for CallInfo {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter)
    }
}
