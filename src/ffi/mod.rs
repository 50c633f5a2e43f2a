//! Ownership-transferring string owners for the SDK boundary
//!
//! Converted strings are handed to SDK-facing C code. Each copy must be
//! released exactly once: either automatically when its Rust owner drops, or
//! by the foreign side after an explicit `into_raw` transfer. The exported
//! `voxbridge_*_free` functions are the release entry points for non-Rust
//! callers.

use std::borrow::Cow;
use std::ffi::{CStr, CString, NulError};
use std::fmt;
use std::os::raw::c_char;

/// A freshly allocated, nul-terminated copy of a boundary string.
///
/// The copy is independent of its source value and is released on drop
/// unless ownership is transferred with [`OwnedCStr::into_raw`].
#[derive(Clone, PartialEq, Eq)]
pub struct OwnedCStr {
    inner: CString,
}

impl OwnedCStr {
    /// Allocate a nul-terminated copy of `text`. Fails if `text` contains an
    /// interior NUL.
    pub fn new(text: &str) -> Result<Self, NulError> {
        Ok(Self {
            inner: CString::new(text)?,
        })
    }

    pub fn as_ptr(&self) -> *const c_char {
        self.inner.as_ptr()
    }

    pub fn as_c_str(&self) -> &CStr {
        self.inner.as_c_str()
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.inner.to_string_lossy()
    }

    /// Transfer ownership of the allocation across the C boundary.
    ///
    /// The pointer must come back through [`OwnedCStr::from_raw`] or
    /// [`voxbridge_string_free`] exactly once; anything else leaks or
    /// double-frees.
    pub fn into_raw(self) -> *mut c_char {
        self.inner.into_raw()
    }

    /// Reclaim ownership of a pointer produced by [`OwnedCStr::into_raw`].
    ///
    /// # Safety
    /// `ptr` must have been returned by `into_raw` and not released since.
    pub unsafe fn from_raw(ptr: *mut c_char) -> Self {
        Self {
            inner: CString::from_raw(ptr),
        }
    }
}

impl fmt::Debug for OwnedCStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OwnedCStr({:?})", self.inner)
    }
}

/// An ordered sequence of [`OwnedCStr`] copies with the same transfer rules,
/// one release obligation per element plus one for the pointer array.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringList {
    items: Vec<OwnedCStr>,
}

impl StringList {
    /// Allocate a copy of every string in `texts`, preserving order. Fails
    /// on the first interior NUL.
    pub fn new<'a>(texts: impl IntoIterator<Item = &'a str>) -> Result<Self, NulError> {
        let items = texts
            .into_iter()
            .map(OwnedCStr::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, pos: usize) -> Option<&OwnedCStr> {
        self.items.get(pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OwnedCStr> {
        self.items.iter()
    }

    /// Transfer the whole list across the C boundary as a pointer array.
    ///
    /// Release through [`StringList::from_raw_parts`] or
    /// [`voxbridge_string_list_free`] exactly once.
    pub fn into_raw_parts(self) -> (*mut *mut c_char, usize) {
        let ptrs: Vec<*mut c_char> = self.items.into_iter().map(OwnedCStr::into_raw).collect();
        let boxed = ptrs.into_boxed_slice();
        let len = boxed.len();
        (Box::into_raw(boxed) as *mut *mut c_char, len)
    }

    /// Reclaim a list transferred with [`StringList::into_raw_parts`].
    ///
    /// # Safety
    /// `ptr`/`len` must be exactly the pair returned by `into_raw_parts`,
    /// with every element pointer still owned by the array.
    pub unsafe fn from_raw_parts(ptr: *mut *mut c_char, len: usize) -> Self {
        let boxed: Box<[*mut c_char]> =
            Box::from_raw(std::ptr::slice_from_raw_parts_mut(ptr, len));
        let mut items = Vec::with_capacity(boxed.len());
        for &element in boxed.iter() {
            items.push(OwnedCStr::from_raw(element));
        }
        Self { items }
    }
}

/// Release a string previously transferred with [`OwnedCStr::into_raw`].
/// Null-tolerant.
#[no_mangle]
pub extern "C" fn voxbridge_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            drop(CString::from_raw(ptr));
        }
    }
}

/// Release a list previously transferred with [`StringList::into_raw_parts`].
/// Null-tolerant.
#[no_mangle]
pub extern "C" fn voxbridge_string_list_free(ptr: *mut *mut c_char, len: usize) {
    if !ptr.is_null() {
        unsafe {
            drop(StringList::from_raw_parts(ptr, len));
        }
    }
}
