//! Host-side iterator cursors and their scoped release guard
//!
//! CAD automation iterators are host-side cursor objects that must be
//! explicitly released; a leaked cursor poisons later queries in the same
//! session. [`ScopedIterator`] ties the release to a Rust scope so early
//! error returns cannot leak one.

use crate::error::Result;
use std::ops::{Deref, DerefMut};

/// A host-side cursor over drawing objects.
///
/// Mirrors the first/next protocol of CAD automation iterators: position
/// at the first element, then advance until the host signals exhaustion.
pub trait HostIterator {
    /// Object reference yielded by the cursor
    type ObjectRef;

    /// Position at the first element, returning it if the scope is
    /// non-empty
    fn first(&mut self) -> Result<Option<Self::ObjectRef>>;

    /// Advance to the following element, or `None` when exhausted
    fn next(&mut self) -> Result<Option<Self::ObjectRef>>;

    /// Release the host-side cursor state.
    ///
    /// Must be idempotent. Normally invoked through [`ScopedIterator`]'s
    /// drop rather than directly.
    fn release(&mut self);
}

/// RAII guard that releases a [`HostIterator`] when it goes out of scope.
#[derive(Debug)]
pub struct ScopedIterator<I: HostIterator> {
    inner: I,
}

impl<I: HostIterator> ScopedIterator<I> {
    /// Take ownership of a freshly created host iterator
    pub fn new(inner: I) -> Self {
        ScopedIterator { inner }
    }
}

impl<I: HostIterator> Deref for ScopedIterator<I> {
    type Target = I;

    fn deref(&self) -> &I {
        &self.inner
    }
}

impl<I: HostIterator> DerefMut for ScopedIterator<I> {
    fn deref_mut(&mut self) -> &mut I {
        &mut self.inner
    }
}

impl<I: HostIterator> Drop for ScopedIterator<I> {
    fn drop(&mut self) {
        self.inner.release();
    }
}
