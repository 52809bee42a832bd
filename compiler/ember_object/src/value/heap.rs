//! Heap wrapper for shared, immutable value storage.
//!
//! `Heap<T>` wraps `Arc<T>` and is the only way heap-backed variants of
//! `Value` hold their payload. The constructors are `pub(super)`, so all
//! allocation goes through the factory methods on `Value`.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A shared, immutable heap allocation.
///
/// There is no way to obtain a mutable reference to the contents: a value
/// that needs different contents is a new allocation. This is what makes
/// aliasing a `Value` safe.
///
/// # Thread Safety
/// Uses `Arc` internally for thread-safe reference counting.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    /// Create a new heap-allocated value.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: Clone> Heap<[T]> {
    /// Copy `items` into a new shared slice.
    #[inline]
    pub(super) fn from_slice(items: &[T]) -> Self {
        Heap(Arc::from(items))
    }

    /// Move `items` into a new shared slice.
    #[inline]
    pub(super) fn from_vec(items: Vec<T>) -> Self {
        Heap(Arc::from(items))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether `a` and `b` share one allocation.
    ///
    /// Identity implies equal contents, so callers may use this as a fast
    /// path before a structural comparison.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Heap::ptr_eq(self, other) || *self.0 == *other.0
    }
}

impl<T: ?Sized + Eq> Eq for Heap<T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized> AsRef<T> for Heap<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}
