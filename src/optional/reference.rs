//! `OptionalRef` — optional container for reference-like payloads.
//!
//! Absence is stored in-band as `Option<T>`. For pointer-like payloads the
//! niche makes the container exactly as large as `T` itself.

use core::fmt;

use super::ReferenceLike;

/// A possibly-absent reference-like value.
///
/// Built through [`optional::from`](crate::optional::from),
/// [`OptionalRef::new`] or [`OptionalRef::some`]; immutable afterwards.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionalRef<T> {
    value: Option<T>,
}

impl<T: ReferenceLike> OptionalRef<T> {
    /// The canonical absent instance.
    pub const NONE: Self = Self { value: None };

    /// Creates a container from a possibly-absent value.
    #[inline]
    pub const fn new(value: Option<T>) -> Self {
        Self { value }
    }

    /// Creates a present container.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Returns `true` if a value is stored.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Borrows the stored value, or `None` when absent.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Unwraps into the underlying `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Returns the stored value, or `fallback` when absent.
    ///
    /// `fallback` is a `T`, never an absence marker, so the result is
    /// always a present value.
    #[inline]
    pub fn fallback(self, fallback: T) -> T {
        match self.value {
            Some(value) => value,
            None => fallback,
        }
    }
}

impl<T: ReferenceLike> Default for OptionalRef<T> {
    fn default() -> Self {
        Self::NONE
    }
}

impl<T: ReferenceLike> From<Option<T>> for OptionalRef<T> {
    fn from(value: Option<T>) -> Self {
        Self::new(value)
    }
}

impl<T> From<OptionalRef<T>> for Option<T> {
    fn from(optional: OptionalRef<T>) -> Self {
        optional.value
    }
}

impl<T: fmt::Debug> fmt::Debug for OptionalRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OptionalRef").field(&self.value).finish()
    }
}
