//! `OptionalValue` — optional container for plain value payloads.
//!
//! Value-like types have no spare representation for "absent", so the
//! container carries an explicit presence flag. When the flag is clear the
//! slot holds [`ValueLike::ZERO`]; it is always initialized and reading it
//! never faults.

use core::fmt;

use super::ValueLike;

/// A possibly-absent value-like value.
///
/// Layout note: store `value` first; keep `has_value` in tail padding.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionalValue<T> {
    value: T,
    has_value: bool,
}

impl<T: ValueLike> OptionalValue<T> {
    /// The canonical absent instance.
    pub const NONE: Self = Self {
        value: T::ZERO,
        has_value: false,
    };

    /// Creates a container from a possibly-absent value.
    #[inline]
    pub fn new(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::NONE,
        }
    }

    /// Creates a present container.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self {
            value,
            has_value: true,
        }
    }

    /// Returns `true` if a value is stored.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.has_value
    }

    /// Reads the raw slot.
    ///
    /// Only meaningful when [`has_value`](Self::has_value) is `true`;
    /// otherwise returns [`ValueLike::ZERO`].
    #[inline(always)]
    pub const fn value(&self) -> T {
        self.value
    }

    /// Returns the stored value, or `None` when absent.
    #[inline]
    pub fn get(&self) -> Option<T> {
        self.has_value.then_some(self.value)
    }

    /// Unwraps into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.get()
    }

    /// Returns the stored value, or `fallback` when absent.
    #[inline]
    pub fn fallback(self, fallback: T) -> T {
        if self.has_value {
            self.value
        } else {
            fallback
        }
    }
}

impl<T: ValueLike> Default for OptionalValue<T> {
    fn default() -> Self {
        Self::NONE
    }
}

impl<T: ValueLike> From<Option<T>> for OptionalValue<T> {
    fn from(value: Option<T>) -> Self {
        Self::new(value)
    }
}

impl<T: ValueLike> From<OptionalValue<T>> for Option<T> {
    fn from(optional: OptionalValue<T>) -> Self {
        optional.get()
    }
}

impl<T: ValueLike + fmt::Debug> fmt::Debug for OptionalValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OptionalValue").field(&self.get()).finish()
    }
}
