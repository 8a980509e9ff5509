//! Optional containers and the helpers that build them.
//!
//! The module is split by concern:
//! - `kind` classifies payload types (reference-like vs value-like).
//! - `reference` / `value` are the two containers.
//! - `serialize` / `arbitrary` are integrations with `serde` and `proptest`.
//!
//! The free functions here are the usual entry points:
//!
//! ```rust
//! use optionality::optional;
//!
//! let name = optional::from::<&str>(None);
//! assert_eq!(optional::fallback(name, "default"), "default");
//!
//! let answer = optional::from(Some(42i32));
//! assert_eq!(answer.value(), 42);
//! ```

#[cfg(feature = "proptest")]
mod arbitrary;
pub mod kind;
mod macros;
pub mod reference;
mod serialize;
pub mod value;

use core::future::IntoFuture;

pub use kind::{Optionality, ReferenceLike, ValueLike};
pub use reference::OptionalRef;
pub use value::OptionalValue;

/// Behaviour shared by [`OptionalRef`] and [`OptionalValue`].
pub trait Optional: Sized {
    /// The payload type.
    type Value;

    /// Returns `true` if a value is stored.
    fn has_value(&self) -> bool;

    /// Unwraps into an `Option`.
    fn into_option(self) -> Option<Self::Value>;

    /// Returns the stored value, or `fallback` when absent.
    #[inline]
    fn fallback(self, fallback: Self::Value) -> Self::Value {
        self.into_option().unwrap_or(fallback)
    }
}

impl<T: ReferenceLike> Optional for OptionalRef<T> {
    type Value = T;

    #[inline]
    fn has_value(&self) -> bool {
        OptionalRef::has_value(self)
    }

    #[inline]
    fn into_option(self) -> Option<T> {
        OptionalRef::into_option(self)
    }

    #[inline]
    fn fallback(self, fallback: T) -> T {
        OptionalRef::fallback(self, fallback)
    }
}

impl<T: ValueLike> Optional for OptionalValue<T> {
    type Value = T;

    #[inline]
    fn has_value(&self) -> bool {
        OptionalValue::has_value(self)
    }

    #[inline]
    fn into_option(self) -> Option<T> {
        OptionalValue::into_option(self)
    }

    #[inline]
    fn fallback(self, fallback: T) -> T {
        OptionalValue::fallback(self, fallback)
    }
}

/// Wraps a possibly-absent value in the container that fits `T`.
///
/// Reference-like payloads produce an [`OptionalRef`], value-like payloads
/// an [`OptionalValue`]. The choice is made at compile time.
///
/// The container type is derived from `T`, so `T` must be known before the
/// call is checked. Unsuffixed numeric literals do not settle it: write
/// `Some(42i32)` or `from::<i32>(Some(42))` rather than `Some(42)`.
///
/// ```rust
/// use optionality::optional;
///
/// let pair = optional::from(Some((1i32, 2i32)));
/// assert_eq!(pair.value(), (1, 2));
/// ```
#[inline]
pub fn from<T: Optionality>(value: Option<T>) -> T::Optional {
    T::wrap(value)
}

/// Awaits `pending` and wraps its result like [`from`].
///
/// The returned future suspends exactly once, on `pending`, and resolves
/// only after it does. Dropping the returned future drops `pending`.
///
/// ```rust
/// use optionality::optional;
///
/// let port = futures::executor::block_on(optional::from_async(async { Some(8080u16) }));
/// assert_eq!(port.fallback(80), 8080);
/// ```
pub async fn from_async<T, F>(pending: F) -> T::Optional
where
    T: Optionality,
    F: IntoFuture<Output = Option<T>>,
{
    let value = pending.await;
    trace_resolved::<T>(value.is_some());
    T::wrap(value)
}

/// Awaits a fallible `pending` computation and wraps its result like [`from`].
///
/// # Errors
///
/// An error from `pending` is returned unchanged. It is never converted into
/// an absent value.
pub async fn try_from_async<T, E, F>(pending: F) -> Result<T::Optional, E>
where
    T: Optionality,
    F: IntoFuture<Output = Result<Option<T>, E>>,
{
    let value = pending.await?;
    trace_resolved::<T>(value.is_some());
    Ok(T::wrap(value))
}

/// Returns the canonical absent [`OptionalRef`].
#[inline]
pub const fn none<T: ReferenceLike>() -> OptionalRef<T> {
    OptionalRef::NONE
}

/// Returns the canonical absent [`OptionalValue`].
#[inline]
pub const fn none_value<T: ValueLike>() -> OptionalValue<T> {
    OptionalValue::NONE
}

/// Returns the value held by `optional`, or `fallback` when absent.
#[inline]
pub fn fallback<O: Optional>(optional: O, fallback: O::Value) -> O::Value {
    optional.fallback(fallback)
}

#[inline(always)]
fn trace_resolved<T>(has_value: bool) {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        value_type = core::any::type_name::<T>(),
        has_value,
        "pending computation resolved"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = has_value;
}
