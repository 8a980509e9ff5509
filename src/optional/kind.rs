//! Compile-time classification of payload types.
//!
//! Every payload type falls into exactly one of two kinds:
//! - [`ReferenceLike`]: absence fits in-band (a null niche, an empty handle),
//!   so an [`OptionalRef`](crate::OptionalRef) is just `Option<T>`.
//! - [`ValueLike`]: plain `Copy` data with no spare representation, so an
//!   [`OptionalValue`](crate::OptionalValue) keeps its own presence flag next to the slot.
//!
//! [`Optionality`] ties each kind to its container so that
//! [`optional::from`](crate::optional::from) can pick the variant from `T` alone.

use std::{borrow::Cow, cmp::Ordering, ptr::NonNull, rc::Rc, sync::Arc, time::Duration};

use super::Optional;

/// Types whose absence is representable in-band.
///
/// Raw pointers are intentionally not `ReferenceLike`: a `*const T` can be
/// null, so a "present" raw pointer would not be guaranteed meaningful.
pub trait ReferenceLike: Sized {}

/// Plain `Copy` types without a natural absent state.
///
/// Implemented for primitives, `Duration`, `Ordering`, arrays and tuples (up
/// to twelve elements) of value-like types.
pub trait ValueLike: Copy {
    /// Stored in the slot of an absent [`OptionalValue`](crate::OptionalValue).
    const ZERO: Self;
}

/// Maps a payload type to the optional container that fits its kind.
///
/// Implemented alongside [`ReferenceLike`] / [`ValueLike`]; use the
/// [`reference_like!`](crate::reference_like) and
/// [`value_like!`](crate::value_like) macros to classify your own types.
pub trait Optionality: Sized {
    /// The container chosen for this type.
    type Optional: Optional<Value = Self>;

    /// Wraps a possibly-absent value.
    fn wrap(value: Option<Self>) -> Self::Optional;
}

crate::reference_like! {
    impl['a, T: ?Sized] &'a T,
    impl['a, T: ?Sized] &'a mut T,
    impl[T: ?Sized] Box<T>,
    impl[T: ?Sized] Rc<T>,
    impl[T: ?Sized] Arc<T>,
    impl[T: ?Sized] NonNull<T>,
    impl['a, B: ?Sized + ToOwned] Cow<'a, B>,
    impl[T] Vec<T>,
    String,
}

crate::value_like! {
    u8 = 0,
    u16 = 0,
    u32 = 0,
    u64 = 0,
    u128 = 0,
    usize = 0,
    i8 = 0,
    i16 = 0,
    i32 = 0,
    i64 = 0,
    i128 = 0,
    isize = 0,
    f32 = 0.0,
    f64 = 0.0,
    bool = false,
    char = '\0',
    () = (),
    Duration = Duration::ZERO,
    Ordering = Ordering::Equal,
    impl[T: ValueLike, const N: usize] [T; N] = [T::ZERO; N],
}

// Tuples of value-like elements are value-like; the absent slot is all-ZERO.
macro_rules! tuple_kinds {
    ($(($($name:ident),+))+) => {
        $(
            crate::value_like!(impl[$($name: ValueLike),+] ($($name,)+) = ($($name::ZERO,)+));
        )+
    };
}

tuple_kinds! {
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
    (A, B, C, D, E)
    (A, B, C, D, E, F)
    (A, B, C, D, E, F, G)
    (A, B, C, D, E, F, G, H)
    (A, B, C, D, E, F, G, H, I)
    (A, B, C, D, E, F, G, H, I, J)
    (A, B, C, D, E, F, G, H, I, J, K)
    (A, B, C, D, E, F, G, H, I, J, K, L)
}
