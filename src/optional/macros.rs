/// Classifies one or more `Copy` types as [`ValueLike`](crate::ValueLike).
///
/// Each entry names the type and the constant stored in an absent slot.
/// The type also gains an [`Optionality`](crate::Optionality) impl, so
/// [`optional::from`](crate::optional::from) returns an
/// [`OptionalValue`](crate::OptionalValue) for it.
///
/// Generic types take their parameters in an `impl[...]` prefix.
///
/// # Example
///
/// ```rust
/// use optionality::{optional, value_like, Optional, ValueLike};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Span<T> {
///     start: T,
///     end: T,
/// }
///
/// value_like! {
///     Point = Point { x: 0, y: 0 },
///     impl[T: ValueLike] Span<T> = Span { start: T::ZERO, end: T::ZERO },
/// }
///
/// let origin = optional::from::<Point>(None);
/// assert!(!origin.has_value());
/// assert_eq!(origin.fallback(Point { x: 1, y: 2 }), Point { x: 1, y: 2 });
///
/// let span = optional::from(Some(Span { start: 3u32, end: 9u32 }));
/// assert_eq!(span.value().end, 9);
/// ```
#[macro_export]
macro_rules! value_like {
    () => {};
    (impl[$($g:tt)*] $ty:ty = $zero:expr $(, $($rest:tt)*)?) => {
        impl<$($g)*> $crate::ValueLike for $ty {
            const ZERO: Self = $zero;
        }

        impl<$($g)*> $crate::Optionality for $ty {
            type Optional = $crate::OptionalValue<Self>;

            #[inline]
            fn wrap(value: ::core::option::Option<Self>) -> Self::Optional {
                $crate::OptionalValue::new(value)
            }
        }

        $crate::value_like!($($($rest)*)?);
    };
    ($ty:ty = $zero:expr $(, $($rest:tt)*)?) => {
        $crate::value_like!(impl[] $ty = $zero $(, $($rest)*)?);
    };
}

/// Classifies one or more types as [`ReferenceLike`](crate::ReferenceLike).
///
/// Use this for handle types whose absence is naturally in-band. Generic
/// types take their parameters in an `impl[...]` prefix.
///
/// ```rust
/// use std::sync::Arc;
/// use optionality::{optional, reference_like, Optional};
///
/// #[derive(Debug, Clone)]
/// struct Session(Arc<str>);
///
/// #[derive(Debug, Clone)]
/// struct Shared<T>(Arc<T>);
///
/// reference_like! {
///     Session,
///     impl[T] Shared<T>,
/// }
///
/// let session = optional::from(Some(Session("alice".into())));
/// assert!(session.has_value());
///
/// let shared = optional::from(Some(Shared(Arc::new(5u8))));
/// assert!(shared.has_value());
/// ```
#[macro_export]
macro_rules! reference_like {
    () => {};
    (impl[$($g:tt)*] $ty:ty $(, $($rest:tt)*)?) => {
        impl<$($g)*> $crate::ReferenceLike for $ty {}

        impl<$($g)*> $crate::Optionality for $ty {
            type Optional = $crate::OptionalRef<Self>;

            #[inline]
            fn wrap(value: ::core::option::Option<Self>) -> Self::Optional {
                $crate::OptionalRef::new(value)
            }
        }

        $crate::reference_like!($($($rest)*)?);
    };
    ($ty:ty $(, $($rest:tt)*)?) => {
        $crate::reference_like!(impl[] $ty $(, $($rest)*)?);
    };
}

#[cfg(test)]
mod tests {
    use crate::{optional, Optional, OptionalRef, OptionalValue};

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Celsius(i16);

    crate::value_like!(Celsius = Celsius(0));

    #[derive(Debug, PartialEq, Eq)]
    struct Handle(Box<u32>);

    crate::reference_like!(Handle);

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Range<T> {
        low: T,
        high: T,
    }

    #[derive(Debug)]
    struct Slot<T>(Box<T>);

    crate::value_like!(impl[T: crate::ValueLike] Range<T> = Range { low: T::ZERO, high: T::ZERO });
    crate::reference_like!(impl[T] Slot<T>);

    #[test]
    fn test_value_like_macro() {
        let reading: OptionalValue<Celsius> = optional::from(Some(Celsius(21)));
        assert_eq!(reading.get(), Some(Celsius(21)));

        let missing = optional::from::<Celsius>(None);
        assert_eq!(missing.value(), Celsius(0));
        assert_eq!(missing.fallback(Celsius(-4)), Celsius(-4));
    }

    #[test]
    fn test_reference_like_macro() {
        let handle: OptionalRef<Handle> = optional::from(Some(Handle(Box::new(7))));
        assert!(handle.has_value());
        assert_eq!(handle.into_option(), Some(Handle(Box::new(7))));

        let none = optional::none::<Handle>();
        assert!(!Optional::has_value(&none));
    }

    #[test]
    fn test_generic_types_through_macros() {
        let range = optional::from(Some(Range { low: 1.5f64, high: 2.5f64 }));
        assert_eq!(range.value().high, 2.5);

        let empty = optional::none_value::<Range<u16>>();
        assert_eq!(empty.value(), Range { low: 0, high: 0 });

        let slot = optional::from(Some(Slot(Box::new('s'))));
        assert_eq!(slot.into_option().map(|slot| *slot.0), Some('s'));
    }
}
