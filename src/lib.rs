//! # `optionality` - Explicit Optional Values
//!
//! A small toolkit for values that may be absent. Instead of ad-hoc null
//! checks, presence is stated at the type level and consumed through a
//! presence flag and a fallback operation.
//!
//! ## Two containers
//!
//! Payload types fall into two kinds, decided at compile time:
//!
//! 1. **Reference-like** ([`ReferenceLike`]): `&T`, `Box<T>`, `Rc<T>`,
//!    `Arc<T>`, `NonNull<T>`, `String`, `Vec<T>`, ...
//!    - Absence fits in-band, so [`OptionalRef<T>`] is a transparent `Option<T>`
//!    - Pointer payloads keep their size thanks to the null niche
//!
//! 2. **Value-like** ([`ValueLike`]): integers, floats, `bool`, `char`, `()`,
//!    `Duration`, `Ordering`, arrays and tuples of value-like types, and your
//!    own `Copy` types (generic ones too) via [`value_like!`]
//!    - No spare representation, so [`OptionalValue<T>`] carries an explicit flag
//!    - The slot of an absent instance holds [`ValueLike::ZERO`]
//!
//! Both are immutable once built and share the [`Optional`] trait.
//!
//! ## Helpers
//!
//! The [`optional`] module holds the entry points: [`optional::from`],
//! [`optional::from_async`], [`optional::try_from_async`], [`optional::none`],
//! [`optional::none_value`] and [`optional::fallback`].
//!
//! ## Features
//!
//! - `tracing`: emit a trace event when an awaited computation resolves
//! - `proptest`: `Arbitrary` impls for both containers
//!
//! ## Example
//!
//! ```rust
//! use optionality::optional;
//!
//! let greeting = optional::from(Some("hello"));
//! assert!(greeting.has_value());
//! assert_eq!(greeting.fallback("default"), "hello");
//!
//! let missing = optional::none_value::<i32>();
//! assert!(!missing.has_value());
//! assert_eq!(missing.fallback(7), 7);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod optional;

pub use optional::{Optional, OptionalRef, OptionalValue, Optionality, ReferenceLike, ValueLike};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Pointer payloads use the null niche: no extra tag.
    assert!(mem::size_of::<OptionalRef<Box<u8>>>() == mem::size_of::<Box<u8>>());
    assert!(mem::size_of::<OptionalRef<&'static str>>() == mem::size_of::<&'static str>());
    assert!(
        mem::size_of::<OptionalRef<std::sync::Arc<u64>>>() == mem::size_of::<std::sync::Arc<u64>>()
    );

    // `OptionalRef` is `repr(transparent)` over `Option<T>`.
    assert!(mem::size_of::<OptionalRef<u32>>() == mem::size_of::<Option<u32>>());
    assert!(mem::align_of::<OptionalRef<u32>>() == mem::align_of::<Option<u32>>());

    // The presence flag of `OptionalValue` costs at most one extra word.
    assert!(mem::size_of::<OptionalValue<u64>>() <= mem::size_of::<u64>() * 2);
    assert!(mem::size_of::<OptionalValue<()>>() == mem::size_of::<bool>());
};
