//! `proptest` strategies for both containers (enabled by the `proptest` feature).

use proptest::{
    arbitrary::{any_with, Arbitrary},
    strategy::{Map, Strategy},
};

use super::{OptionalRef, OptionalValue, ReferenceLike, ValueLike};

impl<T> Arbitrary for OptionalRef<T>
where
    T: ReferenceLike + Arbitrary,
{
    type Parameters = <Option<T> as Arbitrary>::Parameters;
    type Strategy = Map<<Option<T> as Arbitrary>::Strategy, fn(Option<T>) -> Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        any_with::<Option<T>>(args).prop_map(Self::new as fn(Option<T>) -> Self)
    }
}

impl<T> Arbitrary for OptionalValue<T>
where
    T: ValueLike + Arbitrary,
{
    type Parameters = <Option<T> as Arbitrary>::Parameters;
    type Strategy = Map<<Option<T> as Arbitrary>::Strategy, fn(Option<T>) -> Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        any_with::<Option<T>>(args).prop_map(Self::new as fn(Option<T>) -> Self)
    }
}
