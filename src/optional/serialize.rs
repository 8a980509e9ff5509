//! `serde` support: both containers use the same wire shape as `Option<T>`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{OptionalRef, OptionalValue, ReferenceLike, ValueLike};

impl<T: ReferenceLike + Serialize> Serialize for OptionalRef<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de, T: ReferenceLike + Deserialize<'de>> Deserialize<'de> for OptionalRef<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::new)
    }
}

impl<T: ValueLike + Serialize> Serialize for OptionalValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, T: ValueLike + Deserialize<'de>> Deserialize<'de> for OptionalValue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_serializes_as_null() {
        let none = OptionalValue::<i32>::NONE;
        assert_eq!(serde_json::to_string(&none).unwrap(), "null");

        let none = OptionalRef::<String>::NONE;
        assert_eq!(serde_json::to_string(&none).unwrap(), "null");
    }

    #[test]
    fn test_present_serializes_as_payload() {
        let answer = OptionalValue::some(42);
        assert_eq!(serde_json::to_string(&answer).unwrap(), "42");

        let name = OptionalRef::some(String::from("alice"));
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"alice\"");
    }
}
