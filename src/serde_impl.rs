//! Serde support for the containers (feature-gated).
//!
//! Two-sided containers are externally tagged by track name:
//!
//! | type | JSON |
//! |------|------|
//! | `Union<L, R>`, `Either<L, R>` | `{"Left": l}` / `{"Right": r}` |
//! | `Outcome<E, S>` | `{"Failure": e}` / `{"Success": s}` |
//! | `Try<S>` | `{"Failure": "message"}` / `{"Success": s}` |
//! | `Maybe<T>` | `null` / `t` |
//!
//! A `Try` failure is written as the exception's `Display` text and read
//! back as a raised error with that message, so the panic/error/cancelled
//! distinction does not survive a round trip.
//!
//! `Maybe` has the same encoding as `Option`, so nesting is lossy too:
//! `Maybe::some(Maybe::none())` is written as `null` and read back as the
//! outer `none`.
//!
//! # Example
//!
//! ```rust
//! use switchyard::{Maybe, Outcome};
//!
//! let out = Outcome::<String, u32>::success(7);
//! assert_eq!(serde_json::to_string(&out).unwrap(), r#"{"Success":7}"#);
//!
//! let m: Maybe<u32> = serde_json::from_str("null").unwrap();
//! assert!(m.is_none());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Either, Exception, Maybe, Outcome, Try, Union};

#[derive(Deserialize)]
#[serde(rename = "Union")]
enum SidesRepr<L, R> {
    Left(L),
    Right(R),
}

#[derive(Deserialize)]
#[serde(rename = "Outcome")]
enum TracksRepr<E, S> {
    Failure(E),
    Success(S),
}

impl<L, R> Serialize for Union<L, R>
where
    L: Serialize,
    R: Serialize,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        match self {
            Union::Left(l) => serializer.serialize_newtype_variant("Union", 0, "Left", l),
            Union::Right(r) => serializer.serialize_newtype_variant("Union", 1, "Right", r),
        }
    }
}

impl<'de, L, R> Deserialize<'de> for Union<L, R>
where
    L: Deserialize<'de>,
    R: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match SidesRepr::deserialize(deserializer)? {
            SidesRepr::Left(l) => Union::Left(l),
            SidesRepr::Right(r) => Union::Right(r),
        })
    }
}

impl<L, R> Serialize for Either<L, R>
where
    L: Serialize,
    R: Serialize,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.as_ref().into_union().serialize(serializer)
    }
}

impl<'de, L, R> Deserialize<'de> for Either<L, R>
where
    L: Deserialize<'de>,
    R: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let union = Union::<L, R>::deserialize(deserializer)?;
        Ok(union.fold(Either::left, Either::right))
    }
}

impl<E, S> Serialize for Outcome<E, S>
where
    E: Serialize,
    S: Serialize,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        match self.as_ref().into_union() {
            Union::Left(e) => serializer.serialize_newtype_variant("Outcome", 0, "Failure", e),
            Union::Right(s) => serializer.serialize_newtype_variant("Outcome", 1, "Success", s),
        }
    }
}

impl<'de, E, S> Deserialize<'de> for Outcome<E, S>
where
    E: Deserialize<'de>,
    S: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match TracksRepr::deserialize(deserializer)? {
            TracksRepr::Failure(e) => Outcome::failure(e),
            TracksRepr::Success(s) => Outcome::success(s),
        })
    }
}

impl<S> Serialize for Try<S>
where
    S: Serialize,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.as_ref()
            .map_err(|ex| ex.to_string())
            .serialize(serializer)
    }
}

impl<'de, S> Deserialize<'de> for Try<S>
where
    S: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let outcome = Outcome::<String, S>::deserialize(deserializer)?;
        Ok(Try::from_outcome(outcome.map_err(Exception::new)))
    }
}

impl<T> Serialize for Maybe<T>
where
    T: Serialize,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.as_ref().into_option().serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Maybe<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Maybe::from_option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Reading {
        sensor: String,
        value: Maybe<f64>,
        status: Outcome<String, u8>,
    }

    #[test]
    fn test_serialize_tags() {
        let e = Either::<u8, &str>::left(3);
        assert_eq!(serde_json::to_string(&e).unwrap(), r#"{"Left":3}"#);

        let u = Union::<u8, &str>::Right("r");
        assert_eq!(serde_json::to_string(&u).unwrap(), r#"{"Right":"r"}"#);

        let o = Outcome::<&str, u8>::failure("down");
        assert_eq!(serde_json::to_string(&o).unwrap(), r#"{"Failure":"down"}"#);
    }

    #[test]
    fn test_struct_roundtrip() {
        let original = Reading {
            sensor: "t1".to_string(),
            value: Maybe::none(),
            status: Outcome::success(2),
        };

        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(
            json,
            r#"{"sensor":"t1","value":null,"status":{"Success":2}}"#
        );

        let restored: Reading = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_nested_maybe_collapses_to_outer_none() {
        let nested = Maybe::some(Maybe::<i32>::none());
        let json = serde_json::to_string(&nested).unwrap();
        assert_eq!(json, "null");

        let restored: Maybe<Maybe<i32>> = serde_json::from_str(&json).unwrap();
        assert!(restored.is_none());

        let full = Maybe::some(Maybe::some(5));
        let restored: Maybe<Maybe<i32>> =
            serde_json::from_str(&serde_json::to_string(&full).unwrap()).unwrap();
        assert_eq!(restored, full);
    }

    #[test]
    fn test_try_failure_becomes_message() {
        let t: Try<i32> = Try::catching(|| panic!("kaput"));
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"Failure":"panicked: kaput"}"#);

        let back: Try<i32> = serde_json::from_str(&json).unwrap();
        let ex = back.into_failure().unwrap();
        assert!(ex.is_error());
        assert_eq!(ex.message(), "panicked: kaput");
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let result: Result<Outcome<String, i32>, _> = serde_json::from_str(r#"{"Ok":1}"#);
        assert!(result.is_err());

        let result: Result<Either<String, i32>, _> = serde_json::from_str(r#"{"Success":1}"#);
        assert!(result.is_err());
    }
}
