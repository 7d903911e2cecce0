//! Serde representation for feature values that may be non-finite.
//!
//! JSON has no NaN or infinity, and `serde_json` writes them as `null`.
//! Finite values stay plain numbers; non-finite values are written as the
//! strings `"NaN"`, `"inf"` and `"-inf"` and parsed back from them.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

const NAN: &str = "NaN";
const INFINITY: &str = "inf";
const NEG_INFINITY: &str = "-inf";

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Text(String),
}

pub(crate) fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_nan() {
        serializer.serialize_str(NAN)
    } else if *value == f64::INFINITY {
        serializer.serialize_str(INFINITY)
    } else if *value == f64::NEG_INFINITY {
        serializer.serialize_str(NEG_INFINITY)
    } else {
        serializer.serialize_f64(*value)
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Repr::deserialize(deserializer)? {
        Repr::Number(value) => Ok(value),
        Repr::Text(text) => match text.as_str() {
            NAN => Ok(f64::NAN),
            INFINITY => Ok(f64::INFINITY),
            NEG_INFINITY => Ok(f64::NEG_INFINITY),
            other => Err(D::Error::custom(format!(
                "expected a number, \"{}\", \"{}\" or \"{}\", found \"{}\"",
                NAN, INFINITY, NEG_INFINITY, other
            ))),
        },
    }
}
