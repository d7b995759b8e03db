use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// Fixed message for every malformed runtime encoding. The decode boundary
// recognizes this text and passes it through to the client untouched.
pub const INVALID_RUNTIME_FORMAT: &str = "invalid runtime format";

// A movie runtime in minutes. On the wire it is always the quoted JSON
// string "<minutes> mins".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Runtime(i32);

impl Runtime {
    pub fn new(minutes: i32) -> Self {
        Runtime(minutes)
    }

    pub fn minutes(&self) -> i32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Serialize for Runtime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{} mins", self.0))
    }
}

impl<'de> Deserialize<'de> for Runtime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RuntimeVisitor)
    }
}

// Only a string token is an acceptable encoding; every other JSON shape is
// the "missing quotes" case and fails with the fixed message.
struct RuntimeVisitor;

impl<'de> Visitor<'de> for RuntimeVisitor {
    type Value = Runtime;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a string of the form \"<minutes> mins\"")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse_runtime(value).ok_or_else(|| E::custom(INVALID_RUNTIME_FORMAT))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Err(E::custom(INVALID_RUNTIME_FORMAT))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Err(E::custom(INVALID_RUNTIME_FORMAT))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Err(E::custom(INVALID_RUNTIME_FORMAT))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Err(E::custom(INVALID_RUNTIME_FORMAT))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(E::custom(INVALID_RUNTIME_FORMAT))
    }

    fn visit_seq<A>(self, _: A) -> Result<Self::Value, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        Err(de::Error::custom(INVALID_RUNTIME_FORMAT))
    }

    fn visit_map<A>(self, _: A) -> Result<Self::Value, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        Err(de::Error::custom(INVALID_RUNTIME_FORMAT))
    }
}

// Exactly two space-separated tokens, the second the literal "mins", the
// first a base-10 i32. Anything else (including overflow) is malformed.
fn parse_runtime(value: &str) -> Option<Runtime> {
    let mut parts = value.split(' ');
    let minutes = parts.next()?;
    let unit = parts.next()?;
    if parts.next().is_some() || unit != "mins" {
        return None;
    }
    minutes.parse::<i32>().ok().map(Runtime)
}
