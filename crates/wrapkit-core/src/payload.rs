// Rust guideline compliant 2026-10-16

//! Type-erased response payloads.
//!
//! A [`Data`] value owns any serializable payload and defers its conversion
//! to JSON until the envelope is encoded. A payload that cannot be
//! represented therefore fails during encoding, where the renderer can
//! recover, rather than at the call site that attached it.

use crate::finite;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

trait ErasedPayload: fmt::Debug + Send + Sync {
    fn to_json(&self) -> serde_json::Result<Value>;
}

impl<T> ErasedPayload for T
where
    T: Serialize + fmt::Debug + Send + Sync,
{
    fn to_json(&self) -> serde_json::Result<Value> {
        finite::check(self).map_err(serde_json::Error::custom)?;
        serde_json::to_value(self)
    }
}

/// Arbitrary payload carried in the `data` field of an envelope.
pub struct Data(Box<dyn ErasedPayload>);

impl Data {
    /// Wraps a serializable value as a payload.
    #[must_use]
    pub fn new<T>(value: T) -> Self
    where
        T: Serialize + fmt::Debug + Send + Sync + 'static,
    {
        Self(Box::new(value))
    }

    /// Converts the payload to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload's `Serialize` implementation fails or
    /// produces something JSON cannot represent: a map with non-string keys,
    /// or a NaN or infinite float anywhere in the value.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        self.0.to_json()
    }

    /// Returns whether the payload encodes to JSON `null`.
    ///
    /// A null payload is treated as absent, both on the wire and during
    /// resolution. A payload that fails to encode is not null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self.to_value(), Ok(Value::Null))
    }
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Data").field(&self.0).finish()
    }
}

impl From<Value> for Data {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl Serialize for Data {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}
