//! Canonical serializable record of a [`StructuredError`].
//!
//! The record has the shape
//!
//! ```text
//! { type: string, message: string | json, fallback?: object, option?: object }
//! ```
//!
//! `fallback` and `option` are only emitted when the error was built with
//! fallback data or a cause.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::StructuredError;

const TYPE_KEY: &str = "type";
const MESSAGE_KEY: &str = "message";
const FALLBACK_KEY: &str = "fallback";
const OPTION_KEY: &str = "option";
const CAUSE_KEY: &str = "cause";

impl StructuredError {
    /// Canonicalizes the error into a plain key/value record.
    ///
    /// A message holding a JSON object is decoded and merged with the fallback
    /// data (fallback keys win). Any other JSON value is decoded as is, and a
    /// message that is not JSON stays a plain string.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::StructuredError;
    /// use serde_json::json;
    ///
    /// let plain = StructuredError::new("x", "plain text");
    /// assert_eq!(
    ///     serde_json::Value::Object(plain.to_map()),
    ///     json!({ "type": "x", "message": "plain text" })
    /// );
    ///
    /// let decoded = StructuredError::new("validation", r#"{"field":"x"}"#).with_data("extra", 1);
    /// assert_eq!(
    ///     serde_json::Value::Object(decoded.to_map()),
    ///     json!({
    ///         "type": "validation",
    ///         "message": { "field": "x", "extra": 1 },
    ///         "fallback": { "extra": 1 },
    ///         "option": {}
    ///     })
    /// );
    /// ```
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert(TYPE_KEY.into(), Value::String(self.kind.to_string()));
        record.insert(MESSAGE_KEY.into(), self.decoded_message());

        if self.fallback.is_some() || self.cause.is_some() {
            let fallback = self.fallback.clone().unwrap_or_default();
            record.insert(FALLBACK_KEY.into(), Value::Object(fallback));
            record.insert(OPTION_KEY.into(), Value::Object(self.option_record()));
        }
        record
    }

    fn decoded_message(&self) -> Value {
        match serde_json::from_str::<Value>(&self.message) {
            Ok(Value::Object(mut parsed)) => {
                if let Some(fallback) = &self.fallback {
                    for (key, value) in fallback {
                        parsed.insert(key.clone(), value.clone());
                    }
                }
                Value::Object(parsed)
            },
            Ok(parsed) => parsed,
            Err(_err) => {
                trace_event!(kind = %self.kind, error = %_err, "message is not JSON, kept as text");
                Value::String(self.message.clone())
            },
        }
    }

    fn option_record(&self) -> Map<String, Value> {
        let mut option = Map::new();
        if let Some(cause) = &self.cause {
            let cause = match cause.downcast_ref::<Self>() {
                Some(structured) => Value::Object(structured.to_map()),
                None => Value::String(cause.to_string()),
            };
            option.insert(CAUSE_KEY.into(), cause);
        }
        option
    }
}

impl Serialize for StructuredError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_map().serialize(serializer)
    }
}
