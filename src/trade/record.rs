//! Trade Record - the value stored under each ledger key

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A dated list of quoted values.
///
/// Values are kept as the caller wrote them; nothing here parses them as
/// numbers. Serialized as `{"date": "...", "values": ["..."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    #[serde(default)]
    date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    values: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).or_else(|| {
        fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    })
}

impl Trade {
    /// Create a trade from a date label and its values.
    #[must_use]
    pub fn new<I, S>(date: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            date: date.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Decode stored bytes, falling back to an empty trade.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD before parsing. Field names match
    /// ASCII case-insensitively, an exact `date`/`values` key taking
    /// precedence. A field of the wrong JSON type is left empty. Absent, empty
    /// or non-object input yields `Trade::default()`.
    #[must_use]
    pub fn from_stored(bytes: Option<&[u8]>) -> Self {
        let Some(bytes) = bytes else {
            return Self::default();
        };
        let text = String::from_utf8_lossy(bytes);
        let Ok(fields) = serde_json::from_str::<Map<String, Value>>(&text) else {
            return Self::default();
        };

        let date = field(&fields, "date")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_default();
        let values = field(&fields, "values")
            .and_then(|v| Vec::<String>::deserialize(v).ok())
            .unwrap_or_default();
        Self { date, values }
    }

    /// Encode as JSON.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_bytes(&self) -> crate::Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Get the date label.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Get the values.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Replace all values with a single one, keeping the date.
    pub fn replace_values(&mut self, value: impl Into<String>) {
        self.values = vec![value.into()];
    }
}
