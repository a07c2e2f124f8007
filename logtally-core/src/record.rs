use serde::Deserialize;
use serde_json::{Map, Value};

pub const URL_FIELD: &str = "url";
pub const RESPONSE_TIME_FIELD: &str = "response_time";
pub const TIMESTAMP_FIELD: &str = "@timestamp";

/// One decoded log line.
///
/// Only `url`, `response_time` and `@timestamp` carry meaning for reporting;
/// every other field is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct LogRecord(Map<String, Value>);

impl LogRecord {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns the field when it is a JSON string.
    pub fn get_string(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Returns the field when it is a JSON number.
    pub fn get_number(&self, field: &str) -> Option<f64> {
        self.0.get(field).and_then(Value::as_f64)
    }

    pub fn url(&self) -> Option<&str> {
        self.get_string(URL_FIELD).filter(|url| !url.is_empty())
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.get_string(TIMESTAMP_FIELD)
            .filter(|timestamp| !timestamp.is_empty())
    }
}

impl TryFrom<Value> for LogRecord {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(value: Value) -> LogRecord {
        LogRecord::try_from(value).unwrap()
    }

    #[test]
    fn typed_accessors_return_none_on_type_mismatch() {
        let r = record(json!({"url": 5, "response_time": "fast"}));

        assert_eq!(r.get_string("url"), None);
        assert_eq!(r.get_number("response_time"), None);
        assert!(r.get("url").is_some());
    }

    #[test]
    fn integer_response_time_reads_as_number() {
        let r = record(json!({"response_time": 0}));

        assert_eq!(r.get_number("response_time"), Some(0.0));
    }

    #[test]
    fn empty_url_is_treated_as_missing() {
        let r = record(json!({"url": ""}));

        assert_eq!(r.url(), None);
    }

    #[test]
    fn non_object_values_are_rejected() {
        assert!(LogRecord::try_from(json!([1, 2, 3])).is_err());
        assert!(LogRecord::try_from(json!("text")).is_err());
    }
}
