//! Key-table decoding of provider JSON into entity builders.
//!
//! Each builder publishes a table of `(wire key, setter)` pairs. The table
//! is applied in its own order, not in document order, so the result is the
//! same for any key ordering in the payload.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::model::{Forecast, Weather};

/// Applies one wire value to a builder.
pub(crate) type Setter<B> = fn(B, Value) -> Result<B, DecodeError>;

/// Runs `table` against `object`. Absent and `null` keys are skipped, keys
/// not in the table are ignored.
pub(crate) fn apply_fields<B>(
    mut builder: B,
    mut object: Map<String, Value>,
    table: &[(&'static str, Setter<B>)],
) -> Result<B, DecodeError> {
    for (key, setter) in table {
        match object.remove(*key) {
            None | Some(Value::Null) => continue,
            Some(value) => builder = setter(builder, value)?,
        }
    }
    Ok(builder)
}

/// Coerces a wire value to the setter's declared type.
pub(crate) fn typed<T: DeserializeOwned>(key: &str, value: Value) -> Result<T, DecodeError> {
    serde_json::from_value(value).map_err(|source| DecodeError::InvalidField {
        key: key.to_string(),
        source,
    })
}

/// Like [`typed`], but a string holding a number is parsed into it.
/// Strings that do not parse are an error.
pub(crate) fn typed_number<T>(key: &str, value: Value) -> Result<T, DecodeError>
where
    T: DeserializeOwned + FromStr,
{
    match value {
        Value::String(text) => text.parse().map_err(|_| DecodeError::NotNumeric {
            key: key.to_string(),
            value: text,
        }),
        other => typed(key, other),
    }
}

pub(crate) fn into_object(
    value: Value,
    what: &'static str,
) -> Result<Map<String, Value>, DecodeError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(DecodeError::NotAnObject(what)),
    }
}

/// String form of a scalar, as it would be printed. Strings are taken
/// without quotes.
pub(crate) fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Reads `key` from a nested map as an integer via its string form.
/// Absent or `null` yields `default`; anything unparseable is an error.
pub(crate) fn nested_i64(
    map: &Map<String, Value>,
    key: &str,
    default: i64,
) -> Result<i64, DecodeError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => {
            let text = scalar_string(value);
            text.parse().map_err(|_| DecodeError::NotNumeric {
                key: key.to_string(),
                value: text,
            })
        }
    }
}

/// `deserialize_with` helper treating an explicit `null` like an absent key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `deserialize_with` helper for optional numeric fields that also accepts
/// the number spelled as a string. `null` and absent both give `None`.
pub(crate) fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Number(T),
        Text(String),
    }

    match Option::<Raw<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(text)) => text
            .parse()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid number {text:?}: {e}"))),
    }
}

/// Decodes a current-weather response body.
pub fn parse_weather(body: &str) -> Result<Weather, DecodeError> {
    let value: Value = serde_json::from_str(body)?;
    Weather::from_json(value)
}

/// Decodes a forecast response body.
pub fn parse_forecast(body: &str) -> Result<Forecast, DecodeError> {
    let value: Value = serde_json::from_str(body)?;
    Forecast::from_json(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default)]
    struct Probe {
        seen: Vec<String>,
    }

    fn set_a(mut probe: Probe, value: Value) -> Result<Probe, DecodeError> {
        probe.seen.push(format!("a={value}"));
        Ok(probe)
    }

    fn set_b(mut probe: Probe, value: Value) -> Result<Probe, DecodeError> {
        probe.seen.push(format!("b={value}"));
        Ok(probe)
    }

    #[test]
    fn applies_table_order_and_skips_unknown_and_null() {
        let table: &[(&str, Setter<Probe>)] = &[("a", set_a), ("b", set_b)];

        let object = into_object(json!({"b": 2, "zzz": true, "a": 1}), "probe").unwrap();
        let probe = apply_fields(Probe::default(), object, table).unwrap();
        assert_eq!(probe.seen, vec!["a=1", "b=2"]);

        let object = into_object(json!({"a": null}), "probe").unwrap();
        let probe = apply_fields(Probe::default(), object, &table[..1]).unwrap();
        assert!(probe.seen.is_empty());
    }

    #[test]
    fn nested_i64_accepts_integer_and_numeric_string() {
        let map = into_object(json!({"n": 42, "s": "17", "z": null}), "probe").unwrap();
        assert_eq!(nested_i64(&map, "n", 0).unwrap(), 42);
        assert_eq!(nested_i64(&map, "s", 0).unwrap(), 17);
        assert_eq!(nested_i64(&map, "z", 5).unwrap(), 5);
        assert_eq!(nested_i64(&map, "missing", 0).unwrap(), 0);
    }

    #[test]
    fn nested_i64_rejects_non_integer_scalars() {
        let map = into_object(
            json!({"f": 1.5, "s": "abc", "b": true, "w": " 17 "}),
            "probe",
        )
        .unwrap();
        for key in ["f", "s", "b", "w"] {
            let err = nested_i64(&map, key, 0).unwrap_err();
            assert!(matches!(err, DecodeError::NotNumeric { .. }), "{key}: {err}");
        }
    }

    #[test]
    fn typed_reports_field_name() {
        let err = typed::<i64>("id", json!("not a number")).unwrap_err();
        assert!(err.to_string().contains("'id'"));
    }

    #[test]
    fn typed_number_parses_numeric_strings() {
        assert_eq!(typed_number::<i64>("id", json!("2643743")).unwrap(), 2643743);
        assert_eq!(typed_number::<i64>("id", json!(2643743)).unwrap(), 2643743);

        let err = typed_number::<i64>("id", json!("London")).unwrap_err();
        assert!(matches!(err, DecodeError::NotNumeric { ref key, .. } if key == "id"));

        let err = typed_number::<i64>("id", json!(true)).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidField { .. }));
    }

    #[derive(Debug, Deserialize)]
    struct Reading {
        #[serde(default, deserialize_with = "lenient_number")]
        value: Option<f64>,
    }

    #[test]
    fn lenient_number_accepts_numbers_strings_and_null() {
        let read = |v: Value| serde_json::from_value::<Reading>(v).map(|r| r.value);

        assert_eq!(read(json!({"value": 280.5})).unwrap(), Some(280.5));
        assert_eq!(read(json!({"value": 1012})).unwrap(), Some(1012.0));
        assert_eq!(read(json!({"value": "280.5"})).unwrap(), Some(280.5));
        assert_eq!(read(json!({"value": null})).unwrap(), None);
        assert_eq!(read(json!({})).unwrap(), None);
    }

    #[test]
    fn lenient_number_rejects_words() {
        let err = serde_json::from_value::<Reading>(json!({"value": "warm"})).unwrap_err();
        assert!(err.to_string().contains("warm"));
        assert!(serde_json::from_value::<Reading>(json!({"value": [1]})).is_err());
    }

    #[test]
    fn into_object_rejects_arrays() {
        assert!(matches!(
            into_object(json!([1, 2]), "weather"),
            Err(DecodeError::NotAnObject("weather"))
        ));
    }

    #[test]
    fn parse_weather_rejects_malformed_json() {
        assert!(matches!(parse_weather("{not json"), Err(DecodeError::Json(_))));
    }
}
