//! Conversion between wire strings and typed scalar values.
//!
//! The same rules apply to headers, query parameters, and XML text nodes:
//!
//! - Booleans serialize as lowercase `true`/`false` and parse case-insensitively;
//!   anything other than `true` (including an absent value) is `false`.
//! - Datetimes are always UTC and use one of three encodings picked by the
//!   type's hints: ISO-8601 (default), HTTP-date (`httptime`), or Unix seconds
//!   (`unixtime`).
//! - For non-string, non-boolean types an empty value parses to `None`.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDateTime, Utc};
use osskit_core::{SerdeError, SerdeResult};

use crate::descriptor::{DateEncoding, ElementType, ScalarKind, TypeKind, TypeSpec};
use crate::model::{FieldRef, Value};

const ISO8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const ISO8601_MICROS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Stringify a scalar value for the wire.
///
/// Nested models, lists, dictionaries and raw bytes have no scalar encoding.
pub fn to_wire_string(value: &FieldRef<'_>, ty: &TypeSpec) -> SerdeResult<String> {
    match value {
        FieldRef::Str(s) => Ok((*s).to_owned()),
        FieldRef::Bool(b) => Ok(if *b { "true" } else { "false" }.to_owned()),
        FieldRef::Int(i) => Ok(i.to_string()),
        FieldRef::Float(f) => Ok(f.to_string()),
        FieldRef::DateTime(dt) => Ok(format_datetime(dt, ty.date_encoding())),
        other => Err(SerdeError::serialization(format!(
            "unsupported value type {} for {ty}",
            other.kind()
        ))),
    }
}

/// Parse wire text into a value of the scalar kind named by `ty`.
///
/// Returns `Ok(None)` when the text is absent, or empty for types other than
/// `str` and `bool`.
pub fn from_wire_string(text: Option<&str>, ty: &TypeSpec) -> SerdeResult<Option<Value>> {
    let kind = scalar_kind(ty)?;

    match (kind, text) {
        (ScalarKind::Bool, text) => Ok(Some(Value::Bool(
            text.is_some_and(|t| t.trim().eq_ignore_ascii_case("true")),
        ))),
        (_, None) => Ok(None),
        (ScalarKind::Str, Some(text)) => Ok(Some(Value::Str(text.to_owned()))),
        (_, Some("")) => Ok(None),
        (ScalarKind::Int, Some(text)) => text
            .trim()
            .parse::<i64>()
            .map(|i| Some(Value::Int(i)))
            .map_err(|e| SerdeError::deserialization(format!("invalid int '{text}': {e}"))),
        (ScalarKind::Float, Some(text)) => text
            .trim()
            .parse::<f64>()
            .map(|f| Some(Value::Float(f)))
            .map_err(|e| SerdeError::deserialization(format!("invalid float '{text}': {e}"))),
        (ScalarKind::DateTime, Some(text)) => {
            parse_datetime(text, ty.date_encoding()).map(|dt| Some(Value::DateTime(dt)))
        }
        (ScalarKind::Bytes, Some(text)) => Ok(Some(Value::Bytes(
            bytes::Bytes::copy_from_slice(text.as_bytes()),
        ))),
    }
}

fn scalar_kind(ty: &TypeSpec) -> SerdeResult<ScalarKind> {
    match ty.kind {
        TypeKind::Scalar(kind) | TypeKind::List(ElementType::Scalar(kind)) => Ok(kind),
        _ => Err(SerdeError::deserialization(format!(
            "type {ty} is not a scalar"
        ))),
    }
}

/// Format a datetime with the given encoding.
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>, encoding: DateEncoding) -> String {
    match encoding {
        DateEncoding::Iso8601 if dt.timestamp_subsec_micros() == 0 => {
            dt.format(ISO8601_FORMAT).to_string()
        }
        DateEncoding::Iso8601 => dt.format(ISO8601_MICROS_FORMAT).to_string(),
        DateEncoding::HttpDate => dt.format(HTTP_DATE_FORMAT).to_string(),
        DateEncoding::UnixTime => dt.timestamp().to_string(),
    }
}

/// Parse a datetime with the given encoding.
pub fn parse_datetime(text: &str, encoding: DateEncoding) -> SerdeResult<DateTime<Utc>> {
    let text = text.trim();
    match encoding {
        DateEncoding::Iso8601 => parse_iso8601(text),
        DateEncoding::HttpDate => parse_http_date(text),
        DateEncoding::UnixTime => {
            let secs = text.parse::<i64>().map_err(|e| {
                SerdeError::deserialization(format!("invalid unix time '{text}': {e}"))
            })?;
            DateTime::from_timestamp(secs, 0).ok_or_else(|| {
                SerdeError::deserialization(format!("unix time out of range: {secs}"))
            })
        }
    }
}

/// Parse ISO-8601 with a `Z` or `±HH:MM` suffix. A missing offset means UTC.
fn parse_iso8601(text: &str) -> SerdeResult<DateTime<Utc>> {
    let normalized = truncate_fraction(text);
    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| SerdeError::deserialization(format!("invalid timestamp '{text}': {e}")))
}

/// Cut the sub-second fraction down to microseconds.
fn truncate_fraction(text: &str) -> Cow<'_, str> {
    let Some(dot) = text.find('.') else {
        return Cow::Borrowed(text);
    };
    let start = dot + 1;
    let digits = text[start..].bytes().take_while(u8::is_ascii_digit).count();
    if digits <= 6 {
        return Cow::Borrowed(text);
    }
    Cow::Owned(format!("{}{}", &text[..start + 6], &text[start + digits..]))
}

/// Parse an RFC 1123/2822 HTTP-date, falling back to the RFC 850 and asctime
/// forms HTTP still allows.
fn parse_http_date(text: &str) -> SerdeResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    ["%A, %d-%b-%y %H:%M:%S GMT", "%a %b %e %H:%M:%S %Y"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|ndt| ndt.and_utc())
        .ok_or_else(|| SerdeError::deserialization(format!("invalid http date '{text}'")))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 12, 17, 0, 20, 57).single().expect("valid date")
    }

    fn parse_dt(text: &str, ty: &TypeSpec) -> DateTime<Utc> {
        match from_wire_string(Some(text), ty).expect("parse") {
            Some(Value::DateTime(dt)) => dt,
            other => panic!("expected datetime, got {other:?}"),
        }
    }

    fn parse_bool(text: Option<&str>) -> bool {
        match from_wire_string(text, &TypeSpec::BOOL).expect("parse") {
            Some(Value::Bool(b)) => b,
            other => panic!("expected bool, got {other:?}"),
        }
    }

    #[test]
    fn test_should_select_datetime_encoding_by_hint() {
        let dt = FieldRef::DateTime(fixed());
        let cases = [
            (TypeSpec::DATETIME, "2023-12-17T00:20:57Z"),
            (TypeSpec::DATETIME.httptime(), "Sun, 17 Dec 2023 00:20:57 GMT"),
            (TypeSpec::DATETIME.unixtime(), "1702772457"),
        ];
        for (ty, expected) in cases {
            let wire = to_wire_string(&dt, &ty).expect("serialize");
            assert_eq!(wire, expected);
            assert_eq!(parse_dt(&wire, &ty), fixed());
        }
    }

    #[test]
    fn test_should_emit_microseconds_when_present() {
        let dt = fixed() + chrono::Duration::microseconds(123_456);
        assert_eq!(
            format_datetime(&dt, DateEncoding::Iso8601),
            "2023-12-17T00:20:57.123456Z"
        );
    }

    #[test]
    fn test_should_parse_iso8601_variants() {
        assert_eq!(parse_dt("2023-12-17T08:20:57+08:00", &TypeSpec::DATETIME), fixed());
        assert_eq!(parse_dt("2023-12-16T19:20:57-05:00", &TypeSpec::DATETIME), fixed());
        assert_eq!(parse_dt("2023-12-17T00:20:57.000Z", &TypeSpec::DATETIME), fixed());

        let dt = parse_dt("2023-12-17T00:20:57.123456789Z", &TypeSpec::DATETIME);
        assert_eq!(dt.timestamp_subsec_nanos(), 123_456_000);
    }

    #[test]
    fn test_should_reject_bad_datetimes() {
        assert!(from_wire_string(Some("yesterday"), &TypeSpec::DATETIME).is_err());
        assert!(from_wire_string(Some("yesterday"), &TypeSpec::DATETIME.httptime()).is_err());
        let err = from_wire_string(Some("12ab"), &TypeSpec::DATETIME.unixtime()).expect_err("nan");
        assert!(matches!(err, SerdeError::Deserialization(_)));
    }

    #[test]
    fn test_should_coerce_booleans() {
        assert!(parse_bool(Some("true")));
        assert!(parse_bool(Some("TRUE")));
        assert!(!parse_bool(Some("false")));
        assert!(!parse_bool(Some("yes")));
        assert!(!parse_bool(None));
        assert!(!parse_bool(Some("")));
        assert_eq!(to_wire_string(&FieldRef::Bool(true), &TypeSpec::BOOL).expect("ok"), "true");
        assert_eq!(to_wire_string(&FieldRef::Bool(false), &TypeSpec::BOOL).expect("ok"), "false");
    }

    #[test]
    fn test_should_treat_empty_as_none_for_non_strings() {
        assert!(from_wire_string(Some(""), &TypeSpec::INT).expect("ok").is_none());
        assert!(from_wire_string(Some(""), &TypeSpec::FLOAT).expect("ok").is_none());
        assert!(from_wire_string(Some(""), &TypeSpec::DATETIME).expect("ok").is_none());
        assert!(matches!(
            from_wire_string(Some(""), &TypeSpec::STR).expect("ok"),
            Some(Value::Str(ref s)) if s.is_empty()
        ));
        assert!(from_wire_string(None, &TypeSpec::STR).expect("ok").is_none());
    }

    #[test]
    fn test_should_parse_numbers() {
        assert!(matches!(
            from_wire_string(Some("344606"), &TypeSpec::INT).expect("ok"),
            Some(Value::Int(344_606))
        ));
        assert!(matches!(
            from_wire_string(Some("1.5"), &TypeSpec::FLOAT).expect("ok"),
            Some(Value::Float(f)) if (f - 1.5).abs() < f64::EPSILON
        ));
        assert!(from_wire_string(Some("abc"), &TypeSpec::INT).is_err());
    }

    #[test]
    fn test_should_reject_unsupported_value_types() {
        let dict = std::collections::HashMap::new();
        let err = to_wire_string(&FieldRef::Dict(&dict), &TypeSpec::STR).expect_err("dict");
        assert!(matches!(err, SerdeError::Serialization(_)));
        assert!(from_wire_string(Some("x"), &TypeSpec::object("Owner")).is_err());
    }
}
