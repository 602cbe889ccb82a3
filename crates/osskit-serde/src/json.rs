//! Descriptor-driven JSON codec.
//!
//! Fields tagged `json` map to members of a JSON object keyed by their
//! rename. Nested models become objects, lists become arrays, and scalars use
//! their natural JSON type. Datetimes with the `unixtime` hint are numbers;
//! other datetimes are strings in their hinted encoding.

use std::collections::HashMap;

use chrono::DateTime;
use osskit_core::{SerdeError, SerdeResult};
use osskit_model::coerce::{format_datetime, from_wire_string};
use osskit_model::descriptor::{DateEncoding, ScalarKind, Tag, TypeKind, TypeSpec};
use osskit_model::{FieldRef, Model, Value, build_dependency};
use serde_json::{Map, Number, Value as Json};

/// Serialize the `json`-tagged fields of a model into a JSON object.
///
/// # Errors
///
/// Returns `SerdeError::Serialization` for values with no JSON form, such as
/// non-finite floats or bytes.
pub fn to_json_value(model: &dyn Model) -> SerdeResult<Json> {
    let mut object = Map::new();
    for desc in model.fields().iter().filter(|d| d.tag == Tag::Json) {
        if let Some(value) = model.field(desc.attr) {
            object.insert(desc.wire_name().to_owned(), encode(&value, &desc.ty)?);
        }
    }
    Ok(Json::Object(object))
}

/// Serialize the `json`-tagged fields of a model into a JSON document.
///
/// # Errors
///
/// Returns `SerdeError::Serialization` if a field cannot be encoded.
pub fn to_json(model: &dyn Model) -> SerdeResult<Vec<u8>> {
    let value = to_json_value(model)?;
    serde_json::to_vec(&value).map_err(|e| SerdeError::serialization(e.to_string()))
}

/// Parse a JSON document into the `json`-tagged fields of a model.
///
/// # Errors
///
/// Returns `SerdeError::Deserialization` if the document is not valid JSON or
/// a member has the wrong shape.
pub fn from_json(json: &[u8], model: &mut dyn Model) -> SerdeResult<()> {
    let value: Json = serde_json::from_slice(json)
        .map_err(|e| SerdeError::deserialization(format!("invalid JSON body: {e}")))?;
    from_json_value(&value, model)
}

/// Populate a model from a parsed JSON object. Absent and `null` members
/// leave fields untouched; empty arrays leave list fields `None`.
///
/// # Errors
///
/// Returns `SerdeError::Deserialization` if `json` is not an object or a
/// member has the wrong shape.
pub fn from_json_value(json: &Json, model: &mut dyn Model) -> SerdeResult<()> {
    let Json::Object(object) = json else {
        return Err(SerdeError::deserialization(format!(
            "expected JSON object for {}, found {}",
            model.type_name(),
            kind_of(json)
        )));
    };

    for desc in model.fields().iter().filter(|d| d.tag == Tag::Json) {
        let Some(member) = object.get(desc.wire_name()).filter(|v| !v.is_null()) else {
            continue;
        };
        if let Some(value) = decode(member, model, &desc.ty)? {
            model.set_field(desc.attr, value)?;
        }
    }
    Ok(())
}

fn encode(value: &FieldRef<'_>, ty: &TypeSpec) -> SerdeResult<Json> {
    let json = match value {
        FieldRef::Str(s) => Json::String((*s).to_owned()),
        FieldRef::Int(i) => Json::Number(Number::from(*i)),
        FieldRef::Float(f) => Number::from_f64(*f).map(Json::Number).ok_or_else(|| {
            SerdeError::serialization(format!("float {f} has no JSON representation"))
        })?,
        FieldRef::Bool(b) => Json::Bool(*b),
        FieldRef::DateTime(dt) => match ty.date_encoding() {
            DateEncoding::UnixTime => Json::Number(Number::from(dt.timestamp())),
            encoding => Json::String(format_datetime(dt, encoding)),
        },
        FieldRef::Dict(map) => Json::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), Json::String(v.clone())))
                .collect(),
        ),
        FieldRef::List(items) => {
            let item_ty = ty.element();
            Json::Array(
                items
                    .iter()
                    .map(|item| encode(item, &item_ty))
                    .collect::<SerdeResult<_>>()?,
            )
        }
        FieldRef::Object(child) => to_json_value(*child)?,
        FieldRef::Bytes(_) => {
            return Err(SerdeError::serialization(format!(
                "unsupported value type bytes for {ty}"
            )));
        }
    };
    Ok(json)
}

fn decode(json: &Json, parent: &dyn Model, ty: &TypeSpec) -> SerdeResult<Option<Value>> {
    match ty.kind {
        TypeKind::List(_) => {
            let Json::Array(items) = json else {
                return Err(mismatch("array", json));
            };
            if items.is_empty() {
                return Ok(None);
            }
            let item_ty = ty.element();
            let mut values = Vec::with_capacity(items.len());
            for item in items.iter().filter(|v| !v.is_null()) {
                if let Some(value) = decode(item, parent, &item_ty)? {
                    values.push(value);
                }
            }
            if values.is_empty() {
                return Ok(None);
            }
            Ok(Some(Value::List(values)))
        }
        TypeKind::Object(type_name) => {
            let mut child = build_dependency(parent, type_name)?;
            from_json_value(json, child.as_mut())?;
            Ok(Some(Value::Object(child)))
        }
        TypeKind::Dict => {
            let Json::Object(map) = json else {
                return Err(mismatch("object", json));
            };
            let dict = map
                .iter()
                .map(|(k, v)| scalar_text(v).map(|text| (k.clone(), text)))
                .collect::<SerdeResult<HashMap<_, _>>>()?;
            Ok(Some(Value::Dict(dict)))
        }
        TypeKind::Scalar(ScalarKind::DateTime) if json.is_number() => {
            let secs = json.as_i64().ok_or_else(|| mismatch("integer timestamp", json))?;
            DateTime::from_timestamp(secs, 0)
                .map(|dt| Some(Value::DateTime(dt)))
                .ok_or_else(|| SerdeError::deserialization(format!("unix time out of range: {secs}")))
        }
        TypeKind::Scalar(_) => from_wire_string(Some(scalar_text(json)?.as_str()), ty),
    }
}

fn scalar_text(json: &Json) -> SerdeResult<String> {
    match json {
        Json::String(s) => Ok(s.clone()),
        Json::Number(n) => Ok(n.to_string()),
        Json::Bool(b) => Ok(b.to_string()),
        other => Err(mismatch("scalar", other)),
    }
}

fn mismatch(expected: &str, found: &Json) -> SerdeError {
    SerdeError::deserialization(format!("expected JSON {expected}, found {}", kind_of(found)))
}

fn kind_of(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
