//! Response disassembly: [`OperationOutput`] to result model.
//!
//! [`Codec::deserialize_output`] copies the transport outcome and then hands
//! the output to a list of hooks. The hooks below cover the common shapes:
//! response headers, an XML or JSON document, or a body that is ignored. The
//! response body is taken from the output at most once, so running two body
//! hooks on the same output leaves the second one with nothing to read.

use std::collections::HashMap;

use bytes::Bytes;
use osskit_core::{SerdeError, SerdeResult};
use osskit_model::coerce::from_wire_string;
use osskit_model::descriptor::{FieldDescriptor, Position, Tag, TypeKind};
use osskit_model::{Model, OperationOutput, ResultModel, Value, build_dependency};

use crate::codec::{Codec, OutputDeserializer};
use crate::json;

impl Codec {
    /// Copy status, status code, headers and request id onto `result`, then
    /// run `deserializers` in order.
    pub fn deserialize_output<R: ResultModel>(
        &self,
        result: &mut R,
        output: &mut OperationOutput,
        deserializers: &[OutputDeserializer<R>],
    ) -> SerdeResult<()> {
        let request_id = output
            .headers
            .get(self.config().request_id_header.as_str())
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let meta = result.meta_mut();
        meta.status.clone_from(&output.status);
        meta.status_code = output.status_code;
        meta.headers = output.headers.clone();
        meta.request_id = request_id;

        tracing::debug!(
            result = result.type_name(),
            status_code = output.status_code,
            request_id = result.meta().request_id.as_deref().unwrap_or_default(),
            "disassembling response"
        );

        for deserializer in deserializers {
            deserializer(self, result, output)?;
        }
        Ok(())
    }

    /// Fill `output`-tagged header fields from the response headers.
    ///
    /// Dict fields capture every header whose name starts with the rename,
    /// keyed by the lowercase remainder. They are set only when at least one
    /// header matched.
    pub fn deserialize_output_headers<R: ResultModel>(
        &self,
        result: &mut R,
        output: &mut OperationOutput,
    ) -> SerdeResult<()> {
        let mut deferred = Vec::new();
        for desc in result
            .fields()
            .iter()
            .filter(|d| d.tag == Tag::Output && d.position == Some(Position::Header))
        {
            if desc.ty.is_dict() {
                deferred.push(desc);
                continue;
            }
            let Some(raw) = output.headers.get(desc.wire_name()) else {
                continue;
            };
            let Ok(text) = raw.to_str() else {
                tracing::warn!(header = desc.wire_name(), "skipping non-text header value");
                continue;
            };
            if let Some(value) = from_wire_string(Some(text), &desc.ty)? {
                tracing::trace!(field = desc.attr, header = desc.wire_name(), "header field");
                result.set_field(desc.attr, value)?;
            }
        }

        for desc in deferred {
            let captured = capture_prefixed(output, desc);
            if !captured.is_empty() {
                result.set_field(desc.attr, Value::Dict(captured))?;
            }
        }
        Ok(())
    }

    /// Parse an XML response body into `result`.
    ///
    /// A model with `xml`-tagged fields of its own is the document, checked
    /// against its root tag. Otherwise an `output` body field with the `xml`
    /// hint holds the document, checked against the field's rename. An empty
    /// body is not an error.
    pub fn deserialize_output_xmlbody<R: ResultModel>(
        &self,
        result: &mut R,
        output: &mut OperationOutput,
    ) -> SerdeResult<()> {
        let Some(body) = self.read_body(output)? else {
            return Ok(());
        };

        if result.fields().iter().any(|d| d.tag == Tag::Xml) {
            let root = result.xml_root();
            return osskit_xml::from_xml(&body, result, root);
        }

        if let Some(desc) = body_holder(&*result, |d| d.ty.is_xml()) {
            let mut child = build_nested(&*result, desc)?;
            osskit_xml::from_xml(&body, child.as_mut(), Some(desc.wire_name()))?;
            result.set_field(desc.attr, Value::Object(child))?;
        }
        Ok(())
    }

    /// Parse a JSON response body into `result`.
    ///
    /// Mirrors [`Codec::deserialize_output_xmlbody`]: `json`-tagged fields make
    /// the model the document, otherwise an `output` body field with the
    /// `json` hint receives it. A holder with a rename reads that member of the
    /// document, and the member must be present.
    pub fn deserialize_output_jsonbody<R: ResultModel>(
        &self,
        result: &mut R,
        output: &mut OperationOutput,
    ) -> SerdeResult<()> {
        let Some(body) = self.read_body(output)? else {
            return Ok(());
        };

        if result.fields().iter().any(|d| d.tag == Tag::Json) {
            return json::from_json(&body, result);
        }

        if let Some(desc) = body_holder(&*result, |d| d.ty.is_json()) {
            let mut child = build_nested(&*result, desc)?;
            if desc.rename.is_empty() {
                json::from_json(&body, child.as_mut())?;
            } else {
                let document: serde_json::Value = serde_json::from_slice(&body)
                    .map_err(|e| SerdeError::deserialization(format!("invalid JSON body: {e}")))?;
                let member = document.get(desc.rename).ok_or_else(|| {
                    SerdeError::deserialization(format!("missing JSON member {}", desc.rename))
                })?;
                json::from_json_value(member, child.as_mut())?;
            }
            result.set_field(desc.attr, Value::Object(child))?;
        }
        Ok(())
    }

    /// Close the response body without reading it.
    #[allow(clippy::unused_self)]
    pub fn deserialize_output_discardbody<R: ResultModel>(
        &self,
        _result: &mut R,
        output: &mut OperationOutput,
    ) -> SerdeResult<()> {
        if let Some(mut body) = output.take_body() {
            body.close();
        }
        Ok(())
    }

    /// The single read point for response bodies. `None` when there is no
    /// body or it is empty.
    fn read_body(&self, output: &mut OperationOutput) -> SerdeResult<Option<Bytes>> {
        let Some(mut body) = output.take_body() else {
            return Ok(None);
        };
        let content = body
            .read_all()
            .map_err(|e| SerdeError::deserialization(format!("failed to read response body: {e}")))?;
        let limit = self.config().max_body_size;
        if content.len() > limit {
            return Err(SerdeError::deserialization(format!(
                "response body of {} bytes exceeds limit of {limit}",
                content.len()
            )));
        }
        Ok(Some(content).filter(|c| !c.is_empty()))
    }
}

/// Disassemble a response with the default configuration.
pub fn deserialize_output<R: ResultModel>(
    result: &mut R,
    output: &mut OperationOutput,
    deserializers: &[OutputDeserializer<R>],
) -> SerdeResult<()> {
    Codec::default().deserialize_output(result, output, deserializers)
}

/// Hook form of [`Codec::deserialize_output_headers`].
pub fn deserialize_output_headers<R: ResultModel>(
    codec: &Codec,
    result: &mut R,
    output: &mut OperationOutput,
) -> SerdeResult<()> {
    codec.deserialize_output_headers(result, output)
}

/// Hook form of [`Codec::deserialize_output_xmlbody`].
pub fn deserialize_output_xmlbody<R: ResultModel>(
    codec: &Codec,
    result: &mut R,
    output: &mut OperationOutput,
) -> SerdeResult<()> {
    codec.deserialize_output_xmlbody(result, output)
}

/// Hook form of [`Codec::deserialize_output_jsonbody`].
pub fn deserialize_output_jsonbody<R: ResultModel>(
    codec: &Codec,
    result: &mut R,
    output: &mut OperationOutput,
) -> SerdeResult<()> {
    codec.deserialize_output_jsonbody(result, output)
}

/// Hook form of [`Codec::deserialize_output_discardbody`].
pub fn deserialize_output_discardbody<R: ResultModel>(
    codec: &Codec,
    result: &mut R,
    output: &mut OperationOutput,
) -> SerdeResult<()> {
    codec.deserialize_output_discardbody(result, output)
}

fn capture_prefixed(output: &OperationOutput, desc: &FieldDescriptor) -> HashMap<String, String> {
    let prefix = desc.wire_name().to_ascii_lowercase();
    let mut captured = HashMap::new();
    for (name, value) in &output.headers {
        let Some(suffix) = name.as_str().strip_prefix(prefix.as_str()) else {
            continue;
        };
        if suffix.is_empty() {
            continue;
        }
        match value.to_str() {
            Ok(text) => {
                captured.insert(suffix.to_ascii_lowercase(), text.to_owned());
            }
            Err(_) => tracing::warn!(header = name.as_str(), "skipping non-text header value"),
        }
    }
    captured
}

fn body_holder<R: ResultModel>(
    result: &R,
    pred: impl Fn(&FieldDescriptor) -> bool,
) -> Option<&'static FieldDescriptor> {
    result
        .fields()
        .iter()
        .find(|d| d.tag == Tag::Output && d.position == Some(Position::Body) && pred(d))
}

fn build_nested(parent: &dyn Model, desc: &FieldDescriptor) -> SerdeResult<Box<dyn Model>> {
    match desc.ty.kind {
        TypeKind::Object(type_name) => build_dependency(parent, type_name),
        _ => Err(SerdeError::deserialization(format!(
            "body field {} of {} is not a model type",
            desc.attr,
            parent.type_name()
        ))),
    }
}
