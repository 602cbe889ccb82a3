//! Request assembly: request model to [`OperationInput`].

use std::collections::BTreeMap;

use osskit_core::{SerdeError, SerdeResult};
use osskit_model::coerce::to_wire_string;
use osskit_model::descriptor::{FieldDescriptor, Position, Tag};
use osskit_model::{Body, FieldRef, OperationInput, RequestModel};

use crate::codec::{Codec, InputSerializer};
use crate::json;

/// Headers, parameters and body built up before they are committed to the carrier.
#[derive(Debug)]
struct Staged {
    headers: BTreeMap<String, String>,
    parameters: BTreeMap<String, String>,
    body: Option<Body>,
}

impl Codec {
    /// Distribute the fields of `request` onto `input`, then run `serializers`.
    ///
    /// Every required field is checked before the carrier is touched. Bulk
    /// values from [`RequestModel::common`] are applied first, so a
    /// descriptor-driven header or parameter with the same key replaces them.
    /// Host and path fields are left to the caller, who already placed them
    /// on the carrier.
    pub fn serialize_input<R: RequestModel>(
        &self,
        request: &R,
        input: &mut OperationInput,
        serializers: &[InputSerializer<R>],
    ) -> SerdeResult<()> {
        check_required(request)?;

        let common = request.common();
        let mut staged = Staged {
            headers: input.headers.clone(),
            parameters: input.parameters.clone(),
            body: input.body.clone(),
        };
        staged
            .headers
            .extend(common.headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        staged
            .parameters
            .extend(common.parameters.iter().map(|(k, v)| (k.clone(), v.clone())));
        if let Some(payload) = &common.payload {
            staged.body = Some(payload.clone());
        }

        let mut body_from_field = false;
        for desc in request.fields().iter().filter(|d| d.tag == Tag::Input) {
            let Some(value) = request.field(desc.attr) else {
                continue;
            };
            tracing::trace!(op = %input.op_name, field = desc.attr, position = ?desc.position, "placing field");
            match desc.position {
                Some(Position::Query) => {
                    staged
                        .parameters
                        .insert(desc.wire_name().to_owned(), to_wire_string(&value, &desc.ty)?);
                }
                Some(Position::Header) => place_header(&mut staged, desc, &value)?,
                Some(Position::Body) => {
                    staged.body = Some(self.encode_body(desc, &value)?);
                    body_from_field = true;
                }
                Some(Position::Host | Position::Path) | None => {}
            }
        }

        if !body_from_field && has_json_document(request) {
            staged.body = Some(Body::from(json::to_json(request)?));
        }

        input.headers = staged.headers;
        input.parameters = staged.parameters;
        input.body = staged.body;

        tracing::debug!(
            op = %input.op_name,
            headers = input.headers.len(),
            parameters = input.parameters.len(),
            body = input.body.is_some(),
            "assembled request"
        );

        for serializer in serializers {
            serializer(self, request, input)?;
        }
        Ok(())
    }

    fn encode_body(&self, desc: &FieldDescriptor, value: &FieldRef<'_>) -> SerdeResult<Body> {
        match value {
            FieldRef::Object(model) if desc.ty.is_xml() => {
                let root = Some(desc.rename).filter(|r| !r.is_empty());
                osskit_xml::to_xml(*model, root, self.config().xml_declaration).map(Body::from)
            }
            FieldRef::Object(model) if desc.ty.is_json() => json::to_json(*model).map(Body::from),
            FieldRef::Str(s) => Ok(Body::from(*s)),
            FieldRef::Bytes(b) => Ok(Body::new((*b).clone())),
            other => Err(SerdeError::serialization(format!(
                "unsupported body type {} for {}",
                other.kind(),
                desc.attr
            ))),
        }
    }
}

/// Assemble a request with the default configuration.
pub fn serialize_input<R: RequestModel>(
    request: &R,
    input: &mut OperationInput,
    serializers: &[InputSerializer<R>],
) -> SerdeResult<()> {
    Codec::default().serialize_input(request, input, serializers)
}

/// Fail on the first unset required field, in descriptor order.
fn check_required<R: RequestModel>(request: &R) -> SerdeResult<()> {
    match request
        .fields()
        .iter()
        .find(|d| d.required && request.field(d.attr).is_none())
    {
        Some(desc) => Err(SerdeError::param_required(desc.attr)),
        None => Ok(()),
    }
}

fn place_header(staged: &mut Staged, desc: &FieldDescriptor, value: &FieldRef<'_>) -> SerdeResult<()> {
    match value {
        FieldRef::Dict(map) if desc.ty.is_dict() => {
            for (k, v) in *map {
                let name = format!("{}{k}", desc.wire_name());
                if http::HeaderName::from_bytes(name.as_bytes()).is_err()
                    || http::HeaderValue::from_str(v).is_err()
                {
                    tracing::warn!(
                        field = desc.attr,
                        header = %name.escape_debug(),
                        "skipping invalid dict header"
                    );
                    continue;
                }
                staged.headers.insert(name, v.clone());
            }
        }
        scalar => {
            staged
                .headers
                .insert(desc.wire_name().to_owned(), to_wire_string(scalar, &desc.ty)?);
        }
    }
    Ok(())
}

/// Whether the request carries `json`-tagged fields of its own that are set.
fn has_json_document<R: RequestModel>(request: &R) -> bool {
    request
        .fields()
        .iter()
        .any(|d| d.tag == Tag::Json && request.field(d.attr).is_some())
}
