//! Built-in serializer hooks for [`Codec::serialize_input`].

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use md5::{Digest, Md5};
use osskit_core::SerdeResult;
use osskit_core::headers::{CONTENT_MD5, CONTENT_TYPE, JSON_CONTENT_TYPE, XML_CONTENT_TYPE};
use osskit_model::descriptor::{Position, Tag};
use osskit_model::{OperationInput, RequestModel};

use crate::codec::Codec;

/// Set `Content-MD5` to the base64 MD5 digest of the body.
///
/// Does nothing without a body or when the header is already present.
pub fn add_content_md5<R: RequestModel>(
    _codec: &Codec,
    _request: &R,
    input: &mut OperationInput,
) -> SerdeResult<()> {
    if input.header(CONTENT_MD5).is_some() {
        return Ok(());
    }
    if let Some(body) = &input.body {
        let digest = Md5::digest(body.as_bytes());
        input
            .headers
            .insert(CONTENT_MD5.to_owned(), BASE64.encode(digest.as_slice()));
    }
    Ok(())
}

/// Set `Content-Type: application/xml` when the body came from an XML field.
pub fn add_content_type_xml<R: RequestModel>(
    _codec: &Codec,
    request: &R,
    input: &mut OperationInput,
) -> SerdeResult<()> {
    if body_field_with(request, |d| d.ty.is_xml()) {
        set_content_type(input, XML_CONTENT_TYPE);
    }
    Ok(())
}

/// Set `Content-Type: application/json` when the body is a JSON document.
pub fn add_content_type_json<R: RequestModel>(
    _codec: &Codec,
    request: &R,
    input: &mut OperationInput,
) -> SerdeResult<()> {
    let own_document = request
        .fields()
        .iter()
        .any(|d| d.tag == Tag::Json && request.field(d.attr).is_some());
    if own_document || body_field_with(request, |d| d.ty.is_json()) {
        set_content_type(input, JSON_CONTENT_TYPE);
    }
    Ok(())
}

fn body_field_with<R: RequestModel>(
    request: &R,
    pred: impl Fn(&osskit_model::descriptor::FieldDescriptor) -> bool,
) -> bool {
    request.fields().iter().any(|d| {
        d.tag == Tag::Input
            && d.position == Some(Position::Body)
            && pred(d)
            && request.field(d.attr).is_some()
    })
}

fn set_content_type(input: &mut OperationInput, value: &str) {
    if input.body.is_some() && input.header(CONTENT_TYPE).is_none() {
        input
            .headers
            .insert(CONTENT_TYPE.to_owned(), value.to_owned());
    }
}
