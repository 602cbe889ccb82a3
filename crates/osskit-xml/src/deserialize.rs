//! XML to model.
//!
//! Only fields tagged [`Tag::Xml`] are read. A list field with no matching
//! element stays `None`; an absent scalar or nested element leaves the field
//! untouched. Nested models are built from the parent's dependency table.

use osskit_core::{SerdeError, SerdeResult};
use osskit_model::coerce::from_wire_string;
use osskit_model::descriptor::{FieldDescriptor, Tag, TypeKind, TypeSpec};
use osskit_model::{Model, Value, build_dependency};

use crate::element::Element;

/// Parse `xml` into `model`.
///
/// When `expected_root` is given and the document root differs, this fails
/// before any field is assigned.
///
/// # Errors
///
/// Returns `SerdeError::Deserialization` if the XML is malformed, the root
/// does not match, or a field value cannot be parsed.
pub fn from_xml(xml: &[u8], model: &mut dyn Model, expected_root: Option<&str>) -> SerdeResult<()> {
    let root = Element::parse(xml)?;
    if let Some(expected) = expected_root {
        if root.name != expected {
            return Err(SerdeError::deserialization(format!(
                "expected root tag {expected}, got {}",
                root.name
            )));
        }
    }
    from_element(&root, model)
}

/// Populate `model` from an already parsed element.
///
/// # Errors
///
/// Returns `SerdeError::Deserialization` if a field value cannot be parsed or
/// a nested type is not declared as a dependency.
pub fn from_element(element: &Element, model: &mut dyn Model) -> SerdeResult<()> {
    for desc in model.fields().iter().filter(|d| d.tag == Tag::Xml) {
        let path = desc.wire_name();
        let value = if desc.ty.is_list() {
            read_list(element.find_all(path), model, desc)?
        } else {
            match element.find(path) {
                Some(node) => read_single(node, model, &desc.ty)?,
                None => None,
            }
        };
        if let Some(value) = value {
            tracing::trace!(model = model.type_name(), field = desc.attr, "xml field");
            model.set_field(desc.attr, value)?;
        }
    }
    Ok(())
}

fn read_list(
    nodes: Vec<&Element>,
    parent: &dyn Model,
    desc: &FieldDescriptor,
) -> SerdeResult<Option<Value>> {
    if nodes.is_empty() {
        return Ok(None);
    }
    let item_ty = desc.ty.element();
    let mut items = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Some(item) = read_single(node, parent, &item_ty)? {
            items.push(item);
        }
    }
    if items.is_empty() {
        return Ok(None);
    }
    Ok(Some(Value::List(items)))
}

fn read_single(node: &Element, parent: &dyn Model, ty: &TypeSpec) -> SerdeResult<Option<Value>> {
    match ty.kind {
        TypeKind::Object(type_name) => {
            let mut child = build_dependency(parent, type_name)?;
            from_element(node, child.as_mut())?;
            Ok(Some(Value::Object(child)))
        }
        TypeKind::Scalar(_) => from_wire_string(Some(node.text.as_str()), ty),
        TypeKind::List(_) | TypeKind::Dict => Err(SerdeError::deserialization(format!(
            "type {ty} cannot be read from an XML element"
        ))),
    }
}
