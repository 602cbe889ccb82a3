//! Model to XML.
//!
//! Only fields tagged [`Tag::Xml`] are written. Conventions:
//!
//! - Unset fields are omitted.
//! - A nested model is written under its own element name, whatever the
//!   field's rename says.
//! - List items are repeated sibling elements named by the last segment of
//!   the rename.
//! - Leading rename segments (`AccessControlList/Grant`) become intermediate
//!   elements, shared between fields with the same prefix.

use osskit_core::{SerdeError, SerdeResult};
use osskit_model::coerce::to_wire_string;
use osskit_model::descriptor::{FieldDescriptor, Tag};
use osskit_model::{FieldRef, Model};

use crate::element::Element;

/// Serialize a model into an element tree.
///
/// The root element is named `root` when given, else the model's XML name.
///
/// # Errors
///
/// Returns `SerdeError::Serialization` if a field value cannot be written as
/// element text.
pub fn to_element(model: &dyn Model, root: Option<&str>) -> SerdeResult<Element> {
    let mut element = Element::new(root.unwrap_or_else(|| model.xml_name()));

    for desc in model.fields().iter().filter(|d| d.tag == Tag::Xml) {
        let Some(value) = model.field(desc.attr) else {
            continue;
        };
        let (parents, leaf) = split_path(desc.wire_name());
        let mut target = &mut element;
        for segment in parents {
            target = target.child_or_insert(segment);
        }
        write_value(target, leaf, &value, desc)?;
    }

    Ok(element)
}

/// Serialize a model into an XML document.
///
/// # Errors
///
/// Returns `SerdeError` if a field cannot be encoded or writing the document
/// fails.
pub fn to_xml(model: &dyn Model, root: Option<&str>, declaration: bool) -> SerdeResult<Vec<u8>> {
    let element = to_element(model, root)?;
    element
        .to_bytes(declaration)
        .map_err(|e| SerdeError::serialization(e.to_string()))
}

fn split_path(path: &str) -> (Vec<&str>, &str) {
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let leaf = segments.pop().unwrap_or(path);
    (segments, leaf)
}

fn write_value(
    target: &mut Element,
    leaf: &str,
    value: &FieldRef<'_>,
    desc: &FieldDescriptor,
) -> SerdeResult<()> {
    match value {
        FieldRef::Object(child) => target.push(to_element(*child, None)?),
        FieldRef::List(items) => {
            let item_ty = desc.ty.element();
            for item in items {
                let element = match item {
                    FieldRef::Object(child) => to_element(*child, Some(leaf))?,
                    scalar => Element::with_text(leaf, to_wire_string(scalar, &item_ty)?),
                };
                target.push(element);
            }
        }
        scalar => target.push(Element::with_text(leaf, to_wire_string(scalar, &desc.ty)?)),
    }
    Ok(())
}
