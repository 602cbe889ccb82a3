//! Descriptor-driven XML codec for osskit models.
//!
//! Models are mapped onto a small owned [`Element`] tree parsed and rendered
//! with quick-xml. Only fields tagged `xml` take part.
//!
//! # Key components
//!
//! - [`to_xml`] / [`to_element`] write a model under its XML name or an override
//! - [`from_xml`] / [`from_element`] populate a model, checking the root tag
//! - [`parse_service_error`] reads `<Error>` documents returned by the service
//!
//! # Wire conventions
//!
//! - Booleans: lowercase `true`/`false`
//! - Timestamps: ISO 8601 unless the field asks for `httptime` or `unixtime`
//! - XML declaration: `<?xml version="1.0" encoding="UTF-8"?>` when enabled

pub mod deserialize;
pub mod element;
pub mod error;
pub mod serialize;

pub use deserialize::{from_element, from_xml};
pub use element::Element;
pub use error::{ServiceErrorDetails, XmlError, parse_service_error};
pub use serialize::{to_element, to_xml};
