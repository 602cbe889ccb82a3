//! XML error types and service error document parsing.

use std::collections::BTreeMap;
use std::io;

use osskit_core::SerdeError;

use crate::element::Element;

/// Errors that can occur while reading or writing XML.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// An unexpected XML element was encountered.
    #[error("unexpected XML element: {0}")]
    UnexpectedElement(String),

    /// An error decoding text or names.
    #[error("failed to parse value: {0}")]
    ParseError(String),
}

impl From<XmlError> for SerdeError {
    fn from(err: XmlError) -> Self {
        SerdeError::deserialization(err.to_string())
    }
}

/// Contents of an `<Error>` document returned by the service.
///
/// Every child element is kept, so fields added by the service remain
/// reachable through [`ServiceErrorDetails::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceErrorDetails {
    /// Child element name to text, names kept as sent.
    pub fields: BTreeMap<String, String>,
}

impl ServiceErrorDetails {
    /// Text of the child element `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The error code, e.g. `NoSuchBucket`.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.get("Code")
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.get("Message")
    }

    /// The request id echoed by the service.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.get("RequestId")
    }

    /// The host that served the request.
    #[must_use]
    pub fn host_id(&self) -> Option<&str> {
        self.get("HostId")
    }

    /// The detailed error code (`EC`).
    #[must_use]
    pub fn ec(&self) -> Option<&str> {
        self.get("EC")
    }
}

/// Parse a service error document.
///
/// ```xml
/// <Error>
///   <Code>NoSuchBucket</Code>
///   <Message>The specified bucket does not exist.</Message>
///   <RequestId>5C3D9175B6FC201293AD****</RequestId>
///   <HostId>test.oss-cn-hangzhou.aliyuncs.com</HostId>
///   <EC>0015-00000101</EC>
/// </Error>
/// ```
pub fn parse_service_error(xml: &[u8]) -> Result<ServiceErrorDetails, XmlError> {
    let root = Element::parse(xml)?;
    if root.name != "Error" {
        return Err(XmlError::UnexpectedElement(root.name));
    }
    let fields = root
        .children
        .into_iter()
        .map(|child| (child.name, child.text))
        .collect();
    Ok(ServiceErrorDetails { fields })
}
