//! Wire-level carriers exchanged with the transport layer.
//!
//! [`OperationInput`] is filled by the request assembler and consumed by the
//! transport; [`OperationOutput`] is produced by the transport and consumed by
//! the response disassembler.

use std::collections::BTreeMap;
use std::fmt;
use std::io;

use bytes::Bytes;

use crate::operations::OssOperation;

/// A request or response payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    /// The underlying bytes.
    pub data: Bytes,
}

impl Body {
    /// Create a body from anything convertible to bytes.
    #[must_use]
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Returns true if the body is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the length of the body.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// The body as a byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl From<Bytes> for Body {
    fn from(data: Bytes) -> Self {
        Self { data }
    }
}

impl From<Vec<u8>> for Body {
    fn from(data: Vec<u8>) -> Self {
        Self { data: data.into() }
    }
}

impl From<&[u8]> for Body {
    fn from(data: &[u8]) -> Self {
        Self {
            data: Bytes::copy_from_slice(data),
        }
    }
}

impl From<String> for Body {
    fn from(data: String) -> Self {
        Self { data: data.into() }
    }
}

impl From<&str> for Body {
    fn from(data: &str) -> Self {
        Self {
            data: Bytes::copy_from_slice(data.as_bytes()),
        }
    }
}

/// Values every request may carry outside its descriptor table.
///
/// They are merged into the carrier before descriptor-governed fields, so a
/// descriptor field with the same key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestCommon {
    /// Extra headers.
    pub headers: BTreeMap<String, String>,
    /// Extra query parameters.
    pub parameters: BTreeMap<String, String>,
    /// Initial body.
    pub payload: Option<Body>,
}

impl RequestCommon {
    /// Add an extra header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add an extra query parameter.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Set the initial body.
    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<Body>) -> Self {
        self.payload = Some(payload.into());
        self
    }
}

/// Transport outcome copied onto every result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultMeta {
    /// Reason phrase, e.g. `OK`.
    pub status: String,
    /// HTTP status code.
    pub status_code: u16,
    /// Service-assigned request id.
    pub request_id: Option<String>,
    /// All response headers.
    pub headers: http::HeaderMap,
}

/// A request as handed to the transport.
#[derive(Debug, Clone, Default)]
pub struct OperationInput {
    /// Operation name, e.g. `PutBucketAcl`.
    pub op_name: String,
    /// HTTP method.
    pub method: http::Method,
    /// Target bucket, placed on the host by the transport.
    pub bucket: Option<String>,
    /// Target object key, placed on the path by the transport.
    pub key: Option<String>,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
    /// Query parameters.
    pub parameters: BTreeMap<String, String>,
    /// Request body.
    pub body: Option<Body>,
}

impl OperationInput {
    /// Create an input for a named operation.
    #[must_use]
    pub fn new(op_name: impl Into<String>, method: http::Method) -> Self {
        Self {
            op_name: op_name.into(),
            method,
            ..Self::default()
        }
    }

    /// Create an input for a catalogued operation, including its sub-resource
    /// query parameter if it has one.
    #[must_use]
    pub fn for_operation(op: OssOperation) -> Self {
        let mut input = Self::new(op.as_str(), op.method());
        if let Some(sub) = op.sub_resource() {
            input.parameters.insert(sub.to_owned(), String::new());
        }
        input
    }

    /// Set the target bucket.
    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set the target object key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Look up a header case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// The body of an HTTP response, read at most once.
pub trait ResponseBody: fmt::Debug + Send {
    /// Read the remaining content.
    fn read_all(&mut self) -> io::Result<Bytes>;

    /// Release the underlying connection without reading.
    fn close(&mut self);
}

/// A response body that is already in memory.
#[derive(Debug, Default)]
pub struct BufferedBody {
    content: Option<Bytes>,
    closed: bool,
}

impl BufferedBody {
    /// Wrap in-memory content.
    #[must_use]
    pub fn new(content: impl Into<Bytes>) -> Self {
        Self {
            content: Some(content.into()),
            closed: false,
        }
    }

    /// Whether [`ResponseBody::close`] was called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl ResponseBody for BufferedBody {
    fn read_all(&mut self) -> io::Result<Bytes> {
        if self.closed {
            return Err(io::Error::other("response body closed"));
        }
        Ok(self.content.take().unwrap_or_default())
    }

    fn close(&mut self) {
        self.content = None;
        self.closed = true;
    }
}

/// A response as handed back by the transport.
#[derive(Debug, Default)]
pub struct OperationOutput {
    /// Reason phrase.
    pub status: String,
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers, case-insensitive.
    pub headers: http::HeaderMap,
    /// Response body, taken by the single read point of the disassembler.
    pub http_response: Option<Box<dyn ResponseBody>>,
}

impl OperationOutput {
    /// Create an output with the canonical reason phrase of `status_code`.
    #[must_use]
    pub fn new(status_code: u16, headers: http::HeaderMap) -> Self {
        let status = http::StatusCode::from_u16(status_code)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_owned();
        Self {
            status,
            status_code,
            headers,
            http_response: None,
        }
    }

    /// Attach a response body.
    #[must_use]
    pub fn with_body(mut self, body: impl ResponseBody + 'static) -> Self {
        self.http_response = Some(Box::new(body));
        self
    }

    /// Take the response body, leaving `None` behind.
    pub fn take_body(&mut self) -> Option<Box<dyn ResponseBody>> {
        self.http_response.take()
    }
}
