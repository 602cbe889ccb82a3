//! Well-known OSS header names.

/// Response header carrying the service-assigned request id.
pub const REQUEST_ID: &str = "x-oss-request-id";

/// Prefix of user metadata headers.
pub const META_PREFIX: &str = "x-oss-meta-";

/// `Content-MD5` request header.
pub const CONTENT_MD5: &str = "Content-MD5";

/// `Content-Type` request header.
pub const CONTENT_TYPE: &str = "Content-Type";

/// MIME type used for XML request bodies.
pub const XML_CONTENT_TYPE: &str = "application/xml";

/// MIME type used for JSON request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";
