//! Configuration for the serde layer.
//!
//! Values are driven by environment variables so that the same binary can be
//! pointed at OSS-compatible services that use different conventions.

use crate::headers;

/// Default cap on response body size (64 MiB).
const DEFAULT_MAX_BODY_SIZE: usize = 64 * 1024 * 1024;

/// Settings shared by the request assembler and response disassembler.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerdeConfig {
    /// Response header that carries the request id.
    pub request_id_header: String,
    /// Whether serialized XML bodies start with an XML declaration.
    pub xml_declaration: bool,
    /// Largest response body the disassembler will parse.
    pub max_body_size: usize,
}

impl Default for SerdeConfig {
    fn default() -> Self {
        Self {
            request_id_header: headers::REQUEST_ID.to_owned(),
            xml_declaration: true,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

impl SerdeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("OSS_REQUEST_ID_HEADER") {
            config.request_id_header = v.to_ascii_lowercase();
        }
        if let Some(v) = lookup("OSS_XML_DECLARATION") {
            match parse_flag(&v) {
                Some(flag) => config.xml_declaration = flag,
                None => tracing::warn!(value = %v, "ignoring invalid OSS_XML_DECLARATION"),
            }
        }
        if let Some(v) = lookup("OSS_MAX_BODY_SIZE") {
            match v.parse() {
                Ok(size) => config.max_body_size = size,
                Err(e) => tracing::warn!(value = %v, error = %e, "ignoring invalid OSS_MAX_BODY_SIZE"),
            }
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}
