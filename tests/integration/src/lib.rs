//! End-to-end scenarios for the osskit serde layer.
//!
//! Each scenario assembles a request into an [`OperationInput`], stands in for
//! the transport with a canned [`OperationOutput`], and disassembles it into a
//! result model. No network is involved.
//!
//! Run them with:
//! ```text
//! cargo test -p osskit-integration
//! ```

use std::sync::Once;

use http::{HeaderMap, HeaderName, HeaderValue};
use osskit_model::{BufferedBody, OperationInput, OperationOutput};

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Build a header map from name/value pairs. Repeated names are appended.
#[must_use]
pub fn header_map(pairs: &[(&str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) else {
            panic!("invalid canned header {name}: {value}");
        };
        map.append(name, value);
    }
    map
}

/// A canned transport response.
#[must_use]
pub fn canned_response(status_code: u16, headers: &[(&str, &str)], body: &str) -> OperationOutput {
    init_tracing();
    OperationOutput::new(status_code, header_map(headers))
        .with_body(BufferedBody::new(body.to_owned()))
}

/// A 200 response whose body is the body of `input`, as a service echoing
/// the document back would return it.
#[must_use]
pub fn echo_response(input: &OperationInput, headers: &[(&str, &str)]) -> OperationOutput {
    init_tracing();
    let body = input.body.clone().unwrap_or_default();
    OperationOutput::new(200, header_map(headers)).with_body(BufferedBody::new(body.data))
}

/// The request body as UTF-8 text.
#[must_use]
pub fn body_text(input: &OperationInput) -> &str {
    input
        .body
        .as_ref()
        .and_then(|b| std::str::from_utf8(b.as_bytes()).ok())
        .unwrap_or_default()
}

mod test_error;
mod test_request;
mod test_response;
mod test_roundtrip;
