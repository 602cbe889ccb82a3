//! Request assembly and response disassembly for OSS-compatible models.
//!
//! A request model is spread onto an [`OperationInput`](osskit_model::OperationInput)
//! by [`serialize_input`]; a transport response in an
//! [`OperationOutput`](osskit_model::OperationOutput) is folded back into a
//! result model by [`deserialize_output`] and its hooks. Both operations are
//! also available as methods on [`Codec`], which carries the
//! [`SerdeConfig`](osskit_core::SerdeConfig) in effect.
//!
//! ```ignore
//! let mut input = OperationInput::for_operation(OssOperation::PutBucketAcl)
//!     .with_bucket("example-bucket");
//! serialize_input(&request, &mut input, &[add_content_md5])?;
//!
//! let mut result = PutBucketAclResult::default();
//! deserialize_output(&mut result, &mut output, &[deserialize_output_discardbody])?;
//! ```

mod assemble;
mod codec;
mod disassemble;
mod hooks;
pub mod json;

pub use assemble::serialize_input;
pub use codec::{Codec, InputSerializer, OutputDeserializer};
pub use disassemble::{
    deserialize_output, deserialize_output_discardbody, deserialize_output_headers,
    deserialize_output_jsonbody, deserialize_output_xmlbody,
};
pub use hooks::{add_content_md5, add_content_type_json, add_content_type_xml};
pub use json::{from_json, to_json};
