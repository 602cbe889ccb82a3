//! Descriptor-driven OSS models.
//!
//! Every model declares a static [`descriptor::FieldDescriptor`] table through
//! [`oss_model!`]. The serializers in `osskit-xml` and `osskit-serde` walk
//! those tables instead of knowing concrete types.
#![allow(clippy::too_many_lines)]
#![allow(missing_docs)]

pub mod coerce;
pub mod descriptor;
pub mod input;
pub mod model;
pub mod operation;
pub mod operations;
pub mod output;
pub mod types;

pub use model::{
    Dependency, FieldRef, FieldValue, Model, RequestModel, ResultModel, Value, build_dependency,
};
pub use operation::{
    Body, BufferedBody, OperationInput, OperationOutput, RequestCommon, ResponseBody, ResultMeta,
};
pub use operations::OssOperation;
pub use osskit_core::{SerdeError, SerdeResult};
