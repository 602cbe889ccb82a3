use crate::descriptor::{FieldDescriptor, Position, TypeSpec};
use crate::oss_model;
use crate::types::VectorIndex;

oss_model! {
    /// Result of PutVectorIndex.
    pub struct PutVectorIndexResult: result {}
}

oss_model! {
    /// Result of GetVectorIndex. The index sits under the `index` member.
    pub struct GetVectorIndexResult: result {
        index: VectorIndex =>
            FieldDescriptor::output(Position::Body, "index", TypeSpec::object("VectorIndex").json()),
    }
    depends [VectorIndex]
}

oss_model! {
    /// Result of ListVectorIndexes.
    pub struct ListVectorIndexesResult: result {
        indexes: Vec<VectorIndex> => FieldDescriptor::json("indexes", TypeSpec::list_of("VectorIndex")),
        next_token: String => FieldDescriptor::json("nextToken", TypeSpec::STR),
    }
    depends [VectorIndex]
}
