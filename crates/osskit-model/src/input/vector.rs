use crate::descriptor::{FieldDescriptor, Position, TypeSpec};
use crate::oss_model;
use crate::types::VectorIndex;

oss_model! {
    /// Creates a vector index. The index travels as the JSON body.
    pub struct PutVectorIndexRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
        index: VectorIndex =>
            FieldDescriptor::input(Position::Body, "", TypeSpec::object("VectorIndex").json()).required(),
    }
}

oss_model! {
    /// Queries one vector index. The request itself is the JSON body.
    pub struct GetVectorIndexRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
        index_name: String => FieldDescriptor::json("indexName", TypeSpec::STR).required(),
    }
}

oss_model! {
    /// Lists the vector indexes of a bucket. The request itself is the JSON body.
    pub struct ListVectorIndexesRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
        max_results: i32 => FieldDescriptor::json("maxResults", TypeSpec::INT),
        next_token: String => FieldDescriptor::json("nextToken", TypeSpec::STR),
        prefix: String => FieldDescriptor::json("prefix", TypeSpec::STR),
    }
}
