use crate::descriptor::{FieldDescriptor, Position, TypeSpec};
use crate::oss_model;
use crate::types::{BucketAclType, CreateBucketConfiguration, EncodingType};

oss_model! {
    /// Creates a bucket.
    pub struct PutBucketRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
        acl: BucketAclType => FieldDescriptor::input(Position::Header, "x-oss-acl", TypeSpec::STR),
        resource_group_id: String =>
            FieldDescriptor::input(Position::Header, "x-oss-resource-group-id", TypeSpec::STR),
        create_bucket_configuration: CreateBucketConfiguration => FieldDescriptor::input(
            Position::Body,
            "CreateBucketConfiguration",
            TypeSpec::object("CreateBucketConfiguration").xml(),
        ),
    }
}

oss_model! {
    /// Deletes an empty bucket.
    pub struct DeleteBucketRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
    }
}

oss_model! {
    /// Queries bucket details.
    pub struct GetBucketInfoRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
    }
}

oss_model! {
    /// Sets the canned ACL of a bucket.
    pub struct PutBucketAclRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
        acl: BucketAclType =>
            FieldDescriptor::input(Position::Header, "x-oss-acl", TypeSpec::STR).required(),
    }
}

oss_model! {
    /// Queries the canned ACL of a bucket.
    pub struct GetBucketAclRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
    }
}

oss_model! {
    /// Lists objects in a bucket.
    pub struct ListObjectsRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
        delimiter: String => FieldDescriptor::input(Position::Query, "delimiter", TypeSpec::STR),
        encoding_type: EncodingType =>
            FieldDescriptor::input(Position::Query, "encoding-type", TypeSpec::STR),
        marker: String => FieldDescriptor::input(Position::Query, "marker", TypeSpec::STR),
        max_keys: i32 => FieldDescriptor::input(Position::Query, "max-keys", TypeSpec::INT),
        prefix: String => FieldDescriptor::input(Position::Query, "prefix", TypeSpec::STR),
        request_payer: String =>
            FieldDescriptor::input(Position::Header, "x-oss-request-payer", TypeSpec::STR),
    }
}
