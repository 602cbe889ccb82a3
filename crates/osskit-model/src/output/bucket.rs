use crate::descriptor::{FieldDescriptor, Position, TypeSpec};
use crate::oss_model;
use crate::types::{BucketInfo, CommonPrefix, EncodingType, ObjectProperties, Owner};

oss_model! {
    /// Result of PutBucket.
    pub struct PutBucketResult: result {}
}

oss_model! {
    /// Result of DeleteBucket.
    pub struct DeleteBucketResult: result {}
}

oss_model! {
    /// Result of GetBucketInfo. The whole document lands in `bucket_info`.
    pub struct GetBucketInfoResult: result {
        bucket_info: BucketInfo =>
            FieldDescriptor::output(Position::Body, "BucketInfo", TypeSpec::object("BucketInfo").xml()),
    }
    depends [BucketInfo]
}

oss_model! {
    /// Result of PutBucketAcl.
    pub struct PutBucketAclResult: result {}
}

oss_model! {
    /// Result of GetBucketAcl.
    pub struct GetBucketAclResult: result as "AccessControlPolicy" {
        owner: Owner => FieldDescriptor::xml("Owner", TypeSpec::object("Owner")),
        acl: String => FieldDescriptor::xml("AccessControlList/Grant", TypeSpec::STR),
    }
    depends [Owner]
}

oss_model! {
    /// Result of ListObjects.
    pub struct ListObjectsResult: result as "ListBucketResult" {
        name: String => FieldDescriptor::xml("Name", TypeSpec::STR),
        prefix: String => FieldDescriptor::xml("Prefix", TypeSpec::STR),
        marker: String => FieldDescriptor::xml("Marker", TypeSpec::STR),
        max_keys: i32 => FieldDescriptor::xml("MaxKeys", TypeSpec::INT),
        delimiter: String => FieldDescriptor::xml("Delimiter", TypeSpec::STR),
        is_truncated: bool => FieldDescriptor::xml("IsTruncated", TypeSpec::BOOL),
        encoding_type: EncodingType => FieldDescriptor::xml("EncodingType", TypeSpec::STR),
        next_marker: String => FieldDescriptor::xml("NextMarker", TypeSpec::STR),
        contents: Vec<ObjectProperties> =>
            FieldDescriptor::xml("Contents", TypeSpec::list_of("ObjectProperties")),
        common_prefixes: Vec<CommonPrefix> =>
            FieldDescriptor::xml("CommonPrefixes", TypeSpec::list_of("CommonPrefix")),
    }
    depends [ObjectProperties, CommonPrefix]
}
