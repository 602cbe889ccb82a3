use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::descriptor::{FieldDescriptor, Position, TypeSpec};
use crate::oss_model;
use crate::types::{StorageClassType, TagSet};

oss_model! {
    /// Result of PutObject.
    pub struct PutObjectResult: result {
        content_md5: String => FieldDescriptor::output(Position::Header, "Content-MD5", TypeSpec::STR),
        etag: String => FieldDescriptor::output(Position::Header, "ETag", TypeSpec::STR),
        hash_crc64: String =>
            FieldDescriptor::output(Position::Header, "x-oss-hash-crc64ecma", TypeSpec::STR),
        version_id: String => FieldDescriptor::output(Position::Header, "x-oss-version-id", TypeSpec::STR),
    }
}

oss_model! {
    /// Result of HeadObject. Everything is carried in response headers.
    pub struct HeadObjectResult: result {
        content_length: i64 => FieldDescriptor::output(Position::Header, "Content-Length", TypeSpec::INT),
        content_type: String => FieldDescriptor::output(Position::Header, "Content-Type", TypeSpec::STR),
        etag: String => FieldDescriptor::output(Position::Header, "ETag", TypeSpec::STR),
        last_modified: DateTime<Utc> =>
            FieldDescriptor::output(Position::Header, "Last-Modified", TypeSpec::DATETIME.httptime()),
        /// User metadata captured from `x-oss-meta-*` headers, keyed by the lowercase suffix.
        metadata: HashMap<String, String> =>
            FieldDescriptor::output(Position::Header, "x-oss-meta-", TypeSpec::DICT),
        object_type: String => FieldDescriptor::output(Position::Header, "x-oss-object-type", TypeSpec::STR),
        storage_class: StorageClassType =>
            FieldDescriptor::output(Position::Header, "x-oss-storage-class", TypeSpec::STR),
        server_side_encryption: String =>
            FieldDescriptor::output(Position::Header, "x-oss-server-side-encryption", TypeSpec::STR),
        tagging_count: i32 =>
            FieldDescriptor::output(Position::Header, "x-oss-tagging-count", TypeSpec::INT),
        version_id: String => FieldDescriptor::output(Position::Header, "x-oss-version-id", TypeSpec::STR),
        restore: String => FieldDescriptor::output(Position::Header, "x-oss-restore", TypeSpec::STR),
        last_access_time: DateTime<Utc> => FieldDescriptor::output(
            Position::Header,
            "x-oss-last-access-time",
            TypeSpec::DATETIME.httptime(),
        ),
        transition_time: DateTime<Utc> => FieldDescriptor::output(
            Position::Header,
            "x-oss-transition-time",
            TypeSpec::DATETIME.httptime(),
        ),
    }
}

oss_model! {
    /// Result of DeleteObject.
    pub struct DeleteObjectResult: result {
        version_id: String => FieldDescriptor::output(Position::Header, "x-oss-version-id", TypeSpec::STR),
        delete_marker: bool =>
            FieldDescriptor::output(Position::Header, "x-oss-delete-marker", TypeSpec::BOOL),
    }
}

oss_model! {
    /// Result of PutObjectTagging.
    pub struct PutObjectTaggingResult: result {
        version_id: String => FieldDescriptor::output(Position::Header, "x-oss-version-id", TypeSpec::STR),
    }
}

oss_model! {
    /// Result of GetObjectTagging. The document root is `Tagging`.
    pub struct GetObjectTaggingResult: result as "Tagging" {
        version_id: String => FieldDescriptor::output(Position::Header, "x-oss-version-id", TypeSpec::STR),
        tag_set: TagSet => FieldDescriptor::xml("TagSet", TypeSpec::object("TagSet")),
    }
    depends [TagSet]
}
