use std::collections::HashMap;

use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::descriptor::{FieldDescriptor, Position, TypeSpec};
use crate::oss_model;
use crate::types::{ObjectAclType, StorageClassType, Tagging};

oss_model! {
    /// Uploads an object.
    pub struct PutObjectRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
        key: String => FieldDescriptor::input(Position::Path, "key", TypeSpec::STR).required(),
        acl: ObjectAclType => FieldDescriptor::input(Position::Header, "x-oss-object-acl", TypeSpec::STR),
        storage_class: StorageClassType =>
            FieldDescriptor::input(Position::Header, "x-oss-storage-class", TypeSpec::STR),
        /// User metadata, sent as one `x-oss-meta-*` header per entry.
        metadata: HashMap<String, String> =>
            FieldDescriptor::input(Position::Header, "x-oss-meta-", TypeSpec::DICT),
        cache_control: String => FieldDescriptor::input(Position::Header, "Cache-Control", TypeSpec::STR),
        content_disposition: String =>
            FieldDescriptor::input(Position::Header, "Content-Disposition", TypeSpec::STR),
        content_encoding: String =>
            FieldDescriptor::input(Position::Header, "Content-Encoding", TypeSpec::STR),
        content_length: i64 => FieldDescriptor::input(Position::Header, "Content-Length", TypeSpec::INT),
        content_md5: String => FieldDescriptor::input(Position::Header, "Content-MD5", TypeSpec::STR),
        content_type: String => FieldDescriptor::input(Position::Header, "Content-Type", TypeSpec::STR),
        expires: DateTime<Utc> =>
            FieldDescriptor::input(Position::Header, "Expires", TypeSpec::DATETIME.httptime()),
        forbid_overwrite: bool =>
            FieldDescriptor::input(Position::Header, "x-oss-forbid-overwrite", TypeSpec::BOOL),
        tagging: String => FieldDescriptor::input(Position::Header, "x-oss-tagging", TypeSpec::STR),
        body: Bytes => FieldDescriptor::input(Position::Body, "", TypeSpec::BYTES),
    }
}

oss_model! {
    /// Fetches object metadata without the body.
    pub struct HeadObjectRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
        key: String => FieldDescriptor::input(Position::Path, "key", TypeSpec::STR).required(),
        version_id: String => FieldDescriptor::input(Position::Query, "versionId", TypeSpec::STR),
        if_match: String => FieldDescriptor::input(Position::Header, "If-Match", TypeSpec::STR),
        if_none_match: String => FieldDescriptor::input(Position::Header, "If-None-Match", TypeSpec::STR),
        if_modified_since: DateTime<Utc> => FieldDescriptor::input(
            Position::Header,
            "If-Modified-Since",
            TypeSpec::DATETIME.httptime(),
        ),
        if_unmodified_since: DateTime<Utc> => FieldDescriptor::input(
            Position::Header,
            "If-Unmodified-Since",
            TypeSpec::DATETIME.httptime(),
        ),
    }
}

oss_model! {
    /// Deletes an object.
    pub struct DeleteObjectRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
        key: String => FieldDescriptor::input(Position::Path, "key", TypeSpec::STR).required(),
        version_id: String => FieldDescriptor::input(Position::Query, "versionId", TypeSpec::STR),
    }
}

oss_model! {
    /// Replaces the tags of an object.
    pub struct PutObjectTaggingRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
        key: String => FieldDescriptor::input(Position::Path, "key", TypeSpec::STR).required(),
        version_id: String => FieldDescriptor::input(Position::Query, "versionId", TypeSpec::STR),
        tagging: Tagging =>
            FieldDescriptor::input(Position::Body, "Tagging", TypeSpec::object("Tagging").xml())
                .required(),
    }
}

oss_model! {
    /// Queries the tags of an object.
    pub struct GetObjectTaggingRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
        key: String => FieldDescriptor::input(Position::Path, "key", TypeSpec::STR).required(),
        version_id: String => FieldDescriptor::input(Position::Query, "versionId", TypeSpec::STR),
    }
}
