use crate::descriptor::{FieldDescriptor, Position, TypeSpec};
use crate::oss_model;
use crate::types::{
    ExtendWormConfiguration, InitiateWormConfiguration, PublicAccessBlockConfiguration,
    ReplicationConfiguration,
};

oss_model! {
    /// Sets the account-level Block Public Access switch.
    pub struct PutPublicAccessBlockRequest: request {
        public_access_block_configuration: PublicAccessBlockConfiguration => FieldDescriptor::input(
            Position::Body,
            "PublicAccessBlockConfiguration",
            TypeSpec::object("PublicAccessBlockConfiguration").xml(),
        )
        .required(),
    }
}

oss_model! {
    /// Queries the account-level Block Public Access switch.
    pub struct GetPublicAccessBlockRequest: request {}
}

oss_model! {
    /// Creates a retention policy on a bucket.
    pub struct InitiateBucketWormRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
        initiate_worm_configuration: InitiateWormConfiguration => FieldDescriptor::input(
            Position::Body,
            "InitiateWormConfiguration",
            TypeSpec::object("InitiateWormConfiguration").xml(),
        )
        .required(),
    }
}

oss_model! {
    /// Queries the retention policy of a bucket.
    pub struct GetBucketWormRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
    }
}

oss_model! {
    /// Extends the retention period of a locked policy.
    pub struct ExtendBucketWormRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
        worm_id: String => FieldDescriptor::input(Position::Query, "wormId", TypeSpec::STR).required(),
        extend_worm_configuration: ExtendWormConfiguration => FieldDescriptor::input(
            Position::Body,
            "ExtendWormConfiguration",
            TypeSpec::object("ExtendWormConfiguration").xml(),
        )
        .required(),
    }
}

oss_model! {
    /// Adds cross-region replication rules to a bucket.
    pub struct PutBucketReplicationRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
        replication_configuration: ReplicationConfiguration => FieldDescriptor::input(
            Position::Body,
            "ReplicationConfiguration",
            TypeSpec::object("ReplicationConfiguration").xml(),
        )
        .required(),
    }
}

oss_model! {
    /// Queries the cross-region replication rules of a bucket.
    pub struct GetBucketReplicationRequest: request {
        bucket: String => FieldDescriptor::input(Position::Host, "bucket", TypeSpec::STR).required(),
    }
}
