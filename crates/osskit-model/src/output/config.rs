use crate::descriptor::{FieldDescriptor, Position, TypeSpec};
use crate::oss_model;
use crate::types::{PublicAccessBlockConfiguration, ReplicationConfiguration, WormConfiguration};

oss_model! {
    /// Result of PutPublicAccessBlock.
    pub struct PutPublicAccessBlockResult: result {}
}

oss_model! {
    /// Result of GetPublicAccessBlock.
    pub struct GetPublicAccessBlockResult: result {
        public_access_block_configuration: PublicAccessBlockConfiguration => FieldDescriptor::output(
            Position::Body,
            "PublicAccessBlockConfiguration",
            TypeSpec::object("PublicAccessBlockConfiguration").xml(),
        ),
    }
    depends [PublicAccessBlockConfiguration]
}

oss_model! {
    /// Result of InitiateBucketWorm.
    pub struct InitiateBucketWormResult: result {
        worm_id: String => FieldDescriptor::output(Position::Header, "x-oss-worm-id", TypeSpec::STR),
    }
}

oss_model! {
    /// Result of GetBucketWorm.
    pub struct GetBucketWormResult: result {
        worm_configuration: WormConfiguration => FieldDescriptor::output(
            Position::Body,
            "WormConfiguration",
            TypeSpec::object("WormConfiguration").xml(),
        ),
    }
    depends [WormConfiguration]
}

oss_model! {
    /// Result of ExtendBucketWorm.
    pub struct ExtendBucketWormResult: result {}
}

oss_model! {
    /// Result of PutBucketReplication.
    pub struct PutBucketReplicationResult: result {
        replication_rule_id: String =>
            FieldDescriptor::output(Position::Header, "x-oss-replication-rule-id", TypeSpec::STR),
    }
}

oss_model! {
    /// Result of GetBucketReplication.
    pub struct GetBucketReplicationResult: result {
        replication_configuration: ReplicationConfiguration => FieldDescriptor::output(
            Position::Body,
            "ReplicationConfiguration",
            TypeSpec::object("ReplicationConfiguration").xml(),
        ),
    }
    depends [ReplicationConfiguration]
}
