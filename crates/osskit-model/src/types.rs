//! Shared enums and nested models referenced by the operation models.

use crate::descriptor::{FieldDescriptor, ScalarKind, TypeSpec};
use crate::{oss_enum, oss_model};

oss_enum! {
    /// Canned ACL of a bucket.
    pub enum BucketAclType {
        Private => "private",
        PublicRead => "public-read",
        PublicReadWrite => "public-read-write",
    }
}

oss_enum! {
    /// Canned ACL of an object.
    pub enum ObjectAclType {
        Default => "default",
        Private => "private",
        PublicRead => "public-read",
        PublicReadWrite => "public-read-write",
    }
}

oss_enum! {
    /// Storage class of a bucket or object.
    pub enum StorageClassType {
        Standard => "Standard",
        Ia => "IA",
        Archive => "Archive",
        ColdArchive => "ColdArchive",
        DeepColdArchive => "DeepColdArchive",
    }
}

oss_enum! {
    /// Redundancy type of a bucket.
    pub enum DataRedundancyType {
        Lrs => "LRS",
        Zrs => "ZRS",
    }
}

oss_enum! {
    /// Encoding applied to keys in list responses.
    pub enum EncodingType {
        Url => "url",
    }
}

oss_enum! {
    /// Versioning state of a bucket.
    pub enum BucketVersioningStatus {
        Enabled => "Enabled",
        Suspended => "Suspended",
    }
}

oss_enum! {
    /// State of a retention (WORM) policy.
    pub enum WormState {
        InProgress => "InProgress",
        Locked => "Locked",
        Expired => "Expired",
    }
}

oss_enum! {
    /// Link used to transfer replicated data.
    pub enum TransferType {
        Internal => "internal",
        OssAcc => "oss_acc",
    }
}

oss_enum! {
    /// Whether objects written before a replication rule are replicated.
    pub enum HistoricalObjectReplicationType {
        Enabled => "enabled",
        Disabled => "disabled",
    }
}

oss_model! {
    /// Owner of a bucket or object.
    pub struct Owner {
        id: String => FieldDescriptor::xml("ID", TypeSpec::STR),
        display_name: String => FieldDescriptor::xml("DisplayName", TypeSpec::STR),
    }
}

oss_model! {
    /// Body of a PutBucket request.
    pub struct CreateBucketConfiguration {
        storage_class: StorageClassType => FieldDescriptor::xml("StorageClass", TypeSpec::STR),
        data_redundancy_type: DataRedundancyType =>
            FieldDescriptor::xml("DataRedundancyType", TypeSpec::STR),
    }
}

oss_model! {
    /// Bucket description returned by GetBucketInfo, wrapped in a `Bucket` element.
    pub struct BucketInfo {
        name: String => FieldDescriptor::xml("Bucket/Name", TypeSpec::STR),
        access_monitor: String => FieldDescriptor::xml("Bucket/AccessMonitor", TypeSpec::STR),
        location: String => FieldDescriptor::xml("Bucket/Location", TypeSpec::STR),
        creation_date: chrono::DateTime<chrono::Utc> =>
            FieldDescriptor::xml("Bucket/CreationDate", TypeSpec::DATETIME),
        extranet_endpoint: String => FieldDescriptor::xml("Bucket/ExtranetEndpoint", TypeSpec::STR),
        intranet_endpoint: String => FieldDescriptor::xml("Bucket/IntranetEndpoint", TypeSpec::STR),
        acl: String => FieldDescriptor::xml("Bucket/AccessControlList/Grant", TypeSpec::STR),
        data_redundancy_type: DataRedundancyType =>
            FieldDescriptor::xml("Bucket/DataRedundancyType", TypeSpec::STR),
        owner: Owner => FieldDescriptor::xml("Bucket/Owner", TypeSpec::object("Owner")),
        storage_class: StorageClassType => FieldDescriptor::xml("Bucket/StorageClass", TypeSpec::STR),
        resource_group_id: String => FieldDescriptor::xml("Bucket/ResourceGroupId", TypeSpec::STR),
        versioning: BucketVersioningStatus => FieldDescriptor::xml("Bucket/Versioning", TypeSpec::STR),
        transfer_acceleration: String =>
            FieldDescriptor::xml("Bucket/TransferAcceleration", TypeSpec::STR),
        cross_region_replication: String =>
            FieldDescriptor::xml("Bucket/CrossRegionReplication", TypeSpec::STR),
        block_public_access: bool => FieldDescriptor::xml("Bucket/BlockPublicAccess", TypeSpec::BOOL),
        comment: String => FieldDescriptor::xml("Bucket/Comment", TypeSpec::STR),
    }
    depends [Owner]
}

oss_model! {
    /// One entry of an object listing.
    pub struct ObjectProperties {
        key: String => FieldDescriptor::xml("Key", TypeSpec::STR),
        object_type: String => FieldDescriptor::xml("Type", TypeSpec::STR),
        size: i64 => FieldDescriptor::xml("Size", TypeSpec::INT),
        etag: String => FieldDescriptor::xml("ETag", TypeSpec::STR),
        last_modified: chrono::DateTime<chrono::Utc> =>
            FieldDescriptor::xml("LastModified", TypeSpec::DATETIME),
        storage_class: StorageClassType => FieldDescriptor::xml("StorageClass", TypeSpec::STR),
        owner: Owner => FieldDescriptor::xml("Owner", TypeSpec::object("Owner")),
        restore_info: String => FieldDescriptor::xml("RestoreInfo", TypeSpec::STR),
    }
    depends [Owner]
}

oss_model! {
    /// A key prefix rolled up by a delimiter.
    pub struct CommonPrefix {
        prefix: String => FieldDescriptor::xml("Prefix", TypeSpec::STR),
    }
}

oss_model! {
    /// Block Public Access switch.
    pub struct PublicAccessBlockConfiguration {
        block_public_access: bool => FieldDescriptor::xml("BlockPublicAccess", TypeSpec::BOOL),
    }
}

oss_model! {
    /// Body of an InitiateBucketWorm request.
    pub struct InitiateWormConfiguration {
        retention_period_in_days: i32 =>
            FieldDescriptor::xml("RetentionPeriodInDays", TypeSpec::INT),
    }
}

oss_model! {
    /// Body of an ExtendBucketWorm request.
    pub struct ExtendWormConfiguration {
        retention_period_in_days: i32 =>
            FieldDescriptor::xml("RetentionPeriodInDays", TypeSpec::INT),
    }
}

oss_model! {
    /// A retention policy as returned by GetBucketWorm.
    pub struct WormConfiguration {
        worm_id: String => FieldDescriptor::xml("WormId", TypeSpec::STR),
        state: WormState => FieldDescriptor::xml("State", TypeSpec::STR),
        retention_period_in_days: i32 =>
            FieldDescriptor::xml("RetentionPeriodInDays", TypeSpec::INT),
        creation_date: chrono::DateTime<chrono::Utc> =>
            FieldDescriptor::xml("CreationDate", TypeSpec::DATETIME),
        expiration_date: chrono::DateTime<chrono::Utc> =>
            FieldDescriptor::xml("ExpirationDate", TypeSpec::DATETIME),
    }
}

oss_model! {
    /// An object tag.
    pub struct Tag {
        key: String => FieldDescriptor::xml("Key", TypeSpec::STR),
        value: String => FieldDescriptor::xml("Value", TypeSpec::STR),
    }
}

oss_model! {
    /// A set of object tags.
    pub struct TagSet {
        tags: Vec<Tag> => FieldDescriptor::xml("Tag", TypeSpec::list_of("Tag")),
    }
    depends [Tag]
}

oss_model! {
    /// Document carried by the object tagging operations.
    pub struct Tagging {
        tag_set: TagSet => FieldDescriptor::xml("TagSet", TypeSpec::object("TagSet")),
    }
    depends [TagSet]
}

oss_model! {
    /// Target of a replication rule.
    pub struct ReplicationDestination as "Destination" {
        bucket: String => FieldDescriptor::xml("Bucket", TypeSpec::STR),
        location: String => FieldDescriptor::xml("Location", TypeSpec::STR),
        transfer_type: TransferType => FieldDescriptor::xml("TransferType", TypeSpec::STR),
    }
}

oss_model! {
    /// One cross-region replication rule.
    pub struct ReplicationRule {
        id: String => FieldDescriptor::xml("ID", TypeSpec::STR),
        /// Key prefixes the rule applies to.
        prefixes: Vec<String> =>
            FieldDescriptor::xml("PrefixSet/Prefix", TypeSpec::list_of_scalar(ScalarKind::Str)),
        action: String => FieldDescriptor::xml("Action", TypeSpec::STR),
        destination: ReplicationDestination =>
            FieldDescriptor::xml("Destination", TypeSpec::object("ReplicationDestination")),
        status: String => FieldDescriptor::xml("Status", TypeSpec::STR),
        historical_object_replication: HistoricalObjectReplicationType =>
            FieldDescriptor::xml("HistoricalObjectReplication", TypeSpec::STR),
        sync_role: String => FieldDescriptor::xml("SyncRole", TypeSpec::STR),
        replica_kms_key_id: String =>
            FieldDescriptor::xml("EncryptionConfiguration/ReplicaKmsKeyID", TypeSpec::STR),
        rtc_status: String => FieldDescriptor::xml("RTC/Status", TypeSpec::STR),
    }
    depends [ReplicationDestination]
}

oss_model! {
    /// Cross-region replication rules of a bucket.
    pub struct ReplicationConfiguration {
        rules: Vec<ReplicationRule> => FieldDescriptor::xml("Rule", TypeSpec::list_of("ReplicationRule")),
    }
    depends [ReplicationRule]
}

oss_model! {
    /// Metadata options of a vector index.
    pub struct VectorIndexMetadata {
        non_filterable_metadata_keys: Vec<String> => FieldDescriptor::json(
            "nonFilterableMetadataKeys",
            TypeSpec::list_of_scalar(ScalarKind::Str),
        ),
    }
}

oss_model! {
    /// A vector index, carried as JSON.
    pub struct VectorIndex {
        index_name: String => FieldDescriptor::json("indexName", TypeSpec::STR),
        dimension: i32 => FieldDescriptor::json("dimension", TypeSpec::INT),
        data_type: String => FieldDescriptor::json("dataType", TypeSpec::STR),
        distance_metric: String => FieldDescriptor::json("distanceMetric", TypeSpec::STR),
        metadata: VectorIndexMetadata =>
            FieldDescriptor::json("metadata", TypeSpec::object("VectorIndexMetadata")),
        status: String => FieldDescriptor::json("status", TypeSpec::STR),
        create_time: chrono::DateTime<chrono::Utc> =>
            FieldDescriptor::json("createTime", TypeSpec::DATETIME.unixtime()),
    }
    depends [VectorIndexMetadata]
}
