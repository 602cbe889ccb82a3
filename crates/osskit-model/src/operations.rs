//! Catalogue of the OSS operations that have models in this crate.

/// All catalogued OSS operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OssOperation {
    /// The PutBucket operation.
    PutBucket,
    /// The DeleteBucket operation.
    DeleteBucket,
    /// The GetBucketInfo operation.
    GetBucketInfo,
    /// The PutBucketAcl operation.
    PutBucketAcl,
    /// The GetBucketAcl operation.
    GetBucketAcl,
    /// The ListObjects operation.
    ListObjects,
    /// The PutObject operation.
    PutObject,
    /// The HeadObject operation.
    HeadObject,
    /// The DeleteObject operation.
    DeleteObject,
    /// The PutObjectTagging operation.
    PutObjectTagging,
    /// The GetObjectTagging operation.
    GetObjectTagging,
    /// The PutPublicAccessBlock operation.
    PutPublicAccessBlock,
    /// The GetPublicAccessBlock operation.
    GetPublicAccessBlock,
    /// The InitiateBucketWorm operation.
    InitiateBucketWorm,
    /// The GetBucketWorm operation.
    GetBucketWorm,
    /// The ExtendBucketWorm operation.
    ExtendBucketWorm,
    /// The PutBucketReplication operation.
    PutBucketReplication,
    /// The GetBucketReplication operation.
    GetBucketReplication,
    /// The PutVectorIndex operation.
    PutVectorIndex,
    /// The GetVectorIndex operation.
    GetVectorIndex,
    /// The ListVectorIndexes operation.
    ListVectorIndexes,
}

impl OssOperation {
    /// Every catalogued operation.
    pub const ALL: &[Self] = &[
        Self::PutBucket,
        Self::DeleteBucket,
        Self::GetBucketInfo,
        Self::PutBucketAcl,
        Self::GetBucketAcl,
        Self::ListObjects,
        Self::PutObject,
        Self::HeadObject,
        Self::DeleteObject,
        Self::PutObjectTagging,
        Self::GetObjectTagging,
        Self::PutPublicAccessBlock,
        Self::GetPublicAccessBlock,
        Self::InitiateBucketWorm,
        Self::GetBucketWorm,
        Self::ExtendBucketWorm,
        Self::PutBucketReplication,
        Self::GetBucketReplication,
        Self::PutVectorIndex,
        Self::GetVectorIndex,
        Self::ListVectorIndexes,
    ];

    /// Returns the operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PutBucket => "PutBucket",
            Self::DeleteBucket => "DeleteBucket",
            Self::GetBucketInfo => "GetBucketInfo",
            Self::PutBucketAcl => "PutBucketAcl",
            Self::GetBucketAcl => "GetBucketAcl",
            Self::ListObjects => "ListObjects",
            Self::PutObject => "PutObject",
            Self::HeadObject => "HeadObject",
            Self::DeleteObject => "DeleteObject",
            Self::PutObjectTagging => "PutObjectTagging",
            Self::GetObjectTagging => "GetObjectTagging",
            Self::PutPublicAccessBlock => "PutPublicAccessBlock",
            Self::GetPublicAccessBlock => "GetPublicAccessBlock",
            Self::InitiateBucketWorm => "InitiateBucketWorm",
            Self::GetBucketWorm => "GetBucketWorm",
            Self::ExtendBucketWorm => "ExtendBucketWorm",
            Self::PutBucketReplication => "PutBucketReplication",
            Self::GetBucketReplication => "GetBucketReplication",
            Self::PutVectorIndex => "PutVectorIndex",
            Self::GetVectorIndex => "GetVectorIndex",
            Self::ListVectorIndexes => "ListVectorIndexes",
        }
    }

    /// Parse an operation from its name string.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    /// HTTP method the operation is sent with.
    #[must_use]
    pub fn method(&self) -> http::Method {
        match self {
            Self::GetBucketInfo
            | Self::GetBucketAcl
            | Self::ListObjects
            | Self::GetObjectTagging
            | Self::GetPublicAccessBlock
            | Self::GetBucketWorm
            | Self::GetBucketReplication => http::Method::GET,
            Self::HeadObject => http::Method::HEAD,
            Self::DeleteBucket | Self::DeleteObject => http::Method::DELETE,
            Self::InitiateBucketWorm
            | Self::ExtendBucketWorm
            | Self::PutBucketReplication
            | Self::PutVectorIndex
            | Self::GetVectorIndex
            | Self::ListVectorIndexes => http::Method::POST,
            Self::PutBucket
            | Self::PutBucketAcl
            | Self::PutObject
            | Self::PutObjectTagging
            | Self::PutPublicAccessBlock => http::Method::PUT,
        }
    }

    /// Sub-resource query parameter that selects the operation, if any.
    #[must_use]
    pub fn sub_resource(&self) -> Option<&'static str> {
        match self {
            Self::PutBucket
            | Self::DeleteBucket
            | Self::ListObjects
            | Self::PutObject
            | Self::HeadObject
            | Self::DeleteObject => None,
            Self::GetBucketInfo => Some("bucketInfo"),
            Self::PutBucketAcl | Self::GetBucketAcl => Some("acl"),
            Self::PutObjectTagging | Self::GetObjectTagging => Some("tagging"),
            Self::PutPublicAccessBlock | Self::GetPublicAccessBlock => Some("publicAccessBlock"),
            Self::InitiateBucketWorm | Self::GetBucketWorm => Some("worm"),
            Self::ExtendBucketWorm => Some("wormExtend"),
            Self::PutBucketReplication | Self::GetBucketReplication => Some("replication"),
            Self::PutVectorIndex => Some("PutVectorIndex"),
            Self::GetVectorIndex => Some("GetVectorIndex"),
            Self::ListVectorIndexes => Some("ListVectorIndexes"),
        }
    }
}

impl std::fmt::Display for OssOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
