//! Request assembly scenarios.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use osskit_core::SerdeError;
    use osskit_model::input::{
        ListObjectsRequest, PutBucketAclRequest, PutBucketReplicationRequest, PutObjectRequest,
        PutObjectTaggingRequest,
    };
    use osskit_model::types::{
        BucketAclType, EncodingType, ObjectAclType, ReplicationConfiguration,
        ReplicationDestination, ReplicationRule, Tag, TagSet, Tagging, TransferType,
    };
    use osskit_model::{OperationInput, OssOperation, RequestCommon};
    use osskit_serde::{add_content_md5, add_content_type_xml, serialize_input};

    use crate::{body_text, init_tracing};

    #[test]
    fn test_should_assemble_put_bucket_acl() {
        init_tracing();
        let request = PutBucketAclRequest {
            bucket: Some("example-bucket".into()),
            acl: Some(BucketAclType::Private),
            ..Default::default()
        };
        let mut input =
            OperationInput::new("PutBucketAcl", http::Method::PUT).with_bucket("example-bucket");
        serialize_input(&request, &mut input, &[]).expect("assemble");

        assert_eq!(input.headers.get("x-oss-acl").map(String::as_str), Some("private"));
        assert_eq!(input.headers.len(), 1);
        assert!(input.parameters.is_empty());
        assert!(input.body.is_none());
    }

    #[test]
    fn test_should_report_first_missing_required_field() {
        init_tracing();
        let mut input = OperationInput::for_operation(OssOperation::PutObjectTagging);
        let err = serialize_input(
            &PutObjectTaggingRequest {
                bucket: Some("b".into()),
                ..Default::default()
            },
            &mut input,
            &[],
        )
        .expect_err("key missing");
        assert!(matches!(err, SerdeError::ParamRequired { ref field } if field == "key"));
        assert_eq!(err.to_string(), "missing required field, key");
        assert!(input.body.is_none());
    }

    #[test]
    fn test_should_assemble_listing_query() {
        init_tracing();
        let request = ListObjectsRequest {
            bucket: Some("examplebucket".into()),
            delimiter: Some("/".into()),
            encoding_type: Some(EncodingType::Url),
            marker: Some("fun/movie/001.avi".into()),
            max_keys: Some(200),
            ..Default::default()
        };
        let mut input = OperationInput::for_operation(OssOperation::ListObjects);
        serialize_input(&request, &mut input, &[]).expect("assemble");

        let params: Vec<_> = input
            .parameters
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            params,
            [
                ("delimiter", "/"),
                ("encoding-type", "url"),
                ("marker", "fun/movie/001.avi"),
                ("max-keys", "200"),
            ]
        );
        assert!(input.headers.is_empty());
    }

    #[test]
    fn test_should_assemble_put_object_with_metadata_and_hooks() {
        init_tracing();
        let request = PutObjectRequest {
            bucket: Some("b".into()),
            key: Some("exampleobject.txt".into()),
            acl: Some(ObjectAclType::PublicRead),
            metadata: Some(HashMap::from([("author".to_owned(), "alice".to_owned())])),
            content_type: Some("text/plain".into()),
            body: Some(bytes::Bytes::from_static(b"hello world")),
            common: RequestCommon::default().with_header("x-oss-traffic-limit", "819200"),
            ..Default::default()
        };
        let mut input = OperationInput::for_operation(OssOperation::PutObject)
            .with_bucket("b")
            .with_key("exampleobject.txt");
        serialize_input(&request, &mut input, &[add_content_md5, add_content_type_xml])
            .expect("assemble");

        let header = |name: &str| input.headers.get(name).map(String::as_str);
        assert_eq!(header("x-oss-object-acl"), Some("public-read"));
        assert_eq!(header("x-oss-meta-author"), Some("alice"));
        assert_eq!(header("x-oss-traffic-limit"), Some("819200"));
        assert_eq!(header("Content-Type"), Some("text/plain"));
        assert_eq!(header("Content-MD5"), Some("XrY7u+Ae7tCTyyK7j1rNww=="));
        assert_eq!(body_text(&input), "hello world");
    }

    #[test]
    fn test_should_assemble_tagging_document() {
        init_tracing();
        let request = PutObjectTaggingRequest {
            bucket: Some("b".into()),
            key: Some("k".into()),
            tagging: Some(Tagging {
                tag_set: Some(TagSet {
                    tags: Some(vec![
                        Tag {
                            key: Some("a".into()),
                            value: Some("1".into()),
                        },
                        Tag {
                            key: Some("b".into()),
                            value: Some("<2>".into()),
                        },
                    ]),
                }),
            }),
            ..Default::default()
        };
        let mut input = OperationInput::for_operation(OssOperation::PutObjectTagging);
        serialize_input(&request, &mut input, &[add_content_type_xml]).expect("assemble");

        assert!(input.parameters.contains_key("tagging"));
        assert_eq!(
            body_text(&input),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Tagging><TagSet>\
             <Tag><Key>a</Key><Value>1</Value></Tag>\
             <Tag><Key>b</Key><Value>&lt;2&gt;</Value></Tag>\
             </TagSet></Tagging>"
        );
        assert_eq!(
            input.headers.get("Content-Type").map(String::as_str),
            Some("application/xml")
        );
    }

    #[test]
    fn test_should_assemble_path_valued_replication_rule() {
        init_tracing();
        let request = PutBucketReplicationRequest {
            bucket: Some("b".into()),
            replication_configuration: Some(ReplicationConfiguration {
                rules: Some(vec![ReplicationRule {
                    prefixes: Some(vec!["source1".into(), "video".into()]),
                    action: Some("PUT".into()),
                    destination: Some(ReplicationDestination {
                        bucket: Some("destbucket".into()),
                        location: Some("oss-cn-beijing".into()),
                        transfer_type: Some(TransferType::OssAcc),
                    }),
                    replica_kms_key_id: Some("c4d49f85-ee30-426b-a5ed-95e9139d****".into()),
                    rtc_status: Some("enabled".into()),
                    ..Default::default()
                }]),
            }),
            ..Default::default()
        };
        let mut input = OperationInput::for_operation(OssOperation::PutBucketReplication);
        serialize_input(&request, &mut input, &[]).expect("assemble");

        let body = body_text(&input);
        assert!(body.contains(
            "<Rule><PrefixSet><Prefix>source1</Prefix><Prefix>video</Prefix></PrefixSet>"
        ));
        assert!(body.contains(
            "<Destination><Bucket>destbucket</Bucket><Location>oss-cn-beijing</Location>\
             <TransferType>oss_acc</TransferType></Destination>"
        ));
        assert!(body.contains(
            "<EncryptionConfiguration><ReplicaKmsKeyID>c4d49f85-ee30-426b-a5ed-95e9139d****\
             </ReplicaKmsKeyID></EncryptionConfiguration>"
        ));
        assert!(body.contains("<RTC><Status>enabled</Status></RTC>"));
        assert_eq!(input.parameters.get("replication").map(String::as_str), Some(""));
    }
}
