//! Request documents fed back through the response path.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use osskit_model::input::{
        GetVectorIndexRequest, PutBucketReplicationRequest, PutObjectTaggingRequest,
        PutVectorIndexRequest,
    };
    use osskit_model::output::{
        GetBucketReplicationResult, GetObjectTaggingResult, GetVectorIndexResult,
        ListVectorIndexesResult,
    };
    use osskit_model::types::{
        HistoricalObjectReplicationType, ReplicationConfiguration, ReplicationDestination,
        ReplicationRule, Tag, TagSet, Tagging, TransferType, VectorIndex, VectorIndexMetadata,
    };
    use osskit_model::{OperationInput, OssOperation};
    use osskit_serde::{
        add_content_type_json, deserialize_output, deserialize_output_headers,
        deserialize_output_jsonbody, deserialize_output_xmlbody, serialize_input,
    };

    use crate::{body_text, canned_response, echo_response};

    fn replication() -> ReplicationConfiguration {
        ReplicationConfiguration {
            rules: Some(vec![
                ReplicationRule {
                    id: Some("test_replication_1".into()),
                    prefixes: Some(vec!["source1".into(), "video".into()]),
                    action: Some("PUT".into()),
                    destination: Some(ReplicationDestination {
                        bucket: Some("destbucket".into()),
                        location: Some("oss-cn-beijing".into()),
                        transfer_type: Some(TransferType::OssAcc),
                    }),
                    status: Some("doing".into()),
                    historical_object_replication: Some(HistoricalObjectReplicationType::Enabled),
                    sync_role: Some("aliyunramrole".into()),
                    replica_kms_key_id: Some("c4d49f85-ee30-426b-a5ed-95e9139d****".into()),
                    rtc_status: Some("enabled".into()),
                },
                ReplicationRule {
                    id: Some("test_replication_2".into()),
                    action: Some("ALL".into()),
                    ..Default::default()
                },
            ]),
        }
    }

    #[test]
    fn test_should_round_trip_replication_configuration() {
        let request = PutBucketReplicationRequest {
            bucket: Some("b".into()),
            replication_configuration: Some(replication()),
            ..Default::default()
        };
        let mut input = OperationInput::for_operation(OssOperation::PutBucketReplication);
        serialize_input(&request, &mut input, &[]).expect("assemble");

        let mut output = echo_response(&input, &[("x-oss-request-id", "rt")]);
        let mut result = GetBucketReplicationResult::default();
        deserialize_output(&mut result, &mut output, &[deserialize_output_xmlbody])
            .expect("disassemble");

        assert_eq!(result.meta.request_id.as_deref(), Some("rt"));
        assert_eq!(result.replication_configuration, Some(replication()));
    }

    #[test]
    fn test_should_round_trip_object_tagging() {
        let tagging = Tagging {
            tag_set: Some(TagSet {
                tags: Some(vec![Tag {
                    key: Some("owner".into()),
                    value: Some("R&D".into()),
                }]),
            }),
        };
        let request = PutObjectTaggingRequest {
            bucket: Some("b".into()),
            key: Some("k".into()),
            tagging: Some(tagging.clone()),
            ..Default::default()
        };
        let mut input = OperationInput::for_operation(OssOperation::PutObjectTagging);
        serialize_input(&request, &mut input, &[]).expect("assemble");
        assert!(body_text(&input).contains("R&amp;D"));

        let mut output = echo_response(&input, &[("x-oss-version-id", "v2")]);
        let mut result = GetObjectTaggingResult::default();
        deserialize_output(
            &mut result,
            &mut output,
            &[deserialize_output_headers, deserialize_output_xmlbody],
        )
        .expect("disassemble");

        assert_eq!(result.version_id.as_deref(), Some("v2"));
        assert_eq!(result.tag_set, tagging.tag_set);
    }

    #[test]
    fn test_should_round_trip_vector_index() {
        let index = VectorIndex {
            index_name: Some("vectors".into()),
            dimension: Some(512),
            data_type: Some("float32".into()),
            distance_metric: Some("euclidean".into()),
            metadata: Some(VectorIndexMetadata {
                non_filterable_metadata_keys: Some(vec!["category".into()]),
            }),
            status: None,
            create_time: Utc.with_ymd_and_hms(2025, 4, 17, 10, 56, 21).single(),
        };
        let request = PutVectorIndexRequest {
            bucket: Some("b".into()),
            index: Some(index.clone()),
            ..Default::default()
        };
        let mut input = OperationInput::for_operation(OssOperation::PutVectorIndex);
        serialize_input(&request, &mut input, &[add_content_type_json]).expect("assemble");
        assert_eq!(
            input.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );

        let mut output = canned_response(200, &[], &format!("{{\"index\":{}}}", body_text(&input)));
        let mut result = GetVectorIndexResult::default();
        deserialize_output(&mut result, &mut output, &[deserialize_output_jsonbody])
            .expect("disassemble");
        assert_eq!(result.index, Some(index));
    }

    #[test]
    fn test_should_parse_vector_index_listing() {
        let request = GetVectorIndexRequest {
            bucket: Some("b".into()),
            index_name: Some("vectors".into()),
            ..Default::default()
        };
        let mut input = OperationInput::for_operation(OssOperation::GetVectorIndex);
        serialize_input(&request, &mut input, &[]).expect("assemble");
        assert_eq!(body_text(&input), r#"{"indexName":"vectors"}"#);

        let mut output = canned_response(
            200,
            &[],
            r#"{
                "indexes": [
                    {"indexName": "a", "dimension": 8, "status": "running", "createTime": 1744887381},
                    {"indexName": "b", "dimension": 16}
                ],
                "nextToken": ""
            }"#,
        );
        let mut result = ListVectorIndexesResult::default();
        deserialize_output(&mut result, &mut output, &[deserialize_output_jsonbody])
            .expect("disassemble");
        let indexes = result.indexes.expect("indexes");
        assert_eq!(indexes.len(), 2);
        assert_eq!(indexes[0].status.as_deref(), Some("running"));
        assert_eq!(indexes[1].dimension, Some(16));
        assert_eq!(result.next_token.as_deref(), Some(""));
    }
}
