//! Response disassembly scenarios.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use osskit_core::{SerdeConfig, SerdeError};
    use osskit_model::output::{
        GetBucketWormResult, GetObjectTaggingResult, GetPublicAccessBlockResult, HeadObjectResult,
        InitiateBucketWormResult, ListObjectsResult, PutBucketAclResult,
    };
    use osskit_model::types::{StorageClassType, WormState};
    use osskit_serde::{
        Codec, deserialize_output, deserialize_output_discardbody, deserialize_output_headers,
        deserialize_output_xmlbody,
    };

    use crate::canned_response;

    #[test]
    fn test_should_disassemble_empty_success() {
        let mut output = canned_response(
            200,
            &[
                ("x-oss-request-id", "534B371674E88A4D8906****"),
                ("Date", "Fri, 24 Feb 2017 03:15:40 GMT"),
            ],
            "",
        );
        let mut result = PutBucketAclResult::default();
        deserialize_output(
            &mut result,
            &mut output,
            &[deserialize_output_headers, deserialize_output_discardbody],
        )
        .expect("disassemble");

        assert_eq!(result.meta.status_code, 200);
        assert_eq!(result.meta.status, "OK");
        assert_eq!(
            result.meta.request_id.as_deref(),
            Some("534B371674E88A4D8906****")
        );
        assert_eq!(result.meta.headers.len(), 2);
    }

    #[test]
    fn test_should_disassemble_head_object_headers() {
        let mut output = canned_response(
            200,
            &[
                ("x-oss-request-id", "559CC9BDC755F95A6448****"),
                ("Content-Length", "481827"),
                ("Content-Type", "image/jpg"),
                ("ETag", "\"A082B659EF78733A5A042FA253B1****\""),
                ("Last-Modified", "Fri, 24 Feb 2012 06:07:48 GMT"),
                ("x-oss-object-type", "Normal"),
                ("x-oss-storage-class", "ColdArchive"),
                ("x-oss-restore", "ongoing-request=\"true\""),
                ("x-oss-meta-location", "hangzhou"),
                ("x-oss-meta-Project", "demo"),
                ("x-oss-server-side-encryption", "KMS"),
            ],
            "",
        );
        let mut result = HeadObjectResult::default();
        deserialize_output(
            &mut result,
            &mut output,
            &[deserialize_output_headers, deserialize_output_discardbody],
        )
        .expect("disassemble");

        assert_eq!(result.content_length, Some(481_827));
        assert_eq!(result.content_type.as_deref(), Some("image/jpg"));
        assert_eq!(
            result.last_modified,
            Utc.with_ymd_and_hms(2012, 2, 24, 6, 7, 48).single()
        );
        assert_eq!(result.object_type.as_deref(), Some("Normal"));
        assert_eq!(result.storage_class, Some(StorageClassType::ColdArchive));
        assert_eq!(result.restore.as_deref(), Some("ongoing-request=\"true\""));
        assert_eq!(result.server_side_encryption.as_deref(), Some("KMS"));
        let metadata = result.metadata.expect("metadata");
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata.get("location").map(String::as_str), Some("hangzhou"));
        assert_eq!(metadata.get("project").map(String::as_str), Some("demo"));
        assert!(result.tagging_count.is_none());
        assert!(result.transition_time.is_none());
    }

    #[test]
    fn test_should_keep_unknown_enum_values() {
        let mut output = canned_response(200, &[("x-oss-storage-class", "Glacier")], "");
        let mut result = HeadObjectResult::default();
        deserialize_output(&mut result, &mut output, &[deserialize_output_headers])
            .expect("disassemble");
        assert_eq!(
            result.storage_class,
            Some(StorageClassType::Unknown("Glacier".into()))
        );
    }

    #[test]
    fn test_should_combine_headers_and_document() {
        let mut output = canned_response(
            200,
            &[("x-oss-version-id", "CAEQNRiBgMClj7qD0BYiIDQ5Y2QyMjc3NGZkODRlMTU5M2VkY2U3MWRiNGRh****")],
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <Tagging>\n  <TagSet>\n    <Tag><Key>a</Key><Value>1</Value></Tag>\n\
             <Tag><Key>b</Key><Value>2</Value></Tag>\n  </TagSet>\n</Tagging>",
        );
        let mut result = GetObjectTaggingResult::default();
        deserialize_output(
            &mut result,
            &mut output,
            &[deserialize_output_headers, deserialize_output_xmlbody],
        )
        .expect("disassemble");

        assert!(result.version_id.is_some());
        let tags: Vec<_> = result
            .tag_set
            .and_then(|set| set.tags)
            .unwrap_or_default()
            .into_iter()
            .map(|t| (t.key.unwrap_or_default(), t.value.unwrap_or_default()))
            .collect();
        assert_eq!(
            tags,
            [("a".to_owned(), "1".to_owned()), ("b".to_owned(), "2".to_owned())]
        );
    }

    #[test]
    fn test_should_fill_worm_holder() {
        let mut output = canned_response(
            200,
            &[],
            r"<WormConfiguration>
  <WormId>1666E2CFB2B3418****</WormId>
  <State>Locked</State>
  <RetentionPeriodInDays>1</RetentionPeriodInDays>
  <CreationDate>2020-10-15T15:50:32</CreationDate>
  <ExpirationDate>2020-10-16T15:50:32</ExpirationDate>
</WormConfiguration>",
        );
        let mut result = GetBucketWormResult::default();
        deserialize_output(&mut result, &mut output, &[deserialize_output_xmlbody])
            .expect("disassemble");

        let worm = result.worm_configuration.expect("worm configuration");
        assert_eq!(worm.worm_id.as_deref(), Some("1666E2CFB2B3418****"));
        assert_eq!(worm.state, Some(WormState::Locked));
        assert_eq!(worm.retention_period_in_days, Some(1));
        assert_eq!(
            worm.creation_date,
            Utc.with_ymd_and_hms(2020, 10, 15, 15, 50, 32).single()
        );
    }

    #[test]
    fn test_should_fill_public_access_block_holder() {
        let mut output = canned_response(
            200,
            &[],
            "<PublicAccessBlockConfiguration><BlockPublicAccess>true</BlockPublicAccess>\
             </PublicAccessBlockConfiguration>",
        );
        let mut result = GetPublicAccessBlockResult::default();
        deserialize_output(&mut result, &mut output, &[deserialize_output_xmlbody])
            .expect("disassemble");
        assert_eq!(
            result
                .public_access_block_configuration
                .and_then(|c| c.block_public_access),
            Some(true)
        );
    }

    #[test]
    fn test_should_read_worm_id_header() {
        let mut output = canned_response(200, &[("x-oss-worm-id", "1666E2CFB2B3418****")], "");
        let mut result = InitiateBucketWormResult::default();
        deserialize_output(
            &mut result,
            &mut output,
            &[deserialize_output_headers, deserialize_output_discardbody],
        )
        .expect("disassemble");
        assert_eq!(result.worm_id.as_deref(), Some("1666E2CFB2B3418****"));
    }

    #[test]
    fn test_should_disassemble_listing_with_prefixes() {
        let mut output = canned_response(
            200,
            &[],
            r"<?xml version='1.0' encoding='UTF-8'?>
<ListBucketResult>
  <Name>oss-example</Name>
  <Prefix>fun/</Prefix>
  <Marker></Marker>
  <MaxKeys>100</MaxKeys>
  <Delimiter>/</Delimiter>
  <IsTruncated>true</IsTruncated>
  <NextMarker>fun/test.jpg</NextMarker>
  <Contents>
    <Key>fun/test.jpg</Key>
    <LastModified>2012-02-24T08:42:32.000Z</LastModified>
    <ETag>&quot;5B3C1A2E053D763E1B002CC607C5A0FE1****&quot;</ETag>
    <Type>Normal</Type>
    <Size>344606</Size>
    <StorageClass>Standard</StorageClass>
    <Owner>
      <ID>0022012****</ID>
      <DisplayName>user-example</DisplayName>
    </Owner>
  </Contents>
  <CommonPrefixes><Prefix>fun/movie/</Prefix></CommonPrefixes>
  <CommonPrefixes><Prefix>fun/music/</Prefix></CommonPrefixes>
</ListBucketResult>",
        );
        let mut result = ListObjectsResult::default();
        deserialize_output(&mut result, &mut output, &[deserialize_output_xmlbody])
            .expect("disassemble");

        assert_eq!(result.is_truncated, Some(true));
        assert_eq!(result.next_marker.as_deref(), Some("fun/test.jpg"));
        assert_eq!(result.marker.as_deref(), Some(""));
        let contents = result.contents.expect("contents");
        assert_eq!(
            contents[0].etag.as_deref(),
            Some("\"5B3C1A2E053D763E1B002CC607C5A0FE1****\"")
        );
        assert_eq!(
            contents[0].owner.as_ref().and_then(|o| o.id.as_deref()),
            Some("0022012****")
        );
        let prefixes: Vec<_> = result
            .common_prefixes
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.prefix)
            .collect();
        assert_eq!(prefixes, ["fun/movie/", "fun/music/"]);
    }

    #[test]
    fn test_should_fail_on_bad_document() {
        let mut output = canned_response(200, &[], "<ListBucketResult><MaxKeys>x</MaxKeys>");
        let mut result = ListObjectsResult::default();
        let err = deserialize_output(&mut result, &mut output, &[deserialize_output_xmlbody])
            .expect_err("malformed");
        assert!(matches!(err, SerdeError::Deserialization(_)));
    }

    #[test]
    fn test_should_honor_codec_body_limit() {
        let codec = Codec::new(SerdeConfig {
            max_body_size: 16,
            ..SerdeConfig::default()
        });
        let mut output = canned_response(
            200,
            &[],
            "<PublicAccessBlockConfiguration></PublicAccessBlockConfiguration>",
        );
        let mut result = GetPublicAccessBlockResult::default();
        assert!(
            codec
                .deserialize_output(&mut result, &mut output, &[deserialize_output_xmlbody])
                .is_err()
        );
        assert!(result.public_access_block_configuration.is_none());
    }
}
