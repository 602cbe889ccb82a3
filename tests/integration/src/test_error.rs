//! Failure responses.

#[cfg(test)]
mod tests {
    use osskit_core::{SerdeError, SerdeResult};
    use osskit_model::OperationOutput;
    use osskit_model::output::{GetBucketAclResult, GetBucketInfoResult};
    use osskit_serde::{Codec, deserialize_output, deserialize_output_xmlbody};
    use osskit_xml::parse_service_error;

    use crate::canned_response;

    const NO_SUCH_BUCKET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error>
  <Code>NoSuchBucket</Code>
  <Message>The specified bucket does not exist.</Message>
  <RequestId>5C3D9175B6FC201293AD****</RequestId>
  <HostId>test.oss-cn-hangzhou.aliyuncs.com</HostId>
  <BucketName>test</BucketName>
  <EC>0015-00000101</EC>
</Error>"#;

    /// Turns a non-2xx response into an error carrying the service code.
    fn reject_service_error(
        _: &Codec,
        _: &mut GetBucketInfoResult,
        output: &mut OperationOutput,
    ) -> SerdeResult<()> {
        if (200..300).contains(&output.status_code) {
            return Ok(());
        }
        let Some(mut body) = output.take_body() else {
            return Err(SerdeError::deserialization(format!("status {}", output.status_code)));
        };
        let content = body
            .read_all()
            .map_err(|e| SerdeError::deserialization(e.to_string()))?;
        let details = parse_service_error(&content)?;
        Err(SerdeError::deserialization(format!(
            "{} ({})",
            details.code().unwrap_or_default(),
            details.ec().unwrap_or_default()
        )))
    }

    #[test]
    fn test_should_surface_service_error_from_hook() {
        let mut output = canned_response(
            404,
            &[("x-oss-request-id", "5C3D9175B6FC201293AD****")],
            NO_SUCH_BUCKET,
        );
        let mut result = GetBucketInfoResult::default();
        let err = deserialize_output(
            &mut result,
            &mut output,
            &[reject_service_error, deserialize_output_xmlbody],
        )
        .expect_err("404");

        assert_eq!(
            err.to_string(),
            "deserialization error: NoSuchBucket (0015-00000101)"
        );
        assert_eq!(result.meta.status_code, 404);
        assert_eq!(result.meta.status, "Not Found");
        assert_eq!(
            result.meta.request_id.as_deref(),
            Some("5C3D9175B6FC201293AD****")
        );
        assert!(result.bucket_info.is_none());
    }

    #[test]
    fn test_should_keep_extra_error_fields() {
        let details = parse_service_error(NO_SUCH_BUCKET.as_bytes()).expect("error document");
        assert_eq!(details.host_id(), Some("test.oss-cn-hangzhou.aliyuncs.com"));
        assert_eq!(details.get("BucketName"), Some("test"));
    }

    #[test]
    fn test_should_reject_error_document_as_result() {
        let mut output = canned_response(403, &[], NO_SUCH_BUCKET);
        let mut result = GetBucketAclResult::default();
        let err = deserialize_output(&mut result, &mut output, &[deserialize_output_xmlbody])
            .expect_err("root mismatch");
        assert!(matches!(err, SerdeError::Deserialization(ref m) if m.contains("Error")));
        assert_eq!(result.meta.status, "Forbidden");
    }
}
