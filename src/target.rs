use std::fmt;
use std::str::FromStr;

use crate::error::{PresignError, Result};

/// Where a presigned request is routed: a plain bucket or an access point ARN
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Bucket(String),
    AccessPoint(AccessPointArn),
}

impl Target {
    /// Parse a target identifier.
    ///
    /// Anything starting with `arn:` must be a well-formed S3 or
    /// S3 Object Lambda access point ARN; everything else is a bucket name.
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(PresignError::invalid_input(
                "target identifier must not be empty",
            ));
        }

        if input.starts_with("arn:") {
            return AccessPointArn::parse(input).map(Target::AccessPoint);
        }

        if !is_valid_bucket_name(input) {
            return Err(PresignError::invalid_input(format!(
                "invalid bucket name `{input}`: expected 1-255 of [a-zA-Z0-9.-_]"
            )));
        }

        Ok(Target::Bucket(input.to_string()))
    }

    /// Value handed to the SDK as the `Bucket` parameter.
    /// The SDK endpoint rules route ARNs to the access point host.
    pub fn as_bucket_param(&self) -> &str {
        match self {
            Target::Bucket(name) => name,
            Target::AccessPoint(arn) => &arn.raw,
        }
    }

    /// Region pinned by the target, if any
    pub fn region(&self) -> Option<&str> {
        match self {
            Target::Bucket(_) => None,
            Target::AccessPoint(arn) => Some(&arn.region),
        }
    }
}

fn is_valid_bucket_name(name: &str) -> bool {
    (1..=255).contains(&name.len())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}

impl FromStr for Target {
    type Err = PresignError;

    fn from_str(s: &str) -> Result<Self> {
        Target::parse(s)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_bucket_param())
    }
}

/// Service namespace of an access point ARN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArnService {
    S3,
    S3ObjectLambda,
}

impl ArnService {
    fn parse(service: &str) -> Option<Self> {
        match service {
            "s3" => Some(ArnService::S3),
            "s3-object-lambda" => Some(ArnService::S3ObjectLambda),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArnService::S3 => "s3",
            ArnService::S3ObjectLambda => "s3-object-lambda",
        }
    }
}

impl fmt::Display for ArnService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `arn:<partition>:<service>:<region>:<account-id>:accesspoint/<name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPointArn {
    pub partition: String,
    pub service: ArnService,
    pub region: String,
    pub account_id: String,
    pub name: String,
    raw: String,
}

impl AccessPointArn {
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason: &str| {
            PresignError::invalid_input(format!("invalid access point ARN `{input}`: {reason}"))
        };

        let parts: Vec<&str> = input.splitn(6, ':').collect();
        if parts.len() != 6 || parts[0] != "arn" {
            return Err(invalid("expected arn:<partition>:<service>:<region>:<account>:<resource>"));
        }

        let (partition, service, region, account_id, resource) =
            (parts[1], parts[2], parts[3], parts[4], parts[5]);

        if partition.is_empty() {
            return Err(invalid("missing partition"));
        }
        let service = ArnService::parse(service)
            .ok_or_else(|| invalid("service must be s3 or s3-object-lambda"))?;
        if region.is_empty() {
            return Err(invalid("missing region"));
        }
        if account_id.is_empty() {
            return Err(invalid("missing account id"));
        }

        // Both `accesspoint/name` and `accesspoint:name` are accepted
        let name = resource
            .strip_prefix("accesspoint/")
            .or_else(|| resource.strip_prefix("accesspoint:"))
            .ok_or_else(|| invalid("resource must be accesspoint/<name>"))?;
        if name.is_empty() || name.contains(['/', ':']) {
            return Err(invalid("malformed access point name"));
        }

        Ok(Self {
            partition: partition.to_string(),
            service,
            region: region.to_string(),
            account_id: account_id.to_string(),
            name: name.to_string(),
            raw: input.to_string(),
        })
    }
}

impl fmt::Display for AccessPointArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OBJECT_LAMBDA_AP: &str = "arn:aws:s3-object-lambda:eu-west-1:682179218046:accesspoint/objectlambdaaccesspoint55ec2237-8esptmyz4dvq";

    #[test]
    fn test_parse_bucket() {
        let target = Target::parse("my-bucket").unwrap();
        assert_eq!(target, Target::Bucket("my-bucket".to_string()));
        assert_eq!(target.as_bucket_param(), "my-bucket");
        assert!(target.region().is_none());
    }

    #[test]
    fn test_parse_object_lambda_access_point() {
        let target = Target::parse(OBJECT_LAMBDA_AP).unwrap();
        let Target::AccessPoint(arn) = &target else {
            panic!("expected access point, got {target:?}");
        };

        assert_eq!(arn.partition, "aws");
        assert_eq!(arn.service, ArnService::S3ObjectLambda);
        assert_eq!(arn.region, "eu-west-1");
        assert_eq!(arn.account_id, "682179218046");
        assert_eq!(arn.name, "objectlambdaaccesspoint55ec2237-8esptmyz4dvq");
        assert_eq!(target.region(), Some("eu-west-1"));
        assert_eq!(target.as_bucket_param(), OBJECT_LAMBDA_AP);
    }

    #[test]
    fn test_parse_colon_resource_separator() {
        let arn = AccessPointArn::parse("arn:aws:s3:us-east-1:123456789012:accesspoint:reports")
            .unwrap();
        assert_eq!(arn.service, ArnService::S3);
        assert_eq!(arn.name, "reports");
    }

    #[test]
    fn test_empty_target_rejected() {
        assert!(matches!(
            Target::parse(""),
            Err(PresignError::InvalidInput(_))
        ));
        assert!(matches!(
            Target::parse("   "),
            Err(PresignError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_malformed_arns_rejected() {
        let cases = [
            "arn:aws:s3-object-lambda:eu-west-1:682179218046",
            "arn:aws:dynamodb:eu-west-1:682179218046:accesspoint/ap",
            "arn:aws:s3::682179218046:accesspoint/ap",
            "arn:aws:s3:eu-west-1::accesspoint/ap",
            "arn:aws:s3:eu-west-1:682179218046:bucket/ap",
            "arn:aws:s3:eu-west-1:682179218046:accesspoint/",
            "arn:aws:s3:eu-west-1:682179218046:accesspoint/a/b",
        ];

        for case in cases {
            let result = Target::parse(case);
            assert!(
                matches!(result, Err(PresignError::InvalidInput(_))),
                "{case} should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn test_malformed_bucket_names_rejected() {
        let long = "a".repeat(256);
        let cases = [" my-bucket ", "my-bucket ", "a/b", "My Bucket", "bucket?x=1", long.as_str()];

        for case in cases {
            let result = Target::parse(case);
            assert!(
                matches!(result, Err(PresignError::InvalidInput(_))),
                "{case:?} should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn test_bucket_name_character_set() {
        for name in ["my-bucket", "my.bucket", "legacy_Bucket", "b1"] {
            assert!(Target::parse(name).is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn test_from_str() {
        let target: Target = "my-bucket".parse().unwrap();
        assert_eq!(target.to_string(), "my-bucket");
    }
}
