use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::collector;

/// Heartbeat-style registration body for POST and PUT.
///
/// `lastSeen` is ignored if a client sends it; the server stamps its own.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectorRequest {
    /// Unique host identifier
    #[validate(length(min = 1, max = 253, message = "hostname must be 1-253 characters"))]
    #[schema(example = "web-01.example.net")]
    pub hostname: String,
    /// Agent version reported by the host
    #[validate(length(min = 1, message = "version must not be empty"))]
    #[schema(example = "0.4.1")]
    pub version: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectorResponse {
    pub hostname: String,
    pub version: String,
    /// Server-assigned unix milliseconds of the last write
    pub last_seen: i64,
}

impl From<collector::Model> for CollectorResponse {
    fn from(model: collector::Model) -> Self {
        Self {
            hostname: model.hostname,
            version: model.version,
            last_seen: model.last_seen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_should_serialize_last_seen_as_camel_case() {
        let response = CollectorResponse {
            hostname: "web-01".to_string(),
            version: "0.4.1".to_string(),
            last_seen: 1724800000000,
        };

        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"lastSeen\":1724800000000"));
        assert!(!json.contains("last_seen"));
    }

    #[test]
    fn request_with_empty_hostname_should_fail_validation() {
        let request = CollectorRequest {
            hostname: "".to_string(),
            version: "0.4.1".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn request_with_empty_version_should_fail_validation() {
        let request = CollectorRequest {
            hostname: "web-01".to_string(),
            version: "".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn valid_request_should_pass_validation() {
        let request = CollectorRequest {
            hostname: "web-01".to_string(),
            version: "0.4.1".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn request_should_ignore_client_supplied_last_seen() {
        let request: CollectorRequest = serde_json::from_str(
            r#"{"hostname": "web-01", "version": "0.4.1", "lastSeen": 42}"#,
        )
        .unwrap();

        assert_eq!(request.hostname, "web-01");
    }
}
