use serde::Serialize;
use utoipa::ToSchema;

/// Liveness response.
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    /// Always true while the server is able to answer
    pub alive: bool,
    /// Server version
    #[schema(example = "0.1.0")]
    pub version: &'static str,
    /// Seconds since startup
    #[schema(example = 3600)]
    pub uptime_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_should_serialize_with_camel_case() {
        let status = StatusResponse {
            alive: true,
            version: "0.1.0",
            uptime_secs: 3600,
        };

        let json = serde_json::to_string(&status).unwrap();

        assert!(json.contains("\"alive\":true"));
        assert!(json.contains("\"uptimeSecs\":3600"));
    }
}
