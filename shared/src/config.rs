use serde::{Deserialize, Serialize};

pub const MIB: u64 = 1024 * 1024;
pub const DEFAULT_PREDICT_ENDPOINT: &str = "http://127.0.0.1:8000/predict";
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * MIB;
pub const DEFAULT_ACCEPTED_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

/// Client settings. Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub predict_endpoint: String,
    pub max_upload_bytes: u64,
    pub accepted_types: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            predict_endpoint: DEFAULT_PREDICT_ENDPOINT.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            accepted_types: DEFAULT_ACCEPTED_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// A partial config layered over a resolved one. Only the fields present
/// replace their counterparts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predict_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_upload_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_types: Option<Vec<String>>,
}

impl ConfigOverride {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl ClientConfig {
    pub fn apply(mut self, overrides: ConfigOverride) -> Self {
        if let Some(endpoint) = overrides.predict_endpoint {
            self.predict_endpoint = endpoint;
        }
        if let Some(limit) = overrides.max_upload_bytes {
            self.max_upload_bytes = limit;
        }
        if let Some(types) = overrides.accepted_types {
            self.accepted_types = types;
        }
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.predict_endpoint = endpoint.into();
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn accepts(&self, media_type: &str) -> bool {
        self.accepted_types
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(media_type))
    }
}
