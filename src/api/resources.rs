//! Resource Listing
//!
//! `GET /api/resources` and decoding of its envelope.

use gloo_net::http::Request;
use serde_json::Value;

use super::ApiError;
use crate::config;
use crate::models::{ResourceData, ResourceEnvelope};

/// Anything able to produce the resource listing
pub trait ResourceSource {
    async fn fetch_resources(&self) -> Result<ResourceData, ApiError>;
}

/// Fetches from the backend the page was served by
#[derive(Debug, Clone)]
pub struct HttpResourceSource {
    url: String,
}

impl HttpResourceSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for HttpResourceSource {
    fn default() -> Self {
        Self::new(config::RESOURCES_PATH)
    }
}

impl ResourceSource for HttpResourceSource {
    async fn fetch_resources(&self) -> Result<ResourceData, ApiError> {
        let response = Request::get(&self.url).send().await?;
        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                text: response.status_text(),
            });
        }
        let body = response.text().await?;
        decode_resources(&body)
    }
}

/// Parse the listing body, yielding the `Data` section
pub fn decode_resources(body: &str) -> Result<ResourceData, ApiError> {
    let envelope: ResourceEnvelope = serde_json::from_str(body)?;
    Ok(envelope.data)
}

/// Initial value of the stored listing
pub fn empty_resources() -> Value {
    Value::Object(serde_json::Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_resources() {
        let data = decode_resources(r#"{"Data":{"objects":[1,2,3]}}"#).unwrap();
        assert_eq!(data.objects, json!([1, 2, 3]));
    }

    #[test]
    fn test_decode_keeps_non_array_objects() {
        let data = decode_resources(r#"{"Data":{"objects":{"charts":2}}}"#).unwrap();
        assert_eq!(data.objects, json!({"charts": 2}));
    }

    #[test]
    fn test_decode_rejects_bad_bodies() {
        assert!(matches!(decode_resources("not json"), Err(ApiError::Decode(_))));
        assert!(matches!(decode_resources(r#"{"Data":{}}"#), Err(ApiError::Decode(_))));
        assert!(matches!(decode_resources(r#"{"data":{"objects":[]}}"#), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_empty_resources_is_empty_object() {
        assert_eq!(empty_resources(), json!({}));
    }

    #[test]
    fn test_default_source_targets_listing_path() {
        assert_eq!(HttpResourceSource::default().url, "/api/resources");
    }
}
