/// Hugging Face Inference API provider
///
/// Posts `{"inputs": prompt}` to `{base_url}/{model}` with a bearer token and
/// extracts the generated text from the handful of response shapes the
/// inference API is known to return.
use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::error::{AppError, AppResult};
use crate::services::providers::TextGenerationProvider;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct HuggingFaceProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    model: Option<String>,
    base_url: String,
}

impl HuggingFaceProvider {
    /// Creates a provider; either credential may be absent, in which case
    /// `generate` refuses to call out and the service stays in fallback mode.
    pub fn new(
        api_key: Option<String>,
        model: Option<String>,
        base_url: String,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http_client,
            api_key,
            model,
            base_url,
        })
    }
}

#[async_trait::async_trait]
impl TextGenerationProvider for HuggingFaceProvider {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let (api_key, model) = match (&self.api_key, &self.model) {
            (Some(api_key), Some(model)) => (api_key, model),
            _ => return Err(AppError::Configuration),
        };

        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), model);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .header(ACCEPT, "application/json")
            .json(&json!({ "inputs": prompt }))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout
                } else {
                    AppError::from(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "inference API returned status {}: {}",
                status, body
            )));
        }

        let body = response.text().await?;

        // A body that is not JSON at all is returned unmodified.
        match serde_json::from_str::<InferencePayload>(&body) {
            Ok(payload) => Ok(payload.into_text()),
            Err(_) => Ok(body),
        }
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.model.is_some()
    }

    fn name(&self) -> &'static str {
        "hugging_face"
    }
}

/// Accepted inference response shapes.
///
/// The API answers with a list of generations for text-generation models, a
/// bare object for some task types, or something else entirely. Untagged so
/// whichever shape arrives deserializes without a discriminator.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferencePayload {
    Batch(Vec<Value>),
    Single(Map<String, Value>),
    Other(Value),
}

impl InferencePayload {
    /// Extracts generated text, preferring `generated_text` over `text` and
    /// falling back to a string rendering of the payload when neither is set.
    fn into_text(self) -> String {
        match self {
            InferencePayload::Batch(items) => match items.first() {
                Some(Value::Object(map)) => text_field(map)
                    .map(str::to_string)
                    .unwrap_or_else(|| Value::Object(map.clone()).to_string()),
                Some(other) => other.to_string(),
                None => Value::Array(items).to_string(),
            },
            InferencePayload::Single(map) => text_field(&map)
                .map(str::to_string)
                .unwrap_or_else(|| Value::Object(map.clone()).to_string()),
            InferencePayload::Other(value) => value.to_string(),
        }
    }
}

/// Looks up a non-empty `generated_text` or `text` field, in that order.
fn text_field(map: &Map<String, Value>) -> Option<&str> {
    map.get("generated_text")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            map.get("text")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> InferencePayload {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_batch_with_generated_text() {
        let payload = parse(r#"[{"generated_text": "hello"}]"#);
        assert_eq!(payload.into_text(), "hello");
    }

    #[test]
    fn test_batch_prefers_generated_text_over_text() {
        let payload = parse(r#"[{"text": "second", "generated_text": "first"}]"#);
        assert_eq!(payload.into_text(), "first");
    }

    #[test]
    fn test_batch_falls_through_empty_generated_text() {
        let payload = parse(r#"[{"generated_text": "", "text": "fallback"}]"#);
        assert_eq!(payload.into_text(), "fallback");
    }

    #[test]
    fn test_batch_without_text_fields_renders_first_element() {
        let payload = parse(r#"[{"score": 0.9}]"#);
        assert_eq!(payload.into_text(), r#"{"score":0.9}"#);
    }

    #[test]
    fn test_batch_of_non_objects_renders_first_element() {
        let payload = parse(r#"["plain output", "ignored"]"#);
        assert_eq!(payload.into_text(), r#""plain output""#);
    }

    #[test]
    fn test_single_object_with_text() {
        let payload = parse(r#"{"text": "solo"}"#);
        assert_eq!(payload.into_text(), "solo");
    }

    #[test]
    fn test_scalar_payload_rendered() {
        let payload = parse("42");
        assert_eq!(payload.into_text(), "42");
    }

    #[tokio::test]
    async fn test_generate_without_credentials_is_configuration_error() {
        let provider = HuggingFaceProvider::new(
            None,
            Some("some/model".to_string()),
            "http://localhost:9".to_string(),
        )
        .unwrap();

        assert!(!provider.is_configured());
        let err = provider.generate("prompt").await.unwrap_err();
        assert!(matches!(err, AppError::Configuration));
    }
}
