use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::services::{build_prompt, fallback, parse_recommendations};

use super::AppState;

// Request types

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub style: Option<String>,
    pub color: Option<String>,
    pub occasion: Option<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Produces outfit recommendations for a style/color/occasion request.
///
/// When a model is configured, its validated JSON output is returned
/// verbatim; any configuration, transport, timeout, or parse failure
/// downgrades to the static fallback generator. Both paths answer 200, so
/// the endpoint trades error transparency for availability.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Response {
    let RecommendRequest {
        style,
        color,
        occasion,
    } = request;

    if state.provider.is_configured() {
        let prompt = build_prompt(style.as_deref(), color.as_deref(), occasion.as_deref());

        match state.provider.generate(&prompt).await {
            Ok(output) => match parse_recommendations(&output) {
                Ok(parsed) => {
                    tracing::info!(
                        provider = state.provider.name(),
                        "Returning model recommendations"
                    );
                    return Json(parsed).into_response();
                }
                Err(e) => {
                    tracing::warn!(
                        provider = state.provider.name(),
                        error = %e,
                        "Model output rejected, using fallback"
                    );
                }
            },
            Err(e) => {
                tracing::warn!(
                    provider = state.provider.name(),
                    error = %e,
                    "Model call failed, using fallback"
                );
            }
        }
    }

    let result = fallback::generate(style.as_deref(), color.as_deref(), occasion.as_deref());
    Json(result).into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::to_bytes;
    use serde_json::Value;

    use crate::error::AppError;
    use crate::services::providers::MockTextGenerationProvider;

    use super::*;

    const MODEL_JSON: &str = r#"{"recommendations":[{"outfit":"Linen Suit","color":"beige","explanation":"Breathes well."}],"top_tip":"Iron it."}"#;

    fn request(style: Option<&str>, color: Option<&str>, occasion: Option<&str>) -> RecommendRequest {
        RecommendRequest {
            style: style.map(String::from),
            color: color.map(String::from),
            occasion: occasion.map(String::from),
        }
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn state_with(mock: MockTextGenerationProvider) -> AppState {
        AppState::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_valid_model_output_returned_verbatim() {
        let mut mock = MockTextGenerationProvider::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_name().return_const("mock");
        mock.expect_generate()
            .times(1)
            .returning(|_| Ok(MODEL_JSON.to_string()));

        let response = recommend(
            State(state_with(mock)),
            Json(request(Some("formal"), None, None)),
        )
        .await;

        let body = body_json(response).await;
        assert_eq!(body, serde_json::from_str::<Value>(MODEL_JSON).unwrap());
    }

    #[tokio::test]
    async fn test_model_error_falls_back() {
        let mut mock = MockTextGenerationProvider::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_name().return_const("mock");
        mock.expect_generate()
            .times(1)
            .returning(|_| Err(AppError::Timeout));

        let response = recommend(
            State(state_with(mock)),
            Json(request(None, Some("Red"), None)),
        )
        .await;

        let body = body_json(response).await;
        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 3);
        for rec in recs {
            assert_eq!(rec["color"], "Red");
        }
    }

    #[tokio::test]
    async fn test_unparseable_model_output_falls_back() {
        let mut mock = MockTextGenerationProvider::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_name().return_const("mock");
        mock.expect_generate()
            .times(1)
            .returning(|_| Ok("sorry, I cannot help with that".to_string()));

        let response = recommend(State(state_with(mock)), Json(request(None, None, None))).await;

        let body = body_json(response).await;
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 3);
        assert!(body["top_tip"].is_string());
    }

    #[tokio::test]
    async fn test_unconfigured_provider_is_never_called() {
        let mut mock = MockTextGenerationProvider::new();
        mock.expect_is_configured().return_const(false);
        mock.expect_generate().times(0);

        let response = recommend(
            State(state_with(mock)),
            Json(request(Some("casual"), None, Some("office"))),
        )
        .await;

        let body = body_json(response).await;
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_prompt_carries_request_fields() {
        let mut mock = MockTextGenerationProvider::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_name().return_const("mock");
        mock.expect_generate()
            .withf(|prompt: &str| {
                prompt.contains("style=party")
                    && prompt.contains("color=gold")
                    && prompt.contains("occasion=new year")
            })
            .times(1)
            .returning(|_| Ok(MODEL_JSON.to_string()));

        recommend(
            State(state_with(mock)),
            Json(request(Some("party"), Some("gold"), Some("new year"))),
        )
        .await;
    }
}
