use base64::{Engine as _, engine::general_purpose};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::{
        ports::LLMClient,
        value_objects::{ApiCredential, ImagePayload},
    },
};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    base_url: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiResponse {
    /// Text of every part of the first candidate, joined.
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() { None } else { Some(text) }
    }
}

fn classify_status(status: StatusCode, body: String) -> CoreError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CoreError::InvalidCredential(body),
        StatusCode::BAD_REQUEST if body.contains("API_KEY_INVALID") => {
            CoreError::InvalidCredential(body)
        }
        StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
            CoreError::InvalidInput(format!("LLM API rejected the request: {}", body))
        }
        _ => CoreError::ServiceUnreachable(format!(
            "LLM API returned error: {} - {}",
            status, body
        )),
    }
}

impl GeminiLLMClient {
    pub fn new(base_url: String, model_name: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model_name,
            client: Client::new(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn call_gemini_api(
        &self,
        credential: &ApiCredential,
        request: GeminiRequest,
    ) -> Result<Option<String>, CoreError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", credential.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ServiceUnreachable(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(classify_status(status, error_text));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ServiceUnreachable(format!("Failed to parse LLM response: {}", e))
        })?;

        let text = gemini_response.into_text();
        if text.is_none() {
            tracing::warn!(model = %self.model_name, "Gemini returned no text");
        }

        Ok(text)
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(
        &self,
        credential: ApiCredential,
        prompt: String,
    ) -> Result<Option<String>, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: prompt }],
            }],
        };

        self.call_gemini_api(&credential, request).await
    }

    async fn generate_with_image(
        &self,
        credential: ApiCredential,
        prompt: String,
        image: ImagePayload,
    ) -> Result<Option<String>, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(&image.data);

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: prompt },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type,
                            data: base64_image,
                        },
                    },
                ],
            }],
        };

        self.call_gemini_api(&credential, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_text_joins_parts_of_first_candidate() {
        let response: GeminiResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Hello, " }, { "text": "world" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();

        assert_eq!(response.into_text().as_deref(), Some("Hello, world"));
    }

    #[test]
    fn test_into_text_without_candidates_is_none() {
        let response: GeminiResponse =
            serde_json::from_value(serde_json::json!({ "promptFeedback": {} })).unwrap();
        assert_eq!(response.into_text(), None);
    }

    #[test]
    fn test_classify_status() {
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN, String::new()),
            CoreError::InvalidCredential(_)
        ));
        assert!(matches!(
            classify_status(
                StatusCode::BAD_REQUEST,
                r#"{"error":{"details":[{"reason":"API_KEY_INVALID"}]}}"#.to_string()
            ),
            CoreError::InvalidCredential(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::BAD_REQUEST, "bad image".to_string()),
            CoreError::InvalidInput(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::TOO_MANY_REQUESTS, String::new()),
            CoreError::ServiceUnreachable(_)
        ));
    }

    #[test]
    fn test_image_part_serializes_inline_data() {
        let part = Part::InlineData {
            inline_data: InlineData {
                mime_type: "image/png".to_string(),
                data: "AAAA".to_string(),
            },
        };

        assert_eq!(
            serde_json::to_value(&part).unwrap(),
            serde_json::json!({ "inline_data": { "mime_type": "image/png", "data": "AAAA" } })
        );
    }
}
