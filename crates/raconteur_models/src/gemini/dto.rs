//! Gemini `generateContent` wire format.

use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// Conversation contents; a single user turn for this pipeline
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A single-turn request carrying prompt text plus one inline image.
    pub fn single_turn(prompt: &str, mime_type: &str, base64_data: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: prompt.to_string(),
                    },
                    Part::InlineData {
                        inline_data: Blob {
                            mime_type: mime_type.to_string(),
                            data: base64_data,
                        },
                    },
                ],
            }],
        }
    }
}

/// A single content turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Ordered parts of the turn
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One part of a content turn: text or inline binary data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Plain text part
    Text {
        /// The text content
        text: String,
    },
    /// Inline media part
    InlineData {
        /// The embedded blob
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
}

/// Base64-encoded media with its mime type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blob {
    /// Declared mime type
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// Response body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates (empty when generation was blocked)
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Feedback about the prompt itself
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    pub fn text(&self) -> String {
        let mut out = String::new();
        if let Some(candidate) = self.candidates.first()
            && let Some(content) = &candidate.content
        {
            for part in &content.parts {
                if let Part::Text { text } = part {
                    out.push_str(text);
                }
            }
        }
        out
    }
}

/// One generation candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The candidate's content, absent when filtered
    #[serde(default)]
    pub content: Option<Content>,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Prompt-level feedback, present when the prompt was blocked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Block reason (e.g. "SAFETY")
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// The `error` object of an API error response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let req = GenerateContentRequest::single_turn("hello", "image/jpeg", "QUJD".to_string());
        let value = serde_json::to_value(&req).unwrap();
        let parts = &value["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "hello");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[1]["inlineData"]["data"], "QUJD");
    }

    #[test]
    fn response_text_concatenates_first_candidate() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Once"}, {"text": " upon"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.text(), "Once upon");
    }

    #[test]
    fn blocked_response_has_no_candidates() {
        let json = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(resp.candidates.is_empty());
        assert_eq!(
            resp.prompt_feedback.unwrap().block_reason.as_deref(),
            Some("SAFETY")
        );
    }
}
