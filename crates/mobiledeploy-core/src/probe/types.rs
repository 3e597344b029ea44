//! Wire types for the `generateContent` probe request.

use serde::Serialize;

/// Request body: `{"contents": [{"parts": [{"text": <prompt>}]}]}`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

impl GenerateRequest {
    /// Single-turn request carrying one prompt. No conversation history.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// Successful probe outcome. The response body is provider-defined JSON and
/// is carried raw for the operator to read; it is never persisted.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status_code: u16,
    pub raw_body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = GenerateRequest::from_prompt("hello");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"contents":[{"parts":[{"text":"hello"}]}]}"#);
    }
}
