// file: src/models/chat.rs
// description: chat widget request model for the retrieval phase

use serde::{Deserialize, Serialize};

/// One prior exchange in the widget conversation. The harness always sends an
/// empty history, the type exists so the wire shape matches the widget API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

/// Payload for `POST /widget/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub api_key: String,
    pub message: String,
    pub history: Vec<ChatTurn>,
}

impl ChatRequest {
    pub fn new(api_key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            message: message.into(),
            history: Vec::new(),
        }
    }

    /// Query about the middle document of a freshly uploaded batch, index
    /// `start_index + doc_count / 2`. Asking for a specific known document
    /// exercises the vector search at the current corpus size.
    pub fn about_middle_document(api_key: impl Into<String>, doc_count: u64, start_index: u64) -> Self {
        let index = middle_document_index(doc_count, start_index);
        Self::new(
            api_key,
            format!("What is the liability coverage for case ID-{index}?"),
        )
    }
}

/// Integer division on purpose: the "middle" of a 5-document batch starting
/// at 0 is document 2.
pub fn middle_document_index(doc_count: u64, start_index: u64) -> u64 {
    start_index + doc_count / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_middle_document_index() {
        assert_eq!(middle_document_index(500, 100), 350);
        assert_eq!(middle_document_index(50, 0), 25);
        assert_eq!(middle_document_index(5, 0), 2);
        assert_eq!(middle_document_index(0, 1000), 1000);
    }

    #[test]
    fn test_middle_document_message() {
        let request = ChatRequest::about_middle_document("TEST_KEY", 500, 100);
        assert!(request.message.contains("ID-350"));
        assert!(request.history.is_empty());
    }

    #[test]
    fn test_api_key_serializes_camel_case() {
        let request = ChatRequest::new("TEST_KEY", "hello");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["apiKey"], "TEST_KEY");
        assert_eq!(json["history"], serde_json::json!([]));
    }
}
