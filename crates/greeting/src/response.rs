use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The fixed greeting returned on every request to `/`.
pub const GREETING_MESSAGE: &str = "Hello from Jenkins CI/CD → EKS ✅";

/// JSON body of the root endpoint.
///
/// Built fresh per request and dropped once encoded. The message is always
/// [`GREETING_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}

impl GreetingResponse {
    pub fn new() -> Self {
        Self {
            message: GREETING_MESSAGE.to_string(),
        }
    }
}

impl Default for GreetingResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Encodes a greeting as compact UTF-8 JSON bytes.
pub fn encode(response: &GreetingResponse) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(response)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_carries_fixed_message() {
        let response = GreetingResponse::new();
        assert_eq!(response.message, GREETING_MESSAGE);
        assert!(!response.message.is_empty());
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(GreetingResponse::default(), GreetingResponse::new());
    }

    #[test]
    fn encode_is_exact_compact_json() {
        let bytes = encode(&GreetingResponse::new()).unwrap();
        assert_eq!(
            bytes,
            r#"{"message":"Hello from Jenkins CI/CD → EKS ✅"}"#.as_bytes()
        );
    }

    #[test]
    fn encode_keeps_non_ascii_unescaped() {
        let bytes = encode(&GreetingResponse::new()).unwrap();
        let text = std::str::from_utf8(&bytes).unwrap();
        assert!(text.contains('→'));
        assert!(text.contains('✅'));
        assert!(!text.contains("\\u"));
    }
}
