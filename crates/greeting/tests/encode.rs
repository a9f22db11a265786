//! Integration tests for the greeting payload.

use greeting::{GREETING_MESSAGE, GreetingResponse, encode};

#[test]
fn test_encoded_object_has_only_message_key() {
    let bytes = encode(&GreetingResponse::new()).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object["message"], GREETING_MESSAGE);
}

#[test]
fn test_repeated_encodes_are_byte_identical() {
    let first = encode(&GreetingResponse::new()).unwrap();
    for _ in 0..10 {
        assert_eq!(encode(&GreetingResponse::new()).unwrap(), first);
    }
}
