//! Order payload codec: JSON document <-> base64 text.
//!
//! Order payloads are opaque to the backend: it stores and returns the
//! exact text the client submitted. The client serializes the structured
//! payload to JSON and base64-encodes it before transmission, and
//! reverses both steps when reading orders back.

use serde_json::Value;

use crate::base64;

/// Encode a structured payload for transmission.
pub fn encode_payload(payload: &Value) -> String {
    base64::encode(payload.to_string().as_bytes())
}

/// Decode a payload read back from the backend.
///
/// Returns `None` if the text is not valid base64 or the decoded bytes
/// are not a JSON document. Callers listing orders degrade a `None` to
/// an empty structure rather than failing the whole page.
pub fn decode_payload(encoded: &str) -> Option<Value> {
    let bytes = base64::decode(encoded)?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trip_preserves_document() {
        let payload = json!({
            "function": "0x1::coin::transfer",
            "type_arguments": ["0x1::aptos_coin::AptosCoin"],
            "arguments": ["0xabc", 100],
            "nested": { "a": [1, 2, 3], "b": null },
        });
        let encoded = encode_payload(&payload);
        assert_eq!(decode_payload(&encoded), Some(payload));
    }

    #[test]
    fn round_trip_scalars() {
        for payload in [json!({}), json!([]), json!(42), json!("text"), json!(null)] {
            let encoded = encode_payload(&payload);
            assert_eq!(decode_payload(&encoded), Some(payload));
        }
    }

    #[test]
    fn decode_rejects_bad_base64() {
        assert_eq!(decode_payload("!!not-base64!!"), None);
    }

    #[test]
    fn decode_rejects_non_json_bytes() {
        let encoded = base64::encode(b"\xff\xfe not json");
        assert_eq!(decode_payload(&encoded), None);
    }
}
