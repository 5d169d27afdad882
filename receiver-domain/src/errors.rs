use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload_json is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("payload_json must be a JSON object")]
    NotAnObject,
    #[error("payload_json is missing the 'type' field")]
    MissingType,
    #[error("payload_json 'type' must be a string")]
    InvalidType,
    #[error("payload_json does not match the envelope schema: {0}")]
    InvalidEnvelope(#[source] serde_json::Error),
    #[error("extra does not match the {kind} schema: {source}")]
    InvalidExtra {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
