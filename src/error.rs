#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(&'static str),
    #[error("Invalid hash encoding: {0}")]
    InvalidHashEncoding(&'static str),
    #[error("Delta hash does not match the hash of the given delta")]
    DeltaHashMismatch,
    #[error("Update key does not match the update commitment")]
    UpdateCommitmentMismatch,
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Unrecognized: {0}")]
    Unrecognized(&'static str),
    #[error("Unsupported: {0}")]
    Unsupported(&'static str),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
