mod delta_hash;
mod error;
mod hash_function;
mod key_type;
mod public_key_jwk;
mod public_key_params;
mod public_key_params_ec;
mod public_key_params_okp;
mod signed_update_payload;
mod update_commitment;
mod validate;
mod validation_options;

pub use crate::{
    delta_hash::DeltaHash,
    error::Error,
    hash_function::HashFunction,
    key_type::KeyType,
    public_key_jwk::PublicKeyJWK,
    public_key_params::PublicKeyParams,
    public_key_params_ec::PublicKeyParamsEC,
    public_key_params_okp::PublicKeyParamsOKP,
    signed_update_payload::{SignedUpdatePayload, DELTA_HASH_FIELD_NAME, UPDATE_KEY_FIELD_NAME},
    update_commitment::{UpdateCommitment, UpdateCommitmentStr},
    validate::{
        validate_delta_hash, validate_signed_update_payload, validate_update_key,
        verify_signed_update_payload,
    },
    validation_options::ValidationOptions,
};

pub type Result<T> = std::result::Result<T, Error>;

/// Encodes bytes using base64url without padding, which is the encoding used for JWK
/// coordinates and for multihash-encoded digests.
pub(crate) fn base64url_encode(bytes: &[u8]) -> String {
    use base64::Engine;
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Decodes a base64url-no-pad string.  Padding characters and non-canonical trailing bits are
/// rejected.
pub(crate) fn base64url_decode(s: &str) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    use base64::Engine;
    base64::engine::general_purpose::URL_SAFE_NO_PAD.decode(s)
}
