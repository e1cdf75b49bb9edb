use crate::{
    DeltaHash, Error, PublicKeyJWK, Result, SignedUpdatePayload, UpdateCommitmentStr,
    ValidationOptions,
};

pub fn validate_delta_hash(delta_hash: &DeltaHash, options: &ValidationOptions) -> Result<()> {
    if delta_hash.is_empty() {
        return Err(Error::InvalidHashEncoding("delta hash must be non-empty"));
    }
    let hash_function = delta_hash.hash_function()?;
    if !options.allows_hash_function(hash_function) {
        tracing::debug!("delta hash uses disallowed hash function {}", hash_function);
        return Err(Error::Unsupported("delta hash function"));
    }
    Ok(())
}

pub fn validate_update_key(update_key: &PublicKeyJWK, options: &ValidationOptions) -> Result<()> {
    let key_type = update_key.key_type().map_err(|e| {
        tracing::debug!("update key has unrecognized key type: {}", e);
        Error::InvalidKeyFormat("unrecognized update key type")
    })?;
    if key_type != options.expected_key_type {
        tracing::debug!(
            "update key has key type {}, expected {}",
            key_type,
            options.expected_key_type
        );
        return Err(Error::InvalidKeyFormat(
            "update key type does not match expected key type",
        ));
    }
    update_key.public_key_params.check_key_material()
}

/// Checks the shape of both fields.  This does not involve the delta or the prior update
/// commitment; see `verify_signed_update_payload` for that.
pub fn validate_signed_update_payload(
    payload: &SignedUpdatePayload,
    options: &ValidationOptions,
) -> Result<()> {
    validate_delta_hash(payload.delta_hash(), options)?;
    validate_update_key(payload.update_key(), options)?;
    tracing::trace!("signed update payload is well-formed");
    Ok(())
}

/// Validates the payload, then checks that its delta hash is the hash of the given delta and
/// that its update key matches the update commitment of the previous operation.
pub fn verify_signed_update_payload<T: serde::Serialize>(
    payload: &SignedUpdatePayload,
    delta: &T,
    prior_update_commitment: &UpdateCommitmentStr,
    options: &ValidationOptions,
) -> Result<()> {
    validate_signed_update_payload(payload, options)?;
    if !options.allows_hash_function(prior_update_commitment.hash_function()) {
        return Err(Error::Unsupported("update commitment hash function"));
    }
    payload.delta_hash().verify_delta(delta)?;
    prior_update_commitment.verify_update_key(payload.update_key())?;
    tracing::debug!(
        "verified signed update payload with delta hash {}",
        payload.delta_hash()
    );
    Ok(())
}
