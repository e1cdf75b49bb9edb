use crate::{Error, HashFunction, PublicKeyJWK, Result};

/// Commitment to the key that must authorize the next update operation, as recorded by the
/// previous operation.  The value is `multihash(H(H(JCS(update_key))))`, where the inner hash
/// is the raw digest.
#[derive(Clone, Debug, Eq, Hash, PartialEq, pneutype::PneuString)]
#[pneu_string(
    as_pneu_str = "as_update_commitment_str",
    borrow = "UpdateCommitmentStr",
    deserialize,
    serialize
)]
pub struct UpdateCommitment(String);

impl UpdateCommitment {
    pub fn from_update_key(update_key: &PublicKeyJWK, hash_function: HashFunction) -> Result<Self> {
        let canonical_bytes = update_key.canonical_json_bytes()?;
        let intermediate_digest = hash_function.hash(&canonical_bytes);
        Self::try_from(hash_function.hash_then_encode(&intermediate_digest))
    }
}

#[derive(Debug, Eq, Hash, PartialEq, pneutype::PneuStr)]
#[pneu_str(deserialize, serialize)]
#[repr(transparent)]
pub struct UpdateCommitmentStr(str);

impl UpdateCommitmentStr {
    pub fn hash_function(&self) -> HashFunction {
        HashFunction::decode_multihash(self.as_str())
            .expect("programmer error: this should not fail due to guarantees in construction of UpdateCommitment")
            .0
    }
    /// Checks that the given update key is the one this commitment was made to.
    pub fn verify_update_key(&self, update_key: &PublicKeyJWK) -> Result<()> {
        let expected = UpdateCommitment::from_update_key(update_key, self.hash_function())?;
        if expected.as_str() != self.as_str() {
            tracing::debug!(
                "update key commits to {}, but the prior update commitment is {}",
                expected,
                self
            );
            return Err(Error::UpdateCommitmentMismatch);
        }
        Ok(())
    }
}

impl pneutype::Validate for UpdateCommitmentStr {
    type Data = str;
    type Error = Error;
    fn validate(data: &Self::Data) -> std::result::Result<(), Self::Error> {
        HashFunction::decode_multihash(data)?;
        Ok(())
    }
}
