use crate::{Error, HashFunction, Result};

/// Encoded hash of the Delta object of an update operation.  Construction does not validate
/// the encoding; use `decode` or `validate_delta_hash` on untrusted values.
#[derive(
    Clone,
    Debug,
    derive_more::Deref,
    derive_more::Display,
    Eq,
    derive_more::From,
    Hash,
    derive_more::Into,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(transparent)]
pub struct DeltaHash(String);

impl DeltaHash {
    /// JCS-canonicalizes the delta, hashes it, and encodes the digest as a base64url multihash.
    pub fn compute<T: serde::Serialize>(delta: &T, hash_function: HashFunction) -> Result<Self> {
        let canonical_bytes = serde_json_canonicalizer::to_vec(delta)?;
        Ok(Self(hash_function.hash_then_encode(&canonical_bytes)))
    }
    pub fn decode(&self) -> Result<(HashFunction, Vec<u8>)> {
        HashFunction::decode_multihash(self.0.as_str())
    }
    pub fn hash_function(&self) -> Result<HashFunction> {
        Ok(self.decode()?.0)
    }
    /// Checks that this is the hash of the given delta, using the hash function encoded in
    /// this value.
    pub fn verify_delta<T: serde::Serialize>(&self, delta: &T) -> Result<()> {
        let hash_function = self.hash_function()?;
        let expected = Self::compute(delta, hash_function)?;
        if expected != *self {
            tracing::debug!(
                "delta hash mismatch; payload has {}, delta hashes to {}",
                self,
                expected
            );
            return Err(Error::DeltaHashMismatch);
        }
        Ok(())
    }
}

impl From<&str> for DeltaHash {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
