use crate::{HashFunction, KeyType};

/// Policy applied when validating payloads received from untrusted sources.
#[derive(Clone, Debug)]
pub struct ValidationOptions {
    /// The key type every update key must have.
    pub expected_key_type: KeyType,
    /// Hash functions accepted for delta hashes and update commitments.
    pub allowed_hash_function_v: Vec<HashFunction>,
}

impl ValidationOptions {
    pub fn allows_hash_function(&self, hash_function: HashFunction) -> bool {
        self.allowed_hash_function_v.contains(&hash_function)
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            expected_key_type: KeyType::Secp256k1,
            allowed_hash_function_v: vec![HashFunction::Sha256],
        }
    }
}
