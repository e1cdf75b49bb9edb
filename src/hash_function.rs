use crate::{base64url_decode, base64url_encode, Error, Result};

/// Hash functions usable for delta hashes and update commitments.  Digests are carried as
/// multihash values (`<code><length><digest>`) encoded with base64url-no-pad, so a SHA-256
/// digest always begins with "Ei".
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum HashFunction {
    #[default]
    Sha256,
    Sha512,
}

impl HashFunction {
    pub const fn multihash_code(self) -> u8 {
        match self {
            Self::Sha256 => 0x12,
            Self::Sha512 => 0x13,
        }
    }
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }
    pub fn from_multihash_code(code: u8) -> Result<Self> {
        match code {
            0x12 => Ok(Self::Sha256),
            0x13 => Ok(Self::Sha512),
            _ => Err(Error::InvalidHashEncoding("unrecognized multihash code")),
        }
    }
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sha256 => "sha2-256",
            Self::Sha512 => "sha2-512",
        }
    }
    /// Returns the raw digest (no multihash prefix) of the given bytes.
    pub fn hash(self, bytes: &[u8]) -> Vec<u8> {
        use sha2::Digest;
        match self {
            Self::Sha256 => sha2::Sha256::digest(bytes).to_vec(),
            Self::Sha512 => sha2::Sha512::digest(bytes).to_vec(),
        }
    }
    /// Prefixes the digest with the multihash code and length, then base64url-encodes it.
    /// The digest must have come from `self.hash`.
    fn encode_multihash(self, digest: &[u8]) -> String {
        debug_assert_eq!(digest.len(), self.digest_len());
        let mut buffer = Vec::with_capacity(2 + digest.len());
        buffer.push(self.multihash_code());
        buffer.push(self.digest_len() as u8);
        buffer.extend_from_slice(digest);
        base64url_encode(&buffer)
    }
    pub fn hash_then_encode(self, bytes: &[u8]) -> String {
        self.encode_multihash(&self.hash(bytes))
    }
    /// Parses a base64url-encoded multihash, returning the hash function and the raw digest.
    pub fn decode_multihash(s: &str) -> Result<(Self, Vec<u8>)> {
        if s.is_empty() {
            return Err(Error::InvalidHashEncoding("empty string"));
        }
        let mut bytes = base64url_decode(s)
            .map_err(|_| Error::InvalidHashEncoding("not valid base64url-no-pad"))?;
        if bytes.len() < 2 {
            return Err(Error::InvalidHashEncoding("too short to be a multihash"));
        }
        let hash_function = Self::from_multihash_code(bytes[0])?;
        if bytes[1] as usize != hash_function.digest_len() {
            return Err(Error::InvalidHashEncoding(
                "multihash length does not match hash function",
            ));
        }
        if bytes.len() - 2 != hash_function.digest_len() {
            return Err(Error::InvalidHashEncoding(
                "digest length does not match multihash length",
            ));
        }
        Ok((hash_function, bytes.split_off(2)))
    }
}

impl std::fmt::Display for HashFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
