use crate::{base64url_decode, Error, KeyType, Result};

// "kty" of "OKP" is used for curves including "Ed25519".
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct PublicKeyParamsOKP {
    pub crv: String,
    pub x: String,
}

impl PublicKeyParamsOKP {
    /// Convenience function for creating the PublicKeyParamsOKP for an Ed25519 key.
    pub fn ed25519(x: String) -> Self {
        Self {
            crv: KeyType::Ed25519.crv().into(),
            x,
        }
    }
    pub fn key_type(&self) -> Result<KeyType> {
        match self.crv.as_str() {
            "Ed25519" => Ok(KeyType::Ed25519),
            _ => Err(Error::Unrecognized("OKP curve")),
        }
    }
    /// Decodes the 32-byte Ed25519 public key.  Only the encoding is checked, not whether the
    /// bytes are a valid curve point.
    pub fn ed25519_public_key_bytes(&self) -> Result<[u8; 32]> {
        if self.key_type()? != KeyType::Ed25519 {
            return Err(Error::Unsupported("OKP curve other than Ed25519"));
        }
        let x = base64url_decode(self.x.as_str())
            .map_err(|_| Error::InvalidKeyFormat("x is not valid base64url"))?;
        <[u8; 32]>::try_from(x.as_slice())
            .map_err(|_| Error::InvalidKeyFormat("Ed25519 public key must be 32 bytes"))
    }
}
