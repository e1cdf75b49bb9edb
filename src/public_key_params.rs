use crate::{Error, KeyType, PublicKeyParamsEC, PublicKeyParamsOKP, Result};

// Note that this will use the "kty" field in serde to determine the variant of the enum.
#[derive(Clone, Debug, serde::Deserialize, Eq, derive_more::From, PartialEq, serde::Serialize)]
#[serde(tag = "kty")]
pub enum PublicKeyParams {
    EC(PublicKeyParamsEC),
    OKP(PublicKeyParamsOKP),
}

impl PublicKeyParams {
    pub fn key_type(&self) -> Result<KeyType> {
        match self {
            PublicKeyParams::EC(public_key_params_ec) => public_key_params_ec.key_type(),
            PublicKeyParams::OKP(public_key_params_okp) => public_key_params_okp.key_type(),
        }
    }
    /// Checks that the key material is well-formed for its key type.
    pub fn check_key_material(&self) -> Result<()> {
        match self {
            PublicKeyParams::EC(public_key_params_ec) => {
                k256::PublicKey::try_from(public_key_params_ec)?;
            }
            PublicKeyParams::OKP(public_key_params_okp) => {
                public_key_params_okp.ed25519_public_key_bytes()?;
            }
        }
        Ok(())
    }
}

impl From<&k256::PublicKey> for PublicKeyParams {
    fn from(public_key: &k256::PublicKey) -> Self {
        PublicKeyParamsEC::from(public_key).into()
    }
}

impl TryFrom<&PublicKeyParams> for k256::PublicKey {
    type Error = Error;
    fn try_from(public_key_params: &PublicKeyParams) -> Result<Self> {
        match public_key_params {
            PublicKeyParams::EC(public_key_params_ec) => public_key_params_ec.try_into(),
            PublicKeyParams::OKP(_) => Err(Error::Unsupported(
                "OKP key can not be converted to a secp256k1 public key",
            )),
        }
    }
}
