use crate::{Error, KeyType, PublicKeyParams, PublicKeyParamsEC, PublicKeyParamsOKP, Result};

/// RFC 7517 JWK representation of a public key.  Commitments are computed over the JCS form
/// of the whole JWK, so "kid" participates in the commitment if present.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
#[serde(try_from = "serde_json::Value")]
pub struct PublicKeyJWK {
    #[serde(rename = "kid")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid_o: Option<String>,
    // Note that this will use the "kty" field in serde to determine the variant of the enum.
    #[serde(flatten)]
    pub public_key_params: PublicKeyParams,
}

impl PublicKeyJWK {
    pub fn secp256k1(x: String, y: String) -> Self {
        Self {
            kid_o: None,
            public_key_params: PublicKeyParamsEC::secp256k1(x, y).into(),
        }
    }
    pub fn ed25519(x: String) -> Self {
        Self {
            kid_o: None,
            public_key_params: PublicKeyParamsOKP::ed25519(x).into(),
        }
    }
    pub fn key_type(&self) -> Result<KeyType> {
        self.public_key_params.key_type()
    }
    /// The JCS (RFC 8785) serialization of this JWK.
    pub fn canonical_json_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json_canonicalizer::to_vec(self)?)
    }
}

/// Members other than "kid" and the ones listed here are rejected, so that e.g. a private
/// "d" member can't ride along unnoticed and get dropped on re-serialization.
fn allowed_members_for_kty(kty: &str) -> Result<&'static [&'static str]> {
    match kty {
        "EC" => Ok(&["kty", "crv", "x", "y"]),
        "OKP" => Ok(&["kty", "crv", "x"]),
        _ => Err(Error::InvalidKeyFormat("unrecognized JWK kty")),
    }
}

impl TryFrom<serde_json::Value> for PublicKeyJWK {
    type Error = Error;
    fn try_from(value: serde_json::Value) -> Result<Self> {
        let mut object = match value {
            serde_json::Value::Object(object) => object,
            _ => return Err(Error::InvalidKeyFormat("JWK must be a JSON object")),
        };
        let kid_o = match object.remove("kid") {
            None => None,
            Some(serde_json::Value::String(kid)) => Some(kid),
            Some(_) => return Err(Error::InvalidKeyFormat("JWK kid must be a string")),
        };
        let kty = object
            .get("kty")
            .and_then(serde_json::Value::as_str)
            .ok_or(Error::InvalidKeyFormat("JWK kty must be present and a string"))?;
        let allowed_member_v = allowed_members_for_kty(kty)?;
        if let Some(member) = object
            .keys()
            .find(|member| !allowed_member_v.contains(&member.as_str()))
        {
            tracing::debug!("JWK with kty {:?} has disallowed member {:?}", kty, member);
            return Err(Error::InvalidKeyFormat(
                "JWK has a member not allowed for its kty",
            ));
        }
        let public_key_params = serde_json::from_value(serde_json::Value::Object(object))
            .map_err(|e| {
                tracing::debug!("malformed JWK members: {}", e);
                Error::InvalidKeyFormat("JWK members are malformed")
            })?;
        Ok(Self {
            kid_o,
            public_key_params,
        })
    }
}

impl From<&k256::PublicKey> for PublicKeyJWK {
    fn from(public_key: &k256::PublicKey) -> Self {
        Self {
            kid_o: None,
            public_key_params: public_key.into(),
        }
    }
}

impl TryFrom<&PublicKeyJWK> for k256::PublicKey {
    type Error = Error;
    fn try_from(public_key_jwk: &PublicKeyJWK) -> Result<Self> {
        k256::PublicKey::try_from(&public_key_jwk.public_key_params)
    }
}
