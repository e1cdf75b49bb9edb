use crate::{base64url_decode, base64url_encode, Error, KeyType, Result};

// "kty" of "EC" is used for curves including "secp256k1", "P-256" (which is sometimes also called "secp256r1"),
// "P-384", and "P-521".  Only "secp256k1" is a supported update key curve.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct PublicKeyParamsEC {
    pub crv: String,
    pub x: String,
    pub y: String,
}

impl PublicKeyParamsEC {
    /// Convenience function for creating the PublicKeyParamsEC for a secp256k1 key.
    pub fn secp256k1(x: String, y: String) -> Self {
        Self {
            crv: KeyType::Secp256k1.crv().into(),
            x,
            y,
        }
    }
    pub fn key_type(&self) -> Result<KeyType> {
        match self.crv.as_str() {
            "secp256k1" => Ok(KeyType::Secp256k1),
            _ => Err(Error::Unrecognized("EC curve")),
        }
    }
}

impl From<&k256::PublicKey> for PublicKeyParamsEC {
    fn from(public_key: &k256::PublicKey) -> Self {
        use k256::elliptic_curve::sec1::ToEncodedPoint;
        let encoded_point = public_key.to_encoded_point(false);
        let x = encoded_point
            .x()
            .expect("programmer error: uncompressed point has an x coordinate");
        let y = encoded_point
            .y()
            .expect("programmer error: uncompressed point has a y coordinate");
        Self::secp256k1(base64url_encode(x.as_slice()), base64url_encode(y.as_slice()))
    }
}

impl TryFrom<&PublicKeyParamsEC> for k256::PublicKey {
    type Error = Error;
    fn try_from(public_key_params_ec: &PublicKeyParamsEC) -> Result<Self> {
        if public_key_params_ec.key_type()? != KeyType::Secp256k1 {
            return Err(Error::Unsupported("EC curve other than secp256k1"));
        }
        let x = base64url_decode(public_key_params_ec.x.as_str())
            .map_err(|_| Error::InvalidKeyFormat("x coordinate is not valid base64url"))?;
        let y = base64url_decode(public_key_params_ec.y.as_str())
            .map_err(|_| Error::InvalidKeyFormat("y coordinate is not valid base64url"))?;
        if x.len() != 32 || y.len() != 32 {
            return Err(Error::InvalidKeyFormat(
                "secp256k1 coordinates must each be 32 bytes",
            ));
        }
        // SEC1 uncompressed form: 0x04 || x || y
        let mut sec1_bytes = Vec::with_capacity(65);
        sec1_bytes.push(0x04);
        sec1_bytes.extend_from_slice(&x);
        sec1_bytes.extend_from_slice(&y);
        k256::PublicKey::from_sec1_bytes(&sec1_bytes)
            .map_err(|_| Error::InvalidKeyFormat("point is not on the secp256k1 curve"))
    }
}
