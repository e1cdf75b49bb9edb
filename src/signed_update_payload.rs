use crate::{DeltaHash, Error, HashFunction, PublicKeyJWK, Result};

// TODO: Rename to kebab-case ("delta-hash") once downstream consumers have migrated.
pub const DELTA_HASH_FIELD_NAME: &str = "delta_hash";
pub const UPDATE_KEY_FIELD_NAME: &str = "update_key";

const FIELD_NAMES: &[&str] = &[DELTA_HASH_FIELD_NAME, UPDATE_KEY_FIELD_NAME];

/// The JWS payload of the signed data object of an update operation.  It is immutable once
/// constructed, and is compared structurally.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignedUpdatePayload {
    /// Encoded hash of the Delta object of the update operation.
    delta_hash: DeltaHash,
    /// The key whose JCS-canonicalized commitment must match the update commitment of the
    /// previous operation.
    update_key: PublicKeyJWK,
}

impl SignedUpdatePayload {
    pub fn new(delta_hash: DeltaHash, update_key: PublicKeyJWK) -> Self {
        Self {
            delta_hash,
            update_key,
        }
    }
    /// Computes the delta hash of the given delta and pairs it with the update key.
    pub fn for_delta<T: serde::Serialize>(
        delta: &T,
        update_key: PublicKeyJWK,
        hash_function: HashFunction,
    ) -> Result<Self> {
        Ok(Self::new(DeltaHash::compute(delta, hash_function)?, update_key))
    }
    pub fn delta_hash(&self) -> &DeltaHash {
        &self.delta_hash
    }
    pub fn update_key(&self) -> &PublicKeyJWK {
        &self.update_key
    }
    pub fn into_parts(self) -> (DeltaHash, PublicKeyJWK) {
        (self.delta_hash, self.update_key)
    }
    /// Parses an untrusted JSON payload.  Unlike plain serde deserialization, each failure is
    /// reported as a specific error variant.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value = serde_json::from_str(s).map_err(|e| Error::MalformedPayload(e.to_string()))?;
        Self::from_json_value(value)
    }
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let value =
            serde_json::from_slice(bytes).map_err(|e| Error::MalformedPayload(e.to_string()))?;
        Self::from_json_value(value)
    }
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let mut object = match value {
            serde_json::Value::Object(object) => object,
            _ => {
                return Err(Error::MalformedPayload(
                    "payload must be a JSON object".to_string(),
                ))
            }
        };
        let delta_hash_value = take_required_field(&mut object, DELTA_HASH_FIELD_NAME)?;
        let update_key_value = take_required_field(&mut object, UPDATE_KEY_FIELD_NAME)?;
        if let Some(unexpected_field) = object.keys().next() {
            return Err(Error::MalformedPayload(format!(
                "unexpected field {:?}",
                unexpected_field
            )));
        }

        let delta_hash = match delta_hash_value {
            serde_json::Value::String(s) => DeltaHash::from(s),
            _ => {
                return Err(Error::MalformedPayload(format!(
                    "{} must be a string",
                    DELTA_HASH_FIELD_NAME
                )))
            }
        };
        let update_key = PublicKeyJWK::try_from(update_key_value)?;
        Ok(Self::new(delta_hash, update_key))
    }
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
    /// The JCS serialization of this payload, i.e. the bytes a signer uses as the JWS payload.
    pub fn canonical_json_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json_canonicalizer::to_vec(self)?)
    }
}

/// An absent field and an explicit null are both treated as missing.
fn take_required_field(
    object: &mut serde_json::Map<String, serde_json::Value>,
    field_name: &'static str,
) -> Result<serde_json::Value> {
    match object.remove(field_name) {
        None | Some(serde_json::Value::Null) => Err(Error::MissingField(field_name)),
        Some(value) => Ok(value),
    }
}

impl serde::Serialize for SignedUpdatePayload {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("SignedUpdatePayload", FIELD_NAMES.len())?;
        state.serialize_field(DELTA_HASH_FIELD_NAME, &self.delta_hash)?;
        state.serialize_field(UPDATE_KEY_FIELD_NAME, &self.update_key)?;
        state.end()
    }
}

impl<'de> serde::Deserialize<'de> for SignedUpdatePayload {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_struct(
            "SignedUpdatePayload",
            FIELD_NAMES,
            SignedUpdatePayloadVisitor,
        )
    }
}

struct SignedUpdatePayloadVisitor;

impl<'de> serde::de::Visitor<'de> for SignedUpdatePayloadVisitor {
    type Value = SignedUpdatePayload;
    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a signed update payload object")
    }
    fn visit_map<A: serde::de::MapAccess<'de>>(
        self,
        mut map: A,
    ) -> std::result::Result<Self::Value, A::Error> {
        use serde::de::Error;
        let mut delta_hash_o: Option<DeltaHash> = None;
        let mut update_key_o: Option<PublicKeyJWK> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                DELTA_HASH_FIELD_NAME => {
                    if delta_hash_o.is_some() {
                        return Err(A::Error::duplicate_field(DELTA_HASH_FIELD_NAME));
                    }
                    delta_hash_o = Some(map.next_value()?);
                }
                UPDATE_KEY_FIELD_NAME => {
                    if update_key_o.is_some() {
                        return Err(A::Error::duplicate_field(UPDATE_KEY_FIELD_NAME));
                    }
                    update_key_o = Some(map.next_value()?);
                }
                _ => {
                    return Err(A::Error::unknown_field(key.as_str(), FIELD_NAMES));
                }
            }
        }
        let delta_hash =
            delta_hash_o.ok_or_else(|| A::Error::missing_field(DELTA_HASH_FIELD_NAME))?;
        let update_key =
            update_key_o.ok_or_else(|| A::Error::missing_field(UPDATE_KEY_FIELD_NAME))?;
        Ok(SignedUpdatePayload::new(delta_hash, update_key))
    }
}
