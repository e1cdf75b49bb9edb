/// Key types an update key may have, each identified in a JWK by its ("kty", "crv") pair.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum KeyType {
    #[default]
    Secp256k1,
    Ed25519,
}

impl KeyType {
    pub const fn kty(self) -> &'static str {
        match self {
            Self::Secp256k1 => "EC",
            Self::Ed25519 => "OKP",
        }
    }
    pub const fn crv(self) -> &'static str {
        match self {
            Self::Secp256k1 => "secp256k1",
            Self::Ed25519 => "Ed25519",
        }
    }
}

impl std::fmt::Display for KeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.crv())
    }
}
