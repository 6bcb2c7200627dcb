use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod as_account_id {
    use super::{Deserialize, Deserializer, Serialize, Serializer};
    use crate::SteamId;

    /// Serialize a [`SteamId`] as its bare account id.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &SteamId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.account_id().serialize(s)
    }

    /// Deserialize a [`SteamId`] from a bare account id.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails.
    pub fn deserialize<'de, D>(d: D) -> Result<SteamId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = u32::deserialize(d)?;
        Ok(SteamId::from_account_id(n))
    }
}

pub mod as_id64 {
    use super::{Deserialize, Deserializer, Serialize, Serializer};
    use crate::SteamId;

    /// Serialize a [`SteamId`] as its 64-bit SteamID64 form.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &SteamId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.id64().serialize(s)
    }

    /// Deserialize a [`SteamId`] from its 64-bit SteamID64 form.
    ///
    /// Unlike the parser, which tolerates stride-adjusted inputs, the wire
    /// form is held to the canonical header: the value must sit between
    /// [`SteamId::ID64_OFFSET`] and `ID64_OFFSET + u32::MAX`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The value is not a canonical SteamID64
    pub fn deserialize<'de, D>(d: D) -> Result<SteamId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = u64::deserialize(d)?;
        match n.checked_sub(SteamId::ID64_OFFSET) {
            Some(account_id) if account_id <= u64::from(u32::MAX) => {
                Ok(SteamId::from_account_id(account_id as u32))
            }
            _ => Err(serde::de::Error::custom(format_args!(
                "not a canonical SteamID64: {n}"
            ))),
        }
    }
}
