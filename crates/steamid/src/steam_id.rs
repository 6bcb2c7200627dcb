use core::fmt;

use crate::{Error, Result};

/// A Steam community account identifier.
///
/// The account id is the canonical internal form. Every other rendering is a
/// pure function of it:
///
/// - classic: `STEAM_0:<low bit>:<account id / 2>`
/// - SteamID3: `[U:1:<account id>]`
/// - SteamID64: the account id plus [`SteamId::ID64_OFFSET`]
/// - profile URL: [`SteamId::PROFILE_URL_BASE`] followed by the SteamID64
///
/// The 64-bit form packs the account id into the low 32 bits beneath a fixed
/// header:
///
/// ```text
///  Bit Index:  63          56 55  52 51           32 31           0
///              +--------------+------+---------------+--------------+
///  Field:      | universe (8) | type | instance (20) | account (32) |
///              +--------------+------+---------------+--------------+
///              |<--------- MSB ------- 64 bits ------- LSB -------->|
/// ```
///
/// For individual community accounts the header bits are constant, which is
/// why the 64-bit form is always the account id plus a fixed offset.
///
/// # Example
///
/// ```
/// use steamid::SteamId;
///
/// let id = SteamId::from_account_id(48221310);
/// assert_eq!(id.classic(), "STEAM_0:0:24110655");
/// assert_eq!(id.id3(), "[U:1:48221310]");
/// assert_eq!(id.id64(), 76561198008487038);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct SteamId {
    account_id: u32,
}

const _: () = {
    // Compile-time check: the offset must leave the low 32 bits to the
    // account id. `from_id64` relies on this when it truncates.
    assert!(
        SteamId::ID64_OFFSET & 0xFFFF_FFFF == 0,
        "Offset must not overlap the account field"
    );
};

impl SteamId {
    /// The fixed difference between a SteamID64 and its account id.
    ///
    /// This is the packed header `0x0110_0001_0000_0000`: universe 1, type 1
    /// (individual), instance 1 (desktop), account 0.
    pub const ID64_OFFSET: u64 = 76_561_197_960_265_728;

    /// Base URL of community profile pages, keyed by the 64-bit form.
    pub const PROFILE_URL_BASE: &'static str = "https://steamcommunity.com/profiles/";

    /// Wraps an account id.
    #[must_use]
    pub const fn from_account_id(account_id: u32) -> Self {
        Self { account_id }
    }

    /// Returns the canonical account id.
    #[must_use]
    pub const fn account_id(&self) -> u32 {
        self.account_id
    }

    /// Packs the account id into its 64-bit SteamID64 form.
    ///
    /// This is `account id + ID64_OFFSET` and cannot overflow.
    #[must_use]
    pub const fn id64(&self) -> u64 {
        Self::ID64_OFFSET + self.account_id as u64
    }

    /// Extracts the account id from a 64-bit SteamID64.
    ///
    /// Only the low 32 bits survive: values displaced from a well-formed
    /// SteamID64 by exact multiples of 2^32 land on the same account id, so
    /// pre-adjusted inputs are accepted rather than rejected.
    #[must_use]
    pub const fn from_id64(id64: u64) -> Self {
        Self {
            account_id: id64.wrapping_sub(Self::ID64_OFFSET) as u32,
        }
    }

    /// Renders the classic `STEAM_X:Y:Z` form.
    ///
    /// `Y` is the low bit of the account id and `Z` the remaining quotient,
    /// so `Y + 2 * Z` reconstructs the account id. The universe digit is
    /// always rendered as `0`.
    #[must_use]
    pub fn classic(&self) -> String {
        self.to_string()
    }

    /// Renders the SteamID3 form `[U:1:<account id>]`.
    #[must_use]
    pub fn id3(&self) -> String {
        format!("[U:1:{}]", self.account_id)
    }

    /// Community profile URL for this account, keyed by the 64-bit form.
    #[must_use]
    pub fn profile_url(&self) -> String {
        format!("{}{}", Self::PROFILE_URL_BASE, self.id64())
    }
}

impl fmt::Display for SteamId {
    /// Renders the classic form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "STEAM_0:{}:{}", self.account_id & 1, self.account_id >> 1)
    }
}

impl fmt::Debug for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("SteamId");
        dbg.field("account_id", &self.account_id);
        dbg.field("id64", &self.id64());
        dbg.field("classic", &format_args!("{self}"));
        dbg.finish()
    }
}

impl core::str::FromStr for SteamId {
    type Err = Error;

    /// Parses any of the numeric layouts: classic, SteamID3, SteamID64, or a
    /// bare account id.
    fn from_str(s: &str) -> Result<Self> {
        crate::resolver::parse_exact(s).ok_or_else(|| Error::UnsupportedFormat { input: s.into() })
    }
}

impl TryFrom<&str> for SteamId {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl From<u32> for SteamId {
    fn from(account_id: u32) -> Self {
        Self::from_account_id(account_id)
    }
}

impl From<SteamId> for u32 {
    fn from(id: SteamId) -> Self {
        id.account_id
    }
}
