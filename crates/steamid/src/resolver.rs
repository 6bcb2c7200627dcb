#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Error, NoVanityLookup, Result, SteamId, VanityLookup};

/// Resolves identifier inputs of unknown shape into a [`SteamId`].
///
/// Formats are tried from most specific to most ambiguous:
///
/// 1. Classic: `STEAM_0:0:24110655` (the `STEAM_` token is case-insensitive)
/// 2. SteamID3: `[U:1:48221310]`, with either bracket optional
/// 3. SteamID64: `76561198008487038` (at least 14 digits, `765` prefix)
/// 4. Bare account id: `48221310`
/// 5. Profile URL: `https://steamcommunity.com/profiles/<any of 1-4>`
/// 6. Vanity name, bare or as `https://steamcommunity.com/id/<name>`, via
///    the configured [`VanityLookup`]
///
/// The first matching format wins. A resolver built with [`Resolver::new`]
/// has no lookup and resolves only the local formats 1 through 5.
///
/// # Example
///
/// ```
/// use steamid::Resolver;
///
/// let resolver = Resolver::new();
/// let id = resolver.resolve("[U:1:48221310]")?;
/// assert_eq!(id.account_id(), 48221310);
/// # Ok::<(), steamid::Error>(())
/// ```
pub struct Resolver<L = NoVanityLookup> {
    lookup: Option<L>,
}

impl Resolver<NoVanityLookup> {
    /// Creates a resolver without a vanity lookup.
    ///
    /// Inputs that only a lookup could answer fail with
    /// [`Error::UnsupportedFormat`].
    #[must_use]
    pub const fn new() -> Self {
        Self { lookup: None }
    }
}

impl Default for Resolver<NoVanityLookup> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Resolver<L>
where
    L: VanityLookup,
{
    /// Creates a resolver that falls back to `lookup` for vanity names.
    ///
    /// Any credential the lookup transport needs belongs to the `lookup`
    /// value itself, established at its construction; the resolver only
    /// stores and calls it.
    pub const fn with_lookup(lookup: L) -> Self {
        Self { lookup: Some(lookup) }
    }

    /// Resolves `input` to a [`SteamId`], trying each format in order.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedFormat`] if no format matches and no lookup is
    ///   configured
    /// - [`Error::InvalidVanityName`] if the vanity candidate cannot appear
    ///   in a community URL path segment
    /// - [`Error::VanityNotFound`] if the lookup reports no match
    /// - [`Error::VanityLookupFailed`] if the lookup call itself fails
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn resolve(&self, input: &str) -> Result<SteamId> {
        if let Some(id) = parse_exact(input) {
            return Ok(id);
        }
        // A profile URL is a wrapper, not a distinct format: unwrap the path
        // segment and retry the numeric layouts.
        if let Some(id) = strip_profile_url(input).and_then(parse_exact) {
            return Ok(id);
        }
        let name = strip_vanity_url(input).unwrap_or(input);
        self.resolve_vanity(input, name)
    }

    /// Resolves a numeric input through the numeric layouts only.
    ///
    /// Accepts both a bare account id and a full 64-bit id; the ambiguity
    /// is settled the same way as for strings (the 64-bit shape is ruled
    /// out first).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] if the number fits neither
    /// numeric layout.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn resolve_u64(&self, n: u64) -> Result<SteamId> {
        let rendered = n.to_string();
        parse_exact(&rendered).ok_or_else(|| Error::UnsupportedFormat { input: rendered })
    }

    /// Falls back to the vanity lookup for `name`.
    ///
    /// `input` is the caller's original spelling, kept for error reporting.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    fn resolve_vanity(&self, input: &str, name: &str) -> Result<SteamId> {
        let Some(lookup) = self.lookup.as_ref() else {
            return Err(Error::UnsupportedFormat { input: input.into() });
        };
        if !is_valid_vanity_name(name) {
            return Err(Error::InvalidVanityName { name: name.into() });
        }
        match lookup.resolve_vanity(name) {
            // The service may answer with any numeric form, not necessarily
            // a bare account id.
            Ok(Some(n)) => self.resolve_u64(n),
            Ok(None) => Err(Error::VanityNotFound { name: name.into() }),
            Err(e) => Err(Error::VanityLookupFailed {
                name: name.into(),
                source: Box::new(e),
            }),
        }
    }
}

/// Tries the numeric layouts in order of decreasing specificity.
///
/// The order is load-bearing: the 64-bit layout must be ruled out before the
/// bare account id, or a SteamID64 would be misread as an (overflowing)
/// account id.
pub(crate) fn parse_exact(s: &str) -> Option<SteamId> {
    match_classic(s)
        .or_else(|| match_id3(s))
        .or_else(|| match_id64(s))
        .or_else(|| match_account_id(s))
}

/// `STEAM_X:Y:Z` where `Y` is the low bit and `Z` the halved account number.
fn match_classic(s: &str) -> Option<SteamId> {
    let rest = strip_prefix_ignore_case(s, "STEAM_")?;
    let mut fields = rest.split(':');
    let universe = fields.next()?;
    let auth_server = fields.next()?;
    let account_number = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    // The universe digit is informational only; any single digit passes.
    if !single_digit(universe) || !single_digit(auth_server) {
        return None;
    }
    let auth = u32::from(auth_server.as_bytes()[0] - b'0');
    let account_id = parse_u32(account_number)?
        .checked_mul(2)?
        .checked_add(auth)?;
    Some(SteamId::from_account_id(account_id))
}

/// `[U:1:48221310]`, either bracket optional, `U` case-insensitive.
///
/// The first numeric field is universe-like and ignored; the second is the
/// account id itself.
fn match_id3(s: &str) -> Option<SteamId> {
    let s = s.strip_prefix('[').unwrap_or(s);
    let s = s.strip_suffix(']').unwrap_or(s);
    let rest = strip_prefix_ignore_case(s, "U:")?;
    let (universe, account) = rest.split_once(':')?;
    if universe.is_empty() || universe.len() > 2 || !universe.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let account_id = parse_u32(account)?;
    Some(SteamId::from_account_id(account_id))
}

/// A full 64-bit id: at least 14 digits with the fixed `765` prefix.
///
/// The length floor keeps short account ids that happen to start with `765`
/// out of this layout; they fall through to [`match_account_id`].
fn match_id64(s: &str) -> Option<SteamId> {
    if s.len() < 14 || !s.starts_with("765") || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let id64 = s.parse().ok()?;
    Some(SteamId::from_id64(id64))
}

/// A bare account id. Checked last so a full 64-bit id never lands here.
fn match_account_id(s: &str) -> Option<SteamId> {
    parse_u32(s).map(SteamId::from_account_id)
}

/// Strips the community scheme and host, returning the remaining path.
fn strip_community_path(s: &str) -> Option<&str> {
    let rest = s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"))?;
    rest.strip_prefix("steamcommunity.com/")
}

/// Extracts the segment of a `/profiles/<segment>` URL, tolerating one
/// trailing slash.
fn strip_profile_url(s: &str) -> Option<&str> {
    let segment = strip_community_path(s)?.strip_prefix("profiles/")?;
    Some(segment.strip_suffix('/').unwrap_or(segment))
}

/// Extracts the name of an `/id/<name>` vanity URL, tolerating one trailing
/// slash.
fn strip_vanity_url(s: &str) -> Option<&str> {
    let segment = strip_community_path(s)?.strip_prefix("id/")?;
    Some(segment.strip_suffix('/').unwrap_or(segment))
}

/// Whether `name` can stand as a community URL path segment.
///
/// Accepts the RFC 3986 `pchar` set (unreserved, sub-delims, `:` and `@`),
/// with `%` only as a two-digit percent escape. Everything else, including
/// any non-ASCII byte, disqualifies the name before a lookup is attempted.
fn is_valid_vanity_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'a'..=b'z'
            | b'A'..=b'Z'
            | b'0'..=b'9'
            | b'-'
            | b'.'
            | b'_'
            | b'~'
            | b'!'
            | b'$'
            | b'&'
            | b'\''
            | b'('
            | b')'
            | b'*'
            | b'+'
            | b','
            | b';'
            | b'='
            | b':'
            | b'@' => i += 1,
            b'%' => match (bytes.get(i + 1), bytes.get(i + 2)) {
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            },
            _ => return false,
        }
    }
    true
}

fn single_digit(s: &str) -> bool {
    matches!(s.as_bytes(), [b] if b.is_ascii_digit())
}

/// Parses a non-empty, all-digit string, declining values past `u32::MAX`.
fn parse_u32(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&s[prefix.len()..]),
        _ => None,
    }
}
