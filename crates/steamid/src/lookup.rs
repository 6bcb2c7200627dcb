/// A trait for resolving a community "vanity" name to a numeric identifier.
///
/// This abstraction allows you to plug in a real Web API client, a cached
/// directory, or a mocked lookup in tests. The resolver core performs no I/O
/// of its own; this is the only operation permitted to block or fail due to
/// external conditions.
///
/// Any credential the transport needs (such as a Web API key) belongs to the
/// implementing type, established at its construction. The resolver only
/// stores and calls the capability.
///
/// The returned identifier may be in any numeric form the service hands
/// back: a bare account id or a full 64-bit id both work, because the
/// resolver re-parses the value through its numeric formats.
///
/// # Example
///
/// ```
/// use steamid::VanityLookup;
///
/// struct FixedLookup;
/// impl VanityLookup for FixedLookup {
///     type Error = core::convert::Infallible;
///
///     fn resolve_vanity(&self, _name: &str) -> Result<Option<u64>, Self::Error> {
///         Ok(Some(10_000))
///     }
/// }
///
/// let lookup = FixedLookup;
/// assert_eq!(lookup.resolve_vanity("gabe"), Ok(Some(10_000)));
/// ```
pub trait VanityLookup {
    /// Error surfaced when the lookup call itself fails.
    ///
    /// "No match" is not a failure; report it as `Ok(None)`.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Resolves `name` to a numeric identifier.
    ///
    /// Returns `Ok(None)` when the service answered and no account carries
    /// the name.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying transport or service call fails.
    fn resolve_vanity(&self, name: &str) -> Result<Option<u64>, Self::Error>;
}

/// Placeholder lookup for resolvers constructed without one.
///
/// A resolver built with [`Resolver::new`] never invokes its lookup; this
/// type exists to give that resolver a concrete parameter. Calling it
/// directly always answers "no match".
///
/// [`Resolver::new`]: crate::Resolver::new
#[derive(Copy, Clone, Debug, Default)]
pub struct NoVanityLookup;

impl VanityLookup for NoVanityLookup {
    type Error = core::convert::Infallible;

    fn resolve_vanity(&self, _name: &str) -> Result<Option<u64>, Self::Error> {
        Ok(None)
    }
}
