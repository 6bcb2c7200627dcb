//! Error types for identifier resolution.
//!
//! This module defines the central `Error` enum, which captures every
//! reportable failure of the resolver. A single format failing to match is
//! not an error; the resolver silently moves on to the next format and only
//! exhaustion of every format (and the optional vanity lookup) surfaces here.
//!
//! ## Error Cases
//! - `UnsupportedFormat`: The input matched none of the recognized layouts
//!   and no vanity lookup was available to ask.
//! - `InvalidVanityName`: The vanity candidate cannot appear in a community
//!   URL path segment, so no lookup was attempted.
//! - `VanityNotFound`: The lookup answered and explicitly reported no match.
//! - `VanityLookupFailed`: The lookup call itself failed (transport or
//!   service fault), distinct from "not found".

/// A result type that defaults to the crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Unified error type for identifier resolution.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The input matched none of the recognized identifier layouts.
    #[error("Unsupported identifier format: {input}")]
    UnsupportedFormat { input: String },

    /// The vanity candidate is not a valid community URL path segment.
    #[error("Invalid vanity name: {name}")]
    InvalidVanityName { name: String },

    /// The vanity lookup reported that no account matches the name.
    #[error("No account matches vanity name: {name}")]
    VanityNotFound { name: String },

    /// The vanity lookup call failed before it could answer.
    #[error("Vanity lookup failed for {name}")]
    VanityLookupFailed {
        name: String,
        #[source]
        source: Box<dyn core::error::Error + Send + Sync>,
    },
}
