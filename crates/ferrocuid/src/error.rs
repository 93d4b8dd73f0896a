use crate::{Base36Error, Prefix};

/// A result type defaulting to the crate-wide [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `ferrocuid` can produce.
///
/// Errors fall into three groups:
///
/// - **configuration**: an invalid or repeated prefix assignment. These are
///   raised before any identifier carrying the prefix can exist.
/// - **generation**: the random source failed, or a counter lock was
///   poisoned. No partial identifier is ever returned.
/// - **parse**: the input does not describe an identifier of the requested
///   family. The variant names the offending field and carries the raw text.
///
/// Nothing in this crate logs or retries on error; every failure is returned
/// to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A prefix byte is outside the lowercase base36 alphabet `[0-9a-z]`.
    #[error("invalid prefix byte {byte:#04x}: must be in [0-9a-z]")]
    InvalidPrefixByte {
        /// The rejected byte.
        byte: u8,
    },

    /// A prefix has the wrong number of bytes for the identifier family.
    #[error("invalid prefix length: expected {expected} bytes, got {len}")]
    InvalidPrefixLength {
        /// Prefix length required by the family.
        expected: usize,
        /// Length that was supplied.
        len: usize,
    },

    /// The process-wide prefix was already configured.
    #[error("prefix already configured as {active}")]
    PrefixAlreadySet {
        /// The prefix that remains active.
        active: Prefix,
    },

    /// The random source could not produce bytes.
    #[error("random source failure: {reason}")]
    RandomSource {
        /// Description supplied by the underlying source.
        reason: String,
    },

    /// A lock was poisoned by a thread that panicked while holding it.
    ///
    /// Never produced with the `parking-lot` feature, whose locks do not
    /// poison.
    #[error("lock poisoned")]
    LockPoisoned,

    /// The input is not exactly the family's width.
    #[error("identifier must be exactly {expected} bytes, got {len}")]
    InvalidLength {
        /// Width of the family.
        expected: usize,
        /// Length of the input.
        len: usize,
    },

    /// The prefix of the input is not accepted by the family.
    #[error("unexpected prefix {prefix:?}")]
    UnexpectedPrefix {
        /// The prefix bytes, lossily rendered as text.
        prefix: String,
    },

    /// A field of the canonical text form failed to decode.
    #[error("invalid {field} value {text:?}: {source}")]
    InvalidField {
        /// Name of the field.
        field: &'static str,
        /// The raw text of the field.
        text: String,
        /// The codec failure.
        source: Base36Error,
    },

    /// A field of the raw binary form is not a canonical in-range varint.
    #[error("malformed {field} field in raw bytes")]
    MalformedField {
        /// Name of the field.
        field: &'static str,
    },
}

#[cfg(not(feature = "parking-lot"))]
impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Self::LockPoisoned
    }
}
