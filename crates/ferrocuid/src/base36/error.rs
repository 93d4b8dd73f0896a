/// Errors raised while decoding fixed-width base36 text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Base36Error {
    /// The input is not exactly the requested width.
    #[error("invalid length: expected {expected}, got {len}")]
    InvalidLength { expected: usize, len: usize },

    /// The input contains a byte outside `[0-9a-z]`.
    #[error("invalid ascii byte {byte:#04x} at index {index}")]
    InvalidAscii { byte: u8, index: usize },

    /// The decoded value does not fit in an `i64`.
    #[error("decoded value overflows i64")]
    Overflow,
}
