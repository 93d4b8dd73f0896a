use crate::{Error, Result, base36::is_base36};
use core::fmt;

/// The namespace bytes at the front of an identifier.
///
/// A prefix is one or two bytes drawn from the lowercase base36 alphabet. It
/// names the identifier family or namespace and is never random. Values of
/// this type are always valid: the only way to build one is through the
/// validating constructors.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix {
    bytes: [u8; 2],
    len: u8,
}

impl Prefix {
    /// The fixed prefix of [`crate::Cuid`].
    pub const CUID: Self = Self {
        bytes: [b'c', 0],
        len: 1,
    };

    /// The default prefix of [`crate::Guid`] until one is configured.
    pub const GUID: Self = Self {
        bytes: [b'n', b'w'],
        len: 2,
    };

    /// Builds a validated two-byte prefix.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPrefixByte`] for the first byte outside
    /// `[0-9a-z]`.
    ///
    /// # Example
    /// ```
    /// use ferrocuid::Prefix;
    ///
    /// assert_eq!(Prefix::new(b'z', b'9').unwrap().as_bytes(), b"z9");
    /// assert!(Prefix::new(b'Z', b'9').is_err());
    /// ```
    pub fn new(b1: u8, b2: u8) -> Result<Self> {
        Self::from_slice(&[b1, b2])
    }

    /// Builds a validated prefix from one or two bytes.
    ///
    /// # Errors
    /// - [`Error::InvalidPrefixLength`] if `bytes` is empty or longer than two
    /// - [`Error::InvalidPrefixByte`] for the first byte outside `[0-9a-z]`
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() || bytes.len() > 2 {
            return Err(Error::InvalidPrefixLength {
                expected: 2,
                len: bytes.len(),
            });
        }
        if let Some(&byte) = bytes.iter().find(|&&b| !is_base36(b)) {
            return Err(Error::InvalidPrefixByte { byte });
        }
        let mut out = [0_u8; 2];
        out[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: out,
            len: bytes.len() as u8,
        })
    }

    /// The prefix bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Number of prefix bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`; a prefix holds at least one byte.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.as_bytes() {
            fmt::Write::write_char(f, char::from(b))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prefix({self})")
    }
}

impl TryFrom<&str> for Prefix {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::from_slice(value.as_bytes())
    }
}
