use crate::{Identifier, Result};
use std::borrow::Cow;

/// A database column value as handed over by a driver.
///
/// Text columns may arrive either as a string or as its UTF-8 bytes,
/// depending on the driver, so both forms carry the canonical text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scalar<'a> {
    /// SQL `NULL`.
    Null,
    /// A text value.
    Text(Cow<'a, str>),
    /// The bytes of a text value.
    Bytes(Cow<'a, [u8]>),
}

/// Conversions between identifiers and database scalars.
///
/// Identifiers are stored as their canonical text so that the column sorts
/// and reads the same way the identifiers print.
///
/// # Example
/// ```
/// use ferrocuid::{Guid, Scalar, ScalarExt};
///
/// let value = Guid::TEST.to_scalar();
/// assert_eq!(value, Scalar::Text("test0test0test0test0test00".into()));
/// assert_eq!(Guid::from_scalar(&value).unwrap(), Some(Guid::TEST));
/// assert_eq!(Guid::from_scalar(&Scalar::Null).unwrap(), None);
/// ```
pub trait ScalarExt: Identifier {
    /// The value to store for this identifier.
    fn to_scalar(&self) -> Scalar<'static> {
        Scalar::Text(Cow::Owned(self.encode()))
    }

    /// Reads an identifier from a stored value. `NULL` reads as `None`.
    ///
    /// # Errors
    /// Any parse error of [`Identifier::parse`].
    fn from_scalar(value: &Scalar<'_>) -> Result<Option<Self>> {
        match value {
            Scalar::Null => Ok(None),
            Scalar::Text(text) => Self::parse_str(text).map(Some),
            Scalar::Bytes(bytes) => Self::parse(bytes).map(Some),
        }
    }
}

impl<ID> ScalarExt for ID where ID: Identifier {}
