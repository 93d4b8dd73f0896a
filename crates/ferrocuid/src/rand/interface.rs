use crate::Result;

/// A source of random bytes for the generator.
///
/// Reads are fallible: a source that cannot fill `dest` must return
/// [`crate::Error::RandomSource`] rather than leave zeros behind. Sources are
/// shared between threads by reference, so implementations keep any mutable
/// state behind their own synchronisation.
///
/// # Example
/// ```
/// use ferrocuid::{RandSource, Result};
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
///         dest.fill(7);
///         Ok(())
///     }
/// }
///
/// let mut buf = [0_u8; 4];
/// FixedRand.try_fill_bytes(&mut buf).unwrap();
/// assert_eq!(buf, [7; 4]);
/// ```
pub trait RandSource {
    /// Fills `dest` entirely with random bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::RandomSource`] if the source cannot produce
    /// bytes.
    fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<()>;
}

impl<R: RandSource + ?Sized> RandSource for &R {
    fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        (**self).try_fill_bytes(dest)
    }
}

impl<R: RandSource + ?Sized> RandSource for std::sync::Arc<R> {
    fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        (**self).try_fill_bytes(dest)
    }
}
