use crate::Result;

/// A producer of identifiers of type `ID`.
///
/// The trait is object safe so that a `dyn IdGenerator<ID>` can be installed
/// as the process-wide default with [`crate::set_generator`].
///
/// # Example
/// ```
/// use ferrocuid::{Cuid, IdGenerator, Identifier, Result};
///
/// struct AlwaysTest;
/// impl IdGenerator<Cuid> for AlwaysTest {
///     fn generate(&self) -> Result<Cuid> {
///         "c00000000000000000000test".parse()
///     }
/// }
///
/// let g: Box<dyn IdGenerator<Cuid>> = Box::new(AlwaysTest);
/// assert_eq!(g.generate().unwrap().random(1), 1_372_205);
/// ```
pub trait IdGenerator<ID>: Send + Sync {
    /// Produces the next identifier.
    ///
    /// # Errors
    /// Returns an error if a dependency of the generator fails, for example
    /// the random source. No identifier is produced in that case.
    fn generate(&self) -> Result<ID>;
}
