//! Process-wide default generators and the configurable [`crate::Guid`]
//! prefix.
//!
//! Each identifier family gets its own lazily created [`LockGenerator`]
//! seeded with [`fingerprint()`], [`SystemClock`] and [`OsRandom`]. The
//! registry lock only guards which generator is installed; it is released
//! before an identifier is generated, so replacing a generator never waits
//! on counter locks and generation never waits on configuration beyond the
//! brief read.

use crate::{
    Cuid, Error, Guid, IdGenerator, Identifier, LockGenerator, OsRandom, Prefix, Result,
    SystemClock, fingerprint,
    generator::mutex::{RwLock, read, write},
};
use std::sync::{Arc, OnceLock};

/// Holds the installed generator of one identifier family.
pub struct Registry<ID> {
    generator: RwLock<Arc<dyn IdGenerator<ID>>>,
}

impl<ID: Identifier> Registry<ID> {
    pub(crate) fn with_default_generator() -> Self {
        let generator = LockGenerator::<ID, _, _>::new(fingerprint(), SystemClock, OsRandom);
        Self {
            generator: RwLock::new(Arc::new(generator)),
        }
    }

    fn current(&self) -> Result<Arc<dyn IdGenerator<ID>>> {
        Ok(Arc::clone(&*read(&self.generator)?))
    }

    fn replace(&self, generator: Arc<dyn IdGenerator<ID>>) -> Result<()> {
        *write(&self.generator)? = generator;
        Ok(())
    }
}

/// A per-call adjustment for [`new_with_options`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum IdOption {
    /// Stamp this prefix instead of the family's active prefix.
    Prefix(Prefix),
}

/// Generates an identifier with the process-wide generator for `ID`.
///
/// # Errors
/// Propagates the generator's failure, typically
/// [`Error::RandomSource`].
///
/// # Example
/// ```
/// use ferrocuid::{Guid, Identifier};
///
/// let id: Guid = ferrocuid::new().unwrap();
/// assert_eq!(id.to_string().len(), Guid::WIDTH);
/// ```
pub fn new<ID: Identifier>() -> Result<ID> {
    let generator = ID::registry().current()?;
    generator.generate()
}

/// Generates an identifier and applies `options` in order.
///
/// # Errors
/// Fails like [`new`], or with the prefix errors of
/// [`Identifier::with_prefix`] if an option does not fit the family.
///
/// # Example
/// ```
/// use ferrocuid::{Guid, IdOption, Prefix};
///
/// let prefix = Prefix::new(b'a', b'b').unwrap();
/// let id: Guid = ferrocuid::new_with_options(&[IdOption::Prefix(prefix)]).unwrap();
/// assert!(id.to_string().starts_with("ab"));
/// ```
pub fn new_with_options<ID: Identifier>(options: &[IdOption]) -> Result<ID> {
    options.iter().try_fold(new::<ID>()?, |id, option| match *option {
        IdOption::Prefix(prefix) => id.with_prefix(prefix),
    })
}

/// Generates a [`Cuid`] with the process-wide generator.
///
/// # Errors
/// See [`new`].
pub fn cuid() -> Result<Cuid> {
    new()
}

/// Generates a [`Guid`] with the process-wide generator.
///
/// # Errors
/// See [`new`].
pub fn guid() -> Result<Guid> {
    new()
}

/// Installs `generator` as the process-wide generator for `ID`.
///
/// May be called any number of times; the last call wins. Identifiers being
/// generated concurrently finish on the generator they started with.
///
/// # Errors
/// [`Error::LockPoisoned`] if a writer panicked while holding the registry
/// lock.
///
/// # Example
/// ```
/// use ferrocuid::{Cuid, Identifier, LockGenerator, SystemClock, ThreadRandom};
///
/// let generator = LockGenerator::<Cuid, _, _>::new(42, SystemClock, ThreadRandom);
/// ferrocuid::set_generator(generator).unwrap();
/// assert_eq!(ferrocuid::cuid().unwrap().fingerprint(), 42);
/// ```
pub fn set_generator<ID, G>(generator: G) -> Result<()>
where
    ID: Identifier,
    G: IdGenerator<ID> + 'static,
{
    ID::registry().replace(Arc::new(generator))
}

static PREFIX: OnceLock<Prefix> = OnceLock::new();

/// Configures the process-wide [`Guid`] prefix. Only the first successful
/// call has an effect.
///
/// Both bytes are validated before the prefix is stored, so an invalid call
/// never consumes the one-time slot.
///
/// # Errors
/// - [`Error::InvalidPrefixByte`] if either byte is outside `[0-9a-z]`
/// - [`Error::PrefixAlreadySet`] if a prefix was already configured; the
///   error carries the prefix that remains active
pub fn set_prefix_bytes(b1: u8, b2: u8) -> Result<Prefix> {
    let prefix = Prefix::new(b1, b2)?;
    let mut stored = false;
    let active = *PREFIX.get_or_init(|| {
        stored = true;
        prefix
    });
    if stored {
        Ok(active)
    } else {
        Err(Error::PrefixAlreadySet { active })
    }
}

/// The prefix stamped on newly generated [`Guid`]s: the configured one, or
/// [`Prefix::GUID`] (`nw`) if none was set.
pub fn active_prefix() -> Prefix {
    PREFIX.get().copied().unwrap_or(Prefix::GUID)
}
