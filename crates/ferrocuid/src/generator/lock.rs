use super::Counter;
use crate::{
    Components, IdGenerator, Identifier, Prefix, RandSource, Result, TimeSource, id::check_prefix,
};
use core::marker::PhantomData;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A lock-based identifier generator suitable for multi-threaded
/// environments.
///
/// Each counter of the identifier family lives behind its own mutex, held
/// only while the counter is read and advanced. The random source and clock
/// are called outside every lock, so concurrent callers contend only on the
/// counter updates.
///
/// ## Features
///
/// - ✅ Thread-safe
/// - ✅ Works for any [`Identifier`] family
/// - ✅ Deterministic with injected clock and random source
///
/// ## Generation order
///
/// 1. Advance the first counter
/// 2. Draw every random field
/// 3. Advance the remaining counters
/// 4. Read the clock and assemble the identifier
///
/// Each identifier carries the counter values observed before the advance.
pub struct LockGenerator<ID, T, R>
where
    ID: Identifier,
    T: TimeSource,
    R: RandSource,
{
    fingerprint: i32,
    counters: Box<[Counter]>,
    prefix: Option<Prefix>,
    clock: T,
    rng: R,
    _id: PhantomData<fn() -> ID>,
}

impl<ID, T, R> LockGenerator<ID, T, R>
where
    ID: Identifier,
    T: TimeSource,
    R: RandSource,
{
    /// Creates a new [`LockGenerator`].
    ///
    /// Increasing counters start at `0`. Decreasing counters start at the
    /// current Unix second modulo `36^4`, read once from `clock`.
    ///
    /// # Parameters
    /// - `fingerprint`: the host and process fingerprint stamped on every
    ///   identifier, usually [`crate::fingerprint()`]
    /// - `clock`: a [`TimeSource`] for the timestamp field
    /// - `rng`: a [`RandSource`] for the random fields
    ///
    /// # Example
    /// ```
    /// use ferrocuid::{Guid, Identifier, LockGenerator, SystemClock, ThreadRandom};
    ///
    /// let generator = LockGenerator::<Guid, _, _>::new(7, SystemClock, ThreadRandom);
    /// let id = generator.generate().unwrap();
    /// assert_eq!(id.fingerprint(), 7);
    /// ```
    pub fn new(fingerprint: i32, clock: T, rng: R) -> Self {
        let now = clock.current_millis();
        let counters = ID::COUNTERS
            .iter()
            .map(|&direction| Counter::new(direction, direction.initial(now)))
            .collect();
        Self {
            fingerprint,
            counters,
            prefix: None,
            clock,
            rng,
            _id: PhantomData,
        }
    }

    /// Replaces the counters' starting values, in generation order.
    ///
    /// Values are folded into `[0, 36^4)`. Extra values are ignored and
    /// counters without a value keep their current start. Mostly useful for
    /// tests and for restoring state.
    #[must_use]
    pub fn with_counters(mut self, values: &[i32]) -> Self {
        for (counter, &value) in self.counters.iter_mut().zip(values) {
            *counter = Counter::new(counter.direction(), value);
        }
        self
    }

    /// Stamps `prefix` on every identifier from this generator instead of
    /// the family's active prefix.
    ///
    /// # Errors
    /// Fails like [`Identifier::with_prefix`] if the family rejects the
    /// prefix.
    pub fn with_prefix(mut self, prefix: Prefix) -> Result<Self> {
        check_prefix::<ID>(prefix.as_bytes())?;
        self.prefix = Some(prefix);
        Ok(self)
    }

    /// The fingerprint stamped on every identifier.
    pub const fn fingerprint(&self) -> i32 {
        self.fingerprint
    }

    /// Produces the next identifier.
    ///
    /// # Errors
    /// - [`crate::Error::RandomSource`] if the random source fails. The
    ///   counters advanced before the failure stay advanced.
    /// - [`crate::Error::LockPoisoned`] if a counter lock was poisoned.
    ///
    /// # Example
    /// ```
    /// use ferrocuid::{Cuid, Identifier, LockGenerator, OsRandom, SystemClock};
    ///
    /// let generator = LockGenerator::<Cuid, _, _>::new(0, SystemClock, OsRandom);
    /// let a = generator.generate().unwrap();
    /// let b = generator.generate().unwrap();
    /// assert_eq!(a.counter(0) + 1, b.counter(0));
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> Result<ID> {
        let mut components = Components {
            fingerprint: self.fingerprint,
            ..Components::default()
        };

        let mut counters = self.counters.iter().zip(components.counters.iter_mut());
        if let Some((counter, slot)) = counters.next() {
            *slot = counter.advance()?;
        }
        for slot in components.random.iter_mut().take(ID::RANDOM_FIELDS) {
            *slot = ID::RANDOM.draw(&self.rng)?;
        }
        for (counter, slot) in counters {
            *slot = counter.advance()?;
        }

        components.timestamp = self.clock.current_millis();
        let prefix = self.prefix.unwrap_or_else(ID::active_prefix);
        ID::from_components(prefix, &components)
    }
}

impl<ID, T, R> IdGenerator<ID> for LockGenerator<ID, T, R>
where
    ID: Identifier,
    T: TimeSource + Send + Sync,
    R: RandSource + Send + Sync,
{
    fn generate(&self) -> Result<ID> {
        Self::generate(self)
    }
}
