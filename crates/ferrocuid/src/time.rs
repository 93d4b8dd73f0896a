use std::time::{SystemTime, UNIX_EPOCH};

/// A trait for clocks that report wall-clock milliseconds since the Unix
/// epoch.
///
/// This abstraction allows you to plug in the system clock or a mocked time
/// source in tests. Times before the epoch are reported as negative values.
///
/// # Example
/// ```
/// use ferrocuid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> i64 {
///         1_609_459_200_000
///     }
/// }
///
/// assert_eq!(FixedTime.current_millis(), 1_609_459_200_000);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since 1970-01-01 UTC.
    fn current_millis(&self) -> i64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for std::sync::Arc<T> {
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }
}

/// The operating system's wall clock.
///
/// Not monotonic: the value follows any adjustment to the system time. The
/// counters in each identifier keep identifiers distinct when the clock
/// stalls or steps backwards.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_millis(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => i64::try_from(since.as_millis()).unwrap_or(i64::MAX),
            Err(before) => i64::try_from(before.duration().as_millis()).map_or(i64::MIN, |ms| -ms),
        }
    }
}
