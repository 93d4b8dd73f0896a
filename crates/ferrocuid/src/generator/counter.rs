use super::mutex::{Mutex, lock};
use crate::{Result, base36::BLOCK_MAX};

/// The policy of a counter field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Starts at `0` and counts up, wrapping to `0` past `36^4 - 1`.
    Up,
    /// Starts from the clock and counts down, wrapping to `36^4 - 1` past
    /// `0`.
    Down,
}

impl Direction {
    /// Returns the value that follows `value`.
    ///
    /// # Example
    /// ```
    /// use ferrocuid::Direction;
    ///
    /// assert_eq!(Direction::Up.step(41), 42);
    /// assert_eq!(Direction::Up.step(1_679_615), 0);
    /// assert_eq!(Direction::Down.step(0), 1_679_615);
    /// ```
    #[must_use]
    pub const fn step(self, value: i32) -> i32 {
        match self {
            Self::Up if value >= BLOCK_MAX - 1 => 0,
            Self::Up => value + 1,
            Self::Down if value <= 0 => BLOCK_MAX - 1,
            Self::Down => value - 1,
        }
    }

    /// The starting value of a fresh counter given the current clock
    /// reading. Decreasing counters start at the current Unix second modulo
    /// `36^4`.
    #[must_use]
    pub const fn initial(self, now_millis: i64) -> i32 {
        match self {
            Self::Up => 0,
            Self::Down => (now_millis / 1000).rem_euclid(BLOCK_MAX as i64) as i32,
        }
    }
}

/// One lock-protected counter.
#[derive(Debug)]
pub(crate) struct Counter {
    direction: Direction,
    value: Mutex<i32>,
}

impl Counter {
    /// Creates a counter holding `value`, folded into `[0, 36^4)`.
    pub(crate) fn new(direction: Direction, value: i32) -> Self {
        Self {
            direction,
            value: Mutex::new((value.unsigned_abs() % BLOCK_MAX as u32) as i32),
        }
    }

    pub(crate) const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the current value and moves the counter one step. The lock is
    /// held only for the read and the write.
    pub(crate) fn advance(&self) -> Result<i32> {
        let mut value = lock(&self.value)?;
        let current = *value;
        *value = self.direction.step(current);
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_wraps_to_zero() {
        assert_eq!(Direction::Up.step(0), 1);
        assert_eq!(Direction::Up.step(BLOCK_MAX - 2), BLOCK_MAX - 1);
        assert_eq!(Direction::Up.step(BLOCK_MAX - 1), 0);
    }

    #[test]
    fn down_wraps_to_max() {
        assert_eq!(Direction::Down.step(BLOCK_MAX - 1), BLOCK_MAX - 2);
        assert_eq!(Direction::Down.step(1), 0);
        assert_eq!(Direction::Down.step(0), BLOCK_MAX - 1);
    }

    #[test]
    fn initial_values() {
        assert_eq!(Direction::Up.initial(1_609_459_200_000), 0);
        assert_eq!(Direction::Down.initial(1_609_459_200_000), 387_072);
        assert_eq!(Direction::Down.initial(999), 0);
        assert!((0..BLOCK_MAX).contains(&Direction::Down.initial(-5_000)));
    }

    #[test]
    fn advance_returns_value_before_step() {
        let c = Counter::new(Direction::Up, BLOCK_MAX - 1);
        assert_eq!(c.advance(), Ok(BLOCK_MAX - 1));
        assert_eq!(c.advance(), Ok(0));
        assert_eq!(c.advance(), Ok(1));

        let c = Counter::new(Direction::Down, 0);
        assert_eq!(c.advance(), Ok(0));
        assert_eq!(c.advance(), Ok(BLOCK_MAX - 1));
    }

    #[test]
    fn new_folds_out_of_range_values() {
        let c = Counter::new(Direction::Up, -3);
        assert_eq!(c.advance(), Ok(3));
        let c = Counter::new(Direction::Up, BLOCK_MAX + 1);
        assert_eq!(c.advance(), Ok(1));
        let c = Counter::new(Direction::Up, i32::MIN);
        assert!((0..BLOCK_MAX).contains(&c.advance().unwrap()));
    }
}
