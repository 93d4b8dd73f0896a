use crate::{RandSource, Result, base36::BLOCK_MAX};

/// How an identifier family turns random bytes into a field value in
/// `[0, 36^4)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RandomStrategy {
    /// Four bytes read as a little-endian `i32`, folded to its absolute value
    /// and scaled into range with a multiply and a 32-bit shift.
    MultiplyShift,
    /// Sixteen bytes folded into two seed words by wrapping byte sums, mixed
    /// with one xorshift round and reduced modulo `36^4`.
    Xorshift,
}

/// Set on both xorshift seed words so that neither is ever zero.
const SEED_FLOOR: i32 = 1 << 20;

impl RandomStrategy {
    /// Number of random bytes consumed per field.
    #[must_use]
    pub const fn bytes_needed(self) -> usize {
        match self {
            Self::MultiplyShift => 4,
            Self::Xorshift => 16,
        }
    }

    /// Reads [`Self::bytes_needed`] bytes from `rng` and derives one field
    /// value.
    ///
    /// # Errors
    /// Propagates the source's [`crate::Error::RandomSource`]. No value is
    /// produced on failure.
    pub fn draw<R>(self, rng: &R) -> Result<i32>
    where
        R: RandSource + ?Sized,
    {
        match self {
            Self::MultiplyShift => {
                let mut buf = [0_u8; 4];
                rng.try_fill_bytes(&mut buf)?;
                Ok(multiply_shift(buf))
            }
            Self::Xorshift => {
                let mut buf = [0_u8; 16];
                rng.try_fill_bytes(&mut buf)?;
                Ok(xorshift(buf))
            }
        }
    }
}

/// Scales four random bytes into `[0, 36^4)` without a division.
///
/// # Example
/// ```
/// use ferrocuid::multiply_shift;
///
/// assert_eq!(multiply_shift([0, 0, 0, 0]), 0);
/// assert_eq!(multiply_shift([0xff, 0xff, 0xff, 0x7f]), 839_807);
/// ```
#[must_use]
pub const fn multiply_shift(bytes: [u8; 4]) -> i32 {
    let abs = i32::from_le_bytes(bytes).unsigned_abs() as u64;
    ((abs * BLOCK_MAX as u64) >> 32) as i32
}

/// Derives a value in `[0, 36^4)` from sixteen random bytes with a single
/// xorshift round.
#[must_use]
pub const fn xorshift(bytes: [u8; 16]) -> i32 {
    let s0 = byte_sum(&bytes, 0) | SEED_FLOOR;
    let mut s1 = byte_sum(&bytes, 8) | SEED_FLOOR;

    s1 ^= s1 << 17;
    s1 = s1 ^ s0 ^ (s1 >> 7) ^ (s0 >> 16);
    let mixed = s0.wrapping_add(s1 % BLOCK_MAX);
    (mixed.unsigned_abs() % BLOCK_MAX as u32) as i32
}

/// Wrapping sum of the eight bytes starting at `start`.
const fn byte_sum(bytes: &[u8; 16], start: usize) -> i32 {
    let mut sum = 0_u8;
    let mut i = start;
    while i < start + 8 {
        sum = sum.wrapping_add(bytes[i]);
        i += 1;
    }
    sum as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct Fixed(u8);
    impl RandSource for Fixed {
        fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
            dest.fill(self.0);
            Ok(())
        }
    }

    struct Broken;
    impl RandSource for Broken {
        fn try_fill_bytes(&self, _dest: &mut [u8]) -> Result<()> {
            Err(Error::RandomSource {
                reason: "unplugged".to_owned(),
            })
        }
    }

    #[test]
    fn multiply_shift_vectors() {
        assert_eq!(multiply_shift([0, 0, 0, 0]), 0);
        assert_eq!(multiply_shift([0xff, 0xff, 0xff, 0x7f]), 839_807);
        assert_eq!(multiply_shift([0, 0, 0, 0x80]), 839_808);
        assert_eq!(multiply_shift([1, 2, 3, 4]), 26_321);
    }

    #[test]
    fn xorshift_vectors() {
        assert_eq!(xorshift([0; 16]), 1_056_784);
        assert_eq!(xorshift([0xff; 16]), 208_137);
        let ascending: [u8; 16] = core::array::from_fn(|i| i as u8);
        assert_eq!(xorshift(ascending), 1_436_012);
    }

    #[test]
    fn outputs_stay_in_block_range() {
        for b in 0..=255_u8 {
            let v = multiply_shift([b, b.wrapping_mul(7), b ^ 0x5a, b]);
            assert!((0..BLOCK_MAX).contains(&v), "multiply_shift {b}: {v}");
            let mut bytes = [b; 16];
            bytes[3] = b.wrapping_add(91);
            bytes[12] = b.wrapping_mul(13);
            let v = xorshift(bytes);
            assert!((0..BLOCK_MAX).contains(&v), "xorshift {b}: {v}");
        }
    }

    #[test]
    fn draw_reads_the_right_amount() {
        assert_eq!(RandomStrategy::MultiplyShift.draw(&Fixed(0)), Ok(0));
        assert_eq!(RandomStrategy::Xorshift.draw(&Fixed(0)), Ok(1_056_784));
        assert_eq!(RandomStrategy::Xorshift.draw(&Fixed(0xff)), Ok(208_137));
    }

    #[test]
    fn draw_propagates_failure() {
        for strategy in [RandomStrategy::MultiplyShift, RandomStrategy::Xorshift] {
            assert_eq!(
                strategy.draw(&Broken),
                Err(Error::RandomSource {
                    reason: "unplugged".to_owned()
                })
            );
        }
    }
}
