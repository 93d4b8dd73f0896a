use crate::{Error, RandSource, Result};
use ::rand::{RngCore, TryRngCore, rng, rngs::OsRng};

/// A [`RandSource`] that reads from the operating system's CSPRNG.
///
/// Every call is a syscall. Read failures are surfaced as
/// [`Error::RandomSource`]. This is the source the global generators use.
#[derive(Default, Clone, Copy, Debug)]
pub struct OsRandom;

impl RandSource for OsRandom {
    fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(dest).map_err(|e| Error::RandomSource {
            reason: e.to_string(),
        })
    }
}

/// A [`RandSource`] that uses the thread-local RNG (`rand::rng()`).
///
/// The thread-local generator is ChaCha-based, seeded from the OS and
/// reseeded periodically. It never fails once seeded, and each OS thread has
/// its own instance, so calls from many threads do not contend.
///
/// This type does not store the RNG; it looks up the thread-local generator
/// on each call, so it is `Send + Sync` and may be shared freely.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        rng().fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill<R: RandSource>(r: &R) -> [u8; 64] {
        let mut buf = [0_u8; 64];
        r.try_fill_bytes(&mut buf).unwrap();
        buf
    }

    #[test]
    fn os_random_fills_buffer() {
        let a = fill(&OsRandom);
        let b = fill(&OsRandom);
        assert_ne!(a, [0; 64]);
        assert_ne!(a, b);
    }

    #[test]
    fn thread_random_fills_buffer() {
        let a = fill(&ThreadRandom);
        let b = fill(&ThreadRandom);
        assert_ne!(a, [0; 64]);
        assert_ne!(a, b);
    }

    #[test]
    fn empty_request_is_fine() {
        assert_eq!(OsRandom.try_fill_bytes(&mut []), Ok(()));
        assert_eq!(ThreadRandom.try_fill_bytes(&mut []), Ok(()));
    }
}
