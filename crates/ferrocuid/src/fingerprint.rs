//! The host and process fingerprint embedded in every identifier.

use ::rand::{RngCore, rng};
use std::sync::OnceLock;

/// Bytes of CSPRNG output that stand in for an unreadable hostname.
const FALLBACK_HOSTNAME_LEN: usize = 16;

/// Returns the fingerprint of the current process.
///
/// The value combines the process id with a checksum of the hostname:
/// `(pid << 2) | (checksum >> 2)`, where the checksum is the hostname length
/// plus 36 plus the sum of its bytes. If the hostname cannot be read, sixteen
/// random bytes are summed instead.
///
/// Computed on first use and cached for the life of the process.
///
/// # Example
/// ```
/// assert_eq!(ferrocuid::fingerprint(), ferrocuid::fingerprint());
/// ```
pub fn fingerprint() -> i32 {
    static FINGERPRINT: OnceLock<i32> = OnceLock::new();
    *FINGERPRINT.get_or_init(|| derive(std::process::id(), &hostname_bytes()))
}

/// Combines a process id and hostname into a fingerprint.
fn derive(pid: u32, hostname: &[u8]) -> i32 {
    (pid as i32).wrapping_shl(2) | (checksum(hostname) >> 2)
}

fn checksum(hostname: &[u8]) -> i32 {
    hostname
        .iter()
        .fold((hostname.len() as i32).wrapping_add(36), |acc, &b| {
            acc.wrapping_add(i32::from(b))
        })
}

fn hostname_bytes() -> Vec<u8> {
    match hostname::get() {
        Ok(name) => name.into_encoded_bytes(),
        Err(_) => {
            let mut fallback = vec![0_u8; FALLBACK_HOSTNAME_LEN];
            rng().fill_bytes(&mut fallback);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_counts_length_and_bytes() {
        assert_eq!(checksum(b""), 36);
        // 4 + 36 + (104 + 111 + 115 + 116)
        assert_eq!(checksum(b"host"), 486);
    }

    #[test]
    fn derive_mixes_pid_and_host() {
        assert_eq!(derive(0, b""), 9);
        assert_eq!(derive(1, b""), 4 | 9);
        assert_eq!(derive(1000, b"host"), (1000 << 2) | (486 >> 2));
    }

    #[test]
    fn derive_wraps_large_pids() {
        assert_eq!(derive(u32::MAX, b""), -4 | 9);
    }

    #[test]
    fn fingerprint_is_cached() {
        let first = fingerprint();
        for _ in 0..8 {
            assert_eq!(fingerprint(), first);
        }
    }

    #[test]
    fn fingerprint_is_stable_across_threads() {
        let here = fingerprint();
        let there = std::thread::spawn(fingerprint).join().unwrap();
        assert_eq!(here, there);
    }
}
