use crate::Base36Error;

/// Digits of the lowercase base36 alphabet, in value order.
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Radix of the text form.
pub const BASE: u64 = 36;

/// Characters per integer block.
pub const BLOCK_SIZE: usize = 4;

/// Exclusive upper bound of a single block: `36^4`.
///
/// Counters, the fingerprint, and random fields are all confined to
/// `[0, BLOCK_MAX)` so that they always render to exactly [`BLOCK_SIZE`]
/// characters.
pub const BLOCK_MAX: i32 = 1_679_616;

const NO_VALUE: u8 = 255;

/// Lookup table for base36 decoding. Only lowercase digits are accepted.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 36 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

/// Returns `36^width`, saturating at `u64::MAX`.
#[must_use]
pub const fn modulus(width: usize) -> u64 {
    let mut acc = 1_u64;
    let mut i = 0;
    while i < width {
        acc = acc.saturating_mul(BASE);
        i += 1;
    }
    acc
}

/// Returns `true` if `byte` is in the lowercase base36 alphabet.
#[inline]
#[must_use]
pub const fn is_base36(byte: u8) -> bool {
    LOOKUP[byte as usize] != NO_VALUE
}

/// Writes `value` into `buf` as exactly `buf.len()` base36 digits,
/// left-padded with `'0'`.
///
/// Digits are produced from the least significant end, so a value wider than
/// the buffer keeps only its trailing `buf.len()` digits. This truncation is
/// silent. The sign of a negative value is dropped.
#[inline]
pub fn encode_to_buf(value: i64, buf: &mut [u8]) {
    let mut acc = value.unsigned_abs();
    for slot in buf.iter_mut().rev() {
        *slot = ALPHABET[(acc % BASE) as usize];
        acc /= BASE;
    }
}

/// Encodes `value` as exactly `width` base36 characters.
///
/// See [`encode_to_buf`] for the padding and truncation rules.
///
/// # Example
///
/// ```
/// use ferrocuid::base36;
///
/// assert_eq!(base36::encode(42, 4), "0016");
/// // 36^4 needs five digits; only the trailing four are kept.
/// assert_eq!(base36::encode(1_679_616, 4), "0000");
/// ```
#[must_use]
pub fn encode(value: i64, width: usize) -> String {
    let mut buf = vec![b'0'; width];
    encode_to_buf(value, &mut buf);
    buf.into_iter().map(char::from).collect()
}

/// Decodes exactly `width` base36 characters into an integer.
///
/// # Errors
///
/// - [`Base36Error::InvalidLength`] if `text` is not `width` bytes long
/// - [`Base36Error::InvalidAscii`] if a byte is outside `[0-9a-z]`; signs and
///   uppercase letters are rejected
/// - [`Base36Error::Overflow`] if the value does not fit an `i64`
pub fn decode(text: &[u8], width: usize) -> Result<i64, Base36Error> {
    if text.len() != width {
        return Err(Base36Error::InvalidLength {
            expected: width,
            len: text.len(),
        });
    }

    let mut acc = 0_i64;
    for (index, &byte) in text.iter().enumerate() {
        let digit = LOOKUP[byte as usize];
        if digit == NO_VALUE {
            return Err(Base36Error::InvalidAscii { byte, index });
        }
        acc = acc
            .checked_mul(BASE as i64)
            .and_then(|v| v.checked_add(i64::from(digit)))
            .ok_or(Base36Error::Overflow)?;
    }
    Ok(acc)
}
