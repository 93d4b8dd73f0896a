//! Zig-zag LEB128 packing of signed integers into fixed byte fields.
//!
//! Each byte carries seven value bits; the high bit marks a continuation.
//! Signed values are zig-zag mapped first so small magnitudes stay short.

const CONTINUATION: u8 = 0x80;
const PAYLOAD: u8 = 0x7f;

/// Writes `value` into the front of `buf`, returning the bytes written, or
/// `None` if `buf` is too small. Bytes past the returned length are left
/// untouched.
pub(crate) fn put_varint(buf: &mut [u8], value: i64) -> Option<usize> {
    let mut ux = ((value << 1) ^ (value >> 63)) as u64;
    let mut written = 0;
    loop {
        let slot = buf.get_mut(written)?;
        written += 1;
        if ux < u64::from(CONTINUATION) {
            *slot = ux as u8;
            return Some(written);
        }
        *slot = (ux as u8 & PAYLOAD) | CONTINUATION;
        ux >>= 7;
    }
}

/// Reads a varint from the front of `buf`, returning the value and the bytes
/// consumed, or `None` if the buffer ends mid-value or the value overflows.
pub(crate) fn varint(buf: &[u8]) -> Option<(i64, usize)> {
    let mut ux = 0_u64;
    let mut shift = 0_u32;
    for (i, &b) in buf.iter().enumerate() {
        if shift >= 64 {
            return None;
        }
        ux |= u64::from(b & PAYLOAD) << shift;
        if b < CONTINUATION {
            let value = (ux >> 1) as i64;
            let value = if ux & 1 == 0 { value } else { !value };
            return Some((value, i + 1));
        }
        shift += 7;
    }
    None
}
