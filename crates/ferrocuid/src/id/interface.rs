use super::varint::{put_varint, varint};
use crate::{
    Direction, Error, Prefix, RandomStrategy, Result,
    base36::{self, BLOCK_MAX},
};
use core::{fmt, hash::Hash, ops::Range, str::FromStr};

/// Maximum number of counters any family carries.
pub const MAX_COUNTERS: usize = 2;

/// Maximum number of random fields any family carries.
pub const MAX_RANDOM_FIELDS: usize = 2;

/// The logical role of a field inside an identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Milliseconds since the Unix epoch.
    Timestamp,
    /// Host and process fingerprint.
    Fingerprint,
    /// The n-th counter, in generation order.
    Counter(usize),
    /// The n-th random field, in generation order.
    Random(usize),
}

/// A named byte range of an identifier.
///
/// The range is the same in the raw buffer and in the canonical text form:
/// a field of `width` bytes renders to `width` base36 characters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: &'static str,
    pub slot: Slot,
    pub offset: usize,
    pub width: usize,
}

impl Field {
    #[must_use]
    pub const fn new(name: &'static str, slot: Slot, offset: usize, width: usize) -> Self {
        Self {
            name,
            slot,
            offset,
            width,
        }
    }

    /// Byte range of the field.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.width
    }

    /// Exclusive upper bound of values this field can hold: `36^width`.
    #[must_use]
    pub const fn modulus(&self) -> u64 {
        base36::modulus(self.width)
    }

    /// Maps an arbitrary value onto what the field stores.
    ///
    /// Blocks fold into `[0, 36^width)` by absolute value and modulo. The
    /// timestamp stays signed and is kept whole as long as its varint fits
    /// the field (`|ms| < 2^55` for eight bytes); beyond that only the low
    /// `7 * width` bits survive, sign-extended. The text form still shows the
    /// trailing `width` digits only.
    #[must_use]
    pub const fn normalize(&self, value: i64) -> i64 {
        match self.slot {
            Slot::Timestamp => {
                let bits = 7 * self.width;
                if bits >= 64 {
                    value
                } else {
                    let shift = (64 - bits) as u32;
                    (value << shift) >> shift
                }
            }
            _ => (value.unsigned_abs() % self.modulus()) as i64,
        }
    }
}

/// The decoded field values of an identifier.
///
/// Unused counter and random slots of a family are zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Components {
    pub timestamp: i64,
    pub fingerprint: i32,
    pub counters: [i32; MAX_COUNTERS],
    pub random: [i32; MAX_RANDOM_FIELDS],
}

impl Components {
    /// Returns the value held for `slot`, or `0` for an out-of-range index.
    #[must_use]
    pub fn get(&self, slot: Slot) -> i64 {
        match slot {
            Slot::Timestamp => self.timestamp,
            Slot::Fingerprint => i64::from(self.fingerprint),
            Slot::Counter(i) => self.counters.get(i).copied().map_or(0, i64::from),
            Slot::Random(i) => self.random.get(i).copied().map_or(0, i64::from),
        }
    }

    fn set(&mut self, slot: Slot, value: i64) {
        match slot {
            Slot::Timestamp => self.timestamp = value,
            Slot::Fingerprint => self.fingerprint = value as i32,
            Slot::Counter(i) => {
                if let Some(c) = self.counters.get_mut(i) {
                    *c = value as i32;
                }
            }
            Slot::Random(i) => {
                if let Some(r) = self.random.get_mut(i) {
                    *r = value as i32;
                }
            }
        }
    }
}

pub(crate) mod sealed {
    pub trait Sealed: Sized {
        fn zeroed() -> Self;

        fn bytes_mut(&mut self) -> &mut [u8];

        fn registry() -> &'static crate::global::Registry<Self>;
    }
}

/// A fixed-width identifier made of a prefix and base36-renderable integer
/// fields.
///
/// Implemented by [`crate::Cuid`] and [`crate::Guid`]; the two families share
/// every algorithm here and differ only in the associated constants.
///
/// Identifier values are immutable. The `with_*` methods return a modified
/// copy.
pub trait Identifier:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = Error>
    + AsRef<[u8]>
    + Send
    + Sync
    + 'static
{
    /// Short family name used in diagnostics.
    const NAME: &'static str;

    /// Total width in bytes, and in characters of the text form.
    const WIDTH: usize;

    /// Number of prefix bytes.
    const PREFIX_LEN: usize;

    /// The fields after the prefix, in canonical text order. Parsing reports
    /// the first failing field in this order.
    const FIELDS: &'static [Field];

    /// Counter policies, in the order the generator advances them.
    const COUNTERS: &'static [Direction];

    /// How random fields are derived.
    const RANDOM: RandomStrategy;

    /// Number of random fields.
    const RANDOM_FIELDS: usize;

    /// Returns `true` if `prefix` is acceptable for this family.
    fn accepts_prefix(prefix: &[u8]) -> bool;

    /// The prefix stamped onto freshly generated identifiers.
    fn active_prefix() -> Prefix;

    /// The raw fixed-width buffer.
    fn as_bytes(&self) -> &[u8];

    /// The prefix bytes.
    fn prefix(&self) -> &[u8] {
        &self.as_bytes()[..Self::PREFIX_LEN]
    }

    /// Looks up the field for `slot`.
    #[must_use]
    fn field(slot: Slot) -> Option<&'static Field> {
        Self::FIELDS.iter().find(|f| f.slot == slot)
    }

    /// Reads the value of `slot`, or `0` if the family has no such field.
    fn get(&self, slot: Slot) -> i64 {
        Self::field(slot)
            .and_then(|f| varint(&self.as_bytes()[f.range()]))
            .map_or(0, |(v, _)| v)
    }

    /// Returns a copy with `slot` set to `value`, normalised into the field's
    /// range (see [`Field::normalize`]). Unknown slots are ignored.
    #[must_use]
    fn with(mut self, slot: Slot, value: i64) -> Self {
        if let Some(f) = Self::field(slot) {
            let buf = &mut self.bytes_mut()[f.range()];
            buf.fill(0);
            let written = put_varint(buf, f.normalize(value));
            debug_assert!(written.is_some(), "normalized value fits its field");
        }
        self
    }

    /// Milliseconds since the Unix epoch.
    fn timestamp(&self) -> i64 {
        self.get(Slot::Timestamp)
    }

    /// The host and process fingerprint.
    fn fingerprint(&self) -> i32 {
        self.get(Slot::Fingerprint) as i32
    }

    /// The counter at `index`, in generation order.
    fn counter(&self, index: usize) -> i32 {
        self.get(Slot::Counter(index)) as i32
    }

    /// The random field at `index`.
    fn random(&self, index: usize) -> i32 {
        self.get(Slot::Random(index)) as i32
    }

    #[must_use]
    fn with_timestamp(self, millis: i64) -> Self {
        self.with(Slot::Timestamp, millis)
    }

    #[must_use]
    fn with_fingerprint(self, fingerprint: i32) -> Self {
        self.with(Slot::Fingerprint, i64::from(fingerprint))
    }

    #[must_use]
    fn with_counter(self, index: usize, value: i32) -> Self {
        self.with(Slot::Counter(index), i64::from(value))
    }

    #[must_use]
    fn with_random(self, index: usize, value: i32) -> Self {
        self.with(Slot::Random(index), i64::from(value))
    }

    /// Returns a copy carrying `prefix`.
    ///
    /// # Errors
    /// - [`Error::InvalidPrefixLength`] if the prefix length does not match
    ///   the family
    /// - [`Error::UnexpectedPrefix`] if the family rejects the prefix
    fn with_prefix(mut self, prefix: Prefix) -> Result<Self> {
        check_prefix::<Self>(prefix.as_bytes())?;
        self.bytes_mut()[..Self::PREFIX_LEN].copy_from_slice(prefix.as_bytes());
        Ok(self)
    }

    /// Assembles an identifier from a prefix and field values.
    ///
    /// # Errors
    /// Fails like [`Identifier::with_prefix`].
    fn from_components(prefix: Prefix, components: &Components) -> Result<Self> {
        let id = Self::FIELDS
            .iter()
            .fold(Self::zeroed(), |id, f| id.with(f.slot, components.get(f.slot)));
        id.with_prefix(prefix)
    }

    /// Decodes every field.
    fn components(&self) -> Components {
        let mut c = Components::default();
        for f in Self::FIELDS {
            c.set(f.slot, self.get(f.slot));
        }
        c
    }

    /// Writes the canonical text form into `buf`.
    ///
    /// # Panics
    /// Panics if `buf` is shorter than [`Identifier::WIDTH`].
    fn encode_to_buf(&self, buf: &mut [u8]) {
        buf[..Self::PREFIX_LEN].copy_from_slice(self.prefix());
        for f in Self::FIELDS {
            base36::encode_to_buf(self.get(f.slot), &mut buf[f.range()]);
        }
    }

    /// Returns the canonical text form.
    fn encode(&self) -> String {
        let mut buf = vec![0_u8; Self::WIDTH];
        self.encode_to_buf(&mut buf);
        buf.into_iter().map(char::from).collect()
    }

    /// Parses the canonical text form.
    ///
    /// Validates the total length, then the prefix, then decodes each field
    /// in [`Identifier::FIELDS`] order, returning the first failure.
    ///
    /// # Errors
    /// [`Error::InvalidLength`], [`Error::UnexpectedPrefix`] or
    /// [`Error::InvalidField`].
    fn parse(text: &[u8]) -> Result<Self> {
        check_length::<Self>(text)?;
        check_prefix::<Self>(&text[..Self::PREFIX_LEN])?;

        let mut id = Self::zeroed();
        id.bytes_mut()[..Self::PREFIX_LEN].copy_from_slice(&text[..Self::PREFIX_LEN]);
        for f in Self::FIELDS {
            let raw = &text[f.range()];
            let value = base36::decode(raw, f.width).map_err(|source| Error::InvalidField {
                field: f.name,
                text: String::from_utf8_lossy(raw).into_owned(),
                source,
            })?;
            id = id.with(f.slot, value);
        }
        Ok(id)
    }

    /// Parses the canonical text form from a string.
    ///
    /// # Errors
    /// See [`Identifier::parse`].
    fn parse_str(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }

    /// Returns `true` if `s` parses as this family.
    fn is_valid(s: &str) -> bool {
        Self::parse_str(s).is_ok()
    }

    /// Rebuilds an identifier from its raw buffer, the inverse of
    /// [`Identifier::as_bytes`].
    ///
    /// Every field must hold exactly one varint followed by zero padding, so
    /// that each raw buffer maps to a single identifier. Blocks must also be
    /// in `[0, 36^4)`; the timestamp may be any value its field can hold.
    ///
    /// # Errors
    /// [`Error::InvalidLength`], [`Error::UnexpectedPrefix`] or
    /// [`Error::MalformedField`].
    fn from_raw_bytes(bytes: &[u8]) -> Result<Self> {
        check_length::<Self>(bytes)?;
        check_prefix::<Self>(&bytes[..Self::PREFIX_LEN])?;

        let mut id = Self::zeroed();
        id.bytes_mut()[..Self::PREFIX_LEN].copy_from_slice(&bytes[..Self::PREFIX_LEN]);
        for f in Self::FIELDS {
            let raw = &bytes[f.range()];
            let malformed = Error::MalformedField { field: f.name };
            let (value, _) = varint(raw).ok_or_else(|| malformed.clone())?;
            if f.normalize(value) != value {
                return Err(malformed);
            }
            id = id.with(f.slot, value);
            if &id.as_bytes()[f.range()] != raw {
                return Err(malformed);
            }
        }
        Ok(id)
    }
}

fn check_length<ID: Identifier>(input: &[u8]) -> Result<()> {
    if input.len() == ID::WIDTH {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            expected: ID::WIDTH,
            len: input.len(),
        })
    }
}

pub(crate) fn check_prefix<ID: Identifier>(prefix: &[u8]) -> Result<()> {
    if prefix.len() != ID::PREFIX_LEN {
        return Err(Error::InvalidPrefixLength {
            expected: ID::PREFIX_LEN,
            len: prefix.len(),
        });
    }
    if ID::accepts_prefix(prefix) {
        Ok(())
    } else {
        Err(Error::UnexpectedPrefix {
            prefix: String::from_utf8_lossy(prefix).into_owned(),
        })
    }
}

const _: () = assert!(BLOCK_MAX as u64 == base36::modulus(base36::BLOCK_SIZE));
