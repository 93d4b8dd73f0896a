use crate::{
    Direction, Field, Identifier, Prefix, RandomStrategy, Slot,
    base36::{self, BASE},
};

define_identifier!(
    /// A 25-byte collision-resistant identifier.
    ///
    /// ```text
    ///  offset:  0   1          9          13         17         21        25
    ///           +---+----------+----------+----------+----------+----------+
    ///  field:   | c | time (8) | count(4) | fprnt(4) | rand0(4) | rand1(4) |
    ///           +---+----------+----------+----------+----------+----------+
    /// ```
    ///
    /// The prefix is always `c`. A single increasing counter disambiguates
    /// identifiers minted in the same millisecond, and two random blocks are
    /// derived with [`RandomStrategy::MultiplyShift`].
    ///
    /// # Example
    /// ```
    /// use ferrocuid::{Cuid, Identifier};
    ///
    /// let id = ferrocuid::cuid().unwrap();
    /// let text = id.to_string();
    /// assert_eq!(text.len(), Cuid::WIDTH);
    /// assert!(text.starts_with('c'));
    /// assert_eq!(text.parse::<Cuid>().unwrap(), id);
    /// ```
    Cuid, width: 25
);

impl Identifier for Cuid {
    const NAME: &'static str = "cuid";
    const WIDTH: usize = 25;
    const PREFIX_LEN: usize = 1;
    const FIELDS: &'static [Field] = &[
        Field::new("time", Slot::Timestamp, 1, 8),
        Field::new("counter", Slot::Counter(0), 9, 4),
        Field::new("fingerprint", Slot::Fingerprint, 13, 4),
        Field::new("random", Slot::Random(0), 17, 4),
        Field::new("random", Slot::Random(1), 21, 4),
    ];
    const COUNTERS: &'static [Direction] = &[Direction::Up];
    const RANDOM: RandomStrategy = RandomStrategy::MultiplyShift;
    const RANDOM_FIELDS: usize = 2;

    fn accepts_prefix(prefix: &[u8]) -> bool {
        prefix == Prefix::CUID.as_bytes()
    }

    fn active_prefix() -> Prefix {
        Prefix::CUID
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Cuid {
    /// Returns a short, lossy form suitable for URLs or small documents.
    ///
    /// The slug keeps the last two timestamp digits, the counter, the first
    /// and last fingerprint digits, and the last two digits of the first
    /// random block, all without padding. It is at most 10 characters and the
    /// original identifier cannot be recovered from it.
    ///
    /// # Example
    /// ```
    /// use ferrocuid::{Cuid, Identifier};
    ///
    /// let id: Cuid = "ckjdigao0001a0xyz00ab0cde".parse().unwrap();
    /// assert_eq!(id.slug(), "o01axzab");
    /// ```
    #[must_use]
    pub fn slug(&self) -> String {
        let time = unpadded(self.timestamp());
        let counter = unpadded(i64::from(self.counter(0)));
        let fingerprint = unpadded(i64::from(self.fingerprint()));
        let random = unpadded(i64::from(self.random(0)));

        let mut out = String::with_capacity(10);
        out.push_str(tail(&time, 2));
        out.push_str(tail(&counter, 4));
        out.push_str(&fingerprint[..1]);
        out.push_str(&fingerprint[fingerprint.len() - 1..]);
        out.push_str(tail(&random, 2));
        out
    }
}

/// Base36 digits of a non-negative value without padding; `0` renders as
/// `"0"`.
fn unpadded(value: i64) -> String {
    let mut width = 1;
    let mut rest = value.unsigned_abs() / BASE;
    while rest > 0 {
        width += 1;
        rest /= BASE;
    }
    base36::encode(value, width)
}

fn tail(s: &str, n: usize) -> &str {
    &s[s.len().saturating_sub(n)..]
}
