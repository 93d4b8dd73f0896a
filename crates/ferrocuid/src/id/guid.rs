use crate::{Direction, Field, Identifier, Prefix, RandomStrategy, Slot, base36::is_base36, global};

define_identifier!(
    /// A 26-byte collision-resistant identifier with a namespace prefix.
    ///
    /// ```text
    ///  offset:  0      2          10         14         18         22        26
    ///           +------+----------+----------+----------+----------+----------+
    ///  field:   | pfx  | time (8) | fprnt(4) |  incr(4) |  decr(4) | rand (4) |
    ///           +------+----------+----------+----------+----------+----------+
    /// ```
    ///
    /// The two prefix bytes default to `nw` and can be configured once per
    /// process with [`crate::set_prefix_bytes`], or per identifier with
    /// [`crate::IdOption::Prefix`]. An increasing and a decreasing counter
    /// are advanced under separate locks, and one random block is derived with
    /// [`RandomStrategy::Xorshift`].
    Guid, width: 26
);

impl Guid {
    /// A fixed, meaningless identifier for tests. Renders as
    /// `test0test0test0test0test00`.
    pub const TEST: Self = Self([
        0x74, 0x65, // prefix
        0xa8, 0xd9, 0xac, 0xde, 0xb2, 0x83, 0x01, 0x00, // time
        0xda, 0xc0, 0xa7, 0x01, // fingerprint
        0xc8, 0xd3, 0x04, 0x00, // incr
        0xc4, 0xa5, 0xa5, 0x01, // decr
        0xa0, 0x87, 0xa4, 0x01, // random
    ]);
}

impl Identifier for Guid {
    const NAME: &'static str = "guid";
    const WIDTH: usize = 26;
    const PREFIX_LEN: usize = 2;
    const FIELDS: &'static [Field] = &[
        Field::new("time", Slot::Timestamp, 2, 8),
        Field::new("fingerprint", Slot::Fingerprint, 10, 4),
        Field::new("increment counter", Slot::Counter(0), 14, 4),
        Field::new("decrement counter", Slot::Counter(1), 18, 4),
        Field::new("random", Slot::Random(0), 22, 4),
    ];
    const COUNTERS: &'static [Direction] = &[Direction::Up, Direction::Down];
    const RANDOM: RandomStrategy = RandomStrategy::Xorshift;
    const RANDOM_FIELDS: usize = 1;

    fn accepts_prefix(prefix: &[u8]) -> bool {
        prefix.len() == Self::PREFIX_LEN && prefix.iter().all(|&b| is_base36(b))
    }

    fn active_prefix() -> Prefix {
        global::active_prefix()
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Components, Error};

    fn sample() -> Guid {
        Guid::from_components(
            Prefix::new(b'a', b'b').unwrap(),
            &Components {
                timestamp: 1_700_000_000_000,
                fingerprint: 77,
                counters: [1, 1_679_615],
                random: [1_056_784, 0],
            },
        )
        .unwrap()
    }

    #[test]
    fn test_constant_renders_reference_text() {
        assert_eq!(Guid::TEST.to_string(), "test0test0test0test0test00");
        assert_eq!(Guid::TEST.prefix(), b"te");
        assert_eq!(Guid::TEST.timestamp(), 2_257_372_681_812);
        assert_eq!(Guid::TEST.fingerprint(), 1_372_205);
        assert_eq!(Guid::TEST.counter(0), 38_116);
        assert_eq!(Guid::TEST.counter(1), 1_354_082);
        assert_eq!(Guid::TEST.random(0), 1_343_952);
    }

    #[test]
    fn test_constant_parses_back_to_itself() {
        assert_eq!(Guid::parse_str("test0test0test0test0test00"), Ok(Guid::TEST));
        assert_eq!(Guid::from_raw_bytes(&Guid::TEST.to_bytes()), Ok(Guid::TEST));
    }

    #[test]
    fn layout_renders_in_field_order() {
        assert_eq!(sample().to_string(), "abloyw3v2800250001zzzzmnf4");
    }

    #[test]
    fn round_trips() {
        let id = sample();
        assert_eq!(id.to_string().parse::<Guid>(), Ok(id));
        assert_eq!(Guid::try_from(id.as_bytes()), Ok(id));
        assert_eq!(String::from(id), id.to_string());
    }

    #[test]
    fn accepts_any_base36_prefix() {
        let text = sample().to_string();
        for prefix in ["nw", "z9", "00", "te"] {
            let candidate = format!("{prefix}{}", &text[2..]);
            let id = Guid::parse_str(&candidate).unwrap();
            assert_eq!(id.prefix(), prefix.as_bytes());
        }
    }

    #[test]
    fn rejects_prefix_outside_alphabet() {
        let text = sample().to_string();
        for prefix in ["NW", "n-", "_a"] {
            let candidate = format!("{prefix}{}", &text[2..]);
            assert!(
                matches!(Guid::parse_str(&candidate), Err(Error::UnexpectedPrefix { .. })),
                "prefix {prefix}"
            );
        }
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            Guid::parse_str("test0test0test0test0test0"),
            Err(Error::InvalidLength {
                expected: 26,
                len: 25
            })
        );
        assert_eq!(
            Guid::from_raw_bytes(&[0; 25]),
            Err(Error::InvalidLength {
                expected: 26,
                len: 25
            })
        );
    }

    #[test]
    fn validation_order_is_time_first() {
        let mut text = sample().to_string().into_bytes();
        text[24] = b'#';
        text[3] = b'#';
        assert!(matches!(
            Guid::parse(&text),
            Err(Error::InvalidField { field: "time", .. })
        ));
    }

    #[test]
    fn fingerprint_is_checked_before_counters() {
        let mut text = sample().to_string().into_bytes();
        text[15] = b'#';
        text[11] = b'#';
        assert!(matches!(
            Guid::parse(&text),
            Err(Error::InvalidField {
                field: "fingerprint",
                ..
            })
        ));
    }

    #[test]
    fn with_prefix_rejects_wrong_length() {
        assert_eq!(
            sample().with_prefix(Prefix::CUID),
            Err(Error::InvalidPrefixLength {
                expected: 2,
                len: 1
            })
        );
        let renamed = sample().with_prefix(Prefix::new(b'z', b'9').unwrap()).unwrap();
        assert!(renamed.to_string().starts_with("z9"));
    }

    #[test]
    fn fields_tile_the_buffer() {
        let mut end = Guid::PREFIX_LEN;
        for f in Guid::FIELDS {
            assert_eq!(f.offset, end, "field {}", f.name);
            end = f.range().end;
        }
        assert_eq!(end, Guid::WIDTH);
    }
}
