//! `serde` support shared by every identifier family.
//!
//! Human-readable formats (JSON, TOML, YAML) carry the canonical text form.
//! Binary formats carry the raw fixed-width buffer. Deserialisation accepts
//! either representation from any format.

use crate::Identifier;
use ::serde::{Deserializer, Serializer, de};
use core::{fmt, marker::PhantomData};

/// Serializes `id` as text for human-readable formats, raw bytes otherwise.
pub fn serialize<ID, S>(id: &ID, s: S) -> Result<S::Ok, S::Error>
where
    ID: Identifier,
    S: Serializer,
{
    if s.is_human_readable() {
        let mut buf = [0_u8; 32];
        let text = &mut buf[..ID::WIDTH];
        id.encode_to_buf(text);
        let text = core::str::from_utf8(text)
            .map_err(<S::Error as ::serde::ser::Error>::custom)?;
        s.serialize_str(text)
    } else {
        s.serialize_bytes(id.as_bytes())
    }
}

/// Deserializes an identifier from its text form or its raw bytes.
pub fn deserialize<'de, ID, D>(d: D) -> Result<ID, D::Error>
where
    ID: Identifier,
    D: Deserializer<'de>,
{
    struct IdVisitor<ID>(PhantomData<ID>);

    impl<ID: Identifier> de::Visitor<'_> for IdVisitor<ID> {
        type Value = ID;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                formatter,
                "a {}-character {} string or its raw bytes",
                ID::WIDTH,
                ID::NAME
            )
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            ID::parse_str(v).map_err(E::custom)
        }

        fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            ID::from_raw_bytes(v).map_err(E::custom)
        }
    }

    if d.is_human_readable() {
        d.deserialize_str(IdVisitor(PhantomData))
    } else {
        d.deserialize_bytes(IdVisitor(PhantomData))
    }
}
