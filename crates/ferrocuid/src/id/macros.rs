/// Defines a fixed-width identifier newtype and the trait impls every family
/// shares. The family-specific [`crate::Identifier`] impl is written next to
/// the invocation.
///
/// ```text
/// define_identifier!(
///     <TypeName>, width: <bytes>
/// );
/// ```
macro_rules! define_identifier {
    (
        $(#[$meta:meta])*
        $name:ident, width: $width:expr
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        pub struct $name([u8; $width]);

        impl $crate::id::sealed::Sealed for $name {
            fn zeroed() -> Self {
                Self([0; $width])
            }

            fn bytes_mut(&mut self) -> &mut [u8] {
                &mut self.0
            }

            fn registry() -> &'static $crate::global::Registry<Self> {
                static REGISTRY: std::sync::OnceLock<$crate::global::Registry<$name>> =
                    std::sync::OnceLock::new();
                REGISTRY.get_or_init($crate::global::Registry::with_default_generator)
            }
        }

        impl $name {
            /// Copies out the raw buffer.
            #[must_use]
            pub const fn to_bytes(&self) -> [u8; $width] {
                self.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let mut buf = [0_u8; $width];
                $crate::Identifier::encode_to_buf(self, &mut buf);
                f.write_str(core::str::from_utf8(&buf).map_err(|_| core::fmt::Error)?)
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}({self})", stringify!($name))
            }
        }

        // Canonical text order: fixed width, zero padded, ascending alphabet.
        // Timestamps outside the text range share text with others, so ties
        // fall back to the raw buffer to stay consistent with `Eq`.
        impl Ord for $name {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                let mut a = [0_u8; $width];
                let mut b = [0_u8; $width];
                $crate::Identifier::encode_to_buf(self, &mut a);
                $crate::Identifier::encode_to_buf(other, &mut b);
                a.cmp(&b).then_with(|| self.0.cmp(&other.0))
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> $crate::Result<Self> {
                <Self as $crate::Identifier>::parse_str(s)
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = $crate::Error;

            /// Interprets `bytes` as the raw buffer.
            fn try_from(bytes: &[u8]) -> $crate::Result<Self> {
                <Self as $crate::Identifier>::from_raw_bytes(bytes)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                $crate::Identifier::encode(&id)
            }
        }

        #[cfg(feature = "serde")]
        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                $crate::serde::serialize(self, s)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(d: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::serde::deserialize(d)
            }
        }
    };
}
