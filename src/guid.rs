use std::{fmt, ops, str};

/// Represents a 128-bit globally unique identifier.
///
/// The inner bytes are compared lexicographically, which is also the order of the hexadecimal
/// string representations.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Guid([u8; 16]);

/// Named textual layouts of a [`Guid`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Format {
    /// The 8-4-4-4-12 layout: `01234567-89ab-cdef-0011-223344556677`
    Hyphenated,

    /// 32 contiguous hexadecimal digits: `0123456789abcdef0011223344556677`
    Simple,

    /// The hyphenated layout surrounded by braces: `{01234567-89ab-cdef-0011-223344556677}`
    Braced,

    /// The hyphenated layout surrounded by parentheses: `(01234567-89ab-cdef-0011-223344556677)`
    Parenthesized,
}

impl Guid {
    /// Nil GUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max GUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqguid::Guid;
    ///
    /// let x = "01809424-3e59-4c05-9219-566f82fff672".parse::<Guid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "01809424-3e59-4c05-9219-566f82fff672");
    /// assert_eq!(format!("{}", y), "01809424-3e59-4c05-9219-566f82fff672");
    /// # Ok::<(), seqguid::ParseError>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        self.encode_format(Format::Hyphenated)
    }

    /// Returns the string representation in the named layout, stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqguid::{Format, Guid};
    ///
    /// let x = "01809424-3e59-4c05-9219-566f82fff672".parse::<Guid>()?;
    /// assert_eq!(
    ///     &x.encode_format(Format::Braced) as &str,
    ///     "{01809424-3e59-4c05-9219-566f82fff672}"
    /// );
    /// # Ok::<(), seqguid::ParseError>(())
    /// ```
    pub fn encode_format(&self, format: Format) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 38];
        let mut pos = 0;
        match format {
            Format::Braced => {
                buffer[0] = b'{';
                pos = 1;
            }
            Format::Parenthesized => {
                buffer[0] = b'(';
                pos = 1;
            }
            _ => {}
        }
        for i in 0..16 {
            let e = self.0[i] as usize;
            buffer[pos] = DIGITS[e >> 4];
            buffer[pos + 1] = DIGITS[e & 15];
            pos += 2;
            if !matches!(format, Format::Simple) && (i == 3 || i == 5 || i == 7 || i == 9) {
                buffer[pos] = b'-';
                pos += 1;
            }
        }
        match format {
            Format::Braced => {
                buffer[pos] = b'}';
                pos += 1;
            }
            Format::Parenthesized => {
                buffer[pos] = b')';
                pos += 1;
            }
            _ => {}
        }
        debug_assert!(buffer[..pos].is_ascii());
        GuidStr { buffer, len: pos }
    }

    /// Creates an object from the string representation in the named layout, rejecting input that
    /// conforms to any other layout.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqguid::{Format, Guid};
    ///
    /// let x = Guid::parse_exact("0123456789abcdef0011223344556677", Format::Simple)?;
    /// assert!(Guid::parse_exact("0123456789abcdef0011223344556677", Format::Braced).is_err());
    /// # Ok::<(), seqguid::ParseError>(())
    /// ```
    pub fn parse_exact(src: &str, format: Format) -> Result<Self, ParseError> {
        const ERR: ParseError = ParseError {};

        let (digits, hyphens) = match format {
            Format::Hyphenated => (src, true),
            Format::Simple => (src, false),
            Format::Braced => (
                src.strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                    .ok_or(ERR)?,
                true,
            ),
            Format::Parenthesized => (
                src.strip_prefix('(')
                    .and_then(|s| s.strip_suffix(')'))
                    .ok_or(ERR)?,
                true,
            ),
        };

        let mut dst = [0u8; 16];
        let mut iter = digits.chars();
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            let lo = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            *e = (hi << 4) | lo;
            if hyphens && (i == 3 || i == 5 || i == 7 || i == 9) && iter.next().ok_or(ERR)? != '-' {
                return Err(ERR);
            }
        }
        if iter.next().is_none() {
            Ok(Self(dst))
        } else {
            Err(ERR)
        }
    }
}

impl fmt::Display for Guid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Guid {
    type Err = ParseError;

    /// Creates an object from the string representation in any of the named layouts, chosen by
    /// the shape of the input.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let format = match (src.len(), src.as_bytes().first()) {
            (32, _) => Format::Simple,
            (36, _) => Format::Hyphenated,
            (38, Some(b'{')) => Format::Braced,
            (38, Some(b'(')) => Format::Parenthesized,
            _ => return Err(ParseError {}),
        };
        Self::parse_exact(src, format)
    }
}

impl From<Guid> for [u8; 16] {
    fn from(src: Guid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Guid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Guid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Guid> for u128 {
    fn from(src: Guid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Guid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Guid> for String {
    fn from(src: Guid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Guid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// Concrete return type of the encode methods containing the stack-allocated string
/// representation.
struct GuidStr {
    buffer: [u8; 38],
    len: usize,
}

impl ops::Deref for GuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.buffer[..self.len].is_ascii());
        unsafe { str::from_utf8_unchecked(&self.buffer[..self.len]) }
    }
}

impl fmt::Display for GuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

/// Error parsing an invalid string representation of GUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid GUID string representation")
    }
}

impl std::error::Error for ParseError {}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Guid;

    impl From<Guid> for uuid::Uuid {
        fn from(src: Guid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Guid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Guid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Guid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Guid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Guid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a GUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Guid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "0180ae59-078c-4b80-b113-2fe14a615fb3",
                    &[
                        1, 128, 174, 89, 7, 140, 75, 128, 177, 19, 47, 225, 74, 97, 95, 179,
                    ],
                ),
                (
                    "e12b92e1-3ad3-4b4a-8be4-9bc6665b33fd",
                    &[
                        225, 43, 146, 225, 58, 211, 75, 74, 139, 228, 155, 198, 102, 91, 51, 253,
                    ],
                ),
                (
                    "52d5a429-77b4-4f6b-8e27-a955da5e5fe8",
                    &[
                        82, 213, 164, 41, 119, 180, 79, 107, 142, 39, 169, 85, 218, 94, 95, 232,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Guid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }
    }
}
