use std::fmt::{self, Display, Formatter};

/// Byte encodings a character type can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Ascii,
    Utf16,
}

impl Encoding {
    /// Whether `value` survives an encode/decode round trip unchanged. Works
    /// as a cheap repertoire check: the ASCII encoder substitutes `?` for any
    /// character outside its range, so such strings fail the comparison.
    pub fn round_trips(&self, value: &str) -> bool {
        match self {
            Self::Ascii => {
                let encoded = value
                    .chars()
                    .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                    .collect::<Vec<_>>();
                let decoded = encoded.iter().map(|&b| b as char).collect::<String>();
                decoded == value
            }
            Self::Utf16 => {
                let encoded = value.encode_utf16().collect::<Vec<_>>();
                String::from_utf16(&encoded).is_ok_and(|decoded| decoded == value)
            }
        }
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascii => "ASCII",
            Self::Utf16 => "UTF-16",
        })
    }
}
