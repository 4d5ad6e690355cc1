//! Deterministic scalar and byte-sequence to text conversion.
//!
//! All helpers are pure and locale-independent: integers render in base 10
//! with a leading `-` for negatives and no padding or separators, booleans
//! render as the literals `true` / `false`, and byte sequences render as
//! uppercase hex with two characters per byte.

use std::fmt::Write;

macro_rules! int_str {
    ($($name:ident => $ty:ty),+ $(,)?) => {
        $(
            #[doc = concat!("Base-10 text for a `", stringify!($ty), "` value.")]
            pub fn $name(value: $ty) -> String {
                value.to_string()
            }
        )+
    };
}

int_str! {
    i8_str => i8,
    i16_str => i16,
    i32_str => i32,
    i64_str => i64,
    u8_str => u8,
    u16_str => u16,
    u32_str => u32,
    u64_str => u64,
}

/// Exactly `"true"` or `"false"`.
pub fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Uppercase hex rendering of a byte sequence, two zero-padded characters per
/// byte, no separators. Empty input produces an empty string.
pub fn bytes_hexstr(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        // Writing into a String cannot fail.
        let _ = write!(out, "{byte:02X}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn signed_extremes_round_trip_through_parse() {
        for value in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert_eq!(i32_str(value).parse::<i32>().unwrap(), value);
        }
        assert_eq!(i64_str(i64::MIN), "-9223372036854775808");
        assert_eq!(i64_str(i64::MAX), "9223372036854775807");
        assert_eq!(i8_str(-128), "-128");
        assert_eq!(i16_str(i16::MIN), "-32768");
    }

    #[test]
    fn unsigned_extremes() {
        assert_eq!(u8_str(0), "0");
        assert_eq!(u8_str(u8::MAX), "255");
        assert_eq!(u16_str(u16::MAX), "65535");
        assert_eq!(u32_str(u32::MAX), "4294967295");
        assert_eq!(u64_str(u64::MAX), "18446744073709551615");
    }

    #[test]
    fn no_leading_zeros_or_separators() {
        assert_eq!(i32_str(1000000), "1000000");
        assert_eq!(u32_str(42), "42");
        assert_eq!(i32_str(-7), "-7");
    }

    #[test]
    fn bool_literals() {
        assert_eq!(bool_str(true), "true");
        assert_eq!(bool_str(false), "false");
    }

    #[test]
    fn hexstr_is_uppercase_and_zero_padded() {
        assert_eq!(bytes_hexstr(&[]), "");
        assert_eq!(bytes_hexstr(&[0x0A, 0xFF]), "0AFF");
        assert_eq!(bytes_hexstr(&[0x00]), "00");
        assert_eq!(bytes_hexstr(&[0xDE, 0xAD, 0xBE, 0xEF]), "DEADBEEF");
    }
}
