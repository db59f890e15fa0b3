use nom::{
    character::complete::digit1,
    combinator::{map_res, verify},
};

use crate::parser::ParseResult;

fn accumulate_decimal(digits: &[u8]) -> Result<u64, &'static str> {
    digits.iter().try_fold(0u64, |acc, &d| {
        acc.checked_mul(10)
            .and_then(|a| a.checked_add(u64::from(d - b'0')))
            .ok_or("integer overflow")
    })
}

/// Scans one or more ASCII digits and returns the value as `u64`.
///
/// Fails with an "invalid integer" error on zero digits. Accumulation is
/// checked: a digit run whose value exceeds `u64::MAX` is rejected rather
/// than silently wrapped.
pub fn parse_non_neg_int(input: &[u8]) -> ParseResult<u64> {
    map_res(digit1, accumulate_decimal)(input)
}

/// Like [`parse_non_neg_int`], but additionally rejects a leading zero,
/// so the scanned value is always positive.
pub fn parse_pos_int(input: &[u8]) -> ParseResult<u64> {
    map_res(
        verify(digit1, |digits: &[u8]| digits[0] != b'0'),
        accumulate_decimal,
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_non_neg_int() {
        let (rem, val) = parse_non_neg_int(b"5060;branch=x").unwrap();
        assert_eq!(val, 5060);
        assert_eq!(rem, b";branch=x");

        let (rem, val) = parse_non_neg_int(b"0").unwrap();
        assert_eq!(val, 0);
        assert_eq!(rem, b"");

        // Leading zeros are tolerated here
        let (_, val) = parse_non_neg_int(b"007").unwrap();
        assert_eq!(val, 7);

        assert!(parse_non_neg_int(b"").is_err());
        assert!(parse_non_neg_int(b"abc").is_err());
        assert!(parse_non_neg_int(b"-1").is_err());
    }

    #[test]
    fn test_parse_pos_int() {
        let (rem, val) = parse_pos_int(b"255 rest").unwrap();
        assert_eq!(val, 255);
        assert_eq!(rem, b" rest");

        // A leading zero is rejected, whether sole or first digit
        assert!(parse_pos_int(b"0").is_err());
        assert!(parse_pos_int(b"0123").is_err());
        assert!(parse_pos_int(b"").is_err());
        assert!(parse_pos_int(b"x1").is_err());
    }

    #[test]
    fn test_overflow_is_an_error() {
        // u64::MAX fits, one past it does not
        let (_, val) = parse_non_neg_int(b"18446744073709551615").unwrap();
        assert_eq!(val, u64::MAX);
        assert!(parse_non_neg_int(b"18446744073709551616").is_err());
        assert!(parse_pos_int(b"99999999999999999999999999").is_err());
    }
}
