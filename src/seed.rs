/// Parses a seed the way C's `atoi` reads a number, then reinterprets it as unsigned.
///
/// Leading whitespace and one optional sign are skipped, then decimal digits are consumed up to
/// the first non-digit. Input without digits yields 0. The value wraps as a 32-bit signed
/// integer, so `-1` becomes `4294967295`.
///
/// # Example
/// ```
/// # use biasgen::parse_seed;
/// assert_eq!(parse_seed("42"), 42);
/// assert_eq!(parse_seed("  17abc"), 17);
/// assert_eq!(parse_seed("seed"), 0);
/// ```
pub fn parse_seed(text: &str) -> u64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i32, |acc, digit| {
            acc.wrapping_mul(10).wrapping_add(i32::from(digit - b'0'))
        });
    let value = if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    };
    u64::from(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_seeds() {
        assert_eq!(parse_seed("0"), 0);
        assert_eq!(parse_seed("1234"), 1234);
        assert_eq!(parse_seed("+9"), 9);
        assert_eq!(parse_seed("\t 007"), 7);
    }

    #[test]
    fn malformed_seeds_fall_back() {
        assert_eq!(parse_seed(""), 0);
        assert_eq!(parse_seed("abc"), 0);
        assert_eq!(parse_seed("-"), 0);
        assert_eq!(parse_seed("12.5"), 12);
        assert_eq!(parse_seed("3 4"), 3);
        assert_eq!(parse_seed("--3"), 0);
    }

    #[test]
    fn negative_and_oversized_seeds_wrap() {
        assert_eq!(parse_seed("-1"), 4294967295);
        assert_eq!(parse_seed("-2147483648"), 2147483648);
        assert_eq!(parse_seed("4294967296"), 0);
        assert_eq!(parse_seed("4294967297"), 1);
    }
}
