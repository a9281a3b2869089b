use super::invariant::InvariantParse;
use crate::error::ParseError;

/// Parse a numeric token that may use either `.` or `,` as its decimal
/// separator.
///
/// The token is first tried as-is under the invariant convention. If that
/// fails and the token contains exactly one of the two ambiguous separator
/// characters, it is retried once with that separator swapped for the
/// opposite one. A token containing both separators is rejected outright,
/// so grouped input like `"1,234.5"` never parses as a number.
///
/// # Examples
/// ```
/// use lenient_utils::numeric::parse_number;
///
/// assert_eq!(parse_number::<f64>("3.25"), Ok(3.25));
/// assert_eq!(parse_number::<f64>("3,25"), Ok(3.25));
/// assert_eq!(parse_number::<i32>("42"), Ok(42));
/// assert!(parse_number::<f64>("1,234.5").is_err());
/// ```
pub fn parse_number<T: InvariantParse>(token: &str) -> crate::Result<T> {
    if let Some(value) = T::parse_invariant(token) {
        return Ok(value);
    }

    let swapped = match (token.contains(','), token.contains('.')) {
        (true, false) => token.replace(',', "."),
        (false, true) => token.replace('.', ","),
        // Both separators present, or neither: nothing to retry.
        _ => return Err(malformed(token)),
    };

    log::debug!(
        "Token '{}' failed invariant parse, retrying as '{}'",
        token,
        swapped
    );

    T::parse_invariant(&swapped).ok_or_else(|| malformed(token))
}

fn malformed(token: &str) -> ParseError {
    ParseError::Malformed {
        token: token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::QuickCheck;

    #[test]
    fn test_invariant_tokens_parse_as_is() {
        assert_eq!(parse_number::<f64>("3.25"), Ok(3.25));
        assert_eq!(parse_number::<f64>("-0.5"), Ok(-0.5));
        assert_eq!(parse_number::<f64>(".5"), Ok(0.5));
        assert_eq!(parse_number::<i64>("12345"), Ok(12345));
        assert_eq!(parse_number::<u32>("0"), Ok(0));
    }

    #[test]
    fn test_comma_token_parses_via_swap() {
        assert_eq!(parse_number::<f64>("3,25"), Ok(3.25));
        assert_eq!(parse_number::<f64>("-2,5"), Ok(-2.5));
        assert_eq!(parse_number::<f32>("0,125"), Ok(0.125));
    }

    #[test]
    fn test_both_separators_fail() {
        assert_eq!(
            parse_number::<f64>("1,234.5"),
            Err(ParseError::Malformed {
                token: "1,234.5".to_string()
            })
        );
        assert!(parse_number::<f64>("1.234,5").is_err());
    }

    #[test]
    fn test_empty_and_garbage_fail() {
        assert!(parse_number::<f64>("").is_err());
        assert!(parse_number::<f64>("abc").is_err());
        assert!(parse_number::<i32>("12a").is_err());
        // No separator means no retry, just a failure.
        assert!(parse_number::<i32>("forty").is_err());
    }

    #[test]
    fn test_fractional_token_fails_for_integer_types() {
        // The swap-back attempt ("1,5") can never satisfy an integer parse,
        // so the two-attempt contract ends in failure.
        assert!(parse_number::<i32>("1.5").is_err());
        assert!(parse_number::<i32>("1,5").is_err());
    }

    #[test]
    fn test_repeated_separators_fail() {
        assert!(parse_number::<f64>("1,2,3").is_err());
        assert!(parse_number::<f64>("1.2.3").is_err());
    }

    #[test]
    fn test_error_carries_original_token() {
        let err = parse_number::<f64>("x,y").unwrap_err();
        assert_eq!(err.token(), "x,y");
    }

    #[test]
    fn test_roundtrip_invariant_tokens_quickcheck() {
        fn prop(value: i64) -> bool {
            parse_number::<i64>(&value.to_string()) == Ok(value)
        }
        QuickCheck::new().quickcheck(prop as fn(i64) -> bool);
    }

    #[test]
    fn test_comma_token_matches_dot_token_quickcheck() {
        fn prop(int_part: i16, frac_part: u16) -> bool {
            let dot = format!("{}.{}", int_part, frac_part);
            let comma = format!("{},{}", int_part, frac_part);
            parse_number::<f64>(&comma) == parse_number::<f64>(&dot)
        }
        QuickCheck::new().quickcheck(prop as fn(i16, u16) -> bool);
    }
}
