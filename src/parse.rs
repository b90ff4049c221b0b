use lazy_static::lazy_static;
use regex::Regex;

// <bool>   ::= true | false                          (case-insensitive)
// <int>    ::= [+-]? digit+                          (must fit i32)
// <double> ::= [+-]? ( digit+ [. digit*] | . digit+ ) [ (e|E) [+-]? digit+ ]

// No surrounding whitespace is tolerated anywhere, and the special float
// spellings (inf, nan) are not part of the grammar.

lazy_static! {
    static ref INT_REGEX: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
    static ref DOUBLE_REGEX: Regex =
        Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$").unwrap();
}

pub fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        return Some(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Some(false);
    }
    None
}

pub fn parse_int(text: &str) -> Option<i32> {
    match INT_REGEX.is_match(text) {
        true => text.parse().ok(),
        false => None,
    }
}

pub fn parse_double(text: &str) -> Option<f64> {
    match DOUBLE_REGEX.is_match(text) {
        true => text.parse().ok(),
        false => None,
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("tRuE"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("False"), Some(false));

        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool("t"), None);
        assert_eq!(parse_bool(" true"), None);
        assert_eq!(parse_bool("true "), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn test_int() {
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("-13"), Some(-13));
        assert_eq!(parse_int("2147483647"), Some(i32::MAX));
        assert_eq!(parse_int("-2147483648"), Some(i32::MIN));

        assert_eq!(parse_int("2147483648"), None);
        assert_eq!(parse_int("-2147483649"), None);
        assert_eq!(parse_int("12.5"), None);
        assert_eq!(parse_int(" 7"), None);
        assert_eq!(parse_int("7 "), None);
        assert_eq!(parse_int("0x10"), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("+"), None);
    }

    #[test]
    fn test_double() {
        assert_eq!(parse_double("3.14"), Some(3.14));
        assert_eq!(parse_double("-2"), Some(-2.0));
        assert_eq!(parse_double("1e10"), Some(1e10));
        assert_eq!(parse_double("2.5E-3"), Some(2.5e-3));
        assert_eq!(parse_double("+.5"), Some(0.5));
        assert_eq!(parse_double("2."), Some(2.0));
        assert_eq!(parse_double("0"), Some(0.0));

        assert_eq!(parse_double("abc"), None);
        assert_eq!(parse_double("inf"), None);
        assert_eq!(parse_double("NaN"), None);
        assert_eq!(parse_double("1e"), None);
        assert_eq!(parse_double("."), None);
        assert_eq!(parse_double("1.2.3"), None);
        assert_eq!(parse_double(" 1"), None);
        assert_eq!(parse_double(""), None);
    }
}
