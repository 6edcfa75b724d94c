//! Stored-value coercion.
//! The table stores strings; interpretation happens on read so that invalid
//! input degrades instead of failing the parse.

use std::str::FromStr;
use thiserror::Error;

/// A stored value could not convert to the requested type.
///
/// Only the strict [`lookup`](crate::ArgTable::lookup) accessor surfaces this;
/// the tolerant accessors degrade silently.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {type_name}.")]
pub struct InvalidConversion {
    pub(crate) token: String,
    pub(crate) type_name: &'static str,
}

/// The boolean sense of a stored value: everything is truthy except
/// precisely "0".  The empty value is truthy (a bare flag means enabled).
pub(crate) fn truthy(value: &str) -> bool {
    value != "0"
}

/// The integer sense of a stored value: base-10 with an optional sign,
/// surrounding whitespace tolerated.  Anything unparsable degrades to 0.
pub(crate) fn numeric(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

pub(crate) fn convert<T: FromStr>(value: &str) -> Result<T, InvalidConversion> {
    T::from_str(value).map_err(|_| InvalidConversion {
        token: value.to_string(),
        type_name: std::any::type_name::<T>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", true)]
    #[case("1", true)]
    #[case("11", true)]
    #[case("true", true)]
    #[case("false", true)]
    #[case("00", true)]
    #[case("0", false)]
    fn truthy_values(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(truthy(value), expected);
    }

    #[rstest]
    #[case("0", 0)]
    #[case("11", 11)]
    #[case("-11", -11)]
    #[case("+11", 11)]
    #[case(" 11 ", 11)]
    #[case("", 0)]
    #[case("NaN", 0)]
    #[case("NotANumber", 0)]
    #[case("11abc", 0)]
    #[case("1.5", 0)]
    fn numeric_values(#[case] value: &str, #[case] expected: i64) {
        assert_eq!(numeric(value), expected);
    }

    #[test]
    fn convert_success() {
        assert_eq!(convert::<u32>("5"), Ok(5));
        assert_eq!(convert::<bool>("true"), Ok(true));
        assert_eq!(convert::<String>("x"), Ok("x".to_string()));
    }

    #[test]
    fn convert_failure() {
        let error = convert::<u32>("NaN").unwrap_err();
        assert_eq!(error.token, "NaN");
        assert_eq!(error.type_name, "u32");
        assert_eq!(error.to_string(), "cannot convert 'NaN' to u32.");
    }
}
