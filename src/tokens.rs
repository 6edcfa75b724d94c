//! Raw token scanning.
//! Classifies each command line token and resolves the `no`-prefix negation
//! convention into a concrete table assignment.

/// A single raw token, classified by its leading dash(es).
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    /// A dash-prefixed flag, split on the first `=` (if any).
    Flag {
        name: &'t str,
        value: Option<&'t str>,
    },
    /// A token without a leading dash; not consumed by this crate.
    Positional(&'t str),
}

/// The resolved effect of a flag token on the table: `target = value`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Assignment {
    pub(crate) target: String,
    pub(crate) value: String,
}

/// Classify a raw token.
///
/// Find a flag, such as:
///  -initial
///  -initial=..
///  --initial
///  --initial=..
/// `--` is treated identically to `-`: strip one extra dash, nothing more.
/// Only the first `=` separates the name from the value.
pub(crate) fn scan(token: &str) -> Token<'_> {
    let body = match token.strip_prefix("--") {
        Some(body) => body,
        None => match token.strip_prefix('-') {
            Some(body) => body,
            None => return Token::Positional(token),
        },
    };

    match body.split_once('=') {
        Some((name, value)) => Token::Flag {
            name,
            value: Some(value),
        },
        None => Token::Flag { name: body, value: None },
    }
}

/// Resolve a scanned flag into its table assignment.
///
/// A flag named `noX` (non-empty `X`) toggles `X` instead of setting itself:
/// a value of precisely "0" un-negates (`-noX=0` is `-X`), while any other
/// value - or no value at all - pins `X` to "0".
/// A flag with no `=value` suffix is still present, with the empty value.
pub(crate) fn resolve(name: &str, value: Option<&str>) -> Assignment {
    if let Some(target) = name.strip_prefix("no") {
        if !target.is_empty() {
            let value = if value == Some("0") { "1" } else { "0" };
            return Assignment {
                target: target.to_string(),
                value: value.to_string(),
            };
        }
    }

    Assignment {
        target: name.to_string(),
        value: value.unwrap_or("").to_string(),
    }
}

/// Strip the leading dash(es) from a flag name.
/// Lookups and stored keys share this canonical form, so `table.has("-X")`
/// and `table.has("X")` are the same query.
pub(crate) fn canonical(name: &str) -> &str {
    name.strip_prefix("--")
        .or_else(|| name.strip_prefix('-'))
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("-verbose", "verbose", None)]
    #[case("--verbose", "verbose", None)]
    #[case("-key=value", "key", Some("value"))]
    #[case("--key=value", "key", Some("value"))]
    #[case("-key=", "key", Some(""))]
    #[case("-key=a=b", "key", Some("a=b"))]
    #[case("-", "", None)]
    #[case("-=5", "", Some("5"))]
    fn scan_flag(#[case] token: &str, #[case] name: &str, #[case] value: Option<&str>) {
        assert_eq!(scan(token), Token::Flag { name, value });
    }

    #[rstest]
    #[case("value")]
    #[case("")]
    #[case("a-b")]
    #[case("key=value")]
    fn scan_positional(#[case] token: &str) {
        assert_eq!(scan(token), Token::Positional(token));
    }

    #[rstest]
    #[case(None, "")]
    #[case(Some(""), "")]
    #[case(Some("0"), "0")]
    #[case(Some("value"), "value")]
    fn resolve_direct(#[case] value: Option<&str>, #[case] expected: &str) {
        assert_eq!(
            resolve("key", value),
            Assignment {
                target: "key".to_string(),
                value: expected.to_string(),
            }
        );
    }

    #[rstest]
    #[case(None, "0")]
    #[case(Some(""), "0")]
    #[case(Some("1"), "0")]
    #[case(Some("true"), "0")]
    #[case(Some("0"), "1")]
    fn resolve_negated(#[case] value: Option<&str>, #[case] expected: &str) {
        assert_eq!(
            resolve("nokey", value),
            Assignment {
                target: "key".to_string(),
                value: expected.to_string(),
            }
        );
    }

    #[test]
    fn resolve_negation_needs_remainder() {
        // A bare 'no' is an ordinary flag, not a negation.
        assert_eq!(
            resolve("no", Some("1")),
            Assignment {
                target: "no".to_string(),
                value: "1".to_string(),
            }
        );
    }

    #[test]
    fn resolve_negation_case_sensitive() {
        assert_eq!(
            resolve("NOkey", None),
            Assignment {
                target: "NOkey".to_string(),
                value: "".to_string(),
            }
        );
    }

    #[rstest]
    #[case("key", "key")]
    #[case("-key", "key")]
    #[case("--key", "key")]
    #[case("nokey", "nokey")]
    #[case("", "")]
    fn canonical_names(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(canonical(name), expected);
    }
}
