//! The argument table and its builder.

use std::collections::HashMap;
use std::str::FromStr;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::tokens::{self, Token};
use crate::value::{self, InvalidConversion};

/// Accumulates raw tokens into an [`ArgTable`].
///
/// Feed the tokens in command line order, then `close` to obtain the table.
/// The table only becomes visible once fully built; there is no partial
/// exposure while feeding.
#[derive(Debug, Default)]
pub struct TableBuilder {
    values: HashMap<String, String>,
}

impl TableBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a single raw token.
    ///
    /// Feeding is total: positional tokens are skipped, and flag tokens
    /// always resolve to an assignment.  Later tokens overwrite earlier ones
    /// for the same target name - strict sequence order, with no priority
    /// between the direct and negated forms of a flag.
    pub fn feed(&mut self, token: &str) {
        match tokens::scan(token) {
            Token::Flag { name, value } => {
                let assignment = tokens::resolve(name, value);

                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Token '{token}' assigns '{}'='{}'.",
                        assignment.target, assignment.value
                    );
                }

                self.values.insert(assignment.target, assignment.value);
            }
            Token::Positional(_) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Skipping positional token '{token}'.");
                }
            }
        }
    }

    /// Finish the build.
    pub fn close(self) -> ArgTable {
        ArgTable {
            values: self.values,
        }
    }
}

/// The normalized flag table: canonical flag name to resolved string value.
///
/// Keys never include a leading dash.  The table is immutable after
/// construction; build a fresh one to re-parse (prior state is discarded,
/// never merged).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgTable {
    values: HashMap<String, String>,
}

impl ArgTable {
    /// Build a table from an ordered sequence of raw tokens (excluding the
    /// program name).
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = TableBuilder::new();

        for token in tokens {
            builder.feed(token.as_ref());
        }

        builder.close()
    }

    /// Build a table from the Cli `env::args`, skipping the program name.
    pub fn from_env() -> Self {
        Self::from_tokens(std::env::args().skip(1))
    }

    /// Whether the flag is present, regardless of its value.
    ///
    /// This is the only way to distinguish "flag absent, accessor returned
    /// the default" from "flag present with an empty or invalid value".
    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(tokens::canonical(name))
    }

    /// The stored value, verbatim.  `None` iff the flag is absent.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(tokens::canonical(name)).map(String::as_str)
    }

    /// The boolean sense of the flag.
    ///
    /// Absent: the `default`.  Present: `true` unless the stored value is
    /// precisely "0".  A bare flag (empty value) means enabled.
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        match self.value(name) {
            Some(stored) => value::truthy(stored),
            None => default,
        }
    }

    /// The string sense of the flag.
    ///
    /// Absent: the `default`.  Present: the stored value verbatim - an empty
    /// stored value is presence, not absence.
    pub fn get_str<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.value(name).unwrap_or(default)
    }

    /// The integer sense of the flag.
    ///
    /// Absent: the `default`.  Present but unparsable: `0`, never the
    /// `default` - an invalid numeric argument degrades silently.
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        match self.value(name) {
            Some(stored) => value::numeric(stored),
            None => default,
        }
    }

    /// Strict typed lookup via [`FromStr`].
    ///
    /// Unlike the tolerant accessors, this distinguishes all three outcomes:
    /// absent (`Ok(None)`), present and convertible (`Ok(Some(..))`), and
    /// present but unconvertible (`Err(..)`).
    pub fn lookup<T: FromStr>(&self, name: &str) -> Result<Option<T>, InvalidConversion> {
        match self.value(name) {
            Some(stored) => value::convert(stored).map(Some),
            None => Ok(None),
        }
    }
}
