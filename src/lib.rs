//! `argtab` is a command line flag table for Rust.
//!
//! Rather than declaring parameters up front, `argtab` normalizes whatever
//! dash-style flags it is given into a key/value table, and leaves
//! interpretation to the point of read.  We built it for programs whose flag
//! surface is open-ended: any `-name` or `-name=value` token is accepted,
//! recorded, and queryable with a typed default.  Specifically, `argtab`
//! prioritizes the following design concerns:
//! * *Total parsing*:
//! Building the table never fails.  Positional tokens are skipped, malformed
//! values are recorded verbatim, and conflicts resolve deterministically.
//! * *Last-wins override resolution*:
//! When a flag repeats - directly, or through its negated `no` form - the
//! token appearing latest in the input determines the final value.  Sequence
//! order is the only rule; there is no priority between forms.
//! * *Negation convention*:
//! `-noX` sets `X` to "0", and `-noX=0` un-negates (it is `-X`).  This lets
//! users switch defaulted-on behavior off without a dedicated syntax.
//! * *Coerce on read*:
//! Values are stored as strings and interpreted by the accessor.  The
//! tolerant accessors degrade (an unparsable integer reads as `0`); the
//! strict [`ArgTable::lookup`] surfaces the conversion error instead.
//!
//! # Usage
//! ```
//! use argtab::ArgTable;
//!
//! let table = ArgTable::from_tokens(["-verbose", "-nocolor", "-depth=3", "input.txt"]);
//!
//! assert!(table.get_bool("-verbose", false));
//! assert!(!table.get_bool("-color", true));
//! assert_eq!(table.get_int("-depth", 0), 3);
//! assert_eq!(table.get_str("-output", "out.txt"), "out.txt");
//! ```
//!
//! Accessor names may be written with or without their leading dash(es);
//! the table keys are always stored dash-less.
//!
//! # Cli Semantics
//! `argtab` normalizes the raw tokens according to the following rules:
//! * A token starting with `-` or `--` is a flag; `--` is treated identically
//! to `-`.  Tokens without a leading dash are not consumed.
//! * Only the first `=` separates the flag name from its value.
//! For example, `-key=123=456` records `key` as `123=456`.
//! * A flag without `=` is still present, with the empty value.
//! Presence with an empty value is distinct from absence: `get_str` returns
//! `""` for it, not the default.
//! * A flag named `noX` (for non-empty `X`) assigns to `X`: "0" if its own
//! value is anything but "0", and "1" otherwise.  The negated entry competes
//! with direct `-X` entries under the same last-wins ordering.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while building the table.
#![deny(missing_docs)]
mod table;
mod tokens;
mod value;

pub use table::{ArgTable, TableBuilder};
pub use value::InvalidConversion;
