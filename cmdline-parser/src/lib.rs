#![no_std]

/*!
Low-level classification of command-line tokens. Decides whether a string is
a legal parameter name, whether a token looks like an option, and splits
`name=value` tokens. No parameter state lives here; the higher-level
`cmdline` crate builds its parser on top of these predicates.

Everything operates on borrowed `&str` data and never allocates. Only ASCII
is recognized: a non-ASCII character anywhere in a name makes it illegal.
*/

mod name;
mod pair;

pub use name::{MAX_NAME_LEN, MIN_NAME_LEN, is_legal_name, is_legal_short_name};
pub use pair::{InvalidPair, NameValuePair};

/// The single-character option prefix used by [`Style::Unix`] short names.
pub const UNIX_SHORT_PREFIX: &str = "-";

/// The option prefix used by [`Style::Unix`] long names.
pub const UNIX_LONG_PREFIX: &str = "--";

/// The option prefix used by [`Style::Windows`] short names.
pub const WINDOWS_SHORT_PREFIX: &str = "/";

/// The option prefix used by [`Style::Windows`] long names.
pub const WINDOWS_LONG_PREFIX: &str = "/";

/**
The prefix convention an option is matched with. Unix options look like `-v`
and `--verbose`; Windows options look like `/v` and `/verbose`.

Both conventions are always *recognized* as option-shaped by
[`is_option_shaped`]; the style only decides which spelling a particular
option answers to.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Unix,
    Windows,
}

impl Style {
    /// The prefix placed in front of a short (single character) name.
    #[inline]
    #[must_use]
    pub const fn short_prefix(self) -> &'static str {
        match self {
            Style::Unix => UNIX_SHORT_PREFIX,
            Style::Windows => WINDOWS_SHORT_PREFIX,
        }
    }

    /// The prefix placed in front of a long name.
    #[inline]
    #[must_use]
    pub const fn long_prefix(self) -> &'static str {
        match self {
            Style::Unix => UNIX_LONG_PREFIX,
            Style::Windows => WINDOWS_LONG_PREFIX,
        }
    }
}

/// True if `s` begins with any recognized option prefix (`-`, `--` or `/`).
#[inline]
#[must_use]
pub fn starts_with_option_prefix(s: &str) -> bool {
    [
        UNIX_SHORT_PREFIX,
        UNIX_LONG_PREFIX,
        WINDOWS_SHORT_PREFIX,
        WINDOWS_LONG_PREFIX,
    ]
    .iter()
    .any(|prefix| s.starts_with(prefix))
}

/**
True if `token` is option-shaped: a recognized prefix followed by a legal
name. Up to two prefix characters are stripped, so `-v`, `--verbose`, `/v`
and `/verbose` are all option-shaped, while `-`, `--`, `/tmp/file` and
`--no spaces` are not.

Option-shaped tokens are the ones the parser pulls forward into the option
section of its queue; everything else is treated as a positional value.
*/
#[must_use]
pub fn is_option_shaped(token: &str) -> bool {
    if !starts_with_option_prefix(token) || token.len() <= 1 {
        return false;
    }

    // Every prefix is a single ASCII byte, so these splits are on char
    // boundaries.
    let rest = &token[1..];
    let rest = match starts_with_option_prefix(rest) {
        true => &rest[1..],
        false => rest,
    };

    is_legal_name(rest)
}
