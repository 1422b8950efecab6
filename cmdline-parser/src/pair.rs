use core::fmt;

use crate::is_legal_name;

/**
A `name=value` token split into its two halves. The split happens on the
first `=`; everything after it, including further `=` characters, is the
value. A token without any `=` is all name, with an empty value.

For instance, `album=Testing the Testers` has the name `album` and the value
`Testing the Testers`, while `song` has the name `song` and an empty value.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameValuePair<'a> {
    name: &'a str,
    value: &'a str,
}

impl<'a> NameValuePair<'a> {
    /// Split `token` into a name and value. Fails if the token is empty or
    /// its name half isn't a [legal name][is_legal_name].
    pub fn parse(token: &'a str) -> Result<Self, InvalidPair> {
        let (name, value) = split_once(token, b'=').unwrap_or((token, ""));

        match is_legal_name(name) {
            true => Ok(Self { name, value }),
            false => Err(InvalidPair),
        }
    }

    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> &'a str {
        self.value
    }
}

impl<'a> TryFrom<&'a str> for NameValuePair<'a> {
    type Error = InvalidPair;

    #[inline]
    fn try_from(token: &'a str) -> Result<Self, Self::Error> {
        Self::parse(token)
    }
}

/// A token couldn't be read as a [`NameValuePair`] because its name wasn't
/// legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InvalidPair;

impl fmt::Display for InvalidPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("20 chars max > 0 min: alphanumeric, _ or -. No option prefix.")
    }
}

impl core::error::Error for InvalidPair {}

fn split_once(input: &str, delimiter: u8) -> Option<(&str, &str)> {
    // `delimiter` is ASCII, so both sides of it are char boundaries.
    memchr::memchr(delimiter, input.as_bytes()).map(|i| (&input[..i], &input[i + 1..]))
}
