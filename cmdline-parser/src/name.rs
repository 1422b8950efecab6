use crate::starts_with_option_prefix;

/// The shortest legal parameter name.
pub const MIN_NAME_LEN: usize = 1;

/// The longest legal parameter name.
pub const MAX_NAME_LEN: usize = 20;

/**
True if `name` can be used as a parameter name: between [`MIN_NAME_LEN`] and
[`MAX_NAME_LEN`] characters, made only of ASCII alphanumerics, `-` and `_`,
and not starting with an option prefix.

This is a total function; every string gets an answer.
*/
#[must_use]
pub fn is_legal_name(name: &str) -> bool {
    (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&name.len())
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        && !starts_with_option_prefix(name)
}

/// True if `short` can be used as the short name of an option: an ASCII
/// alphanumeric character, or `?`.
#[inline]
#[must_use]
pub const fn is_legal_short_name(short: char) -> bool {
    short.is_ascii_alphanumeric() || short == '?'
}
