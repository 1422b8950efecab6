/*!
Errors in parameter definitions and registrations.

These are programmer errors: they come from how a program sets up its
command line, not from what a user typed, so they surface while the
parameters and the [`Parser`][crate::Parser] are being built. Bad user input
is reported by [`Status`][crate::Status] instead.
*/

use cmdline_parser::InvalidPair;

/// A parameter definition or registration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DefinitionError {
    /// The parser was given an argument list without even a program name
    #[error("Command line arguments can't be empty")]
    EmptyArguments,

    /// An option with the same short or long name is already registered
    #[error("cannot add a duplicate Option to the Parser")]
    DuplicateOption,

    /// A positional parameter with the same name is already registered
    #[error("cannot add a duplicate PosParam to the Parser")]
    DuplicatePosParam,

    /// An option parameter with the same name already belongs to this
    /// value option
    #[error("cannot add a duplicate OptionParam to Option")]
    DuplicateOptionParam,

    /// A parameter was defined with an illegal name
    #[error("invalid parameter definition: {0}")]
    InvalidDefinition(#[from] InvalidName),

    /// A token couldn't be split into a legal `name=value` pair
    #[error("invalid name-value pair: {0}")]
    InvalidPair(#[from] InvalidPair),
}

/// The way a parameter name failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidName {
    /// An option's short name wasn't an ASCII alphanumeric or `?`
    #[error("must be an alphanumeric character or ?")]
    ShortName,

    /// An option's long name wasn't a legal name
    #[error("20 chars max: alphanumeric, _ or -. No option prefix.")]
    LongName,

    /// A positional or option parameter name wasn't a legal name
    #[error("20 chars max > 0 min: alphanumeric, _ or -. No option prefix.")]
    Name,
}

/// Check a positional or option-parameter name, producing the owned name.
pub(crate) fn legal_name(name: impl Into<String>) -> Result<String, InvalidName> {
    let name = name.into();

    match cmdline_parser::is_legal_name(&name) {
        true => Ok(name),
        false => Err(InvalidName::Name),
    }
}
