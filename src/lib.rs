/*!
A command-line parser built around a reordered argument queue.

A program describes its command line by building parameter objects: a
[`Program`] for the program name, [`OptionFlag`]s and [`ValueOption`]s for
`-x`/`--long` options (with [`OptionParam`] sub-values for `name=value`
option arguments), and [`Positional`] and [`MultiPositional`] parameters for
everything else. Those parameters are registered with a [`Parser`], which
populates them from the raw argument list.

```
use cmdline::{
    MultiPositional, OptionFlag, Order, Parameter, Parser, Positional, Program, Status, Tags,
};

let mut program = Program::new("copy", "copies one or more files to the specified destination");
let mut verbose = OptionFlag::new(
    Tags::LongShort { long: "verbose", short: 'v' },
    "prints verbose info",
)?;
let mut destination = Positional::new("destination", "the destination file path")?.mandatory();
let mut source = MultiPositional::new("source", "the files to copy")?
    .mandatory()
    .with_order(Order::AfterOptions);

let mut parser = Parser::new(
    &mut program,
    ["copy", "-v", "Source1.txt", "Source2.txt", "Destination.txt"],
)?;
parser.add_option(&mut verbose)?;
parser.add_positional(&mut destination)?;
parser.set_multi_positional(&mut source);

assert_eq!(parser.parse(), Status::Success);
assert!(parser.all_mandatory_specified());

assert!(verbose.is_specified());
assert_eq!(source.values(), ["Source1.txt", "Source2.txt"]);
assert_eq!(destination.value(), Some("Destination.txt"));
# Ok::<(), cmdline::DefinitionError>(())
```

Mistakes in the parameter definitions, such as illegal names or duplicate
registrations, are [`DefinitionError`]s and show up while the program is
being set up. Mistakes by the user on the command line are not errors:
[`Parser::parse`] reports a [`Status`], and
[`Parser::all_mandatory_specified`] says whether every mandatory parameter
was given. What happens next (usually printing [`Parser::usage`] and exiting)
is up to the caller; the library itself never prints.
*/

pub mod error;
pub mod help;
pub mod option;
pub mod parameter;
pub mod parser;
pub mod positional;
pub mod program;

pub use cmdline_parser::{InvalidPair, NameValuePair, Style, is_legal_name, is_option_shaped};

pub use error::{DefinitionError, InvalidName};
pub use option::{OptionArg, OptionFlag, OptionParam, ValueOption};
pub use parameter::{ArgParam, ArgQueue, Parameter};
pub use parser::{Parser, Status};
pub use positional::{MultiPositional, Order, Positional};
pub use program::Program;

/// The set of tags that identify a particular option (`-short`, `--long`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tags<'a> {
    /// This option uses only a long tag
    Long { long: &'a str },

    /// This option uses only a short tag
    Short { short: char },

    /// This option uses both a long and short tag
    LongShort { long: &'a str, short: char },
}

impl<'a> Tags<'a> {
    /// Get the long tag, if any
    #[inline]
    #[must_use]
    pub const fn long(&self) -> Option<&'a str> {
        match *self {
            Tags::Long { long } | Tags::LongShort { long, .. } => Some(long),
            Tags::Short { .. } => None,
        }
    }

    /// Get the short tag, if any
    #[inline]
    #[must_use]
    pub const fn short(&self) -> Option<char> {
        match *self {
            Tags::Short { short } | Tags::LongShort { short, .. } => Some(short),
            Tags::Long { .. } => None,
        }
    }
}
