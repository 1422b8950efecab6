/*!
Formatting primitives for help and usage text.

Every piece of help output is built from a handful of lazily formatted
values: [help lines][help_line] pair a name with its description in a fixed
column layout, and [usage labels][usage_label] bracket a positional name
according to whether it's mandatory. The [`Parser`][crate::Parser] stitches
these together into sections.
*/

use core::fmt::{self, Display, Write as _};

use cmdline_parser::Style;
use indent_write::fmt::IndentWriter;
use joinery::JoinableIterator;
use lazy_format::{lazy_format, make_lazy_format};

/// The indentation applied to the body of every help section.
pub const INDENT: &str = "  ";

/// The width of the column that parameter names are left-aligned in.
pub const NAME_FIELD_WIDTH: usize = 28;

/// The total width that help lines are wrapped to.
pub const LINE_WIDTH: usize = 80;

const DESCRIPTION_WIDTH: usize = LINE_WIDTH - INDENT.len() - NAME_FIELD_WIDTH;

/// The label standing in for every option in a usage line.
pub const OPTIONS_LABEL: &str = "[options]";

/// Whether a parameter must be given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Optional,
    Mandatory,
}

impl Requirement {
    #[inline]
    #[must_use]
    pub const fn from_mandatory(mandatory: bool) -> Self {
        match mandatory {
            true => Requirement::Mandatory,
            false => Requirement::Optional,
        }
    }
}

/// Whether a parameter takes one value or slurps many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repetition {
    Single,
    Multiple,
}

/**
The bracketed label for a positional parameter in a usage line: `<name>` if
it's mandatory, `[name]` if it's optional, followed by `...` if it takes
multiple values.
*/
pub fn usage_label(name: &str, requirement: Requirement, repetition: Repetition) -> impl Display {
    lazy_format!(match ((requirement, repetition)) {
        (Requirement::Mandatory, Repetition::Single) => "<{name}>",
        (Requirement::Mandatory, Repetition::Multiple) => "<{name}>...",
        (Requirement::Optional, Repetition::Single) => "[{name}]",
        (Requirement::Optional, Repetition::Multiple) => "[{name}]...",
    })
}

/**
The help label for an option, in the given prefix style: `-p, --print` for
an option with both tags, or just `-p` or `--print` for an option with only
one.
*/
pub fn option_label(short: Option<char>, long: Option<&str>, style: Style) -> impl Display {
    let short_prefix = style.short_prefix();
    let long_prefix = style.long_prefix();

    lazy_format!(match ((short, long)) {
        (Some(short), Some(long)) => "{short_prefix}{short}, {long_prefix}{long}",
        (Some(short), None) => "{short_prefix}{short}",
        (None, Some(long)) => "{long_prefix}{long}",
        (None, None) => "",
    })
}

/**
A single help entry: `name` left-aligned in a [`NAME_FIELD_WIDTH`] column,
followed by `description`. Long descriptions are wrapped so that the line,
once indented into its section, fits in [`LINE_WIDTH`] columns; the
continuation lines are aligned under the start of the description.

A name too wide for its column pushes the description one space past it.
*/
pub fn help_line<'a>(name: &'a str, description: &'a str) -> impl Display + 'a {
    make_lazy_format!(|f| {
        if description.is_empty() {
            return f.write_str(name);
        }

        let width = NAME_FIELD_WIDTH.max(name.len() + 1);
        let lines = textwrap::wrap(description, DESCRIPTION_WIDTH);
        let continuation = lazy_format!("\n{:width$}", "");

        write!(f, "{name:<width$}{}", lines.iter().join_with(continuation))
    })
}

/**
The usage line body: the program name, the options label, then the labels
of the positional parameters, separated by spaces.
*/
pub fn usage_line<'a, L: Display>(program: &'a str, labels: &'a [L]) -> impl Display + 'a {
    make_lazy_format!(|f| match labels.is_empty() {
        true => write!(f, "{program} {OPTIONS_LABEL}"),
        false => write!(f, "{program} {OPTIONS_LABEL} {}", labels.iter().join_with(' ')),
    })
}

/// Write a `header:` line followed by an indented body.
pub(crate) fn section<O: fmt::Write + ?Sized>(
    out: &mut O,
    header: &str,
    body: impl FnOnce(&mut dyn fmt::Write) -> fmt::Result,
) -> fmt::Result {
    writeln!(out, "{header}:")?;
    body(&mut IndentWriter::new(INDENT, out))
}
