use std::{borrow::Cow, collections::VecDeque, fmt};

use crate::help;

/**
The queue of command-line tokens a [`Parser`][crate::Parser] offers to its
parameters. Parameters only ever look at, and remove tokens from, the front.
*/
pub type ArgQueue = VecDeque<String>;

/**
Anything that appears on a command line and can be described in help text.

A parameter's definition (name, description, mandatory flag) is fixed when
it's constructed. Its *specified* state starts out false and only becomes
true as a side effect of the parameter successfully populating itself; it
never goes back to false.
*/
pub trait Parameter {
    /// The name this parameter is known by. For options this is the prefixed
    /// tag, like `-v` or `--verbose`.
    fn name(&self) -> Cow<'_, str>;

    /// Free-form text used in help output.
    fn description(&self) -> &str;

    /// Whether the program requires this parameter. Mandatory parameters are
    /// parsed like any other; see
    /// [`Parser::all_mandatory_specified`][crate::Parser::all_mandatory_specified].
    fn is_mandatory(&self) -> bool;

    /// Whether this parameter has been populated at least once.
    fn is_specified(&self) -> bool;

    /// Write this parameter's help entry, without any trailing newline.
    /// Most parameters produce a single [help line][help::help_line].
    fn write_help(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}", help::help_line(&self.name(), self.description()))
    }

    /// True unless this parameter is mandatory and hasn't been specified.
    #[inline]
    fn is_satisfied(&self) -> bool {
        !self.is_mandatory() || self.is_specified()
    }
}

/**
A parameter that is populated directly from the [`ArgQueue`]. This is the
unit a [`Parser`][crate::Parser] works with: during parsing it repeatedly
offers the front of its queue to each registered [`ArgParam`], and the first
that [can populate][ArgParam::can_populate] itself from the queue does so.

Implementations must keep the three methods consistent: if `can_populate`
returns true, `populate` must succeed and remove exactly `consumes` tokens
from the front of the queue. If `populate` fails, the queue must be left
untouched.
*/
pub trait ArgParam: Parameter {
    /// How many tokens this parameter would take from the front of `queue`.
    fn consumes(&self, queue: &ArgQueue) -> usize;

    /// Whether this parameter accepts the tokens at the front of `queue`.
    fn can_populate(&self, queue: &ArgQueue) -> bool;

    /// Take this parameter's tokens from the front of `queue`, storing
    /// whatever values they carry. Returns false, leaving `queue` unchanged,
    /// if [`can_populate`][ArgParam::can_populate] would have returned false.
    fn populate(&mut self, queue: &mut ArgQueue) -> bool;
}
