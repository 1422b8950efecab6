/*!
The parser: registers parameters, reorders the raw argument list into a
canonical queue, and hands that queue out to the parameters.

Parsing happens in two steps. First the argument list is rebuilt as
*program name, options (each followed by the tokens it takes), positional
tokens*, which lets options appear anywhere on the command line, even after
positional arguments. Then the front of that queue is offered to every
parameter in turn (program, options, fixed positionals, multi-positional),
and the first that accepts it takes its tokens. Parsing succeeds if every
token is taken.
*/

use core::fmt::{self, Display};

use cmdline_parser::{Style, is_option_shaped};
use lazy_format::{lazy_format, make_lazy_format};

use crate::{
    Tags,
    error::DefinitionError,
    help::{Repetition, Requirement, section, usage_label, usage_line},
    option::{OptionArg, OptionFlag},
    parameter::{ArgParam, ArgQueue, Parameter},
    positional::{MultiPositional, Order, Positional},
    program::Program,
};

/// Tags of the built-in help option used by [`Parser::new`].
pub const HELP_TAGS: Tags<'static> = Tags::LongShort {
    long: "help",
    short: 'h',
};

/// Description of the built-in help option.
pub const HELP_DESCRIPTION: &str = "prints detailed help info";

const USAGE_HEADER: &str = "Usage";
const DESCRIPTION_HEADER: &str = "Description";
const POSITIONALS_HEADER: &str = "Positional Parameters";
const OPTIONS_HEADER: &str = "Options";

/// The outcome of [`Parser::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Status {
    /// Every token was taken by some parameter
    Success,

    /// A token was unrecognized or left over, or the parser was already used
    Failure,
}

/**
A single-use command-line parser.

A parser borrows every parameter registered with it, mutably, for as long
as it lives; parameters are read back once the parser is no longer used.
It never owns or drops them, except for its own built-in help option.

Every parser starts out with a help option (`-h`/`--help` unless configured
with [`Parser::with_help_tags`]). It's parsed like any other option, but
the parser never acts on it: check [`Parser::help_requested`] and print
[`Parser::help`] yourself.
*/
pub struct Parser<'p> {
    program: &'p mut Program,
    help: OptionFlag,
    options: Vec<&'p mut dyn OptionArg>,
    positionals: Vec<&'p mut Positional>,
    multi: Option<&'p mut MultiPositional>,
    args: Vec<String>,
    parsed: bool,
}

impl<'p> Parser<'p> {
    /// Create a parser for `args`, whose first token is the program name,
    /// with a `-h`/`--help` help option.
    pub fn new<I>(program: &'p mut Program, args: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item: Into<String>>,
    {
        Self::with_help_tags(program, args, HELP_TAGS)
    }

    /// Create a parser for `args` whose help option uses `help_tags`.
    pub fn with_help_tags<I>(
        program: &'p mut Program,
        args: I,
        help_tags: Tags<'_>,
    ) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item: Into<String>>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        if args.is_empty() {
            return Err(DefinitionError::EmptyArguments);
        }

        Ok(Self {
            program,
            help: OptionFlag::new(help_tags, HELP_DESCRIPTION)?,
            options: Vec::new(),
            positionals: Vec::new(),
            multi: None,
            args,
            parsed: false,
        })
    }

    /// Register an option. Fails if its short or long name is already used
    /// by a registered option, including the help option.
    pub fn add_option(&mut self, option: &'p mut dyn OptionArg) -> Result<(), DefinitionError> {
        if self.options().any(|existing| existing.conflicts_with(&*option)) {
            return Err(DefinitionError::DuplicateOption);
        }

        self.options.push(option);
        Ok(())
    }

    /// Register a single-value positional parameter. Positionals are filled
    /// in registration order. Fails if one with the same name is already
    /// registered.
    pub fn add_positional(&mut self, positional: &'p mut Positional) -> Result<(), DefinitionError> {
        if self
            .positionals
            .iter()
            .any(|existing| existing.name() == positional.name())
        {
            return Err(DefinitionError::DuplicatePosParam);
        }

        self.positionals.push(positional);
        Ok(())
    }

    /// Set the multi-positional parameter, replacing any previous one.
    pub fn set_multi_positional(&mut self, multi: &'p mut MultiPositional) {
        if let Some(previous) = self.multi.replace(multi) {
            tracing::debug!(previous = %previous.name(), "replaced multi-positional parameter");
        }
    }

    /// Switch the help option and every registered option to `style`. Has
    /// no effect once [`parse`][Parser::parse] has run.
    pub fn set_style(&mut self, style: Style) {
        if self.parsed {
            tracing::warn!(?style, "ignoring style change on a parser that was already used");
            return;
        }

        self.help.set_style(style);
        self.options
            .iter_mut()
            .for_each(|option| option.set_style(style));
    }

    /**
    Populate the registered parameters from the argument list.

    Fails if the command line has an option-shaped token no option accepts
    (including a value option with nothing after it), or a token no
    parameter accepts. Succeeding doesn't mean every mandatory parameter was
    given; check [`all_mandatory_specified`][Parser::all_mandatory_specified]
    too.

    A parser can only be used once; later calls fail without touching any
    parameter.
    */
    pub fn parse(&mut self) -> Status {
        if self.parsed {
            tracing::warn!("parser was already used; not parsing again");
            return Status::Failure;
        }

        self.parsed = true;

        match self.canonical_queue() {
            Some(queue) => {
                tracing::debug!(?queue, "reordered arguments");
                self.populate(queue)
            }
            None => Status::Failure,
        }
    }

    /// True if every mandatory parameter, including the program and every
    /// option, has been specified.
    #[must_use]
    pub fn all_mandatory_specified(&self) -> bool {
        self.program.is_satisfied()
            && self.options().all(|option| option.is_satisfied())
            && self
                .positionals
                .iter()
                .all(|positional| positional.is_satisfied())
            && self.multi.as_deref().is_none_or(|multi| multi.is_satisfied())
    }

    /// True if the built-in help option was given.
    #[inline]
    #[must_use]
    pub fn help_requested(&self) -> bool {
        self.help.is_specified()
    }

    /// The program parameter, which holds the program name once parsed.
    #[inline]
    #[must_use]
    pub fn program(&self) -> &Program {
        &*self.program
    }

    /// The built-in help option.
    #[inline]
    #[must_use]
    pub fn help_option(&self) -> &OptionFlag {
        &self.help
    }

    /**
    A short usage message: the usage line, and a hint pointing at the help
    option.

    ```text
    Usage:
      copy [options] <source>... <destination>

    Try 'copy --help' for more info
    ```
    */
    pub fn usage(&self) -> impl Display + '_ {
        make_lazy_format!(|f| {
            self.write_usage_line(f)?;
            writeln!(
                f,
                "\n\nTry '{program} {tag}' for more info",
                program = self.program.name(),
                tag = self.help_tag(),
            )
        })
    }

    /// The full help message: the usage line, the program description, then
    /// every positional parameter and every option with their descriptions.
    pub fn help(&self) -> impl Display + '_ {
        make_lazy_format!(|f| self.write_help(f))
    }

    /// Every option, starting with the help option.
    fn options(&self) -> impl Iterator<Item = &dyn OptionArg> {
        let help: &dyn OptionArg = &self.help;

        std::iter::once(help).chain(self.options.iter().map(|option| &**option as &dyn OptionArg))
    }

    fn canonical_queue(&self) -> Option<ArgQueue> {
        let mut working: ArgQueue = self.args.iter().cloned().collect();
        let mut queue = ArgQueue::with_capacity(working.len());
        let mut positionals = ArgQueue::new();

        queue.extend(working.pop_front());

        while let Some(token) = working.front() {
            if !is_option_shaped(token) {
                positionals.extend(working.pop_front());
                continue;
            }

            let consumes = self
                .options()
                .find(|option| option.can_populate(&working))
                .map(|option| option.consumes(&working));

            match consumes {
                Some(count) if (1..=working.len()).contains(&count) => {
                    queue.extend(working.drain(..count))
                }
                _ => {
                    match self.options().any(|option| option.matches(token)) {
                        true => tracing::debug!(%token, "option is missing its value"),
                        false => tracing::debug!(%token, "unrecognized option"),
                    }

                    return None;
                }
            }
        }

        match self.multi.as_deref() {
            Some(multi) if multi.order() == Order::AfterOptions => {
                let count = multi
                    .consumes(&positionals)
                    .saturating_sub(self.positionals.len());
                let fixed = positionals.split_off(count);

                queue.extend(fixed);
                queue.extend(positionals);
            }
            _ => queue.extend(positionals),
        }

        Some(queue)
    }

    fn populate(&mut self, mut queue: ArgQueue) -> Status {
        while let Some(token) = queue.front().cloned() {
            let remaining = queue.len();

            match self.offer(&mut queue) {
                Some(true) if queue.len() < remaining => {
                    tracing::trace!(%token, remaining = queue.len(), "populated parameter")
                }
                Some(_) => {
                    tracing::debug!(%token, "parameter accepted token but didn't consume it");
                    return Status::Failure;
                }
                None => {
                    tracing::debug!(%token, "no parameter accepts token");
                    return Status::Failure;
                }
            }
        }

        Status::Success
    }

    /// Offer the queue to each parameter in turn, populating the first that
    /// accepts it. Returns `None` if none did, or the result of the
    /// population.
    fn offer(&mut self, queue: &mut ArgQueue) -> Option<bool> {
        try_populate(&mut *self.program, queue)
            .or_else(|| try_populate(&mut self.help, queue))
            .or_else(|| {
                self.options
                    .iter_mut()
                    .find_map(|option| try_populate(&mut **option, queue))
            })
            .or_else(|| {
                self.positionals
                    .iter_mut()
                    .find_map(|positional| try_populate(&mut **positional, queue))
            })
            .or_else(|| {
                self.multi
                    .as_deref_mut()
                    .and_then(|multi| try_populate(multi, queue))
            })
    }

    fn help_tag(&self) -> impl Display + '_ {
        let style = self.help.style();

        lazy_format!(match ((self.help.long_name(), self.help.short_name())) {
            (Some(long), _) => ("{prefix}{long}", prefix = style.long_prefix()),
            (None, Some(short)) => ("{prefix}{short}", prefix = style.short_prefix()),
            (None, None) => "",
        })
    }

    fn usage_labels(&self) -> Vec<String> {
        let fixed = self.positionals.iter().map(|positional| {
            let requirement = Requirement::from_mandatory(positional.is_mandatory());
            usage_label(&positional.name(), requirement, Repetition::Single).to_string()
        });

        let multi = self.multi.as_deref().map(|multi| {
            let requirement = Requirement::from_mandatory(multi.is_mandatory());
            let label = usage_label(&multi.name(), requirement, Repetition::Multiple).to_string();
            (multi.order(), label)
        });

        match multi {
            None => fixed.collect(),
            Some((Order::AfterOptions, label)) => std::iter::once(label).chain(fixed).collect(),
            Some((Order::End, label)) => fixed.chain(std::iter::once(label)).collect(),
        }
    }

    fn write_usage_line(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        let labels = self.usage_labels();

        section(out, USAGE_HEADER, |out| {
            write!(out, "{}", usage_line(&self.program.name(), &labels))
        })
    }

    fn write_help(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.write_usage_line(out)?;
        out.write_str("\n\n")?;

        section(out, DESCRIPTION_HEADER, |out| self.program.write_help(out))?;
        out.write_str("\n\n")?;

        let positionals = self
            .positionals
            .iter()
            .map(|positional| &**positional as &dyn Parameter)
            .chain(self.multi.as_deref().map(|multi| multi as &dyn Parameter));

        section(out, POSITIONALS_HEADER, |out| {
            positionals.into_iter().try_for_each(|param| write_entry(out, param))
        })?;
        out.write_str("\n")?;

        section(out, OPTIONS_HEADER, |out| {
            self.options().try_for_each(|option| write_entry(out, option))
        })
    }
}

fn try_populate<P: ArgParam + ?Sized>(param: &mut P, queue: &mut ArgQueue) -> Option<bool> {
    param.can_populate(queue).then(|| param.populate(queue))
}

fn write_entry<P: Parameter + ?Sized>(out: &mut dyn fmt::Write, param: &P) -> fmt::Result {
    param.write_help(out)?;
    out.write_str("\n")
}
