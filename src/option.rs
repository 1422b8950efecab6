/*!
Options: parameters identified by a prefixed tag like `-v`, `--verbose`,
`/v` or `/verbose`.

An [`OptionFlag`] is a plain flag that only records whether it appeared. A
[`ValueOption`] also takes the token after its tag as a value, and may own
[`OptionParam`]s that pick apart `name=value` values.
*/

use std::{borrow::Cow, fmt};

use cmdline_parser::{NameValuePair, Style, is_legal_name, is_legal_short_name};

use crate::{
    Tags,
    error::{DefinitionError, InvalidName, legal_name},
    help::{help_line, option_label},
    parameter::{ArgParam, ArgQueue, Parameter},
};

/**
The capability the [`Parser`][crate::Parser] needs from an option, on top of
[`ArgParam`]: its tags (for duplicate detection), its prefix style, and a
way to tell if a single token names it.
*/
pub trait OptionArg: ArgParam {
    fn short_name(&self) -> Option<char>;

    fn long_name(&self) -> Option<&str>;

    fn style(&self) -> Style;

    /// Change which prefix convention this option answers to. Only
    /// meaningful before parsing.
    fn set_style(&mut self, style: Style);

    /// True if `token` is exactly this option's short or long tag, spelled
    /// in its current style.
    fn matches(&self, token: &str) -> bool {
        let style = self.style();

        let short = self.short_name().is_some_and(|short| {
            token
                .strip_prefix(style.short_prefix())
                .is_some_and(|rest| is_single_char(rest, short))
        });

        short
            || self.long_name().is_some_and(|long| {
                token
                    .strip_prefix(style.long_prefix())
                    .is_some_and(|rest| rest == long)
            })
    }

    /// True if this option shares a short or long name with `other`. The
    /// comparison ignores style, so a one-character long name conflicts
    /// with the same short name (both are `/v` in Windows style).
    fn conflicts_with(&self, other: &dyn OptionArg) -> bool {
        let short = self.short_name().is_some() && self.short_name() == other.short_name();
        let long = self.long_name().is_some() && self.long_name() == other.long_name();
        let crossed = short_is_long(self.short_name(), other.long_name())
            || short_is_long(other.short_name(), self.long_name());

        short || long || crossed
    }
}

fn short_is_long(short: Option<char>, long: Option<&str>) -> bool {
    match (short, long) {
        (Some(short), Some(long)) => is_single_char(long, short),
        _ => false,
    }
}

fn is_single_char(s: &str, c: char) -> bool {
    let mut chars = s.chars();
    chars.next() == Some(c) && chars.as_str().is_empty()
}

/**
An option that takes no value. It's specified if its tag appears anywhere
on the command line; it may appear more than once.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionFlag {
    short: Option<char>,
    long: Option<String>,
    description: String,
    mandatory: bool,
    style: Style,
    specified: bool,
}

impl OptionFlag {
    /// Create a new, optional, Unix style option. The short tag must be an
    /// ASCII alphanumeric or `?`, and the long tag must be a legal name.
    pub fn new(tags: Tags<'_>, description: impl Into<String>) -> Result<Self, DefinitionError> {
        let short = tags.short();
        if short.is_some_and(|short| !is_legal_short_name(short)) {
            return Err(InvalidName::ShortName.into());
        }

        let long = tags.long();
        if long.is_some_and(|long| !is_legal_name(long)) {
            return Err(InvalidName::LongName.into());
        }

        Ok(Self {
            short,
            long: long.map(str::to_owned),
            description: description.into(),
            mandatory: false,
            style: Style::Unix,
            specified: false,
        })
    }

    #[must_use]
    pub fn mandatory(self) -> Self {
        Self {
            mandatory: true,
            ..self
        }
    }

    #[must_use]
    pub fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }
}

impl Parameter for OptionFlag {
    /// The short tag if there is one, otherwise the long tag.
    fn name(&self) -> Cow<'_, str> {
        let label = match self.short {
            Some(short) => option_label(Some(short), None, self.style).to_string(),
            None => option_label(None, self.long.as_deref(), self.style).to_string(),
        };

        Cow::Owned(label)
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    fn is_specified(&self) -> bool {
        self.specified
    }

    fn write_help(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        let label = option_label(self.short, self.long.as_deref(), self.style).to_string();
        write!(out, "{}", help_line(&label, &self.description))
    }
}

impl ArgParam for OptionFlag {
    fn consumes(&self, _queue: &ArgQueue) -> usize {
        1
    }

    fn can_populate(&self, queue: &ArgQueue) -> bool {
        queue.front().is_some_and(|token| self.matches(token))
    }

    fn populate(&mut self, queue: &mut ArgQueue) -> bool {
        if !self.can_populate(queue) {
            return false;
        }

        queue.pop_front();
        self.specified = true;
        true
    }
}

impl OptionArg for OptionFlag {
    fn short_name(&self) -> Option<char> {
        self.short
    }

    fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    fn style(&self) -> Style {
        self.style
    }

    fn set_style(&mut self, style: Style) {
        self.style = style;
    }
}

/**
An option followed by a value token, like `--print song`. Every time it
appears, the value is appended to its [`values`][ValueOption::values].

If the value reads as a [`NameValuePair`] whose name belongs to one of this
option's [`OptionParam`]s, that parameter is populated with the pair's value
as well. A value that doesn't match any parameter is still accepted.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueOption {
    option: OptionFlag,
    values: Vec<String>,
    params: Vec<OptionParam>,
}

impl ValueOption {
    /// Create a new, optional, Unix style value option. Tags follow the same
    /// rules as [`OptionFlag::new`].
    pub fn new(tags: Tags<'_>, description: impl Into<String>) -> Result<Self, DefinitionError> {
        OptionFlag::new(tags, description).map(|option| Self {
            option,
            values: Vec::new(),
            params: Vec::new(),
        })
    }

    #[must_use]
    pub fn mandatory(self) -> Self {
        Self {
            option: self.option.mandatory(),
            ..self
        }
    }

    #[must_use]
    pub fn with_style(self, style: Style) -> Self {
        Self {
            option: self.option.with_style(style),
            ..self
        }
    }

    /// Builder form of [`add_param`][ValueOption::add_param].
    pub fn with_param(mut self, param: OptionParam) -> Result<Self, DefinitionError> {
        self.add_param(param)?;
        Ok(self)
    }

    /// Give this option a named sub-parameter. Each parameter name may only
    /// be used once per option.
    pub fn add_param(&mut self, param: OptionParam) -> Result<(), DefinitionError> {
        if self.params.iter().any(|existing| existing.name == param.name) {
            return Err(DefinitionError::DuplicateOptionParam);
        }

        self.params.push(param);
        Ok(())
    }

    /// Every value this option was given, in command-line order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn params(&self) -> &[OptionParam] {
        &self.params
    }

    /// Look up one of this option's parameters by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&OptionParam> {
        self.params.iter().find(|param| param.name == name)
    }

    fn enrich(&mut self, value: &str) {
        let Ok(pair) = NameValuePair::parse(value) else {
            tracing::trace!(value, "option value isn't a name-value pair");
            return;
        };

        match self.params.iter_mut().find(|param| param.matches(&pair)) {
            Some(param) => {
                param.populate(&pair);
            }
            None => tracing::trace!(name = pair.name(), "no option parameter by this name"),
        }
    }
}

impl Parameter for ValueOption {
    fn name(&self) -> Cow<'_, str> {
        self.option.name()
    }

    fn description(&self) -> &str {
        self.option.description()
    }

    fn is_mandatory(&self) -> bool {
        self.option.is_mandatory()
    }

    fn is_specified(&self) -> bool {
        self.option.is_specified()
    }

    /// The option's own help line, then, if it has any parameters, a blank
    /// line and one line per parameter. A parameter block ends with a
    /// newline, so the entry is followed by a blank line in help output.
    fn write_help(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.option.write_help(out)?;

        if !self.params.is_empty() {
            out.write_str("\n\n")?;
            self.params.iter().try_for_each(|param| {
                param.write_help(out)?;
                out.write_str("\n")
            })?;
        }

        Ok(())
    }
}

impl ArgParam for ValueOption {
    fn consumes(&self, _queue: &ArgQueue) -> usize {
        2
    }

    fn can_populate(&self, queue: &ArgQueue) -> bool {
        queue.len() >= 2 && self.option.can_populate(queue)
    }

    fn populate(&mut self, queue: &mut ArgQueue) -> bool {
        if !self.can_populate(queue) {
            return false;
        }

        let value = queue.drain(..2).nth(1).unwrap_or_default();

        self.option.specified = true;
        self.enrich(&value);
        self.values.push(value);
        true
    }
}

impl OptionArg for ValueOption {
    fn short_name(&self) -> Option<char> {
        self.option.short_name()
    }

    fn long_name(&self) -> Option<&str> {
        self.option.long_name()
    }

    fn style(&self) -> Style {
        self.option.style()
    }

    fn set_style(&mut self, style: Style) {
        self.option.set_style(style);
    }
}

/**
A named sub-value of a [`ValueOption`]. It isn't populated from the command
line directly: when its option is given a `name=value` token with a matching
name, it takes the value half (which may be empty). If that happens more
than once, the latest value wins.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionParam {
    name: String,
    description: String,
    mandatory: bool,
    value: Option<String>,
}

impl OptionParam {
    /// Create a new, optional option parameter. The name must be legal.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self, DefinitionError> {
        Ok(Self {
            name: legal_name(name)?,
            description: description.into(),
            mandatory: false,
            value: None,
        })
    }

    #[must_use]
    pub fn mandatory(self) -> Self {
        Self {
            mandatory: true,
            ..self
        }
    }

    /// The value half of the pair that populated this parameter.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn matches(&self, pair: &NameValuePair<'_>) -> bool {
        pair.name() == self.name
    }

    /// Store the pair's value if its name is this parameter's name.
    pub fn populate(&mut self, pair: &NameValuePair<'_>) -> bool {
        if !self.matches(pair) {
            return false;
        }

        self.value = Some(pair.value().to_owned());
        true
    }
}

impl Parameter for OptionParam {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    fn is_specified(&self) -> bool {
        self.value.is_some()
    }
}
