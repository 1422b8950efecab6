/*!
Positional parameters: everything on the command line that isn't an option
or one of an option's values.
*/

use std::borrow::Cow;

use cmdline_parser::is_option_shaped;

use crate::{
    error::{DefinitionError, legal_name},
    parameter::{ArgParam, ArgQueue, Parameter},
};

/// A positional parameter that takes exactly one token, at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Positional {
    name: String,
    description: String,
    mandatory: bool,
    value: Option<String>,
}

impl Positional {
    /// Create a new, optional positional parameter. The name must be legal.
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

    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl Parameter for Positional {
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

impl ArgParam for Positional {
    fn consumes(&self, _queue: &ArgQueue) -> usize {
        1
    }

    fn can_populate(&self, queue: &ArgQueue) -> bool {
        !self.is_specified() && queue.front().is_some_and(|token| !is_option_shaped(token))
    }

    fn populate(&mut self, queue: &mut ArgQueue) -> bool {
        if !self.can_populate(queue) {
            return false;
        }

        self.value = queue.pop_front();
        true
    }
}

/**
Where the tokens of a [`MultiPositional`] are expected among the positional
tokens on the command line.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// After every fixed [`Positional`], like `filesearch <pattern> <filenames>...`
    #[default]
    End,

    /// Before every fixed [`Positional`], right after the options, like
    /// `copy <source>... <destination>`
    AfterOptions,
}

/**
A positional parameter that takes every remaining token at once. It's
all-or-nothing: if any token left in the queue is option-shaped, it takes
none of them.

A [`Parser`][crate::Parser] holds at most one of these.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiPositional {
    name: String,
    description: String,
    mandatory: bool,
    order: Order,
    values: Vec<String>,
}

impl MultiPositional {
    /// Create a new, optional multi-positional parameter with
    /// [`Order::End`]. The name must be legal.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self, DefinitionError> {
        Ok(Self {
            name: legal_name(name)?,
            description: description.into(),
            mandatory: false,
            order: Order::End,
            values: Vec::new(),
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
    pub fn with_order(self, order: Order) -> Self {
        Self { order, ..self }
    }

    #[inline]
    #[must_use]
    pub fn order(&self) -> Order {
        self.order
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Parameter for MultiPositional {
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
        !self.values.is_empty()
    }
}

impl ArgParam for MultiPositional {
    /// The number of tokens in `queue` that aren't option-shaped. This is an
    /// estimate: [`populate`][ArgParam::populate] refuses outright if any
    /// option-shaped token remains.
    fn consumes(&self, queue: &ArgQueue) -> usize {
        queue.iter().filter(|token| !is_option_shaped(token)).count()
    }

    fn can_populate(&self, queue: &ArgQueue) -> bool {
        !queue.is_empty() && queue.iter().all(|token| !is_option_shaped(token))
    }

    fn populate(&mut self, queue: &mut ArgQueue) -> bool {
        if !self.can_populate(queue) {
            return false;
        }

        self.values.extend(queue.drain(..));
        true
    }
}
