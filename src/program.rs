use std::{borrow::Cow, fmt};

use crate::parameter::{ArgParam, ArgQueue, Parameter};

/**
The parameter populated by the program name: the first token of every
command line. Its name and description are what represent the program in
usage and help text; its value is whatever the operating system actually
passed as the first argument.

A `Program` takes exactly one token, and only ever once, so it never absorbs
any later tokens.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    name: String,
    description: String,
    mandatory: bool,
    value: Option<String>,
}

impl Program {
    /// Create a new, optional program parameter. The name isn't validated,
    /// since program names are often paths.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            mandatory: false,
            value: None,
        }
    }

    #[must_use]
    pub fn mandatory(self) -> Self {
        Self {
            mandatory: true,
            ..self
        }
    }

    /// The program name token, if this parameter has been populated.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl Parameter for Program {
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

    /// The program's help entry is just its description.
    fn write_help(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(&self.description)
    }
}

impl ArgParam for Program {
    fn consumes(&self, _queue: &ArgQueue) -> usize {
        1
    }

    fn can_populate(&self, queue: &ArgQueue) -> bool {
        !self.is_specified() && !queue.is_empty()
    }

    fn populate(&mut self, queue: &mut ArgQueue) -> bool {
        if !self.can_populate(queue) {
            return false;
        }

        self.value = queue.pop_front();
        true
    }
}
