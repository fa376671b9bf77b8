//! Command handler capability
//!
//! A command is anything that turns parsed options into an [`Outcome`].
//! Handlers are constructed explicitly with their collaborators; nothing is
//! looked up at runtime.

use crate::domain::Outcome;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Option values of one command invocation, keyed by option name
///
/// Values are kept as strings, the way a shell delivers them. A flag given
/// without a value is stored as an empty string and reads as `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    options: BTreeMap<String, String>,
}

impl ParsedArgs {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`ParsedArgs::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set an option value, replacing any previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.options.insert(key.into(), value.into());
    }

    /// Value of an option, if given
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Whether an option was given at all
    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Read a boolean flag: absent is `false`, bare is `true`
    ///
    /// # Errors
    ///
    /// Returns a message naming the option when the value is not a boolean.
    pub fn flag(&self, key: &str) -> Result<bool, String> {
        match self.get(key).map(str::trim) {
            None => Ok(false),
            Some("") => Ok(true),
            Some(value) if value.eq_ignore_ascii_case("true") => Ok(true),
            Some(value) if value.eq_ignore_ascii_case("false") => Ok(false),
            Some(value) => Err(format!(
                "Invalid value \"{value}\" for option \"{key}\", expected true or false"
            )),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParsedArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = ParsedArgs::new();
        for (key, value) in iter {
            args.insert(key, value);
        }
        args
    }
}

/// A command that can be executed with parsed options
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name as typed by users, e.g. `export data`
    fn name(&self) -> &'static str;

    /// Execute the command; every failure is reported through the [`Outcome`]
    async fn execute(&self, args: ParsedArgs) -> Outcome;
}
