//! Generator option strings.
//!
//! A generator is selected with `language[:opt1[=val1][,opt2[=val2]]*]`,
//! e.g. `py:twisted,package=foo`.

use std::{fmt, str::FromStr};

use idlgen_core::{Error, Result};
use indexmap::IndexMap;

/// A parsed generator selection: the target language and its options.
///
/// Options keep the order in which they were written. A bare flag maps to
/// an empty value; when a key repeats, the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    language: String,
    options: IndexMap<String, String>,
}

impl GeneratorOptions {
    /// Parse a `language[:opts]` string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedOption`] for an empty language, a `:` with
    /// nothing after it, a dangling or doubled `,`, or an option with an
    /// empty name.
    pub fn parse(input: &str) -> Result<Self> {
        let (language, rest) = match input.split_once(':') {
            Some((language, rest)) => (language, Some(rest)),
            None => (input, None),
        };

        if language.is_empty() {
            return Err(Error::malformed_option(input, "missing language"));
        }

        let mut options = IndexMap::new();
        if let Some(rest) = rest {
            if rest.is_empty() {
                return Err(Error::malformed_option(input, "expected options after ':'"));
            }
            for option in rest.split(',') {
                if option.is_empty() {
                    return Err(Error::malformed_option(input, "empty option between ','"));
                }
                let (key, value) = option.split_once('=').unwrap_or((option, ""));
                if key.is_empty() {
                    return Err(Error::malformed_option(
                        input,
                        format!("option '{}' has no name", option),
                    ));
                }
                options.insert(key.to_string(), value.to_string());
            }
        }

        Ok(Self {
            language: language.to_string(),
            options,
        })
    }

    /// Create options for a language with no options set.
    pub fn language_only(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            options: IndexMap::new(),
        }
    }

    /// Get the language tag.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get the full option map.
    pub fn options(&self) -> &IndexMap<String, String> {
        &self.options
    }

    /// Get the value of an option (`""` for bare flags).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Check if an option was given, with or without a value.
    pub fn has(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Find the first option not in `known`.
    pub fn first_unknown<'a>(&'a self, known: &[&str]) -> Option<&'a str> {
        self.options
            .keys()
            .map(String::as_str)
            .find(|key| !known.contains(key))
    }
}

impl FromStr for GeneratorOptions {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for GeneratorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        for (i, (key, value)) in self.options.iter().enumerate() {
            f.write_str(if i == 0 { ":" } else { "," })?;
            f.write_str(key)?;
            if !value.is_empty() {
                write!(f, "={}", value)?;
            }
        }
        Ok(())
    }
}
