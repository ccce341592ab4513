//! Include/exclude filtering of located modules.
//!
//! Patterns are regular expressions searched anywhere in a module's full
//! path. The whitelist (include) is applied before the blacklist (exclude);
//! a module has to pass both to survive.
//!
//! Patterns use the `regex` crate syntax, which has no look-around or
//! backreferences. "Everything except X" is written as an exclude pattern
//! rather than a negative lookahead.

use regex::Regex;

use crate::error::LocateError;
use crate::options::Options;
use crate::tree::Location;
use crate::Result;

/// Compiled include/exclude lists.
///
/// `None` means no restriction. A present list is always evaluated, so an
/// empty whitelist keeps nothing and an empty blacklist drops nothing.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    /// Compiled include patterns
    pub whitelists: Option<Vec<Regex>>,
    /// Compiled exclude patterns
    pub blacklists: Option<Vec<Regex>>,
}

impl Filters {
    /// Compile the include/exclude lists of `options`.
    ///
    /// Fails on the first pattern that is not a valid regular expression.
    pub fn from_options(options: &Options) -> Result<Self> {
        Ok(Self {
            whitelists: compile_patterns(options.include.as_deref())?,
            blacklists: compile_patterns(options.exclude.as_deref())?,
        })
    }

    /// Whether any list is present.
    pub fn is_active(&self) -> bool {
        self.whitelists.is_some() || self.blacklists.is_some()
    }

    /// Narrow `locations` to those passing both lists, preserving order.
    ///
    /// The first matching pattern of each decision is reported to the logger.
    pub fn apply(&self, locations: Vec<Location>, options: &Options) -> Vec<Location> {
        let mut result = locations;

        if let Some(whitelists) = &self.whitelists {
            result.retain(|location| match first_match(whitelists, location) {
                Some(pattern) => {
                    options.log(&format!(
                        "{} is included by /{}/",
                        location.path_str(),
                        pattern.as_str()
                    ));
                    true
                }
                None => false,
            });
        }

        if let Some(blacklists) = &self.blacklists {
            result.retain(|location| match first_match(blacklists, location) {
                Some(pattern) => {
                    options.log(&format!(
                        "{} is excluded by /{}/",
                        location.path_str(),
                        pattern.as_str()
                    ));
                    false
                }
                None => true,
            });
        }

        result
    }
}

fn compile_patterns(patterns: Option<&[String]>) -> Result<Option<Vec<Regex>>> {
    let Some(patterns) = patterns else {
        return Ok(None);
    };

    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|e| LocateError::PatternCompilation {
                pattern: pattern.clone(),
                message: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

fn first_match<'a>(patterns: &'a [Regex], location: &Location) -> Option<&'a Regex> {
    let path = location.path_str();
    patterns.iter().find(|pattern| pattern.is_match(&path))
}
