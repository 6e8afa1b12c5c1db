//! Path patterns and their matchers.

use std::fmt;

use globset::{GlobBuilder, GlobMatcher};
use regex::Regex;
use serde::Serialize;

use super::RouteError;
use crate::utils::path::strip_leading_slash;

/// Character that turns a string pattern into a glob.
pub const GLOB_MARKER: char = '*';

/// Kind of a path pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Literal,
    Regex,
    Glob,
}

/// Pattern a page rule is declared with.
///
/// - `Literal`: normalized site path with a single leading `/`
/// - `Regex`: tested unanchored against `/`-prefixed resource paths
/// - `Glob`: stored verbatim; `*` stays within a segment, `**` crosses segments
#[derive(Debug, Clone)]
pub enum PathPattern {
    Literal(String),
    Regex(Regex),
    Glob(String),
}

impl PathPattern {
    pub fn kind(&self) -> PatternKind {
        match self {
            Self::Literal(_) => PatternKind::Literal,
            Self::Regex(_) => PatternKind::Regex,
            Self::Glob(_) => PatternKind::Glob,
        }
    }

    /// Pattern source text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(path) | Self::Glob(path) => path,
            Self::Regex(re) => re.as_str(),
        }
    }

    /// Build a matcher for repeated use within one pass.
    pub fn compile(&self) -> Result<PathMatcher<'_>, RouteError> {
        Ok(match self {
            Self::Literal(path) => PathMatcher::Literal(path),
            Self::Regex(re) => PathMatcher::Regex(re),
            Self::Glob(glob) => PathMatcher::Glob {
                matcher: compile_glob(glob)?,
                relative: !glob.starts_with('/'),
            },
        })
    }

    /// Test a `/`-prefixed site path.
    pub fn matches(&self, path: &str) -> Result<bool, RouteError> {
        Ok(self.compile()?.matches(path))
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn compile_glob(glob: &str) -> Result<GlobMatcher, RouteError> {
    GlobBuilder::new(glob)
        .literal_separator(true)
        .build()
        .map(|g| g.compile_matcher())
        .map_err(|source| RouteError::InvalidGlob {
            pattern: glob.to_string(),
            source,
        })
}

/// Compiled form of a [`PathPattern`].
#[derive(Debug, Clone)]
pub enum PathMatcher<'a> {
    Literal(&'a str),
    Regex(&'a Regex),
    Glob {
        matcher: GlobMatcher,
        /// Glob written without a leading `/`: matched against the path
        /// with its leading slash removed.
        relative: bool,
    },
}

impl PathMatcher<'_> {
    /// Test a `/`-prefixed site path.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Literal(literal) => *literal == path,
            Self::Regex(re) => re.is_match(path),
            Self::Glob { matcher, relative } => {
                if *relative {
                    matcher.is_match(strip_leading_slash(path))
                } else {
                    matcher.is_match(path)
                }
            }
        }
    }
}
