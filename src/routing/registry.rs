//! Ordered collection of page rules.

use regex::Regex;
use serde::Serialize;

use super::pattern::{GLOB_MARKER, PathPattern, PatternKind};
use super::probe::{DirectoryProbe, NoDirectories};
use super::RouteError;
use crate::page::{Metadata, PageOptions};
use crate::utils::path::{join_index, normalize_path, with_leading_slash};

/// Pattern as handed to [`RuleRegistry::register`].
///
/// Strings containing `*` are globs, other strings are literal paths.
#[derive(Debug, Clone)]
pub enum PatternSource {
    Path(String),
    Regex(Regex),
}

impl From<&str> for PatternSource {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for PatternSource {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<Regex> for PatternSource {
    fn from(re: Regex) -> Self {
        Self::Regex(re)
    }
}

/// Collaborators needed to normalize literal paths at registration.
#[derive(Clone, Copy)]
pub struct RegisterContext<'a> {
    index_file: Option<&'a str>,
    probe: &'a dyn DirectoryProbe,
}

impl<'a> RegisterContext<'a> {
    /// `index_file` of `None` (or empty) means no index file is configured.
    pub fn new(index_file: Option<&'a str>, probe: &'a dyn DirectoryProbe) -> Self {
        Self {
            index_file: index_file.filter(|name| !name.is_empty()),
            probe,
        }
    }

    /// Context with an index file and no source directories.
    pub fn with_index_file(index_file: &'a str) -> Self {
        Self::new(Some(index_file), &NoDirectories)
    }

    pub fn index_file(&self) -> Option<&'a str> {
        self.index_file
    }
}

impl std::fmt::Debug for RegisterContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterContext")
            .field("index_file", &self.index_file)
            .finish_non_exhaustive()
    }
}

/// One declared page rule. Immutable once registered.
#[derive(Debug, Clone)]
pub struct PathRule {
    pattern: PathPattern,
    metadata: Metadata,
}

impl PathRule {
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl Serialize for PathRule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a> {
            pattern: &'a str,
            kind: PatternKind,
            metadata: &'a Metadata,
        }

        Entry {
            pattern: self.pattern.as_str(),
            kind: self.pattern.kind(),
            metadata: &self.metadata,
        }
        .serialize(serializer)
    }
}

/// Page rules in registration order.
///
/// Duplicates are kept: the same pattern registered twice yields two rules,
/// both applied.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RuleRegistry {
    rules: Vec<PathRule>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a page rule.
    ///
    /// Literal paths are normalized: canonicalized, expanded with the index
    /// file when they denote a directory (trailing `/`, the site root, or a
    /// directory reported by the probe), then given one leading `/`.
    /// Regex and glob patterns are stored as given.
    pub fn register(
        &mut self,
        pattern: impl Into<PatternSource>,
        options: PageOptions,
        ctx: &RegisterContext<'_>,
    ) -> Result<(), RouteError> {
        let pattern = match pattern.into() {
            PatternSource::Regex(re) => {
                if re.as_str().is_empty() {
                    return Err(RouteError::EmptyPattern);
                }
                PathPattern::Regex(re)
            }
            PatternSource::Path(path) if path.is_empty() => return Err(RouteError::EmptyPattern),
            PatternSource::Path(glob) if glob.contains(GLOB_MARKER) => PathPattern::Glob(glob),
            PatternSource::Path(path) => PathPattern::Literal(normalize_literal(&path, ctx)?),
        };

        self.rules.push(PathRule {
            pattern,
            metadata: options.into_metadata(),
        });
        Ok(())
    }

    pub fn rules(&self) -> &[PathRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Drop every rule, e.g. before re-evaluating configuration.
    pub fn clear(&mut self) {
        self.rules.clear();
    }
}

fn normalize_literal(raw: &str, ctx: &RegisterContext<'_>) -> Result<String, RouteError> {
    let mut path = normalize_path(raw);

    if path.is_empty() || path.ends_with('/') || ctx.probe.is_directory(&path) {
        let index_file = ctx.index_file.ok_or_else(|| RouteError::MissingIndexFile {
            path: raw.to_string(),
        })?;
        path = join_index(&path, index_file);
    }

    Ok(with_leading_slash(&path))
}
