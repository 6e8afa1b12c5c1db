//! Page rules: path patterns that overlay metadata on resources.
//!
//! Configuration declares rules with [`RuleRegistry::register`]; each
//! manipulation pass then runs [`annotate`] over the resource list.
//!
//! ```text
//! register("/blog/*", {layout = "post"})   ─┐
//! register("/blog/featured.html", {...})   ─┼─► RuleRegistry (ordered)
//! register(Regex("^/archive/"), {...})     ─┘         │
//!                                                     ▼
//! resources ──────────────────────────────► annotate() ──► add_metadata() per match
//! ```

mod annotate;
mod error;
mod pattern;
mod probe;
mod registry;

pub use annotate::{AnnotateStats, annotate};
pub use error::RouteError;
pub use pattern::{GLOB_MARKER, PathMatcher, PathPattern, PatternKind};
pub use probe::{DirectoryProbe, NoDirectories, SourceDirs};
pub use registry::{PathRule, PatternSource, RegisterContext, RuleRegistry};

use anyhow::Result;

use crate::core::Priority;
use crate::debug;
use crate::pipeline::ResourceManipulator;
use crate::sitemap::Resource;
use crate::utils::plural_count;

/// Resource manipulator that applies a rule registry.
#[derive(Debug, Clone, Default)]
pub struct Routing {
    registry: RuleRegistry,
}

impl Routing {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Swap in the rules of a fresh configuration evaluation.
    pub fn replace_registry(&mut self, registry: RuleRegistry) {
        self.registry = registry;
    }
}

impl ResourceManipulator for Routing {
    fn name(&self) -> &'static str {
        "routing"
    }

    fn priority(&self) -> Priority {
        Priority::ROUTING
    }

    fn manipulate(&self, resources: &mut Vec<Resource>) -> Result<()> {
        let stats = annotate(resources, &self.registry)?;
        debug!(
            "routing";
            "{} applied to {} ({} matches)",
            plural_count(self.registry.len(), "rule"),
            plural_count(stats.resources, "resource"),
            stats.applied
        );
        Ok(())
    }
}
