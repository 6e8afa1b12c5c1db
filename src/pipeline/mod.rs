//! Resource list manipulation pipeline.
//!
//! A pass hands one resource list through every registered manipulator,
//! ordered by [`Priority`]:
//!
//! ```text
//! ┌──────────────┐   ┌───────────────┐   ┌────────────────┐   ┌───────────────────┐
//! │ scan sources │──►│ DEFAULT (50)  │──►│ ROUTING (90)   │──►│ LAST (100)        │
//! │              │   │ add/rename    │   │ page rules     │   │ directory indexes │
//! └──────────────┘   └───────────────┘   └────────────────┘   └───────────────────┘
//! ```

mod directory_indexes;

pub use directory_indexes::DirectoryIndexes;

use anyhow::{Context, Result};

use crate::core::Priority;
use crate::debug;
use crate::sitemap::Resource;

/// A step that may add, remove, rename, or annotate resources.
pub trait ResourceManipulator {
    /// Short name used in logs and error context.
    fn name(&self) -> &'static str;

    fn priority(&self) -> Priority {
        Priority::DEFAULT
    }

    fn manipulate(&self, resources: &mut Vec<Resource>) -> Result<()>;
}

/// Ordered set of manipulators run once per pass.
#[derive(Default)]
pub struct Pipeline {
    manipulators: Vec<Box<dyn ResourceManipulator>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a manipulator. Equal priorities run in registration order.
    pub fn register(&mut self, manipulator: impl ResourceManipulator + 'static) -> &mut Self {
        self.manipulators.push(Box::new(manipulator));
        self
    }

    pub fn len(&self) -> usize {
        self.manipulators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.manipulators.is_empty()
    }

    /// Run a full pass. The first failing manipulator aborts the pass.
    pub fn run(&self, mut resources: Vec<Resource>) -> Result<Vec<Resource>> {
        let mut ordered: Vec<&dyn ResourceManipulator> =
            self.manipulators.iter().map(|m| &**m).collect();
        // Stable: ties keep registration order
        ordered.sort_by_key(|m| m.priority());

        for manipulator in ordered {
            debug!(
                "pipeline";
                "{} (priority {}) on {} resources",
                manipulator.name(),
                manipulator.priority(),
                resources.len()
            );
            manipulator
                .manipulate(&mut resources)
                .with_context(|| format!("resource manipulator `{}` failed", manipulator.name()))?;
        }

        Ok(resources)
    }
}
