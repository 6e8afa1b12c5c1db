//! Apply page rules to a resource list.

use super::{RouteError, RuleRegistry};
use crate::sitemap::MetadataSink;
use crate::utils::path::with_leading_slash;

/// Counters from one annotation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotateStats {
    /// Resources that matched at least one rule.
    pub resources: usize,
    /// Total `add_metadata` calls.
    pub applied: usize,
}

/// Annotate every resource with the metadata of each matching rule.
///
/// Rules are tried in registration order for every resource and all matches
/// apply, so a broad rule and a narrow one can both contribute. Patterns are
/// compiled before any resource is touched: an invalid glob fails the whole
/// pass without annotating anything.
pub fn annotate<S: MetadataSink>(
    resources: &mut [S],
    registry: &RuleRegistry,
) -> Result<AnnotateStats, RouteError> {
    let matchers = registry
        .rules()
        .iter()
        .map(|rule| -> Result<_, RouteError> {
            Ok((rule.pattern().compile()?, rule.metadata()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut stats = AnnotateStats::default();
    for resource in resources.iter_mut() {
        let path = with_leading_slash(resource.path());
        let mut matched = false;

        for (matcher, metadata) in &matchers {
            if matcher.matches(&path) {
                resource.add_metadata(metadata);
                stats.applied += 1;
                matched = true;
            }
        }

        if matched {
            stats.resources += 1;
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Metadata, PageOptions};
    use crate::routing::RegisterContext;
    use crate::sitemap::Resource;
    use regex::Regex;
    use serde_json::json;

    /// Sink that records every bundle it receives.
    struct Recorder {
        path: String,
        received: Vec<Metadata>,
    }

    impl Recorder {
        fn new(path: &str) -> Self {
            Self {
                path: path.to_string(),
                received: Vec::new(),
            }
        }
    }

    impl MetadataSink for Recorder {
        fn path(&self) -> &str {
            &self.path
        }

        fn add_metadata(&mut self, bundle: &Metadata) {
            self.received.push(bundle.clone());
        }
    }

    fn ctx() -> RegisterContext<'static> {
        RegisterContext::with_index_file("index.html")
    }

    #[test]
    fn test_end_to_end_layout_false() {
        let mut registry = RuleRegistry::new();
        registry
            .register("/index.html", PageOptions::new().option("layout", false), &ctx())
            .unwrap();

        let mut resources = vec![Resource::new("index.html"), Resource::new("other.html")];
        annotate(&mut resources, &registry).unwrap();

        assert_eq!(resources[0].option("layout"), Some(&json!(false)));
        assert!(resources[1].metadata().is_empty());
    }

    #[test]
    fn test_rules_applied_in_registration_order() {
        let mut registry = RuleRegistry::new();
        registry
            .register("/a.html", PageOptions::new().option("rule", "R1"), &ctx())
            .unwrap();
        registry
            .register("/a.html", PageOptions::new().option("rule", "R2"), &ctx())
            .unwrap();

        let mut sinks = vec![Recorder::new("a.html")];
        annotate(&mut sinks, &registry).unwrap();

        let order: Vec<_> = sinks[0]
            .received
            .iter()
            .map(|m| m.options.get("rule").cloned())
            .collect();
        assert_eq!(order, vec![Some(json!("R1")), Some(json!("R2"))]);
    }

    #[test]
    fn test_multi_match_layering() {
        let mut registry = RuleRegistry::new();
        registry
            .register("/blog/*", PageOptions::new().local("featured", false), &ctx())
            .unwrap();
        registry
            .register("/blog/post1.html", PageOptions::new().local("featured", true), &ctx())
            .unwrap();

        let mut sinks = vec![Recorder::new("blog/post1.html")];
        annotate(&mut sinks, &registry).unwrap();
        assert_eq!(sinks[0].received.len(), 2);

        let mut resources = vec![Resource::new("blog/post1.html"), Resource::new("blog/post2.html")];
        annotate(&mut resources, &registry).unwrap();
        assert_eq!(resources[0].locals().get("featured"), Some(&json!(true)));
        assert_eq!(resources[1].locals().get("featured"), Some(&json!(false)));
    }

    #[test]
    fn test_no_match_is_noop() {
        let mut registry = RuleRegistry::new();
        registry
            .register("/about.html", PageOptions::new().option("layout", "page"), &ctx())
            .unwrap();
        registry
            .register(Regex::new("^/blog/").unwrap(), PageOptions::new(), &ctx())
            .unwrap();

        let mut sinks = vec![Recorder::new("contact.html")];
        let stats = annotate(&mut sinks, &registry).unwrap();
        assert!(sinks[0].received.is_empty());
        assert_eq!(stats, AnnotateStats::default());
    }

    #[test]
    fn test_directory_rule_matches_index_resource() {
        let mut registry = RuleRegistry::new();
        registry
            .register("/docs/", PageOptions::new().data("section", "docs"), &ctx())
            .unwrap();

        let mut resources = vec![Resource::new("docs/index.html"), Resource::new("docs/api.html")];
        annotate(&mut resources, &registry).unwrap();
        assert_eq!(resources[0].page_data().get("section"), Some(&json!("docs")));
        assert!(resources[1].page_data().is_empty());
    }

    #[test]
    fn test_regex_matches_slash_prefixed_path() {
        let mut registry = RuleRegistry::new();
        registry
            .register(
                Regex::new(r"^/archive/\d{4}/").unwrap(),
                PageOptions::new().option("layout", "archive"),
                &ctx(),
            )
            .unwrap();

        let mut resources = vec![Resource::new("archive/2024/a.html"), Resource::new("archive/x.html")];
        let stats = annotate(&mut resources, &registry).unwrap();
        assert_eq!(resources[0].option("layout"), Some(&json!("archive")));
        assert!(resources[1].option("layout").is_none());
        assert_eq!(stats, AnnotateStats { resources: 1, applied: 1 });
    }

    #[test]
    fn test_deterministic_across_runs() {
        let mut registry = RuleRegistry::new();
        registry
            .register("**/*.html", PageOptions::new().option("layout", "base"), &ctx())
            .unwrap();
        registry
            .register("/blog/*", PageOptions::new().option("layout", "post"), &ctx())
            .unwrap();

        let fresh = || {
            vec![
                Resource::new("index.html"),
                Resource::new("blog/a.html"),
                Resource::new("feed.xml"),
            ]
        };
        let mut first = fresh();
        let mut second = fresh();
        annotate(&mut first, &registry).unwrap();
        annotate(&mut second, &registry).unwrap();

        assert_eq!(first, second);
        assert_eq!(first[0].option("layout"), Some(&json!("base")));
        assert_eq!(first[1].option("layout"), Some(&json!("post")));
        assert!(first[2].metadata().is_empty());
    }

    #[test]
    fn test_invalid_glob_aborts_before_annotating() {
        let mut registry = RuleRegistry::new();
        registry
            .register("/index.html", PageOptions::new().option("layout", false), &ctx())
            .unwrap();
        registry.register("/blog/[*", PageOptions::new(), &ctx()).unwrap();

        let mut resources = vec![Resource::new("index.html")];
        let err = annotate(&mut resources, &registry).unwrap_err();
        assert!(matches!(err, RouteError::InvalidGlob { .. }));
        assert!(resources[0].metadata().is_empty());
    }

    #[test]
    fn test_empty_registry() {
        let mut resources = vec![Resource::new("index.html")];
        let stats = annotate(&mut resources, &RuleRegistry::new()).unwrap();
        assert_eq!(stats.applied, 0);
    }
}
