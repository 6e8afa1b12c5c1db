//! Pagerule - path-pattern metadata overlay for static site resources.
//!
//! Page rules bind a path pattern (literal path, regex, or glob) to a
//! metadata bundle. Every resource whose path matches a rule receives that
//! rule's metadata, for every matching rule, in declaration order.
//!
//! ```
//! use pagerule::page::PageOptions;
//! use pagerule::routing::{RegisterContext, RuleRegistry, annotate};
//! use pagerule::sitemap::Resource;
//! use serde_json::json;
//!
//! let ctx = RegisterContext::with_index_file("index.html");
//! let mut registry = RuleRegistry::new();
//! registry.register("/blog/*", PageOptions::new().option("layout", "post"), &ctx)?;
//! registry.register("/blog/featured.html", PageOptions::new().local("featured", true), &ctx)?;
//!
//! let mut resources = vec![Resource::new("blog/featured.html"), Resource::new("about.html")];
//! annotate(&mut resources, &registry)?;
//!
//! assert_eq!(resources[0].option("layout"), Some(&json!("post")));
//! assert_eq!(resources[0].locals().get("featured"), Some(&json!(true)));
//! assert!(resources[1].metadata().is_empty());
//! # Ok::<(), pagerule::routing::RouteError>(())
//! ```

pub mod logger;

pub mod cli;
pub mod config;
pub mod core;
pub mod page;
pub mod pipeline;
pub mod routing;
pub mod sitemap;
pub mod utils;
