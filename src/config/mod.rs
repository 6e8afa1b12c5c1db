//! Site configuration management for `pagerule.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── page       # [[page]]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! [site]
//! index-file = "index.html"
//! source = ["source"]
//!
//! [[page]]
//! path = "/blog/*"
//! layout = "post"
//!
//! [[page]]
//! regex = "^/archive/"
//! data = { archived = true }
//! ```

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{PageEntry, SiteSectionConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use crate::routing::{RegisterContext, RouteError, RuleRegistry, SourceDirs};
use crate::utils::plural_count;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing pagerule.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site settings (index file, sources)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Page rules, in declaration order
    #[serde(default)]
    pub page: Vec<PageEntry>,
}

impl SiteConfig {
    /// Load configuration, searching upward from `cwd` for `config_name`.
    ///
    /// The project root is the config file's parent directory.
    pub fn load(cwd: &Path, config_name: &Path) -> Result<Self, ConfigError> {
        let config_path = find_config_file(cwd, config_name)
            .ok_or_else(|| ConfigError::NotFound(config_name.to_path_buf()))?;

        let mut config = Self::from_path(&config_path)?;
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        config.config_path = config_path;
        config.finalize(&root);
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Resolve relative paths against the project root.
    fn finalize(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        self.site.source = self
            .site
            .source
            .iter()
            .map(|dir| if dir.is_absolute() { dir.clone() } else { root.join(dir) })
            .collect();

        for dir in self.site.source.iter().filter(|dir| !dir.is_dir()) {
            log!("warning"; "source directory `{}` does not exist", dir.display());
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Directory probe over the configured source directories.
    pub fn source_dirs(&self) -> SourceDirs {
        SourceDirs::new(self.site.source.iter().cloned())
    }

    /// Register every `[[page]]` entry, in declaration order.
    ///
    /// All problems are collected and reported together; no registry is
    /// returned unless every entry registered.
    pub fn build_registry(&self) -> Result<RuleRegistry, ConfigError> {
        let probe = self.source_dirs();
        let ctx = RegisterContext::new(self.site.index_file(), &probe);
        let mut registry = RuleRegistry::new();
        let mut diag = ConfigDiagnostics::new();

        for (index, entry) in self.page.iter().enumerate() {
            let Some(pattern) = entry.pattern(index, &mut diag) else {
                continue;
            };

            match registry.register(pattern, entry.options.clone(), &ctx) {
                Ok(()) => {}
                Err(err @ RouteError::MissingIndexFile { .. }) => diag.error_with_hint(
                    FieldPath::indexed("page", index, "path"),
                    err.to_string(),
                    "set `index-file` in [site]",
                ),
                Err(err) => diag.error(FieldPath::indexed("page", index, "path"), err.to_string()),
            }
        }

        diag.into_result()?;
        crate::debug!("config"; "registered {}", plural_count(registry.len(), "page rule"));
        Ok(registry)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::PatternKind;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\nindex-file = \"index.html\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_unknown_fields_collected() {
        let (_, ignored) =
            SiteConfig::parse_with_ignored("[site]\nindex_fil = \"x\"\n[misc]\na = 1").unwrap();
        assert_eq!(ignored, vec!["site.index_fil", "misc"]);
    }

    #[test]
    fn test_build_registry_in_declaration_order() {
        let config = test_parse_config(
            r#"
[[page]]
path = "/blog/*"
locals = { featured = false }

[[page]]
path = "blog/post1.html"
locals = { featured = true }

[[page]]
regex = "^/archive/"
layout = "archive"

[[page]]
path = "/docs/"
"#,
        );
        let registry = config.build_registry().unwrap();
        let rules = registry.rules();

        assert_eq!(rules.len(), 4);
        assert_eq!(rules[0].pattern().kind(), PatternKind::Glob);
        assert_eq!(rules[1].pattern().as_str(), "/blog/post1.html");
        assert_eq!(rules[2].pattern().kind(), PatternKind::Regex);
        assert_eq!(rules[2].metadata().options.get("layout"), Some(&json!("archive")));
        assert_eq!(rules[3].pattern().as_str(), "/docs/index.html");
    }

    #[test]
    fn test_build_registry_reports_all_problems() {
        let config = test_parse_config(
            r#"
[site]
index-file = ""

[[page]]
path = "/docs/"

[[page]]
regex = "(unclosed"

[[page]]
path = "/ok.html"
"#,
        );
        let Err(ConfigError::Diagnostics(diag)) = config.build_registry() else {
            panic!("expected diagnostics");
        };
        let fields: Vec<&str> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["page[0].path", "page[1].regex"]);
        assert!(diag.errors()[0].hint.is_some());
    }

    #[test]
    fn test_load_resolves_sources_and_probes_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("source/guides")).unwrap();
        fs::write(
            dir.path().join("pagerule.toml"),
            "[[page]]\npath = \"/guides\"\ndata = { section = \"guides\" }\n",
        )
        .unwrap();

        let nested = dir.path().join("source");
        let config = SiteConfig::load(&nested, Path::new("pagerule.toml")).unwrap();
        assert_eq!(config.get_root(), dir.path());
        assert_eq!(config.site.source, vec![dir.path().join("source")]);

        let registry = config.build_registry().unwrap();
        assert_eq!(registry.rules()[0].pattern().as_str(), "/guides/index.html");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let result = SiteConfig::load(dir.path(), Path::new("no-such-config.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
