//! Analyzer orchestrating per-file checks across a directory tree.

use crate::check::NamespaceLocationCheck;
use crate::config::Config;
use crate::source::SourceModules;
use crate::types::{Finding, LintResult};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a Rust source file.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// An exclude/include pattern kept in both raw and compiled form.
struct PathPattern {
    raw: String,
    compiled: glob::Pattern,
}

impl PathPattern {
    fn compile(raw: String) -> Result<Self, glob::PatternError> {
        let compiled = glob::Pattern::new(&raw)?;
        Ok(Self { raw, compiled })
    }
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    config_path: Option<PathBuf>,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Loads the configuration from a TOML file at build time.
    ///
    /// Takes precedence over [`config`](Self::config) when both are set.
    #[must_use]
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Sets whether to fail on parse errors (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded, the current
    /// directory is unavailable, or a glob pattern is invalid.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = match self.config_path {
            Some(path) => Config::from_file(&path)?,
            None => self.config.unwrap_or_default(),
        };

        let root = self.root.unwrap_or_else(|| config.analyzer.root.clone());
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.clone());
        if exclude_patterns.is_empty() {
            exclude_patterns.extend(["**/target/**".to_string(), "**/vendor/**".to_string()]);
        }

        let exclude = exclude_patterns
            .into_iter()
            .map(PathPattern::compile)
            .collect::<Result<Vec<_>, _>>()?;
        let include = config
            .analyzer
            .include
            .iter()
            .cloned()
            .map(PathPattern::compile)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Analyzer {
            root,
            check: NamespaceLocationCheck::new(),
            exclude,
            include,
            respect_gitignore: config.analyzer.respect_gitignore,
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// Walks a directory tree and runs the namespace/location check per file.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    check: NamespaceLocationCheck,
    exclude: Vec<PathPattern>,
    include: Vec<PathPattern>,
    respect_gitignore: bool,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Analyzes all files and returns the results.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read, or on the first parse
    /// failure when `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files();

        info!("Found {} files to analyze", files.len());

        for file_path in &files {
            match self.analyze_file(file_path) {
                Ok(findings) => {
                    result.findings.extend(findings);
                    result.files_checked += 1;
                }
                Err(AnalyzerError::Parse { path, message }) => {
                    warn!("Failed to parse {}: {}", path.display(), message);
                    if self.fail_on_parse_error {
                        return Err(AnalyzerError::Parse { path, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        result.findings.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });

        info!(
            "Analysis complete: {} findings in {} files",
            result.findings.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Analyzes a single file and returns findings with root-relative paths.
    fn analyze_file(&self, path: &Path) -> Result<Vec<Finding>, AnalyzerError> {
        debug!("Analyzing: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let modules = SourceModules::parse(&content).map_err(|e| AnalyzerError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut findings = self.check.check(Some(path), &modules, &modules);
        for finding in &mut findings {
            if let Ok(relative) = finding.location.file.strip_prefix(&self.root) {
                finding.location.file = relative.to_path_buf();
            }
        }

        Ok(findings)
    }

    /// Discovers all Rust source files to analyze, in stable order.
    fn discover_files(&self) -> Vec<PathBuf> {
        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder.standard_filters(self.respect_gitignore);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.into_path();
            if path.extension().and_then(|e| e.to_str()) != Some("rs") {
                continue;
            }
            if self.should_exclude(&path) {
                debug!("Excluding: {}", path.display());
                continue;
            }
            if !self.matches_include(&path) {
                continue;
            }

            files.push(path);
        }

        files.sort();
        files
    }

    /// Checks if a path matches any exclude pattern.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude {
            if pattern.compiled.matches(&path_str) {
                return true;
            }

            // Also check as substring for patterns like "**/target/**".
            let normalized = pattern.raw.replace("**", "");
            if !normalized.is_empty() && path_str.contains(&normalized) {
                return true;
            }
        }

        false
    }

    /// Checks the include patterns; an empty list admits every file.
    fn matches_include(&self, path: &Path) -> bool {
        if self.include.is_empty() {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.include.iter().any(|p| p.compiled.matches(&path_str))
    }
}
