//! Input file discovery for column checks.
//!
//! Expands shell-style glob patterns (`src/Entity/*.php`, `src/**/*.php`)
//! relative to the project root. The directory walk uses the `ignore` crate
//! with its standard filters turned off, so `.gitignore` does not hide entity
//! files; `*` never crosses a `/`.
//!
//! A pattern without glob metacharacters is taken literally and kept even if
//! the file does not exist, so a mistyped path surfaces as an unreadable file
//! instead of silently checking nothing.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::types::{SourceFile, UnreadableFile};

/// Result of reading the discovered files.
#[derive(Debug, Default)]
pub struct DiscoveredSources {
    /// Files read successfully, in discovery order.
    pub files: Vec<SourceFile>,
    /// Files that matched but could not be read.
    pub unreadable: Vec<UnreadableFile>,
}

/// Errors raised while expanding input patterns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiscoveryError {
    /// A path or exclude pattern is not a valid glob.
    #[error("Invalid glob pattern '{0}': {1}")]
    InvalidPattern(String, String),
}

/// Whether `pattern` contains glob metacharacters.
fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', '{'])
}

/// Normalize a user-supplied pattern: forward slashes, no leading `./`.
fn normalize_pattern(pattern: &str) -> String {
    let normalized = pattern.replace('\\', "/");
    let mut trimmed = normalized.as_str();
    while let Some(rest) = trimmed.strip_prefix("./") {
        trimmed = rest;
    }
    trimmed.to_owned()
}

fn compile_glob(pattern: &str) -> Result<GlobMatcher, DiscoveryError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|g| g.compile_matcher())
        .map_err(|e| DiscoveryError::InvalidPattern(pattern.to_owned(), e.to_string()))
}

/// Compiled exclusion patterns.
///
/// A pattern ending in `/` excludes everything below that directory; any
/// other pattern is a glob matched against the displayed path.
struct Exclusions {
    prefixes: Vec<String>,
    globs: GlobSet,
}

impl Exclusions {
    fn new(patterns: &[String]) -> Result<Self, DiscoveryError> {
        let mut prefixes = Vec::new();
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let normalized = normalize_pattern(pattern);
            if normalized.ends_with('/') {
                prefixes.push(normalized);
                continue;
            }
            let glob = GlobBuilder::new(&normalized)
                .literal_separator(true)
                .build()
                .map_err(|e| DiscoveryError::InvalidPattern(pattern.clone(), e.to_string()))?;
            builder.add(glob);
        }
        let globs = builder
            .build()
            .map_err(|e| DiscoveryError::InvalidPattern(patterns.join(", "), e.to_string()))?;
        Ok(Self { prefixes, globs })
    }

    fn is_excluded(&self, path: &str) -> bool {
        self.prefixes
            .iter()
            .any(|p| path.starts_with(p.as_str()) || path.contains(&format!("/{p}")))
            || self.globs.is_match(path)
    }
}

/// Split a glob pattern into its literal base directory and the walk depth.
///
/// The depth is `None` when the pattern contains `**`.
fn glob_base(pattern: &str) -> (String, Option<usize>) {
    let components: Vec<&str> = pattern.split('/').collect();
    let literal = components.iter().take_while(|c| !is_glob(c)).count();
    let base = components[..literal].join("/");
    let base = if base.is_empty() && pattern.starts_with('/') {
        "/".to_owned()
    } else {
        base
    };
    let depth = if pattern.contains("**") {
        None
    } else {
        Some(components.len() - literal)
    };
    (base, depth)
}

/// Render `path` for display: relative to `root` when possible, forward slashes.
fn display_path(root: &Path, path: &Path, absolute: bool) -> String {
    let shown = if absolute {
        path
    } else {
        path.strip_prefix(root).unwrap_or(path)
    };
    shown.to_string_lossy().replace('\\', "/")
}

/// Expand one glob pattern into the sorted list of matching files.
fn expand_glob(root: &Path, pattern: &str) -> Result<Vec<String>, DiscoveryError> {
    let matcher = compile_glob(pattern)?;
    let absolute = Path::new(pattern).is_absolute();
    let (base, depth) = glob_base(pattern);
    let base_dir: PathBuf = if absolute {
        PathBuf::from(&base)
    } else {
        root.join(&base)
    };

    if !base_dir.is_dir() {
        log::debug!("Pattern {pattern}: base directory {} does not exist", base_dir.display());
        return Ok(Vec::new());
    }

    let mut walker = WalkBuilder::new(&base_dir);
    walker.standard_filters(false).follow_links(true).max_depth(depth);

    let mut matches = Vec::new();
    for entry in walker.build().flatten() {
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let shown = display_path(root, entry.path(), absolute);
        if matcher.is_match(&shown) {
            matches.push(shown);
        }
    }
    matches.sort();
    Ok(matches)
}

/// Expand input patterns into the list of files to check.
///
/// Patterns are expanded in order; matches of one pattern are sorted. A file
/// matched by several patterns is listed once, at its first position. Files
/// matching an `exclude` pattern are dropped.
///
/// # Errors
///
/// Returns [`DiscoveryError::InvalidPattern`] for a malformed glob.
pub fn expand_patterns(
    root: &Path,
    patterns: &[String],
    exclude: &[String],
) -> Result<Vec<String>, DiscoveryError> {
    let exclusions = Exclusions::new(exclude)?;
    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    for pattern in patterns {
        let normalized = normalize_pattern(pattern);
        let expanded = if is_glob(&normalized) {
            expand_glob(root, &normalized)?
        } else {
            vec![normalized]
        };
        log::debug!("Pattern {pattern} matched {} file(s)", expanded.len());

        for path in expanded {
            if exclusions.is_excluded(&path) {
                log::trace!("Excluded {path}");
                continue;
            }
            if seen.insert(path.clone()) {
                paths.push(path);
            }
        }
    }

    Ok(paths)
}

/// Read every file in `paths` (relative paths resolve against `root`).
///
/// Files are read sequentially, once each. Bytes that are not valid UTF-8 are
/// replaced rather than failing the file.
#[must_use]
pub fn read_sources(root: &Path, paths: &[String]) -> DiscoveredSources {
    let mut sources = DiscoveredSources::default();

    for path in paths {
        let abs_path = root.join(path);
        match std::fs::read(&abs_path) {
            Ok(bytes) => {
                let content = String::from_utf8(bytes)
                    .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());
                sources.files.push(SourceFile {
                    path: path.clone(),
                    content,
                });
            }
            Err(e) => {
                log::debug!("Could not read {path}: {e}");
                sources.unreadable.push(UnreadableFile {
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    sources
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
