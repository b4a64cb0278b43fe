//! Core type definitions for the column check engine.
//!
//! - [`Dialect`] names the reference SQL engines whose reserved words are consulted
//! - [`NamingScheme`] is the column naming convention enforced for one run
//! - [`Severity`] and [`DiagnosticKind`] classify diagnostics
//! - [`CheckDiagnostic`] is the atomic unit of check output
//! - [`CheckResult`] is the aggregate result of a run
//! - [`SourceFile`] is one PHP file, read once

use serde::{Deserialize, Serialize};

/// A reference SQL dialect with its own reserved-word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dialect {
    /// PostgreSQL.
    #[serde(rename = "postgresql")]
    PostgreSql,
    /// MySQL.
    #[serde(rename = "mysql")]
    MySql,
    /// SQLite.
    #[serde(rename = "sqlite")]
    Sqlite,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PostgreSql => write!(f, "postgresql"),
            Self::MySql => write!(f, "mysql"),
            Self::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Column naming convention enforced across a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingScheme {
    /// `underscore_case` column names (default).
    #[default]
    Snake,
    /// `camelCase` column names.
    Camel,
}

impl NamingScheme {
    /// The name `identifier` should have under this scheme.
    #[must_use]
    pub fn expected_name(self, identifier: &str) -> String {
        match self {
            Self::Snake => crate::naming::to_snake(identifier),
            Self::Camel => crate::naming::to_camel(identifier),
        }
    }
}

impl std::fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snake => write!(f, "snake"),
            Self::Camel => write!(f, "camel"),
        }
    }
}

/// Diagnostic severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fails the run.
    Error,
    /// Reported; fails the run only with `fail_on_warnings`.
    Warning,
    /// Informational notice, never fails the run.
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// What kind of violation a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// Column name does not follow the active naming scheme (COL001).
    NamingConvention,
    /// Unquoted column name collides with a reserved SQL keyword (COL002).
    ReservedKeyword,
    /// Join column name is quoted (COL003).
    JoinColumnQuoting,
}

impl DiagnosticKind {
    /// Stable rule identifier for this kind.
    #[must_use]
    pub fn rule_id(self) -> &'static str {
        match self {
            Self::NamingConvention => "COL001",
            Self::ReservedKeyword => "COL002",
            Self::JoinColumnQuoting => "COL003",
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NamingConvention => write!(f, "NamingConvention"),
            Self::ReservedKeyword => write!(f, "ReservedKeyword"),
            Self::JoinColumnQuoting => write!(f, "JoinColumnQuoting"),
        }
    }
}

/// A single recorded violation.
///
/// Carries enough context to render the console line, JSON and SARIF output,
/// and to assert on in tests without parsing the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckDiagnostic {
    /// Rule identifier (`"COL001"`, `"COL002"`, `"COL003"`).
    pub rule_id: String,

    /// Violation kind.
    pub kind: DiagnosticKind,

    /// Severity after config overrides.
    pub severity: Severity,

    /// Human-readable message, exactly the console line.
    pub message: String,

    /// Path of the file declaring the property (forward slashes).
    pub file_path: String,

    /// 1-based line of the property declaration (0 if unknown).
    pub line: u32,

    /// Fully-qualified name of the class declaring the property.
    pub class_name: String,

    /// Property name without the leading `$`.
    pub property: String,

    /// Expected column name (naming violations only).
    pub expected: Option<String>,

    /// Actual column name (naming and keyword violations).
    pub actual: Option<String>,

    /// Dialects reserving the column name (keyword violations only).
    pub dialects: Vec<Dialect>,
}

/// Aggregate result of one validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// All diagnostics in input-file, class, then property order.
    pub diagnostics: Vec<CheckDiagnostic>,

    /// Files that matched but could not be read, with the reason.
    pub unreadable_files: Vec<UnreadableFile>,

    /// Number of files that were read and scanned.
    pub total_files_checked: u32,

    /// Number of classes whose properties were validated.
    pub total_classes_checked: u32,

    /// Number of properties inspected.
    pub total_properties_checked: u32,

    /// Count of diagnostics with severity `Error`.
    pub total_errors: u32,

    /// Count of diagnostics with severity `Warning`.
    pub total_warnings: u32,

    /// Wall-clock milliseconds for the whole run.
    pub elapsed_ms: u64,

    /// Naming scheme the run enforced.
    pub naming_scheme: NamingScheme,

    /// Whether the run passed.
    pub passed: bool,
}

/// A file that matched an input pattern but could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadableFile {
    /// Path as it was matched.
    pub path: String,
    /// The I/O error message.
    pub reason: String,
}

/// A PHP source file with its content.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path as given or matched (forward slashes).
    pub path: String,

    /// Full file content.
    pub content: String,
}
