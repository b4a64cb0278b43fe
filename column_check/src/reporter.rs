//! Text, JSON and SARIF output generation for column checks.
//!
//! Produces three output formats:
//!
//! 1. **Text**: one line per diagnostic, exactly the diagnostic message.
//!
//! 2. **JSON**: `serde_json` serialization of [`CheckResult`].
//!
//! 3. **SARIF v2.1.0**: Static Analysis Results Interchange Format, compatible
//!    with GitHub Code Scanning.
//!
//! ## SARIF Field Mapping
//!
//! | CheckDiagnostic field | SARIF location |
//! |---|---|
//! | `rule_id` | `result.ruleId` |
//! | `message` | `result.message.text` |
//! | `severity` | `result.level` (Error→error, Warning→warning, Info→note) |
//! | `file_path` | `result.locations[0].physicalLocation.artifactLocation.uri` |
//! | `line` | `result.locations[0].physicalLocation.region.startLine` |
//! | `expected` / `dialects` | `result.fixes[0].description.text` |

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{CheckDiagnostic, CheckResult, DiagnosticKind, Severity, UnreadableFile};

/// Tool version for SARIF metadata.
const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// SARIF schema URL.
const SARIF_SCHEMA: &str =
    "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/main/sarif-2.1/schema/sarif-schema-2.1.0.json";

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Render every diagnostic as one console line.
#[must_use]
pub fn to_text(result: &CheckResult) -> String {
    let mut out = String::new();
    for diag in &result.diagnostics {
        out.push_str(&diag.message);
        out.push('\n');
    }
    out
}

/// Render the stderr line for a file that could not be read.
#[must_use]
pub fn unreadable_line(file: &UnreadableFile) -> String {
    format!("Could not read {}: {}", file.path, file.reason)
}

/// One-line run summary, printed at higher verbosity.
#[must_use]
pub fn summary_line(result: &CheckResult) -> String {
    format!(
        "Checked {} file(s), {} class(es), {} propert{} ({} naming): {} error(s), {} warning(s), {} unreadable file(s) in {}ms",
        result.total_files_checked,
        result.total_classes_checked,
        result.total_properties_checked,
        if result.total_properties_checked == 1 { "y" } else { "ies" },
        result.naming_scheme,
        result.total_errors,
        result.total_warnings,
        result.unreadable_files.len(),
        result.elapsed_ms,
    )
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

/// Serialize a [`CheckResult`] to pretty-printed JSON.
///
/// # Errors
///
/// Returns an error message if serialization fails (should not happen for valid data).
pub fn to_json(result: &CheckResult) -> Result<String, String> {
    serde_json::to_string_pretty(result).map_err(|e| format!("JSON serialization failed: {e}"))
}

// ---------------------------------------------------------------------------
// SARIF output
// ---------------------------------------------------------------------------

/// Serialize a [`CheckResult`] to SARIF v2.1.0 JSON.
///
/// Produces a complete SARIF log with tool metadata, rule definitions,
/// and result objects mapped from check diagnostics.
///
/// # Errors
///
/// Returns an error message if serialization fails.
pub fn to_sarif(result: &CheckResult) -> Result<String, String> {
    let sarif = build_sarif_log(result);
    serde_json::to_string_pretty(&sarif).map_err(|e| format!("SARIF serialization failed: {e}"))
}

/// Build the SARIF log structure from a check result.
fn build_sarif_log(result: &CheckResult) -> SarifLog {
    // Collect unique rule IDs and build rule definitions
    let mut rule_map: HashMap<String, SarifRule> = HashMap::new();

    for diag in &result.diagnostics {
        rule_map
            .entry(diag.rule_id.clone())
            .or_insert_with(|| SarifRule {
                id: diag.rule_id.clone(),
                name: diag.kind.to_string(),
                short_description: SarifMessage {
                    text: kind_short_description(diag.kind).to_owned(),
                },
                default_configuration: SarifDefaultConfiguration {
                    level: severity_to_sarif_level(diag.severity),
                },
            });
    }

    // Sort rules by ID for deterministic output
    let mut rules: Vec<SarifRule> = rule_map.into_values().collect();
    rules.sort_by(|a, b| a.id.cmp(&b.id));

    let results: Vec<SarifResult> = result.diagnostics.iter().map(build_sarif_result).collect();

    SarifLog {
        schema: SARIF_SCHEMA.to_owned(),
        version: "2.1.0".to_owned(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: "column-check".to_owned(),
                    version: ENGINE_VERSION.to_owned(),
                    rules,
                },
            },
            results,
        }],
    }
}

/// Build a SARIF result object from a check diagnostic.
fn build_sarif_result(diag: &CheckDiagnostic) -> SarifResult {
    let mut location = SarifPhysicalLocation {
        artifact_location: SarifArtifactLocation {
            uri: diag.file_path.clone(),
        },
        region: None,
    };

    if diag.line > 0 {
        location.region = Some(SarifRegion {
            start_line: diag.line,
        });
    }

    let fixes = suggestion(diag).map(|text| {
        vec![SarifFix {
            description: SarifMessage { text },
        }]
    });

    SarifResult {
        rule_id: diag.rule_id.clone(),
        level: severity_to_sarif_level(diag.severity),
        message: SarifMessage {
            text: diag.message.clone(),
        },
        locations: vec![SarifLocation {
            physical_location: location,
        }],
        fixes,
    }
}

/// How to resolve a diagnostic, when there is a single obvious fix.
fn suggestion(diag: &CheckDiagnostic) -> Option<String> {
    match diag.kind {
        DiagnosticKind::NamingConvention => diag
            .expected
            .as_ref()
            .map(|expected| format!("Rename the column to {expected}")),
        DiagnosticKind::ReservedKeyword => Some(
            "Quote the column name with backticks or choose another name".to_owned(),
        ),
        DiagnosticKind::JoinColumnQuoting => diag
            .actual
            .as_ref()
            .map(|name| format!("Use {} without backticks", name.trim_matches('`'))),
    }
}

/// Map severity to SARIF level string.
fn severity_to_sarif_level(severity: Severity) -> String {
    match severity {
        Severity::Error => "error".to_owned(),
        Severity::Warning => "warning".to_owned(),
        Severity::Info => "note".to_owned(),
    }
}

/// Short description of a rule.
fn kind_short_description(kind: DiagnosticKind) -> &'static str {
    match kind {
        DiagnosticKind::NamingConvention => "Column name does not follow the naming scheme",
        DiagnosticKind::ReservedKeyword => "Unquoted column name is a reserved SQL keyword",
        DiagnosticKind::JoinColumnQuoting => "Join column name is quoted",
    }
}

// ---------------------------------------------------------------------------
// SARIF v2.1.0 data structures
// ---------------------------------------------------------------------------

/// Top-level SARIF log structure.
#[derive(Debug, Serialize)]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

/// A single SARIF run (one per tool invocation).
#[derive(Debug, Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

/// Tool metadata.
#[derive(Debug, Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

/// Tool driver (name, version, rules).
#[derive(Debug, Serialize)]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

/// A SARIF rule definition.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    name: String,
    short_description: SarifMessage,
    default_configuration: SarifDefaultConfiguration,
}

/// Default configuration for a SARIF rule.
#[derive(Debug, Serialize)]
struct SarifDefaultConfiguration {
    level: String,
}

/// A single SARIF result (diagnostic).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fixes: Option<Vec<SarifFix>>,
}

/// A text message.
#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

/// A SARIF location wrapper.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: SarifPhysicalLocation,
}

/// Physical location in a file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<SarifRegion>,
}

/// File path in SARIF format.
#[derive(Debug, Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

/// Line region.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRegion {
    start_line: u32,
}

/// A suggested fix.
#[derive(Debug, Serialize)]
struct SarifFix {
    description: SarifMessage,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
