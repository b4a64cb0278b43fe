//! Configuration loading and resolution for column checks.
//!
//! Supports a 4-level configuration resolution order:
//! 1. `column-check.toml` (project root, `[check]` section)
//! 2. `extra."column-check"` object in `composer.json`
//! 3. `check:` key in `column-check.yaml` / `column-check.yml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied on top of the resolved configuration.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{NamingScheme, Severity};

/// Input pattern used when neither the config nor the command line names any.
pub const DEFAULT_PATH_PATTERN: &str = "src/Entity/*.php";

// ---------------------------------------------------------------------------
// Rule severity override
// ---------------------------------------------------------------------------

/// Per-rule severity override, or `Off` to disable a rule entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverityOverride {
    /// Override severity to Error.
    Error,
    /// Override severity to Warning.
    Warning,
    /// Override severity to Info.
    Info,
    /// Disable the rule entirely.
    Off,
}

// ---------------------------------------------------------------------------
// Main config
// ---------------------------------------------------------------------------

/// Complete configuration of a column check run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Naming convention enforced on every column.
    pub naming: NamingScheme,

    /// Glob patterns selecting the PHP files to check.
    pub paths: Vec<String>,

    /// Glob patterns removing files from the selection.
    pub exclude: Vec<String>,

    /// Per-rule severity overrides (rule ID → override).
    pub rules: HashMap<String, RuleSeverityOverride>,

    /// Maximum number of diagnostics to report (0 = unlimited).
    pub max_diagnostics: usize,

    /// Whether warnings should cause a non-zero exit code.
    pub fail_on_warnings: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            naming: NamingScheme::Snake,
            paths: vec![DEFAULT_PATH_PATTERN.to_owned()],
            exclude: Vec::new(),
            rules: HashMap::new(),
            max_diagnostics: 0,
            fail_on_warnings: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Deserialization helpers
// ---------------------------------------------------------------------------

/// Raw TOML structure for `column-check.toml`.
#[derive(Debug, Deserialize)]
struct TomlCheckFile {
    check: Option<CheckSection>,
}

/// The `[check]` section, shared by every config file format.
#[derive(Debug, Default, Deserialize)]
struct CheckSection {
    naming: Option<String>,
    paths: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    rules: Option<HashMap<String, String>>,
    max_diagnostics: Option<usize>,
    fail_on_warnings: Option<bool>,
}

/// Raw JSON structure for `composer.json` with `extra."column-check"`.
#[derive(Debug, Deserialize)]
struct ComposerJson {
    extra: Option<ComposerExtra>,
}

#[derive(Debug, Deserialize)]
struct ComposerExtra {
    #[serde(rename = "column-check")]
    column_check: Option<CheckSection>,
}

/// Raw YAML structure for `column-check.yaml` with a `check:` key.
#[derive(Debug, Deserialize)]
struct CheckYaml {
    check: Option<CheckSection>,
}

/// Parse a string severity value into a [`RuleSeverityOverride`].
fn parse_rule_severity(s: &str) -> Option<RuleSeverityOverride> {
    match s.to_lowercase().as_str() {
        "error" => Some(RuleSeverityOverride::Error),
        "warning" | "warn" => Some(RuleSeverityOverride::Warning),
        "info" => Some(RuleSeverityOverride::Info),
        "off" | "disabled" | "false" => Some(RuleSeverityOverride::Off),
        _ => None,
    }
}

/// Parse a naming scheme name into a [`NamingScheme`].
pub fn parse_naming_scheme(s: &str) -> Option<NamingScheme> {
    match s.to_lowercase().as_str() {
        "snake" | "snake_case" | "underscore" => Some(NamingScheme::Snake),
        "camel" | "camelcase" | "camel_case" => Some(NamingScheme::Camel),
        _ => None,
    }
}

/// Apply a [`CheckSection`] onto a [`CheckConfig`], overriding any set values.
fn apply_section(
    config: &mut CheckConfig,
    section: &CheckSection,
    source: &Path,
) -> Result<(), ConfigError> {
    let invalid = |key: &str, value: &str| {
        ConfigError::InvalidValue(
            source.display().to_string(),
            key.to_owned(),
            value.to_owned(),
        )
    };

    if let Some(ref v) = section.naming {
        config.naming = parse_naming_scheme(v).ok_or_else(|| invalid("naming", v))?;
    }
    if let Some(ref v) = section.paths {
        config.paths = v.clone();
    }
    if let Some(ref v) = section.exclude {
        config.exclude = v.clone();
    }
    if let Some(ref rules) = section.rules {
        for (rule_id, severity_str) in rules {
            let sev = parse_rule_severity(severity_str)
                .ok_or_else(|| invalid(&format!("rules.{rule_id}"), severity_str))?;
            config.rules.insert(rule_id.to_uppercase(), sev);
        }
    }
    if let Some(v) = section.max_diagnostics {
        config.max_diagnostics = v;
    }
    if let Some(v) = section.fail_on_warnings {
        config.fail_on_warnings = v;
    }
    Ok(())
}

fn read_config_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ReadError(path.display().to_string(), e.to_string()))
}

impl CheckConfig {
    /// Load configuration from the project root using the 4-level resolution order.
    ///
    /// 1. `column-check.toml` `[check]`
    /// 2. `extra."column-check"` in `composer.json`
    /// 3. `check:` in `column-check.yaml` / `column-check.yml`
    /// 4. Built-in defaults
    ///
    /// First file found wins; later files are not consulted. A `composer.json`
    /// without the `column-check` entry (or that is not valid JSON) is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a found config file cannot be read or parsed, or
    /// holds an unknown naming scheme or rule severity.
    pub fn load_from_project(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // 1. column-check.toml
        let check_toml = root.join("column-check.toml");
        if check_toml.is_file() {
            let content = read_config_file(&check_toml)?;
            let parsed: TomlCheckFile = toml::from_str(&content).map_err(|e| {
                ConfigError::ParseError(check_toml.display().to_string(), e.to_string())
            })?;
            if let Some(ref section) = parsed.check {
                apply_section(&mut config, section, &check_toml)?;
            }
            log::debug!("Loaded configuration from {}", check_toml.display());
            return Ok(config);
        }

        // 2. composer.json extra."column-check"
        let composer = root.join("composer.json");
        if composer.is_file() {
            let content = read_config_file(&composer)?;
            if let Ok(parsed) = serde_json::from_str::<ComposerJson>(&content) {
                if let Some(section) = parsed.extra.and_then(|e| e.column_check) {
                    apply_section(&mut config, &section, &composer)?;
                    log::debug!("Loaded configuration from {}", composer.display());
                    return Ok(config);
                }
            }
        }

        // 3. column-check.yaml check: or column-check.yml check:
        for name in &["column-check.yaml", "column-check.yml"] {
            let yaml_path = root.join(name);
            if yaml_path.is_file() {
                let content = read_config_file(&yaml_path)?;
                let parsed: CheckYaml = serde_yaml::from_str(&content).map_err(|e| {
                    ConfigError::ParseError(yaml_path.display().to_string(), e.to_string())
                })?;
                if let Some(ref section) = parsed.check {
                    apply_section(&mut config, section, &yaml_path)?;
                    log::debug!("Loaded configuration from {}", yaml_path.display());
                    return Ok(config);
                }
            }
        }

        // 4. Built-in defaults (already set)
        Ok(config)
    }

    /// Check whether a rule is enabled.
    ///
    /// Every rule is enabled unless its override is `Off`.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        self.rules
            .get(rule_id)
            .map_or(true, |o| *o != RuleSeverityOverride::Off)
    }

    /// Get the effective severity for a rule, considering config overrides.
    ///
    /// Returns the overridden severity if configured, otherwise the default.
    #[must_use]
    pub fn effective_severity(&self, rule_id: &str, default: Severity) -> Severity {
        match self.rules.get(rule_id) {
            Some(RuleSeverityOverride::Error) => Severity::Error,
            Some(RuleSeverityOverride::Warning) => Severity::Warning,
            Some(RuleSeverityOverride::Info) => Severity::Info,
            Some(RuleSeverityOverride::Off) | None => default,
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("Failed to read config file '{0}': {1}")]
    ReadError(String, String),

    /// Failed to parse a configuration file.
    #[error("Failed to parse config file '{0}': {1}")]
    ParseError(String, String),

    /// A configuration key holds a value outside its allowed set.
    #[error("Invalid value '{2}' for '{1}' in config file '{0}'")]
    InvalidValue(String, String, String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CheckConfig::default();
        assert_eq!(config.naming, NamingScheme::Snake);
        assert_eq!(config.paths, vec!["src/Entity/*.php"]);
        assert!(config.exclude.is_empty());
        assert!(config.rules.is_empty());
        assert_eq!(config.max_diagnostics, 0);
        assert!(!config.fail_on_warnings);
    }

    #[test]
    fn test_rule_enabled_default() {
        let config = CheckConfig::default();
        assert!(config.is_rule_enabled("COL001"));
        assert!(config.is_rule_enabled("COL003"));
    }

    #[test]
    fn test_rule_enabled_override_off() {
        let mut config = CheckConfig::default();
        config
            .rules
            .insert("COL002".to_owned(), RuleSeverityOverride::Off);
        assert!(!config.is_rule_enabled("COL002"));
        assert!(config.is_rule_enabled("COL001"));
    }

    #[test]
    fn test_effective_severity_default() {
        let config = CheckConfig::default();
        assert_eq!(
            config.effective_severity("COL001", Severity::Error),
            Severity::Error
        );
    }

    #[test]
    fn test_effective_severity_override() {
        let mut config = CheckConfig::default();
        config
            .rules
            .insert("COL002".to_owned(), RuleSeverityOverride::Warning);
        assert_eq!(
            config.effective_severity("COL002", Severity::Error),
            Severity::Warning
        );
    }

    #[test]
    fn test_load_nonexistent_dir() {
        let result = CheckConfig::load_from_project(Path::new("/nonexistent/path"));
        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.naming, NamingScheme::Snake);
    }

    #[test]
    fn test_parse_rule_severity() {
        assert_eq!(
            parse_rule_severity("error"),
            Some(RuleSeverityOverride::Error)
        );
        assert_eq!(
            parse_rule_severity("WARN"),
            Some(RuleSeverityOverride::Warning)
        );
        assert_eq!(
            parse_rule_severity("info"),
            Some(RuleSeverityOverride::Info)
        );
        assert_eq!(parse_rule_severity("off"), Some(RuleSeverityOverride::Off));
        assert_eq!(parse_rule_severity("unknown"), None);
    }

    #[test]
    fn test_parse_naming_scheme() {
        assert_eq!(parse_naming_scheme("snake"), Some(NamingScheme::Snake));
        assert_eq!(parse_naming_scheme("CamelCase"), Some(NamingScheme::Camel));
        assert_eq!(parse_naming_scheme("kebab"), None);
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let toml_content = r#"
[check]
naming = "camel"
paths = ["src/Model/**/*.php"]
exclude = ["src/Model/Legacy/*"]
max_diagnostics = 50
fail_on_warnings = true

[check.rules]
col002 = "warning"
COL003 = "off"
"#;
        std::fs::write(dir.path().join("column-check.toml"), toml_content).unwrap();
        let config = CheckConfig::load_from_project(dir.path()).unwrap();
        assert_eq!(config.naming, NamingScheme::Camel);
        assert_eq!(config.paths, vec!["src/Model/**/*.php"]);
        assert_eq!(config.exclude, vec!["src/Model/Legacy/*"]);
        assert_eq!(config.max_diagnostics, 50);
        assert!(config.fail_on_warnings);
        assert_eq!(
            config.effective_severity("COL002", Severity::Error),
            Severity::Warning
        );
        assert!(!config.is_rule_enabled("COL003"));
    }

    #[test]
    fn test_load_from_composer_json() {
        let dir = tempfile::tempdir().unwrap();
        let content = r#"{
            "name": "acme/shop",
            "require": {"doctrine/orm": "^2.14"},
            "extra": {"column-check": {"naming": "camel", "paths": ["lib/*.php"]}}
        }"#;
        std::fs::write(dir.path().join("composer.json"), content).unwrap();
        let config = CheckConfig::load_from_project(dir.path()).unwrap();
        assert_eq!(config.naming, NamingScheme::Camel);
        assert_eq!(config.paths, vec!["lib/*.php"]);
    }

    #[test]
    fn test_composer_json_without_entry_falls_through_to_yaml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("composer.json"), r#"{"name": "acme/shop"}"#).unwrap();
        std::fs::write(
            dir.path().join("column-check.yml"),
            "check:\n  naming: camel\n  rules:\n    COL001: off\n",
        )
        .unwrap();
        let config = CheckConfig::load_from_project(dir.path()).unwrap();
        assert_eq!(config.naming, NamingScheme::Camel);
        assert!(!config.is_rule_enabled("COL001"));
    }

    #[test]
    fn test_toml_wins_over_yaml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("column-check.toml"), "[check]\nnaming = \"snake\"\n")
            .unwrap();
        std::fs::write(dir.path().join("column-check.yaml"), "check:\n  naming: camel\n").unwrap();
        let config = CheckConfig::load_from_project(dir.path()).unwrap();
        assert_eq!(config.naming, NamingScheme::Snake);
    }

    #[test]
    fn test_invalid_naming_value() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("column-check.toml"), "[check]\nnaming = \"kebab\"\n")
            .unwrap();
        let err = CheckConfig::load_from_project(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_, ref key, ref value) if key == "naming" && value == "kebab"));
    }

    #[test]
    fn test_invalid_rule_severity() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("column-check.toml"),
            "[check.rules]\nCOL001 = \"fatal\"\n",
        )
        .unwrap();
        let err = CheckConfig::load_from_project(dir.path()).unwrap_err();
        assert!(err.to_string().contains("rules.COL001"));
    }

    #[test]
    fn test_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("column-check.toml"), "[check\nnaming = ").unwrap();
        let err = CheckConfig::load_from_project(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(..)));
    }
}
