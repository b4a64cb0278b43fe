//! Column check orchestrator, the main entry point for running checks.
//!
//! Coordinates file discovery, source reading, index construction, per-file
//! validation and result assembly. Files are validated in parallel; results
//! are collected in input order, so diagnostics always come out ordered by
//! file, then class declaration, then property.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

use crate::config::CheckConfig;
use crate::discovery::{expand_patterns, read_sources, DiscoveryError};
use crate::keywords;
use crate::mapping::{EntityIndex, ExtractError, MappingSource, PropertyRef};
use crate::scanner::ClassScanner;
use crate::types::{
    CheckDiagnostic, CheckResult, Dialect, DiagnosticKind, Severity, SourceFile, UnreadableFile,
};

/// Errors that abort a check run.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// Mapping metadata could not be read.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Input patterns could not be expanded.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
}

/// What validating one file produced.
#[derive(Debug, Default)]
struct FileOutcome {
    diagnostics: Vec<CheckDiagnostic>,
    classes: u32,
    properties: u32,
}

/// The column check engine.
///
/// Holds the run configuration; every check is independent of the previous one.
pub struct CheckEngine {
    /// The check configuration.
    config: CheckConfig,
}

impl CheckEngine {
    /// Create a new check engine with the given configuration.
    #[must_use]
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine runs with.
    #[must_use]
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Check every file matched by the configured path patterns.
    ///
    /// Relative patterns and paths resolve against `root`. Files that cannot
    /// be read are recorded in [`CheckResult::unreadable_files`] and skipped;
    /// the remaining files are still checked. Only diagnostics decide
    /// [`CheckResult::passed`].
    ///
    /// # Errors
    ///
    /// [`CheckError::Discovery`] for an invalid pattern, and
    /// [`CheckError::Extract`] when mapping metadata is malformed.
    pub fn check(&self, root: &Path) -> Result<CheckResult, CheckError> {
        let start = Instant::now();

        // 1. Expand patterns, then read every file once
        let paths = expand_patterns(root, &self.config.paths, &self.config.exclude)?;
        let sources = read_sources(root, &paths);

        // 2. Index every readable file so parent classes resolve across files
        let index = EntityIndex::from_sources(&sources.files);
        log::debug!(
            "Indexed {} class(es) from {} file(s)",
            index.len(),
            sources.files.len()
        );

        // 3. Validate
        self.run(&sources.files, sources.unreadable, &index, start)
    }

    /// Check already-read sources against any mapping source.
    ///
    /// # Errors
    ///
    /// [`CheckError::Extract`] when the mapping source fails for a reason other
    /// than an unknown class.
    pub fn check_sources(
        &self,
        files: &[SourceFile],
        mapping: &dyn MappingSource,
    ) -> Result<CheckResult, CheckError> {
        self.run(files, Vec::new(), mapping, Instant::now())
    }

    fn run(
        &self,
        files: &[SourceFile],
        unreadable_files: Vec<UnreadableFile>,
        mapping: &dyn MappingSource,
        start: Instant,
    ) -> Result<CheckResult, CheckError> {
        // Per-file validation in parallel; collect preserves input order
        let outcomes: Vec<FileOutcome> = files
            .par_iter()
            .map(|file| self.check_file(file, mapping))
            .collect::<Result<_, _>>()?;

        let mut diagnostics = Vec::new();
        let mut total_classes_checked = 0u32;
        let mut total_properties_checked = 0u32;
        for outcome in outcomes {
            total_classes_checked += outcome.classes;
            total_properties_checked += outcome.properties;
            diagnostics.extend(outcome.diagnostics);
        }

        // Summary counts cover every diagnostic, including truncated ones
        let total_errors = count_severity(&diagnostics, Severity::Error);
        let total_warnings = count_severity(&diagnostics, Severity::Warning);

        let max_diags = self.config.max_diagnostics;
        if max_diags > 0 && diagnostics.len() > max_diags {
            log::debug!(
                "Truncating {} diagnostics to {max_diags}",
                diagnostics.len()
            );
            diagnostics.truncate(max_diags);
        }

        let violations_fail = if self.config.fail_on_warnings {
            total_errors > 0 || total_warnings > 0
        } else {
            total_errors > 0
        };
        // Unreadable files are reported but never decide the verdict
        let passed = !violations_fail;

        Ok(CheckResult {
            diagnostics,
            unreadable_files,
            total_files_checked: files.len() as u32,
            total_classes_checked,
            total_properties_checked,
            total_errors,
            total_warnings,
            elapsed_ms: start.elapsed().as_millis() as u64,
            naming_scheme: self.config.naming,
            passed,
        })
    }

    /// Validate every class declared in one file.
    fn check_file(
        &self,
        file: &SourceFile,
        mapping: &dyn MappingSource,
    ) -> Result<FileOutcome, ExtractError> {
        log::info!("Validating {}", file.path);

        let mut outcome = FileOutcome::default();
        let scanner = ClassScanner::new(&file.content);
        for class in scanner.classes() {
            self.validate_class(&class.qualified_name, mapping, &mut outcome)?;
        }
        Ok(outcome)
    }

    /// Validate all properties of a class; an unknown class is skipped.
    fn validate_class(
        &self,
        class_name: &str,
        mapping: &dyn MappingSource,
        outcome: &mut FileOutcome,
    ) -> Result<(), ExtractError> {
        log::debug!("Validating class {class_name}");

        let properties = match mapping.declared_properties(class_name) {
            Ok(properties) => properties,
            Err(ExtractError::UnknownClass(name)) => {
                log::warn!("Skipping class {name}: it could not be resolved");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        outcome.classes += 1;
        for property in &properties {
            outcome.properties += 1;
            self.validate_property(property, mapping, &mut outcome.diagnostics)?;
        }
        Ok(())
    }

    /// Apply the naming, keyword and join column rules to one property.
    ///
    /// Every rule runs; one violation never hides another.
    fn validate_property(
        &self,
        property: &PropertyRef,
        mapping: &dyn MappingSource,
        diags: &mut Vec<CheckDiagnostic>,
    ) -> Result<(), ExtractError> {
        log::trace!("Validating property {}", property.name);

        let class = &property.declaring_class;

        if let Some(column) = mapping.column_mapping(class, &property.name)? {
            let current = column.current_name();

            let expected = self.config.naming.expected_name(current);
            if expected != current {
                let message = format!(
                    "{class}:${} column name should be {expected}, but is {current}!",
                    property.name
                );
                self.emit(diags, DiagnosticKind::NamingConvention, property, message, |d| {
                    d.expected = Some(expected.clone());
                    d.actual = Some(current.to_owned());
                });
            }

            if !column.quoted {
                if let Some(dialects) = keywords::lookup(current) {
                    let message = format!(
                        "{} ({class}:${}) is a reserved keyword in ({}) and must be quoted or renamed!",
                        current.to_ascii_uppercase(),
                        property.name,
                        dialect_list(dialects)
                    );
                    self.emit(diags, DiagnosticKind::ReservedKeyword, property, message, |d| {
                        d.actual = Some(current.to_owned());
                        d.dialects = dialects.to_vec();
                    });
                }
            }
        }

        if let Some(join) = mapping.join_column_mapping(class, &property.name)? {
            if join.declared_name.is_some() && join.quoted {
                let message = format!(
                    "{class}:${} join column name is quoted, but join columns must not be quoted!",
                    property.name
                );
                self.emit(diags, DiagnosticKind::JoinColumnQuoting, property, message, |d| {
                    d.actual = join.declared_name.clone();
                });
            }
        }

        Ok(())
    }

    /// Record a diagnostic unless its rule is disabled.
    fn emit(
        &self,
        diags: &mut Vec<CheckDiagnostic>,
        kind: DiagnosticKind,
        property: &PropertyRef,
        message: String,
        details: impl FnOnce(&mut CheckDiagnostic),
    ) {
        let rule_id = kind.rule_id();
        if !self.config.is_rule_enabled(rule_id) {
            return;
        }
        let mut diag = CheckDiagnostic {
            rule_id: rule_id.to_owned(),
            kind,
            severity: self.config.effective_severity(rule_id, Severity::Error),
            message,
            file_path: property.file_path.clone(),
            line: property.line,
            class_name: property.declaring_class.clone(),
            property: property.name.clone(),
            expected: None,
            actual: None,
            dialects: Vec::new(),
        };
        details(&mut diag);
        diags.push(diag);
    }
}

/// Render dialects as `postgresql, mysql, sqlite`.
fn dialect_list(dialects: &[Dialect]) -> String {
    dialects
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn count_severity(diags: &[CheckDiagnostic], severity: Severity) -> u32 {
    diags.iter().filter(|d| d.severity == severity).count() as u32
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;

    use indoc::indoc;
    use tempfile::tempdir;

    use super::*;
    use crate::config::RuleSeverityOverride;
    use crate::mapping::{ColumnMapping, JoinColumnMapping};
    use crate::types::NamingScheme;

    /// Mapping source with hand-written facts for one class `App\Foo`.
    #[derive(Default)]
    struct StaticMappings {
        properties: Vec<&'static str>,
        columns: HashMap<&'static str, Option<&'static str>>,
        joins: HashMap<&'static str, &'static str>,
        malformed: Option<&'static str>,
    }

    impl StaticMappings {
        fn column(mut self, property: &'static str, name: Option<&'static str>) -> Self {
            self.properties.push(property);
            self.columns.insert(property, name);
            self
        }

        fn join(mut self, property: &'static str, name: &'static str) -> Self {
            self.properties.push(property);
            self.joins.insert(property, name);
            self
        }
    }

    impl MappingSource for StaticMappings {
        fn declared_properties(&self, class: &str) -> Result<Vec<PropertyRef>, ExtractError> {
            if class != "App\\Foo" {
                return Err(ExtractError::UnknownClass(class.to_owned()));
            }
            Ok(self
                .properties
                .iter()
                .enumerate()
                .map(|(i, name)| PropertyRef {
                    declaring_class: class.to_owned(),
                    name: (*name).to_owned(),
                    file_path: "Foo.php".to_owned(),
                    line: i as u32 + 1,
                })
                .collect())
        }

        fn column_mapping(
            &self,
            class: &str,
            property: &str,
        ) -> Result<Option<ColumnMapping>, ExtractError> {
            if self.malformed == Some(property) {
                return Err(ExtractError::MalformedMapping {
                    annotation: "Column",
                    class: class.to_owned(),
                    property: property.to_owned(),
                    line: 1,
                    detail: "unclosed argument list".to_owned(),
                });
            }
            Ok(self
                .columns
                .get(property)
                .map(|name| ColumnMapping::new(class, property, name.map(str::to_owned))))
        }

        fn join_column_mapping(
            &self,
            class: &str,
            property: &str,
        ) -> Result<Option<JoinColumnMapping>, ExtractError> {
            Ok(self
                .joins
                .get(property)
                .map(|name| JoinColumnMapping::new(class, property, Some((*name).to_owned()))))
        }
    }

    const FOO_SOURCE: &str = "<?php namespace App; class Foo {}";

    fn run(naming: NamingScheme, mappings: &StaticMappings) -> CheckResult {
        let config = CheckConfig {
            naming,
            ..CheckConfig::default()
        };
        let files = vec![SourceFile {
            path: "Foo.php".to_owned(),
            content: FOO_SOURCE.to_owned(),
        }];
        CheckEngine::new(config)
            .check_sources(&files, mappings)
            .unwrap()
    }

    #[test]
    fn test_snake_declared_snake_passes() {
        let mappings = StaticMappings::default().column("userName", Some("user_name"));
        let result = run(NamingScheme::Snake, &mappings);
        assert!(result.diagnostics.is_empty());
        assert!(result.passed);
        assert_eq!(result.total_classes_checked, 1);
        assert_eq!(result.total_properties_checked, 1);
    }

    #[test]
    fn test_camel_scheme_flags_snake_name() {
        let mappings = StaticMappings::default().column("userName", Some("user_name"));
        let result = run(NamingScheme::Camel, &mappings);
        assert_eq!(result.diagnostics.len(), 1);
        let diag = &result.diagnostics[0];
        assert_eq!(diag.kind, DiagnosticKind::NamingConvention);
        assert_eq!(diag.rule_id, "COL001");
        assert_eq!(diag.expected.as_deref(), Some("userName"));
        assert_eq!(diag.actual.as_deref(), Some("user_name"));
        assert_eq!(
            diag.message,
            "App\\Foo:$userName column name should be userName, but is user_name!"
        );
        assert!(!result.passed);
    }

    #[test]
    fn test_unquoted_reserved_keyword() {
        let mappings = StaticMappings::default().column("select", Some("SELECT"));
        let result = run(NamingScheme::Camel, &mappings);
        assert_eq!(result.diagnostics.len(), 1);
        let diag = &result.diagnostics[0];
        assert_eq!(diag.kind, DiagnosticKind::ReservedKeyword);
        assert_eq!(
            diag.dialects,
            vec![Dialect::PostgreSql, Dialect::MySql, Dialect::Sqlite]
        );
        assert_eq!(
            diag.message,
            "SELECT (App\\Foo:$select) is a reserved keyword in (postgresql, mysql, sqlite) and must be quoted or renamed!"
        );
    }

    #[test]
    fn test_snake_scheme_reports_naming_and_keyword_for_uppercase_keyword() {
        let mappings = StaticMappings::default().column("select", Some("SELECT"));
        let result = run(NamingScheme::Snake, &mappings);
        let kinds: Vec<_> = result.diagnostics.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![DiagnosticKind::NamingConvention, DiagnosticKind::ReservedKeyword]
        );
    }

    #[test]
    fn test_quoted_reserved_keyword_passes() {
        let mappings = StaticMappings::default().column("select", Some("`select`"));
        let result = run(NamingScheme::Snake, &mappings);
        assert!(result.diagnostics.is_empty());
        assert!(result.passed);
    }

    #[test]
    fn test_quoted_join_column_any_scheme() {
        for scheme in [NamingScheme::Snake, NamingScheme::Camel] {
            let mappings = StaticMappings::default().join("author", "`author_id`");
            let result = run(scheme, &mappings);
            assert_eq!(result.diagnostics.len(), 1);
            let diag = &result.diagnostics[0];
            assert_eq!(diag.kind, DiagnosticKind::JoinColumnQuoting);
            assert_eq!(
                diag.message,
                "App\\Foo:$author join column name is quoted, but join columns must not be quoted!"
            );
        }
    }

    #[test]
    fn test_unquoted_join_column_passes() {
        let mappings = StaticMappings::default().join("author", "author_id");
        assert!(run(NamingScheme::Snake, &mappings).passed);
    }

    #[test]
    fn test_implicit_name_still_checked_against_scheme() {
        let mappings = StaticMappings::default().column("userName", None);
        let result = run(NamingScheme::Snake, &mappings);
        assert_eq!(result.diagnostics.len(), 1);
        let diag = &result.diagnostics[0];
        assert_eq!(diag.expected.as_deref(), Some("user_name"));
        assert_eq!(diag.actual.as_deref(), Some("userName"));
    }

    #[test]
    fn test_implicit_keyword_name_is_exempt() {
        let mappings = StaticMappings::default().column("order", None);
        let result = run(NamingScheme::Snake, &mappings);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_property_order_preserved() {
        let mappings = StaticMappings::default()
            .column("bName", Some("bName"))
            .column("aName", Some("aName"));
        let result = run(NamingScheme::Snake, &mappings);
        let props: Vec<_> = result.diagnostics.iter().map(|d| d.property.as_str()).collect();
        assert_eq!(props, vec!["bName", "aName"]);
    }

    #[test]
    fn test_unknown_class_is_skipped() {
        let mappings = StaticMappings::default().column("userName", Some("userName"));
        let files = vec![SourceFile {
            path: "Other.php".to_owned(),
            content: "<?php namespace App; class Bar {} class Foo {}".to_owned(),
        }];
        let result = CheckEngine::new(CheckConfig::default())
            .check_sources(&files, &mappings)
            .unwrap();
        assert_eq!(result.total_classes_checked, 1);
        assert_eq!(result.diagnostics.len(), 1);
    }

    #[test]
    fn test_malformed_mapping_aborts_run() {
        let mut mappings = StaticMappings::default().column("broken", Some("broken"));
        mappings.malformed = Some("broken");
        let files = vec![SourceFile {
            path: "Foo.php".to_owned(),
            content: FOO_SOURCE.to_owned(),
        }];
        let err = CheckEngine::new(CheckConfig::default())
            .check_sources(&files, &mappings)
            .unwrap_err();
        assert!(matches!(
            err,
            CheckError::Extract(ExtractError::MalformedMapping { .. })
        ));
    }

    #[test]
    fn test_rule_off_and_downgrade() {
        let mut config = CheckConfig::default();
        config
            .rules
            .insert("COL001".to_owned(), RuleSeverityOverride::Off);
        config
            .rules
            .insert("COL002".to_owned(), RuleSeverityOverride::Warning);
        let mappings = StaticMappings::default().column("select", Some("SELECT"));
        let files = vec![SourceFile {
            path: "Foo.php".to_owned(),
            content: FOO_SOURCE.to_owned(),
        }];
        let result = CheckEngine::new(config.clone())
            .check_sources(&files, &mappings)
            .unwrap();
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].severity, Severity::Warning);
        assert_eq!(result.total_warnings, 1);
        assert!(result.passed);

        config.fail_on_warnings = true;
        let result = CheckEngine::new(config)
            .check_sources(&files, &mappings)
            .unwrap();
        assert!(!result.passed);
    }

    #[test]
    fn test_max_diagnostics_truncates_but_keeps_counts() {
        let config = CheckConfig {
            max_diagnostics: 1,
            ..CheckConfig::default()
        };
        let mappings = StaticMappings::default()
            .column("aName", Some("aName"))
            .column("bName", Some("bName"));
        let files = vec![SourceFile {
            path: "Foo.php".to_owned(),
            content: FOO_SOURCE.to_owned(),
        }];
        let result = CheckEngine::new(config)
            .check_sources(&files, &mappings)
            .unwrap();
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.total_errors, 2);
        assert!(!result.passed);
    }

    // -----------------------------------------------------------------------
    // End to end over files on disk
    // -----------------------------------------------------------------------

    const CAMEL_CASE_ENTITY: &str = indoc! {r#"
        <?php

        namespace Fixtures;

        use Doctrine\ORM\Mapping as ORM;

        /**
         * @ORM\Entity
         */
        class CamelCaseEntity
        {
            /**
             * @ORM\Id
             * @ORM\Column(name="id", type="integer")
             */
            protected $id;

            /**
             * @ORM\Column(name="firstName", type="string")
             */
            protected $firstName;

            /**
             * @ORM\Column(name="`lastName`", type="string")
             */
            protected $lastName;
        }
    "#};

    const UNDERSCORE_CASE_ENTITY: &str = indoc! {r#"
        <?php

        namespace Fixtures;

        use Doctrine\ORM\Mapping as ORM;

        /**
         * @ORM\Entity
         */
        class UnderscoreCaseEntity
        {
            /**
             * @ORM\Id
             * @ORM\Column(name="id", type="integer")
             */
            protected $id;

            /**
             * @ORM\Column(name="first_name", type="string")
             */
            protected $firstName;

            /**
             * @ORM\Column(name="`last_name`", type="string")
             */
            protected $lastName;
        }
    "#};

    fn fixture_root() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        let entity_dir = dir.path().join("src/Entity");
        fs::create_dir_all(&entity_dir).unwrap();
        fs::write(entity_dir.join("CamelCaseEntity.php"), CAMEL_CASE_ENTITY).unwrap();
        fs::write(entity_dir.join("UnderscoreCaseEntity.php"), UNDERSCORE_CASE_ENTITY).unwrap();
        dir
    }

    fn check_fixture(naming: NamingScheme, file: &str) -> CheckResult {
        let dir = fixture_root();
        let config = CheckConfig {
            naming,
            paths: vec![format!("src/Entity/{file}")],
            ..CheckConfig::default()
        };
        CheckEngine::new(config).check(dir.path()).unwrap()
    }

    #[test]
    fn test_fixture_matrix() {
        let cases = [
            (NamingScheme::Snake, "CamelCaseEntity.php", false),
            (NamingScheme::Snake, "UnderscoreCaseEntity.php", true),
            (NamingScheme::Camel, "CamelCaseEntity.php", true),
            (NamingScheme::Camel, "UnderscoreCaseEntity.php", false),
        ];
        for (naming, file, expect_pass) in cases {
            let result = check_fixture(naming, file);
            assert_eq!(result.passed, expect_pass, "{naming} on {file}");
            assert_eq!(result.total_files_checked, 1);
            assert_eq!(result.total_properties_checked, 3);
        }
    }

    #[test]
    fn test_snake_on_camel_fixture_diagnostics() {
        let result = check_fixture(NamingScheme::Snake, "CamelCaseEntity.php");
        let messages: Vec<_> = result.diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Fixtures\\CamelCaseEntity:$firstName column name should be first_name, but is firstName!",
                "Fixtures\\CamelCaseEntity:$lastName column name should be last_name, but is lastName!",
            ]
        );
        assert_eq!(result.diagnostics[0].file_path, "src/Entity/CamelCaseEntity.php");
        assert_eq!(result.diagnostics[0].line, 21);
    }

    #[test]
    fn test_default_pattern_checks_whole_directory_in_order() {
        let dir = fixture_root();
        let result = CheckEngine::new(CheckConfig::default())
            .check(dir.path())
            .unwrap();
        assert_eq!(result.total_files_checked, 2);
        assert_eq!(result.total_classes_checked, 2);
        assert!(result
            .diagnostics
            .iter()
            .all(|d| d.class_name == "Fixtures\\CamelCaseEntity"));
    }

    #[test]
    fn test_unreadable_file_alone_does_not_fail_run() {
        let dir = fixture_root();
        let config = CheckConfig {
            paths: vec![
                "src/Entity/UnderscoreCaseEntity.php".to_owned(),
                "src/Entity/Missing.php".to_owned(),
            ],
            ..CheckConfig::default()
        };
        let result = CheckEngine::new(config).check(dir.path()).unwrap();
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.unreadable_files.len(), 1);
        assert_eq!(result.unreadable_files[0].path, "src/Entity/Missing.php");
        assert_eq!(result.total_files_checked, 1);
        assert!(result.passed);
    }

    #[test]
    fn test_only_missing_file_passes() {
        let dir = tempdir().unwrap();
        let config = CheckConfig {
            paths: vec!["src/Entity/Missing.php".to_owned()],
            ..CheckConfig::default()
        };
        let result = CheckEngine::new(config).check(dir.path()).unwrap();
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.unreadable_files.len(), 1);
        assert!(result.passed);
    }

    #[test]
    fn test_unreadable_file_with_violations_elsewhere_fails() {
        let dir = fixture_root();
        let config = CheckConfig {
            paths: vec![
                "src/Entity/Missing.php".to_owned(),
                "src/Entity/CamelCaseEntity.php".to_owned(),
            ],
            ..CheckConfig::default()
        };
        let result = CheckEngine::new(config).check(dir.path()).unwrap();
        assert_eq!(result.unreadable_files.len(), 1);
        assert_eq!(result.diagnostics.len(), 2);
        assert!(!result.passed);
    }

    #[test]
    fn test_no_matching_files_passes() {
        let dir = tempdir().unwrap();
        let result = CheckEngine::new(CheckConfig::default())
            .check(dir.path())
            .unwrap();
        assert_eq!(result.total_files_checked, 0);
        assert!(result.passed);
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let dir = tempdir().unwrap();
        let config = CheckConfig {
            paths: vec!["src/[*.php".to_owned()],
            ..CheckConfig::default()
        };
        let err = CheckEngine::new(config).check(dir.path()).unwrap_err();
        assert!(matches!(err, CheckError::Discovery(_)));
    }

    #[test]
    fn test_inherited_property_reported_against_declaring_class() {
        let dir = tempdir().unwrap();
        let entity_dir = dir.path().join("src/Entity");
        fs::create_dir_all(&entity_dir).unwrap();
        fs::write(
            entity_dir.join("Base.php"),
            indoc! {r#"
                <?php
                namespace App\Entity;

                abstract class Base
                {
                    /** @ORM\Column(name="createdAt") */
                    protected $createdAt;
                }
            "#},
        )
        .unwrap();
        fs::write(
            entity_dir.join("Post.php"),
            indoc! {r#"
                <?php
                namespace App\Entity;

                class Post extends Base
                {
                    /** @ORM\Column(name="title") */
                    private $title;
                }
            "#},
        )
        .unwrap();

        let result = CheckEngine::new(CheckConfig::default())
            .check(dir.path())
            .unwrap();
        let reported: Vec<_> = result
            .diagnostics
            .iter()
            .map(|d| (d.class_name.as_str(), d.file_path.as_str()))
            .collect();
        // Once for Base itself, once through Post.
        assert_eq!(
            reported,
            vec![
                ("App\\Entity\\Base", "src/Entity/Base.php"),
                ("App\\Entity\\Base", "src/Entity/Base.php"),
            ]
        );
    }

    #[test]
    fn test_trait_properties_validated_for_using_class() {
        let dir = tempdir().unwrap();
        let entity_dir = dir.path().join("src/Entity");
        fs::create_dir_all(&entity_dir).unwrap();
        fs::write(
            entity_dir.join("Post.php"),
            indoc! {r#"
                <?php
                namespace App\Entity;

                class Post
                {
                    use Stamped;

                    /** @ORM\Column(name="title") */
                    private $title;
                }
            "#},
        )
        .unwrap();
        fs::write(
            entity_dir.join("Stamped.php"),
            indoc! {r#"
                <?php
                namespace App\Entity;

                trait Stamped
                {
                    /** @ORM\Column(name="createdAt") */
                    protected $createdAt;
                }
            "#},
        )
        .unwrap();

        let result = CheckEngine::new(CheckConfig::default())
            .check(dir.path())
            .unwrap();
        // The trait file declares no class, so the property is checked once
        assert_eq!(result.total_classes_checked, 1);
        assert_eq!(result.total_properties_checked, 2);
        assert_eq!(result.diagnostics.len(), 1);
        let diag = &result.diagnostics[0];
        assert_eq!(
            diag.message,
            "App\\Entity\\Post:$createdAt column name should be created_at, but is createdAt!"
        );
        assert_eq!(diag.class_name, "App\\Entity\\Post");
        assert_eq!(diag.file_path, "src/Entity/Stamped.php");
        assert_eq!(diag.line, 7);
        assert!(!result.passed);
    }
}
