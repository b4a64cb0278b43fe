//! column-check: column naming and reserved-keyword validation for Doctrine ORM entities.
//!
//! The crate scans PHP entity files for class declarations, reads the
//! `Column` and `JoinColumn` mapping of every property (docblock annotations
//! and PHP 8 attributes), and reports:
//!
//! - column names that do not follow the configured naming scheme
//! - unquoted column names that are reserved SQL keywords
//! - join column names that are quoted
//!
//! ```no_run
//! use std::path::Path;
//! use column_check::config::CheckConfig;
//! use column_check::engine::CheckEngine;
//!
//! let config = CheckConfig::load_from_project(Path::new(".")).unwrap_or_default();
//! let result = CheckEngine::new(config).check(Path::new(".")).unwrap();
//! print!("{}", column_check::reporter::to_text(&result));
//! ```

pub mod config;
pub mod discovery;
pub mod engine;
pub mod keywords;
pub mod mapping;
pub mod naming;
pub mod php_lexer;
pub mod reporter;
pub mod scanner;
pub mod types;
