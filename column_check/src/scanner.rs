//! Lexical discovery of class declarations in a PHP file.
//!
//! A single pass over the token stream, not a parse. The scanner keeps one
//! "current namespace" slot: every `namespace Foo\Bar` overwrites it, and every
//! `class Name` seen afterwards is qualified with it. A file with several
//! namespace blocks therefore qualifies each class with the most recently seen
//! namespace, and a braced global block (`namespace { ... }`) does not clear it.
//!
//! Only the `class` keyword is recognized. Interfaces, traits and enums are not
//! reported; anonymous classes (`new class(...)`) are skipped because no
//! identifier follows the keyword.

use std::collections::HashSet;

use crate::php_lexer::{tokenize, Token, TokenKind};

/// A class declaration found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    /// `Namespace\Name`, or the bare name outside any namespace.
    pub qualified_name: String,
    /// Unqualified class name.
    pub name: String,
    /// Namespace active at the declaration.
    pub namespace: Option<String>,
    /// 1-based line of the class name.
    pub line: u32,
}

/// Class scanner over one source text.
///
/// Tokenizes once; [`ClassScanner::classes`] can be called any number of
/// times and each call yields the declarations again from the start.
pub struct ClassScanner<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> ClassScanner<'a> {
    /// Tokenize `source` and keep the tokens the scan looks at.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let tokens = tokenize(source)
            .into_iter()
            .filter(|t| {
                !t.is_trivia() && !matches!(t.kind, TokenKind::DocComment | TokenKind::Attribute)
            })
            .collect();
        Self { tokens }
    }

    /// Lazily iterate the declared classes in declaration order.
    ///
    /// A qualified name is yielded once per file even if it is declared twice
    /// (PHP class names compare case-insensitively).
    #[must_use]
    pub fn classes(&self) -> DeclaredClasses<'_, 'a> {
        DeclaredClasses {
            tokens: &self.tokens,
            pos: 0,
            namespace: None,
            seen: HashSet::new(),
        }
    }
}

/// Iterator returned by [`ClassScanner::classes`].
pub struct DeclaredClasses<'s, 'a> {
    tokens: &'s [Token<'a>],
    pos: usize,
    namespace: Option<String>,
    seen: HashSet<String>,
}

impl Iterator for DeclaredClasses<'_, '_> {
    type Item = ClassDeclaration;

    fn next(&mut self) -> Option<ClassDeclaration> {
        while self.pos < self.tokens.len() {
            let i = self.pos;
            self.pos += 1;

            let tok = &self.tokens[i];
            let Some(next) = self.tokens.get(i + 1) else {
                continue;
            };
            if next.kind != TokenKind::Identifier {
                continue;
            }

            if tok.is_keyword("namespace") {
                let (path, end) = read_qualified_name(self.tokens, i + 1);
                self.namespace = Some(path);
                self.pos = end;
                continue;
            }

            if tok.is_keyword("class") {
                self.pos = i + 2;
                let qualified_name = match &self.namespace {
                    Some(ns) => format!("{ns}\\{}", next.text),
                    None => next.text.to_owned(),
                };
                if !self.seen.insert(qualified_name.to_ascii_lowercase()) {
                    log::debug!("Skipping duplicate declaration of {qualified_name}");
                    continue;
                }
                return Some(ClassDeclaration {
                    qualified_name,
                    name: next.text.to_owned(),
                    namespace: self.namespace.clone(),
                    line: next.line,
                });
            }
        }
        None
    }
}

/// Read a (possibly qualified) name starting at `start`.
///
/// Segments and `\` separators must alternate; a leading `\` is kept. Keywords
/// are accepted as segments only after a separator (`App\List`). Returns the
/// concatenated name and the index of the first token after it.
pub(crate) fn read_qualified_name(tokens: &[Token<'_>], start: usize) -> (String, usize) {
    let mut name = String::new();
    let mut pos = start;
    let mut expect_segment = true;

    if tokens.get(pos).is_some_and(|t| t.kind == TokenKind::NsSeparator) {
        name.push('\\');
        pos += 1;
    }

    while let Some(tok) = tokens.get(pos) {
        let after_separator = pos > start && name.ends_with('\\');
        match tok.kind {
            TokenKind::Identifier if expect_segment => {}
            TokenKind::Keyword if expect_segment && after_separator => {}
            TokenKind::NsSeparator if !expect_segment => {}
            _ => break,
        }
        name.push_str(tok.text);
        expect_segment = !expect_segment;
        pos += 1;
    }

    (name, pos)
}

/// Scan `source` and collect every declared class.
#[must_use]
pub fn scan_classes(source: &str) -> Vec<ClassDeclaration> {
    ClassScanner::new(source).classes().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
