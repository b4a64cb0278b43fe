//! Lightweight PHP tokenizer for the column check engine.
//!
//! Produces a stream of [`Token`]s from PHP source text. Designed for the
//! class scanner and the mapping extractor, NOT for full AST construction.
//!
//! The lexer uses zero-copy `&str` slices into the source, tracks 1-based
//! line/column positions, and handles:
//!
//! - Inline HTML outside `<?php ... ?>` / `<?= ... ?>` tags
//! - Keywords (case-insensitive matching)
//! - Identifiers and the `\` namespace separator
//! - Variables: `$name`
//! - String literals: single-quoted, double-quoted and backtick, with escapes
//! - Heredoc and nowdoc bodies, including the PHP 7.3 indented closing marker
//! - Number literals
//! - Line comments (`//`, `#`), block comments and `/** ... */` doc comments
//! - Attributes `#[ ... ]` as one token (nested brackets and strings respected)
//! - Braces, parentheses, brackets, `,` and `;`

use memchr::{memchr_iter, memmem};

/// A token kind produced by the PHP lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Text outside PHP tags.
    InlineHtml,
    /// `<?php`, `<?=` or `<?`.
    OpenTag,
    /// `?>`.
    CloseTag,
    /// Reserved word: `class`, `namespace`, `function`, `private`, ...
    Keyword,
    /// Unqualified name: class, function or constant name, type.
    Identifier,
    /// `$name`.
    Variable,
    /// Namespace separator `\`.
    NsSeparator,
    /// Quoted string or shell-exec literal.
    StringLiteral,
    /// Heredoc or nowdoc, opening marker through closing marker.
    Heredoc,
    /// Numeric literal.
    NumberLiteral,
    /// `/** ... */` documentation comment.
    DocComment,
    /// `/* ... */` comment.
    BlockComment,
    /// `// ...` or `# ...` comment.
    LineComment,
    /// `#[ ... ]` attribute group.
    Attribute,
    /// `{`.
    LeftBrace,
    /// `}`.
    RightBrace,
    /// `(`.
    LeftParen,
    /// `)`.
    RightParen,
    /// `[`.
    LeftBracket,
    /// `]`.
    RightBracket,
    /// `,`.
    Comma,
    /// `;`.
    Semicolon,
    /// Any other punctuation character.
    Operator,
    /// Spaces and tabs.
    Whitespace,
    /// `\n` or `\r\n` or `\r`.
    Newline,
}

/// A single token with its kind, text slice, and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of token.
    pub kind: TokenKind,
    /// Zero-copy slice into the original source text.
    pub text: &'a str,
    /// Byte offset in the source.
    pub offset: usize,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number (in bytes).
    pub column: u32,
}

impl Token<'_> {
    /// Whether this token is the keyword `word` (case-insensitive).
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text.eq_ignore_ascii_case(word)
    }

    /// Whether this token carries no meaning for the scanner or extractor.
    #[must_use]
    pub fn is_trivia(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Whitespace
                | TokenKind::Newline
                | TokenKind::LineComment
                | TokenKind::BlockComment
                | TokenKind::InlineHtml
                | TokenKind::OpenTag
                | TokenKind::CloseTag
        )
    }
}

/// PHP reserved words recognized by the lexer (lowercase).
///
/// Soft keywords that are legal class names (`enum`, `mixed`, ...) are left
/// out so `class Enum` still scans as a declaration.
const PHP_KEYWORDS: &[&str] = &[
    "abstract",
    "and",
    "array",
    "as",
    "break",
    "callable",
    "case",
    "catch",
    "class",
    "clone",
    "const",
    "continue",
    "declare",
    "default",
    "do",
    "echo",
    "else",
    "elseif",
    "empty",
    "enddeclare",
    "endfor",
    "endforeach",
    "endif",
    "endswitch",
    "endwhile",
    "extends",
    "final",
    "finally",
    "fn",
    "for",
    "foreach",
    "function",
    "global",
    "goto",
    "if",
    "implements",
    "include",
    "include_once",
    "instanceof",
    "insteadof",
    "interface",
    "isset",
    "list",
    "match",
    "namespace",
    "new",
    "or",
    "print",
    "private",
    "protected",
    "public",
    "readonly",
    "require",
    "require_once",
    "return",
    "static",
    "switch",
    "throw",
    "trait",
    "try",
    "unset",
    "use",
    "var",
    "while",
    "xor",
    "yield",
];

/// Check if a word is a PHP keyword (case-insensitive).
fn is_keyword(word: &str) -> bool {
    PHP_KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(word))
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

/// Tokenize PHP source into a vector of tokens.
///
/// Never fails: unterminated strings, comments and attributes extend to the
/// end of input.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let bytes = source.as_bytes();
    let len = bytes.len();
    let mut pos: usize = 0;
    let mut line: u32 = 1;
    let mut line_start: usize = 0;
    let mut in_php = false;

    while pos < len {
        let start = pos;
        let ch = bytes[pos];

        let kind = if !in_php {
            // -----------------------------------------------------------
            // Inline HTML up to the next open tag
            // -----------------------------------------------------------
            match memmem::find(&bytes[pos..], b"<?") {
                Some(0) => {
                    in_php = true;
                    pos += open_tag_len(&bytes[pos..]);
                    TokenKind::OpenTag
                }
                Some(idx) => {
                    pos += idx;
                    TokenKind::InlineHtml
                }
                None => {
                    pos = len;
                    TokenKind::InlineHtml
                }
            }
        } else if ch == b'\n' {
            pos += 1;
            TokenKind::Newline
        } else if ch == b'\r' {
            pos += if bytes.get(pos + 1) == Some(&b'\n') { 2 } else { 1 };
            TokenKind::Newline
        } else if ch == b' ' || ch == b'\t' {
            while pos < len && (bytes[pos] == b' ' || bytes[pos] == b'\t') {
                pos += 1;
            }
            TokenKind::Whitespace
        } else if ch == b'?' && bytes.get(pos + 1) == Some(&b'>') {
            in_php = false;
            pos += 2;
            // The newline directly after `?>` belongs to the tag.
            if bytes.get(pos) == Some(&b'\n') {
                pos += 1;
            } else if bytes.get(pos) == Some(&b'\r') {
                pos += if bytes.get(pos + 1) == Some(&b'\n') { 2 } else { 1 };
            }
            TokenKind::CloseTag
        } else if ch == b'#' && bytes.get(pos + 1) == Some(&b'[') {
            pos = scan_attribute(bytes, pos);
            TokenKind::Attribute
        } else if ch == b'#' || (ch == b'/' && bytes.get(pos + 1) == Some(&b'/')) {
            pos = scan_line_comment(bytes, pos);
            TokenKind::LineComment
        } else if ch == b'/' && bytes.get(pos + 1) == Some(&b'*') {
            let is_doc = bytes.get(pos + 2) == Some(&b'*')
                && bytes
                    .get(pos + 3)
                    .is_some_and(|b| b.is_ascii_whitespace());
            pos = match memmem::find(&bytes[pos + 2..], b"*/") {
                Some(idx) => pos + 2 + idx + 2,
                None => len,
            };
            if is_doc {
                TokenKind::DocComment
            } else {
                TokenKind::BlockComment
            }
        } else if ch == b'\'' || ch == b'"' || ch == b'`' {
            pos = scan_quoted(bytes, pos);
            TokenKind::StringLiteral
        } else if ch == b'<' && bytes[pos..].starts_with(b"<<<") {
            match scan_heredoc(bytes, pos) {
                Some(end) => {
                    pos = end;
                    TokenKind::Heredoc
                }
                None => {
                    pos += 1;
                    TokenKind::Operator
                }
            }
        } else if ch == b'$' && bytes.get(pos + 1).is_some_and(|b| is_ident_start(*b)) {
            pos += 1;
            while pos < len && is_ident_char(bytes[pos]) {
                pos += 1;
            }
            TokenKind::Variable
        } else if is_ident_start(ch) {
            while pos < len && is_ident_char(bytes[pos]) {
                pos += 1;
            }
            if is_keyword(&source[start..pos]) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            }
        } else if ch.is_ascii_digit() {
            while pos < len && (is_ident_char(bytes[pos]) || bytes[pos] == b'.') {
                pos += 1;
            }
            TokenKind::NumberLiteral
        } else {
            pos += 1;
            match ch {
                b'\\' => TokenKind::NsSeparator,
                b'{' => TokenKind::LeftBrace,
                b'}' => TokenKind::RightBrace,
                b'(' => TokenKind::LeftParen,
                b')' => TokenKind::RightParen,
                b'[' => TokenKind::LeftBracket,
                b']' => TokenKind::RightBracket,
                b',' => TokenKind::Comma,
                b';' => TokenKind::Semicolon,
                _ => TokenKind::Operator,
            }
        };

        tokens.push(Token {
            kind,
            text: &source[start..pos],
            offset: start,
            line,
            column: (start - line_start + 1) as u32,
        });

        for nl in memchr_iter(b'\n', &bytes[start..pos]) {
            line += 1;
            line_start = start + nl + 1;
        }
        // A lone `\r` newline is not seen by the `\n` scan above.
        if kind == TokenKind::Newline && bytes[start] == b'\r' && pos - start == 1 {
            line += 1;
            line_start = pos;
        }
    }

    tokens
}

/// Length of the open tag at the start of `rest` (which begins with `<?`).
fn open_tag_len(rest: &[u8]) -> usize {
    if rest.len() >= 5 && rest[2..5].eq_ignore_ascii_case(b"php") {
        5
    } else if rest.get(2) == Some(&b'=') {
        3
    } else {
        2
    }
}

/// End of a `//` or `#` comment: the newline or a `?>`, whichever comes first.
fn scan_line_comment(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\n' | b'\r' => break,
            b'?' if bytes.get(pos + 1) == Some(&b'>') => break,
            _ => pos += 1,
        }
    }
    pos
}

/// End of a quoted literal starting at `start`, honouring backslash escapes.
fn scan_quoted(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b if b == quote => return pos + 1,
            _ => pos += 1,
        }
    }
    bytes.len()
}

/// End of an attribute group `#[ ... ]` starting at `start`.
fn scan_attribute(bytes: &[u8], start: usize) -> usize {
    let mut depth = 0usize;
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'[' => {
                depth += 1;
                pos += 1;
            }
            b']' => {
                depth -= 1;
                pos += 1;
                if depth == 0 {
                    return pos;
                }
            }
            b'\'' | b'"' => pos = scan_quoted(bytes, pos),
            _ => pos += 1,
        }
    }
    bytes.len()
}

/// End of a heredoc/nowdoc starting at `start` (which begins with `<<<`).
///
/// Returns `None` when `<<<` is not followed by a valid marker line.
fn scan_heredoc(bytes: &[u8], start: usize) -> Option<usize> {
    let mut pos = start + 3;
    while pos < bytes.len() && (bytes[pos] == b' ' || bytes[pos] == b'\t') {
        pos += 1;
    }
    let quote = match bytes.get(pos) {
        Some(&q @ (b'\'' | b'"')) => {
            pos += 1;
            Some(q)
        }
        _ => None,
    };
    let label_start = pos;
    if !bytes.get(pos).is_some_and(|b| is_ident_start(*b)) {
        return None;
    }
    while pos < bytes.len() && is_ident_char(bytes[pos]) {
        pos += 1;
    }
    let label = &bytes[label_start..pos];
    if let Some(q) = quote {
        if bytes.get(pos) != Some(&q) {
            return None;
        }
        pos += 1;
    }
    if !matches!(bytes.get(pos), Some(b'\n' | b'\r')) {
        return None;
    }

    // Closing marker: first line whose indented content starts with the label
    // and is not followed by another identifier character.
    let mut line_begin = pos;
    while line_begin < bytes.len() {
        line_begin = match memchr::memchr(b'\n', &bytes[line_begin..]) {
            Some(idx) => line_begin + idx + 1,
            None => return Some(bytes.len()),
        };
        let mut p = line_begin;
        while p < bytes.len() && (bytes[p] == b' ' || bytes[p] == b'\t') {
            p += 1;
        }
        if bytes[p..].starts_with(label)
            && !bytes
                .get(p + label.len())
                .is_some_and(|b| is_ident_char(*b))
        {
            return Some(p + label.len());
        }
    }
    Some(bytes.len())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
