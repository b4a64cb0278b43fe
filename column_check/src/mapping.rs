//! Column and join-column mapping metadata.
//!
//! The validator only depends on the [`MappingSource`] capability. The
//! built-in implementation, [`EntityIndex`], reads Doctrine mapping facts
//! straight from PHP source:
//!
//! - docblock annotations: `@ORM\Column(name="user_name")`, `@Column(...)`,
//!   `@Doctrine\ORM\Mapping\JoinColumn(name="user_id")`
//! - PHP 8 attributes: `#[ORM\Column(name: 'user_name')]`,
//!   `#[ORM\JoinColumn('user_id')]`
//!
//! Annotations are matched by the last segment of their name, so `Column`
//! never matches `JoinColumn`, `Columns` or a `@JoinColumn` nested inside
//! another annotation's arguments.
//!
//! Properties are collected from `private $x;`-style declarations (typed,
//! grouped, static, readonly) and from promoted constructor parameters.
//! Trait properties count as the using class's own; inherited properties
//! come from parent classes present in the same index.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;

use crate::php_lexer::{tokenize, Token, TokenKind};
use crate::scanner::read_qualified_name;
use crate::types::SourceFile;

// ---------------------------------------------------------------------------
// Mapping facts
// ---------------------------------------------------------------------------

/// A property as seen by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRef {
    /// Fully-qualified name of the class that declares the property.
    pub declaring_class: String,
    /// Property name without `$`.
    pub name: String,
    /// File the declaring class lives in.
    pub file_path: String,
    /// 1-based line of the property variable.
    pub line: u32,
}

/// Declared (or implicit) column mapping of one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Class declaring the property.
    pub owner_class: String,
    /// Property name without `$`.
    pub property_name: String,
    /// The `name` argument as written, backticks included.
    pub declared_name: Option<String>,
    /// Backtick-quoted, or no name declared at all.
    pub quoted: bool,
}

impl ColumnMapping {
    /// Build a mapping, applying the default-name policy.
    ///
    /// A missing or empty `name` means the column is named after the property
    /// and counts as quoted.
    #[must_use]
    pub fn new(owner_class: &str, property_name: &str, declared_name: Option<String>) -> Self {
        let declared_name = declared_name.filter(|n| !n.is_empty());
        let quoted = declared_name.as_deref().map_or(true, |n| n.starts_with('`'));
        Self {
            owner_class: owner_class.to_owned(),
            property_name: property_name.to_owned(),
            declared_name,
            quoted,
        }
    }

    /// Column name with surrounding backticks removed, or the property name.
    #[must_use]
    pub fn current_name(&self) -> &str {
        match &self.declared_name {
            Some(name) => name.trim_matches('`'),
            None => &self.property_name,
        }
    }
}

/// Declared join-column mapping of one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinColumnMapping {
    /// Class declaring the property.
    pub owner_class: String,
    /// Property name without `$`.
    pub property_name: String,
    /// The `name` argument as written.
    pub declared_name: Option<String>,
    /// Whether the declared name starts with a backtick.
    pub quoted: bool,
}

impl JoinColumnMapping {
    /// Build a join-column mapping.
    #[must_use]
    pub fn new(owner_class: &str, property_name: &str, declared_name: Option<String>) -> Self {
        let declared_name = declared_name.filter(|n| !n.is_empty());
        let quoted = declared_name.as_deref().is_some_and(|n| n.starts_with('`'));
        Self {
            owner_class: owner_class.to_owned(),
            property_name: property_name.to_owned(),
            declared_name,
            quoted,
        }
    }
}

/// Errors raised while reading mapping metadata.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// The class is not known to the mapping source.
    #[error("Class '{0}' could not be resolved")]
    UnknownClass(String),

    /// A mapping annotation or attribute could not be read.
    #[error("Malformed {annotation} mapping on {class}:${property} (line {line}): {detail}")]
    MalformedMapping {
        /// `Column` or `JoinColumn`.
        annotation: &'static str,
        /// Declaring class.
        class: String,
        /// Property name.
        property: String,
        /// Line of the property.
        line: u32,
        /// What went wrong.
        detail: String,
    },
}

/// Capability the validator needs from a metadata reader.
///
/// Implementations must be `Send + Sync`: files are validated in parallel.
pub trait MappingSource: Send + Sync {
    /// Properties of `class`: own declarations, then those added by its
    /// traits, then inherited ones.
    ///
    /// # Errors
    ///
    /// [`ExtractError::UnknownClass`] when the class cannot be resolved.
    fn declared_properties(&self, class: &str) -> Result<Vec<PropertyRef>, ExtractError>;

    /// Column mapping of `property` declared on `class`, if it is a column.
    ///
    /// # Errors
    ///
    /// Any [`ExtractError`] raised while reading the metadata.
    fn column_mapping(&self, class: &str, property: &str)
        -> Result<Option<ColumnMapping>, ExtractError>;

    /// Join-column mapping of `property` declared on `class`, if any.
    ///
    /// # Errors
    ///
    /// Any [`ExtractError`] raised while reading the metadata.
    fn join_column_mapping(
        &self,
        class: &str,
        property: &str,
    ) -> Result<Option<JoinColumnMapping>, ExtractError>;
}

// ---------------------------------------------------------------------------
// Source index
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visibility {
    Public,
    Protected,
    Private,
}

#[derive(Debug, Clone)]
struct PropertyModel {
    name: String,
    line: u32,
    visibility: Visibility,
    doc_comment: Option<String>,
    attributes: Vec<String>,
}

#[derive(Debug, Clone)]
struct ClassModel {
    name: String,
    file_path: String,
    parent: Option<String>,
    /// Traits pulled in with `use`, resolved to qualified names.
    traits: Vec<String>,
    properties: Vec<PropertyModel>,
}

/// Mapping metadata for every class declared in a set of PHP files.
///
/// Class lookups are case-insensitive, like PHP's. When two files declare the
/// same class the first one indexed wins.
#[derive(Debug, Default)]
pub struct EntityIndex {
    classes: HashMap<String, ClassModel>,
}

impl EntityIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every class declared in `files`.
    #[must_use]
    pub fn from_sources(files: &[SourceFile]) -> Self {
        let mut index = Self::new();
        for file in files {
            index.add_source(file);
        }
        index
    }

    /// Index the classes declared in one file.
    pub fn add_source(&mut self, file: &SourceFile) {
        for model in parse_classes(&file.content, &file.path) {
            let key = model.name.to_ascii_lowercase();
            if self.classes.contains_key(&key) {
                log::debug!(
                    "Class {} in {} already indexed; keeping the first declaration",
                    model.name,
                    file.path
                );
                continue;
            }
            self.classes.insert(key, model);
        }
    }

    /// Whether `class` is indexed.
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains_key(&class.to_ascii_lowercase())
    }

    /// Number of indexed classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the index holds no class.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    fn class(&self, class: &str) -> Result<&ClassModel, ExtractError> {
        self.classes
            .get(&class.to_ascii_lowercase())
            .ok_or_else(|| ExtractError::UnknownClass(class.to_owned()))
    }

    fn property(
        &self,
        class: &str,
        property: &str,
    ) -> Result<Option<(&ClassModel, &PropertyModel)>, ExtractError> {
        let model = self.class(class)?;
        Ok(self
            .members(model)
            .into_iter()
            .find(|(_, p)| p.name == property)
            .map(|(_, p)| (model, p)))
    }

    /// Properties a class declares itself, then those its traits add.
    ///
    /// Each property is paired with the model that holds its source text.
    fn members<'s>(&'s self, model: &'s ClassModel) -> Vec<(&'s ClassModel, &'s PropertyModel)> {
        let mut visited = HashSet::new();
        visited.insert(model.name.to_ascii_lowercase());
        let mut out = Vec::new();
        self.collect_members(model, &mut visited, &mut out);
        out
    }

    fn collect_members<'s>(
        &'s self,
        model: &'s ClassModel,
        visited: &mut HashSet<String>,
        out: &mut Vec<(&'s ClassModel, &'s PropertyModel)>,
    ) {
        out.extend(model.properties.iter().map(|p| (model, p)));
        for name in &model.traits {
            if !visited.insert(name.to_ascii_lowercase()) {
                continue;
            }
            match self.class(name) {
                Ok(used) => self.collect_members(used, visited, out),
                Err(_) => log::debug!(
                    "Trait {name} used by {} is not indexed; its properties are skipped",
                    model.name
                ),
            }
        }
    }
}

impl MappingSource for EntityIndex {
    fn declared_properties(&self, class: &str) -> Result<Vec<PropertyRef>, ExtractError> {
        let model = self.class(class)?;

        let mut seen: HashSet<&str> = HashSet::new();
        let mut props = Vec::new();
        for (source, prop) in self.members(model) {
            if seen.insert(&prop.name) {
                props.push(property_ref(model, source, prop));
            }
        }

        // Walk the parent chain; private parent properties are not inherited.
        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(model.name.to_ascii_lowercase());
        let mut parent = model.parent.as_deref();
        while let Some(parent_name) = parent {
            if !visited.insert(parent_name.to_ascii_lowercase()) {
                log::warn!("Inheritance cycle detected at {parent_name} while resolving {class}");
                break;
            }
            let Ok(parent_model) = self.class(parent_name) else {
                log::debug!("Parent {parent_name} of {class} is not indexed; inherited properties skipped");
                break;
            };
            for (source, prop) in self.members(parent_model) {
                if prop.visibility != Visibility::Private && seen.insert(&prop.name) {
                    props.push(property_ref(parent_model, source, prop));
                }
            }
            parent = parent_model.parent.as_deref();
        }

        Ok(props)
    }

    fn column_mapping(
        &self,
        class: &str,
        property: &str,
    ) -> Result<Option<ColumnMapping>, ExtractError> {
        let Some((model, prop)) = self.property(class, property)? else {
            return Ok(None);
        };
        let args = find_mapping(prop, MappingKind::Column)
            .map_err(|detail| malformed(MappingKind::Column, model, prop, detail))?;
        Ok(args.map(|a| ColumnMapping::new(&model.name, &prop.name, a.name)))
    }

    fn join_column_mapping(
        &self,
        class: &str,
        property: &str,
    ) -> Result<Option<JoinColumnMapping>, ExtractError> {
        let Some((model, prop)) = self.property(class, property)? else {
            return Ok(None);
        };
        let args = find_mapping(prop, MappingKind::JoinColumn)
            .map_err(|detail| malformed(MappingKind::JoinColumn, model, prop, detail))?;
        Ok(args.map(|a| JoinColumnMapping::new(&model.name, &prop.name, a.name)))
    }
}

/// `source` is the class or trait whose file holds the declaration.
fn property_ref(model: &ClassModel, source: &ClassModel, prop: &PropertyModel) -> PropertyRef {
    PropertyRef {
        declaring_class: model.name.clone(),
        name: prop.name.clone(),
        file_path: source.file_path.clone(),
        line: prop.line,
    }
}

fn malformed(
    kind: MappingKind,
    model: &ClassModel,
    prop: &PropertyModel,
    detail: String,
) -> ExtractError {
    ExtractError::MalformedMapping {
        annotation: kind.short_name(),
        class: model.name.clone(),
        property: prop.name.clone(),
        line: prop.line,
        detail,
    }
}

// ---------------------------------------------------------------------------
// Class and property parsing
// ---------------------------------------------------------------------------

/// Namespace and imports in effect while parsing a file.
#[derive(Debug, Default)]
struct NameContext {
    namespace: Option<String>,
    imports: HashMap<String, String>,
}

impl NameContext {
    /// Resolve a class reference the way PHP does for `extends`.
    fn resolve(&self, raw: &str) -> String {
        if let Some(absolute) = raw.strip_prefix('\\') {
            return absolute.to_owned();
        }
        let (first, rest) = match raw.split_once('\\') {
            Some((first, rest)) => (first, Some(rest)),
            None => (raw, None),
        };
        if let Some(full) = self.imports.get(&first.to_ascii_lowercase()) {
            return match rest {
                Some(rest) => format!("{full}\\{rest}"),
                None => full.clone(),
            };
        }
        match &self.namespace {
            Some(ns) => format!("{ns}\\{raw}"),
            None => raw.to_owned(),
        }
    }

    fn qualify(&self, name: &str) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}\\{name}"),
            None => name.to_owned(),
        }
    }
}

/// Parse every class declared in `source`.
fn parse_classes(source: &str, file_path: &str) -> Vec<ClassModel> {
    let tokens: Vec<Token<'_>> = tokenize(source)
        .into_iter()
        .filter(|t| !t.is_trivia())
        .collect();

    let mut models = Vec::new();
    let mut ctx = NameContext::default();
    let mut depth = 0usize;
    let mut import_depth = 0usize;
    let mut i = 0;

    while i < tokens.len() {
        let tok = &tokens[i];
        let next_kind = tokens.get(i + 1).map(|t| t.kind);

        match tok.kind {
            TokenKind::LeftBrace => depth += 1,
            TokenKind::RightBrace => depth = depth.saturating_sub(1),
            TokenKind::Keyword if tok.is_keyword("namespace") => match next_kind {
                Some(TokenKind::Identifier) => {
                    let (path, end) = read_qualified_name(&tokens, i + 1);
                    ctx.namespace = Some(path);
                    ctx.imports.clear();
                    import_depth = match tokens.get(end).map(|t| t.kind) {
                        Some(TokenKind::LeftBrace) => depth + 1,
                        _ => depth,
                    };
                    i = end;
                    continue;
                }
                Some(TokenKind::LeftBrace) => {
                    ctx.imports.clear();
                    import_depth = depth + 1;
                }
                _ => {}
            },
            TokenKind::Keyword if tok.is_keyword("use") && depth == import_depth => {
                i = parse_use(&tokens, i + 1, &mut ctx.imports);
                continue;
            }
            TokenKind::Keyword
                if (tok.is_keyword("class") || tok.is_keyword("trait"))
                    && next_kind == Some(TokenKind::Identifier) =>
            {
                let (model, end) = parse_class(&tokens, i, &ctx, file_path);
                models.push(model);
                i = end;
                continue;
            }
            _ => {}
        }
        i += 1;
    }

    models
}

/// Parse a `use` import statement starting after the keyword.
///
/// Handles aliases, comma lists and group imports (`use A\{B, C as D};`).
/// Function/constant imports and closure `use (...)` clauses are skipped.
fn parse_use(tokens: &[Token<'_>], start: usize, imports: &mut HashMap<String, String>) -> usize {
    match tokens.get(start) {
        Some(t) if t.kind == TokenKind::LeftParen => return start,
        Some(t) if t.is_keyword("function") || t.is_keyword("const") => {
            return skip_statement(tokens, start);
        }
        _ => {}
    }

    let mut pos = start;
    loop {
        let (name, end) = read_qualified_name(tokens, pos);
        pos = end;
        if name.is_empty() {
            return skip_statement(tokens, pos);
        }

        if name.ends_with('\\') && tokens.get(pos).map(|t| t.kind) == Some(TokenKind::LeftBrace) {
            pos += 1;
            loop {
                let (item, end) = read_qualified_name(tokens, pos);
                pos = end;
                if item.is_empty() {
                    break;
                }
                let (alias, end) = read_alias(tokens, pos);
                pos = end;
                insert_import(imports, &format!("{name}{item}"), alias);
                if tokens.get(pos).map(|t| t.kind) == Some(TokenKind::Comma) {
                    pos += 1;
                } else {
                    break;
                }
            }
            if tokens.get(pos).map(|t| t.kind) == Some(TokenKind::RightBrace) {
                pos += 1;
            }
        } else {
            let (alias, end) = read_alias(tokens, pos);
            pos = end;
            insert_import(imports, &name, alias);
        }

        match tokens.get(pos).map(|t| t.kind) {
            Some(TokenKind::Comma) => pos += 1,
            Some(TokenKind::Semicolon) => return pos + 1,
            _ => return pos,
        }
    }
}

/// Read an optional `as Alias` clause.
fn read_alias<'a>(tokens: &[Token<'a>], pos: usize) -> (Option<&'a str>, usize) {
    match (tokens.get(pos), tokens.get(pos + 1)) {
        (Some(kw), Some(alias)) if kw.is_keyword("as") && alias.kind == TokenKind::Identifier => {
            (Some(alias.text), pos + 2)
        }
        _ => (None, pos),
    }
}

fn insert_import(imports: &mut HashMap<String, String>, name: &str, alias: Option<&str>) {
    let full = name.trim_start_matches('\\');
    let alias = alias.unwrap_or_else(|| full.rsplit('\\').next().unwrap_or(full));
    imports.insert(alias.to_ascii_lowercase(), full.to_owned());
}

/// Pending member metadata inside a class body.
#[derive(Default)]
struct MemberState<'a> {
    doc_comment: Option<&'a str>,
    attributes: Vec<&'a str>,
    visibility: Option<Visibility>,
    has_modifier: bool,
}

impl MemberState<'_> {
    fn apply_modifier(&mut self, word: &str) -> bool {
        let visibility = match word.to_ascii_lowercase().as_str() {
            "public" => Some(Visibility::Public),
            "protected" => Some(Visibility::Protected),
            "private" => Some(Visibility::Private),
            "var" | "static" | "readonly" | "final" | "abstract" => None,
            _ => return false,
        };
        if visibility.is_some() {
            self.visibility = visibility;
        }
        self.has_modifier = true;
        true
    }

    fn property(&self, tok: &Token<'_>) -> PropertyModel {
        PropertyModel {
            name: tok.text.trim_start_matches('$').to_owned(),
            line: tok.line,
            visibility: self.visibility.unwrap_or(Visibility::Public),
            doc_comment: self.doc_comment.map(str::to_owned),
            attributes: self.attributes.iter().map(|a| (*a).to_owned()).collect(),
        }
    }
}

/// Parse a class or trait declaration whose keyword is at `start`.
///
/// Returns the model and the index after the closing brace.
fn parse_class(
    tokens: &[Token<'_>],
    start: usize,
    ctx: &NameContext,
    file_path: &str,
) -> (ClassModel, usize) {
    let mut model = ClassModel {
        name: ctx.qualify(tokens[start + 1].text),
        file_path: file_path.to_owned(),
        parent: None,
        traits: Vec::new(),
        properties: Vec::new(),
    };

    // Header: `extends Parent implements ...` up to the body.
    let mut pos = start + 2;
    while let Some(tok) = tokens.get(pos) {
        if tok.kind == TokenKind::LeftBrace {
            break;
        }
        if tok.is_keyword("extends") {
            let (raw, end) = read_qualified_name(tokens, pos + 1);
            if !raw.is_empty() {
                model.parent = Some(ctx.resolve(&raw));
            }
            pos = end;
            continue;
        }
        pos += 1;
    }
    pos += 1;

    let mut member = MemberState::default();
    while let Some(tok) = tokens.get(pos) {
        match tok.kind {
            TokenKind::RightBrace => return (model, pos + 1),
            TokenKind::DocComment => {
                member.doc_comment = Some(tok.text);
                pos += 1;
            }
            TokenKind::Attribute => {
                member.attributes.push(tok.text);
                pos += 1;
            }
            TokenKind::LeftBrace => {
                pos = skip_block(tokens, pos);
                member = MemberState::default();
            }
            TokenKind::Semicolon => {
                pos += 1;
                member = MemberState::default();
            }
            TokenKind::Keyword if member.apply_modifier(tok.text) => pos += 1,
            TokenKind::Keyword if tok.is_keyword("function") => {
                pos = parse_method(tokens, pos, &mut model.properties);
                member = MemberState::default();
            }
            TokenKind::Keyword if tok.is_keyword("use") => {
                pos = parse_trait_use(tokens, pos + 1, ctx, &mut model.traits);
                member = MemberState::default();
            }
            TokenKind::Keyword if tok.is_keyword("const") || tok.is_keyword("case") => {
                pos = skip_statement(tokens, pos);
                member = MemberState::default();
            }
            TokenKind::Variable if member.has_modifier => {
                pos = parse_property_statement(tokens, pos, &member, &mut model.properties);
                member = MemberState::default();
            }
            _ => pos += 1,
        }
    }

    (model, pos)
}

/// Record the traits of a `use A, B;` statement inside a class body.
///
/// A conflict resolution block (`use A, B { A::x insteadof B; }`) is skipped.
fn parse_trait_use(
    tokens: &[Token<'_>],
    start: usize,
    ctx: &NameContext,
    traits: &mut Vec<String>,
) -> usize {
    let mut pos = start;
    loop {
        let (raw, end) = read_qualified_name(tokens, pos);
        pos = end;
        if !raw.is_empty() {
            traits.push(ctx.resolve(&raw));
        }
        match tokens.get(pos).map(|t| t.kind) {
            Some(TokenKind::Comma) if !raw.is_empty() => pos += 1,
            Some(TokenKind::Semicolon) => return pos + 1,
            Some(TokenKind::LeftBrace) => return skip_block(tokens, pos),
            _ => return skip_statement(tokens, pos),
        }
    }
}

/// Collect every variable of a property statement (`$a = 1, $b;`).
///
/// Returns the index after the terminating `;` or property hook block.
fn parse_property_statement(
    tokens: &[Token<'_>],
    start: usize,
    member: &MemberState<'_>,
    properties: &mut Vec<PropertyModel>,
) -> usize {
    let mut nesting = 0usize;
    let mut pos = start;
    while let Some(tok) = tokens.get(pos) {
        match tok.kind {
            TokenKind::Variable if nesting == 0 => properties.push(member.property(tok)),
            TokenKind::LeftParen | TokenKind::LeftBracket => nesting += 1,
            TokenKind::RightParen | TokenKind::RightBracket => nesting = nesting.saturating_sub(1),
            TokenKind::LeftBrace if nesting == 0 => return skip_block(tokens, pos),
            TokenKind::LeftBrace => nesting += 1,
            TokenKind::RightBrace if nesting == 0 => return pos,
            TokenKind::RightBrace => nesting -= 1,
            TokenKind::Semicolon if nesting == 0 => return pos + 1,
            _ => {}
        }
        pos += 1;
    }
    pos
}

/// Skip a method declaration starting at its `function` keyword.
///
/// Promoted constructor parameters are recorded as properties.
fn parse_method(tokens: &[Token<'_>], start: usize, properties: &mut Vec<PropertyModel>) -> usize {
    let mut pos = start + 1;
    if tokens.get(pos).is_some_and(|t| t.text == "&") {
        pos += 1;
    }
    let is_constructor = tokens
        .get(pos)
        .is_some_and(|t| t.text.eq_ignore_ascii_case("__construct"));

    while let Some(tok) = tokens.get(pos) {
        match tok.kind {
            TokenKind::LeftParen => break,
            TokenKind::LeftBrace | TokenKind::Semicolon | TokenKind::RightBrace => return pos,
            _ => pos += 1,
        }
    }

    // Parameter list.
    let mut nesting = 0usize;
    let mut param = MemberState::default();
    while let Some(tok) = tokens.get(pos) {
        pos += 1;
        match tok.kind {
            TokenKind::LeftParen | TokenKind::LeftBracket | TokenKind::LeftBrace => nesting += 1,
            TokenKind::RightParen | TokenKind::RightBracket | TokenKind::RightBrace => {
                nesting = nesting.saturating_sub(1);
                if nesting == 0 {
                    break;
                }
            }
            TokenKind::Comma if nesting == 1 => param = MemberState::default(),
            TokenKind::DocComment if nesting == 1 => param.doc_comment = Some(tok.text),
            TokenKind::Attribute if nesting == 1 => param.attributes.push(tok.text),
            TokenKind::Keyword if nesting == 1 && is_constructor => {
                param.apply_modifier(tok.text);
            }
            TokenKind::Variable if nesting == 1 && param.has_modifier => {
                properties.push(param.property(tok));
                param.has_modifier = false;
            }
            _ => {}
        }
    }

    // Return type, then body or `;`.
    while let Some(tok) = tokens.get(pos) {
        match tok.kind {
            TokenKind::LeftBrace => return skip_block(tokens, pos),
            TokenKind::Semicolon => return pos + 1,
            TokenKind::RightBrace => return pos,
            _ => pos += 1,
        }
    }
    pos
}

/// Skip a `{ ... }` block starting at `start`, returning the index after it.
fn skip_block(tokens: &[Token<'_>], start: usize) -> usize {
    let mut depth = 0usize;
    let mut pos = start;
    while let Some(tok) = tokens.get(pos) {
        pos += 1;
        match tok.kind {
            TokenKind::LeftBrace => depth += 1,
            TokenKind::RightBrace => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return pos;
                }
            }
            _ => {}
        }
    }
    pos
}

/// Skip to the end of a statement: after its `;`, or after a `{ ... }` block.
fn skip_statement(tokens: &[Token<'_>], start: usize) -> usize {
    let mut nesting = 0usize;
    let mut pos = start;
    while let Some(tok) = tokens.get(pos) {
        match tok.kind {
            TokenKind::LeftParen | TokenKind::LeftBracket => nesting += 1,
            TokenKind::RightParen | TokenKind::RightBracket => nesting = nesting.saturating_sub(1),
            TokenKind::LeftBrace if nesting == 0 => return skip_block(tokens, pos),
            TokenKind::RightBrace if nesting == 0 => return pos,
            TokenKind::Semicolon if nesting == 0 => return pos + 1,
            _ => {}
        }
        pos += 1;
    }
    pos
}

// ---------------------------------------------------------------------------
// Annotation and attribute arguments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MappingKind {
    Column,
    JoinColumn,
}

impl MappingKind {
    fn short_name(self) -> &'static str {
        match self {
            Self::Column => "Column",
            Self::JoinColumn => "JoinColumn",
        }
    }
}

/// Arguments read from one mapping annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MappingArgs {
    name: Option<String>,
}

/// Matches one argument entry: optional `key =` / `key:` and a quoted value.
fn argument_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"^(?:(?P<key>[A-Za-z_][A-Za-z0-9_]*)\s*[=:]\s*)?(?:"(?P<dq>(?:[^"\\]|\\.)*)"|'(?P<sq>(?:[^'\\]|\\.)*)')$"#,
        )
        .expect("argument pattern regex is valid")
    })
}

/// Find the mapping of `kind` on a property: docblock first, then attributes.
fn find_mapping(prop: &PropertyModel, kind: MappingKind) -> Result<Option<MappingArgs>, String> {
    if let Some(doc) = &prop.doc_comment {
        if let Some(args) = find_docblock_annotation(doc, kind.short_name())? {
            return Ok(Some(parse_arguments(&args, false)));
        }
    }
    for attribute in &prop.attributes {
        if let Some(args) = find_attribute(attribute, kind.short_name())? {
            return Ok(Some(parse_arguments(&args, true)));
        }
    }
    Ok(None)
}

/// Strip `/**`, `*/` and the leading `*` of every docblock line.
fn clean_docblock(doc: &str) -> String {
    let body = doc.trim_start_matches("/**").trim_end_matches("*/");
    body.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            trimmed.strip_prefix('*').unwrap_or(trimmed)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Locate a top-level `@...Name` annotation and return its argument text.
///
/// `Ok(Some(""))` means the annotation is present without arguments.
fn find_docblock_annotation(doc: &str, short_name: &str) -> Result<Option<String>, String> {
    let text = clean_docblock(doc);
    let bytes = text.as_bytes();
    let mut pos = 0;

    while let Some(rel) = memchr::memchr(b'@', &bytes[pos..]) {
        let at = pos + rel;
        pos = at + 1;
        if at > 0 && !bytes[at - 1].is_ascii_whitespace() {
            continue;
        }

        let name_end = at
            + 1
            + bytes[at + 1..]
                .iter()
                .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_' || **b == b'\\')
                .count();
        let name = &text[at + 1..name_end];
        pos = name_end;

        let mut cursor = name_end;
        while cursor < bytes.len() && bytes[cursor].is_ascii_whitespace() {
            cursor += 1;
        }
        let args = if bytes.get(cursor) == Some(&b'(') {
            let close = matching_paren(&text, cursor)
                .ok_or_else(|| format!("unclosed argument list of @{name}"))?;
            pos = close + 1;
            Some(&text[cursor + 1..close])
        } else {
            None
        };

        if name.rsplit('\\').next() == Some(short_name) {
            return Ok(Some(args.unwrap_or("").to_owned()));
        }
    }
    Ok(None)
}

/// Locate `Name(...)` among the entries of an attribute group `#[...]`.
fn find_attribute(attribute: &str, short_name: &str) -> Result<Option<String>, String> {
    let inner = attribute
        .strip_prefix("#[")
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| format!("unterminated attribute {attribute}"))?;

    for entry in split_top_level(inner) {
        let entry = entry.trim();
        let (name, args) = match entry.find('(') {
            Some(open) => {
                let close = matching_paren(entry, open)
                    .ok_or_else(|| format!("unclosed argument list in {entry}"))?;
                (entry[..open].trim(), &entry[open + 1..close])
            }
            None => (entry, ""),
        };
        if name.rsplit('\\').next() == Some(short_name) {
            return Ok(Some(args.to_owned()));
        }
    }
    Ok(None)
}

/// Index of the `)` matching the `(` at `open`, skipping quoted strings.
fn matching_paren(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut pos = open;
    while pos < bytes.len() {
        match bytes[pos] {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos);
                }
            }
            quote @ (b'"' | b'\'') => {
                pos += 1;
                while pos < bytes.len() && bytes[pos] != quote {
                    if bytes[pos] == b'\\' {
                        pos += 1;
                    }
                    pos += 1;
                }
            }
            _ => {}
        }
        pos += 1;
    }
    None
}

/// Split on commas that are not nested in brackets, braces, parens or quotes.
fn split_top_level(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut last = 0;
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                parts.push(&text[last..pos]);
                last = pos + 1;
            }
            quote @ (b'"' | b'\'') => {
                pos += 1;
                while pos < bytes.len() && bytes[pos] != quote {
                    if bytes[pos] == b'\\' {
                        pos += 1;
                    }
                    pos += 1;
                }
            }
            _ => {}
        }
        pos += 1;
    }
    if last < text.len() {
        parts.push(&text[last..]);
    }
    parts
}

/// Read the `name` argument. Attributes also accept it as first positional argument.
fn parse_arguments(args: &str, positional_name: bool) -> MappingArgs {
    let re = argument_regex();
    for (idx, entry) in split_top_level(args).into_iter().enumerate() {
        let Some(caps) = re.captures(entry.trim()) else {
            continue;
        };
        let value = caps
            .name("dq")
            .or_else(|| caps.name("sq"))
            .map(|m| m.as_str().to_owned());
        match caps.name("key").map(|k| k.as_str()) {
            Some("name") => return MappingArgs { name: value },
            None if positional_name && idx == 0 => return MappingArgs { name: value },
            _ => {}
        }
    }
    MappingArgs { name: None }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
