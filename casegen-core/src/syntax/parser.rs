//! Recursive-descent declaration scanner for Swift sources.
//!
//! Works over three contexts:
//! - top level and type members, where declarations are recognized and
//!   anything else (stored properties, typealiases, statements in
//!   `main.swift`) is skipped up to the next declaration boundary;
//! - code (function, closure and block bodies), where only nested
//!   declarations and braces are of interest.
//!
//! Protocol and actor bodies are skipped without being looked into.

use super::lexer::{tokenize, Lexeme, Token};
use super::tree::{
    AssociatedValue, CaseElement, DeclTree, GenericParamDecl, NodeId, NodeKind, TypeDecl,
};
use super::SyntaxError;

/// Declaration modifiers recognized in front of a declaration keyword.
const MODIFIERS: &[&str] = &[
    "public",
    "private",
    "fileprivate",
    "internal",
    "open",
    "package",
    "final",
    "static",
    "indirect",
    "override",
    "required",
    "convenience",
    "mutating",
    "nonmutating",
    "lazy",
    "weak",
    "unowned",
    "dynamic",
    "optional",
    "prefix",
    "postfix",
    "infix",
    "nonisolated",
    "distributed",
];

/// Modifiers that may carry a parenthesized detail: `private(set)`, `unowned(safe)`.
const DETAILED_MODIFIERS: &[&str] = &[
    "public",
    "private",
    "fileprivate",
    "internal",
    "open",
    "package",
    "unowned",
    "nonisolated",
];

const CONDITIONAL_DIRECTIVES: &[&str] = &["#if", "#elseif", "#else", "#endif"];

/// Deepest brace nesting accepted before the file is rejected.
pub const MAX_NESTING: usize = 128;

/// Where a run of declarations lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    TopLevel,
    Members { in_enum: bool },
}

/// Parses Swift source text into a [`DeclTree`].
pub fn parse_source(source: &str) -> Result<DeclTree, SyntaxError> {
    let lexemes = tokenize(source)?;
    let mut parser = Parser {
        source,
        lexemes,
        pos: 0,
        depth: 0,
        tree: DeclTree::new(),
    };
    let root = parser.tree.root();
    parser.parse_declarations(root, Scope::TopLevel, None)?;
    Ok(parser.tree)
}

struct Parser<'s> {
    source: &'s str,
    lexemes: Vec<Lexeme>,
    pos: usize,
    /// Open braces currently being parsed recursively
    depth: usize,
    tree: DeclTree,
}

impl<'s> Parser<'s> {
    // ------------------------------------------------------------------
    // Cursor helpers
    // ------------------------------------------------------------------

    fn peek(&self) -> Option<Token> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<Token> {
        self.lexemes.get(self.pos + offset).map(|l| l.token)
    }

    fn peek_text(&self, offset: usize) -> Option<&'s str> {
        let source = self.source;
        self.lexemes.get(self.pos + offset).map(|l| l.text(source))
    }

    fn previous(&self) -> Option<Token> {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.lexemes.get(i))
            .map(|l| l.token)
    }

    fn bump(&mut self) -> Option<Lexeme> {
        let lexeme = self.lexemes.get(self.pos).copied();
        if lexeme.is_some() {
            self.pos += 1;
        }
        lexeme
    }

    fn slice(&self, from: usize, to_exclusive: usize) -> Option<String> {
        if from >= to_exclusive {
            return None;
        }
        let start = self.lexemes[from].start;
        let end = self.lexemes[to_exclusive - 1].end;
        let text = self.source[start..end].trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    fn unclosed(open: Lexeme) -> SyntaxError {
        SyntaxError::new(
            format!("unclosed '{{' opened at line {}", open.line),
            open.line,
            open.column,
        )
    }

    fn unexpected(lexeme: Lexeme, what: &str) -> SyntaxError {
        SyntaxError::new(format!("unexpected {}", what), lexeme.line, lexeme.column)
    }

    /// Runs `body` one brace level deeper, failing past [`MAX_NESTING`].
    fn nested(
        &mut self,
        open: Lexeme,
        body: impl FnOnce(&mut Self) -> Result<(), SyntaxError>,
    ) -> Result<(), SyntaxError> {
        if self.depth >= MAX_NESTING {
            return Err(SyntaxError::new(
                format!("braces nested deeper than {} levels", MAX_NESTING),
                open.line,
                open.column,
            ));
        }
        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        result
    }

    // ------------------------------------------------------------------
    // Declaration contexts
    // ------------------------------------------------------------------

    /// Parses declarations until the closing brace of `open`, or end of input
    /// at top level.
    fn parse_declarations(
        &mut self,
        parent: NodeId,
        scope: Scope,
        open: Option<Lexeme>,
    ) -> Result<(), SyntaxError> {
        match open {
            Some(brace) => self.nested(brace, |p| p.parse_declaration_run(parent, scope, open)),
            None => self.parse_declaration_run(parent, scope, open),
        }
    }

    fn parse_declaration_run(
        &mut self,
        parent: NodeId,
        scope: Scope,
        open: Option<Lexeme>,
    ) -> Result<(), SyntaxError> {
        loop {
            match (self.peek(), open) {
                (None, None) => return Ok(()),
                (None, Some(open)) => return Err(Self::unclosed(open)),
                (Some(Token::RBrace), Some(_)) => {
                    self.bump();
                    return Ok(());
                }
                (Some(Token::RBrace), None) => {
                    let lexeme = self.lexemes[self.pos];
                    return Err(Self::unexpected(lexeme, "'}'"));
                }
                _ => self.parse_declaration(parent, scope)?,
            }
        }
    }

    fn parse_declaration(&mut self, parent: NodeId, scope: Scope) -> Result<(), SyntaxError> {
        let first = self.pos;

        if self.peek() == Some(Token::PoundKeyword) {
            return self.parse_pound(parent);
        }
        if self.peek() == Some(Token::Semicolon) {
            self.bump();
            return Ok(());
        }

        self.skip_attributes();
        let modifiers = self.parse_modifiers();

        match self.peek() {
            Some(Token::Import) => {
                self.parse_import(parent, first);
                Ok(())
            }
            Some(Token::Enum) => self.parse_type(parent, Token::Enum, modifiers),
            Some(Token::Struct) => self.parse_type(parent, Token::Struct, modifiers),
            Some(Token::Class) => self.parse_type(parent, Token::Class, modifiers),
            Some(Token::Extension) => self.parse_extension(parent, modifiers),
            Some(Token::Case) if scope == (Scope::Members { in_enum: true }) => {
                self.parse_case(parent);
                Ok(())
            }
            Some(Token::Func | Token::Init | Token::Deinit | Token::Subscript) => {
                self.parse_function(parent)
            }
            Some(Token::Protocol) => self.skip_opaque_type(),
            Some(Token::Identifier) if self.at_actor_declaration() => self.skip_opaque_type(),
            _ => self.skip_to_boundary(parent, scope, self.pos > first),
        }
    }

    /// Parses a code body up to its closing brace. Only nested declarations
    /// and nested braces matter here.
    fn parse_code(&mut self, parent: NodeId, open: Lexeme) -> Result<(), SyntaxError> {
        self.nested(open, |p| p.parse_code_run(parent, open))
    }

    fn parse_code_run(&mut self, parent: NodeId, open: Lexeme) -> Result<(), SyntaxError> {
        loop {
            let Some(token) = self.peek() else {
                return Err(Self::unclosed(open));
            };
            match token {
                Token::RBrace => {
                    self.bump();
                    return Ok(());
                }
                Token::LBrace => self.parse_braced_code(parent)?,
                Token::Func | Token::Init | Token::Deinit | Token::Subscript
                    if self.previous() != Some(Token::Dot) =>
                {
                    self.parse_function(parent)?
                }
                Token::Enum | Token::Struct => {
                    self.parse_type(parent, token, Vec::new())?
                }
                Token::Class if self.previous() != Some(Token::Dot) => {
                    self.parse_type(parent, token, Vec::new())?
                }
                Token::Protocol => self.skip_opaque_type()?,
                Token::Identifier if self.at_actor_declaration() => self.skip_opaque_type()?,
                _ => {
                    self.bump();
                }
            }
        }
    }

    /// Parses a brace-delimited code region that is not a declaration body.
    fn parse_braced_code(&mut self, parent: NodeId) -> Result<(), SyntaxError> {
        let kind = match self.previous() {
            Some(
                Token::Eq
                | Token::LParen
                | Token::LBracket
                | Token::Comma
                | Token::Colon
                | Token::Return,
            ) => NodeKind::Closure,
            _ => NodeKind::Block,
        };
        let Some(open) = self.bump() else {
            return Ok(());
        };
        let node = self.tree.push(parent, kind);
        self.parse_code(node, open)
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    fn parse_import(&mut self, parent: NodeId, first: usize) {
        self.bump();
        if matches!(
            self.peek(),
            Some(
                Token::Typealias
                    | Token::Struct
                    | Token::Class
                    | Token::Enum
                    | Token::Protocol
                    | Token::Let
                    | Token::Var
                    | Token::Func
            )
        ) {
            self.bump();
        }
        let path_component = |t: Option<Token>| matches!(t, Some(Token::Identifier | Token::Punct));
        if path_component(self.peek()) {
            self.bump();
            while self.peek() == Some(Token::Dot) && path_component(self.peek_at(1)) {
                self.bump();
                self.bump();
            }
        }
        if let Some(text) = self.slice(first, self.pos) {
            self.tree.push(parent, NodeKind::Import { text });
        }
    }

    fn parse_type(
        &mut self,
        parent: NodeId,
        keyword: Token,
        modifiers: Vec<String>,
    ) -> Result<(), SyntaxError> {
        self.bump();
        if self.peek() != Some(Token::Identifier) {
            return Ok(());
        }
        let identifier = self.peek_text(0).unwrap_or_default().to_string();
        self.bump();

        let generics = if self.peek() == Some(Token::Lt) {
            self.parse_generic_clause()
        } else {
            Vec::new()
        };

        let decl = TypeDecl {
            modifiers,
            identifier,
            generics,
        };
        let (kind, in_enum) = match keyword {
            Token::Enum => (NodeKind::Enum(decl), true),
            Token::Struct => (NodeKind::Struct(decl), false),
            _ => (NodeKind::Class(decl), false),
        };
        let node = self.tree.push(parent, kind);

        if let Some(open) = self.skip_to_body() {
            self.parse_declarations(node, Scope::Members { in_enum }, Some(open))?;
        }
        Ok(())
    }

    fn parse_extension(&mut self, parent: NodeId, modifiers: Vec<String>) -> Result<(), SyntaxError> {
        self.bump();
        let Some(extended_type) =
            self.capture_type(&[Token::Colon, Token::Where, Token::LBrace])
        else {
            return Ok(());
        };
        let node = self.tree.push(
            parent,
            NodeKind::Extension {
                modifiers,
                extended_type,
            },
        );
        if let Some(open) = self.skip_to_body() {
            self.parse_declarations(node, Scope::Members { in_enum: false }, Some(open))?;
        }
        Ok(())
    }

    fn parse_case(&mut self, parent: NodeId) {
        self.bump();
        let mut elements = Vec::new();

        while self.peek() == Some(Token::Identifier) {
            let identifier = self.peek_text(0).unwrap_or_default().to_string();
            self.bump();

            let associated_values = if self.peek() == Some(Token::LParen) {
                self.parse_associated_values()
            } else {
                Vec::new()
            };

            // Raw value
            if self.peek() == Some(Token::Eq) {
                self.bump();
                self.capture_expression(&[Token::Comma, Token::Case]);
            }

            elements.push(CaseElement {
                identifier,
                associated_values,
            });

            if self.peek() == Some(Token::Comma) {
                self.bump();
            } else {
                break;
            }
        }

        if !elements.is_empty() {
            self.tree.push(parent, NodeKind::Case { elements });
        }
    }

    fn parse_associated_values(&mut self) -> Vec<AssociatedValue> {
        self.bump();
        let mut values = Vec::new();

        loop {
            match self.peek() {
                None | Some(Token::LBrace | Token::RBrace) => break,
                Some(Token::RParen) => {
                    self.bump();
                    break;
                }
                Some(Token::Comma) => {
                    self.bump();
                    continue;
                }
                _ => {}
            }

            let start = self.pos;
            let label = self.parse_parameter_label();
            let ty = self.capture_type(&[Token::Comma, Token::RParen, Token::Eq]);
            let default_value = if self.peek() == Some(Token::Eq) {
                self.bump();
                self.capture_expression(&[Token::Comma, Token::RParen])
            } else {
                None
            };

            if let Some(ty) = ty {
                values.push(AssociatedValue {
                    label,
                    ty,
                    default_value,
                });
            }
            if self.pos == start {
                self.bump();
            }
        }
        values
    }

    /// Consumes `label:` or `external internal:`; `_` means unlabeled.
    fn parse_parameter_label(&mut self) -> Option<String> {
        let ident = |t: Option<Token>| t == Some(Token::Identifier);
        let names = if ident(self.peek()) && self.peek_at(1) == Some(Token::Colon) {
            1
        } else if ident(self.peek())
            && ident(self.peek_at(1))
            && self.peek_at(2) == Some(Token::Colon)
        {
            2
        } else {
            return None;
        };
        let label = self.peek_text(0).unwrap_or_default().to_string();
        for _ in 0..=names {
            self.bump();
        }
        (label != "_").then_some(label)
    }

    fn parse_generic_clause(&mut self) -> Vec<GenericParamDecl> {
        self.bump();
        let mut params = Vec::new();

        loop {
            match self.peek() {
                None | Some(Token::LBrace | Token::RBrace) => break,
                Some(Token::Gt) => {
                    self.bump();
                    break;
                }
                Some(Token::Identifier) => {
                    // Parameter packs: `each T`
                    if self.peek_text(0) == Some("each")
                        && self.peek_at(1) == Some(Token::Identifier)
                    {
                        self.bump();
                    }
                    let name = self.peek_text(0).unwrap_or_default().to_string();
                    self.bump();
                    let inherited_type = if self.peek() == Some(Token::Colon) {
                        self.bump();
                        self.capture_type(&[Token::Comma, Token::Gt])
                    } else {
                        None
                    };
                    params.push(GenericParamDecl {
                        name,
                        inherited_type,
                    });
                }
                _ => {
                    self.bump();
                }
            }
        }
        params
    }

    fn parse_function(&mut self, parent: NodeId) -> Result<(), SyntaxError> {
        let Some(keyword) = self.bump() else {
            return Ok(());
        };
        let identifier = match keyword.token {
            Token::Func => {
                let name = self.peek_text(0).unwrap_or_default().to_string();
                self.bump();
                name
            }
            _ => keyword.text(self.source).to_string(),
        };
        let node = self.tree.push(parent, NodeKind::Function { identifier });

        let mut depth = 0usize;
        while let Some(token) = self.peek() {
            match token {
                Token::LParen | Token::LBracket => depth += 1,
                Token::RParen | Token::RBracket => depth = depth.saturating_sub(1),
                Token::LBrace if depth == 0 => {
                    let Some(open) = self.bump() else { break };
                    return self.parse_code(node, open);
                }
                // Closure default arguments
                Token::LBrace => {
                    self.skip_braces()?;
                    continue;
                }
                Token::RBrace | Token::Semicolon => break,
                _ if depth == 0 && self.starts_declaration_keyword() => break,
                _ => {}
            }
            self.bump();
        }
        Ok(())
    }

    /// Protocols and actors: the body is skipped unseen.
    fn skip_opaque_type(&mut self) -> Result<(), SyntaxError> {
        self.bump();
        while let Some(token) = self.peek() {
            match token {
                Token::LBrace => return self.skip_braces(),
                Token::RBrace | Token::Semicolon => break,
                _ => {
                    self.bump();
                }
            }
        }
        Ok(())
    }

    /// Compiler directives. Conditional compilation is transparent: both
    /// branches are parsed as if the markers were not there.
    fn parse_pound(&mut self, parent: NodeId) -> Result<(), SyntaxError> {
        let Some(pound) = self.bump() else {
            return Ok(());
        };
        let text = pound.text(self.source);
        if CONDITIONAL_DIRECTIVES.contains(&text) {
            while self
                .lexemes
                .get(self.pos)
                .is_some_and(|l| l.line == pound.line)
            {
                self.bump();
            }
            return Ok(());
        }
        match self.peek() {
            Some(Token::LParen) => {
                self.skip_parens();
            }
            Some(Token::LBrace) => self.parse_braced_code(parent)?,
            _ => {}
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Skipping
    // ------------------------------------------------------------------

    fn skip_attributes(&mut self) {
        while self.peek() == Some(Token::At) {
            self.bump();
            if self.peek() == Some(Token::Identifier) {
                self.bump();
            }
            while self.peek() == Some(Token::Dot) && self.peek_at(1) == Some(Token::Identifier) {
                self.bump();
                self.bump();
            }
            if self.peek() == Some(Token::LParen) {
                self.skip_parens();
            }
        }
    }

    fn parse_modifiers(&mut self) -> Vec<String> {
        let mut modifiers = Vec::new();
        loop {
            match self.peek() {
                Some(Token::Class) if self.class_is_modifier() => {
                    self.bump();
                    modifiers.push("class".to_string());
                }
                Some(Token::Identifier) => {
                    let Some(word) = self.peek_text(0).filter(|w| MODIFIERS.contains(w)) else {
                        break;
                    };
                    // `open` or `optional` used as a name, not a modifier
                    if !self.is_modifier_position(1) {
                        break;
                    }
                    self.bump();
                    let detail = DETAILED_MODIFIERS.contains(&word)
                        && self.peek() == Some(Token::LParen)
                        && self.peek_at(1) == Some(Token::Identifier)
                        && self.peek_at(2) == Some(Token::RParen);
                    if detail {
                        let inner = self.peek_text(1).unwrap_or_default();
                        modifiers.push(format!("{}({})", word, inner));
                        self.pos += 3;
                    } else {
                        modifiers.push(word.to_string());
                    }
                }
                _ => break,
            }
        }
        modifiers
    }

    /// Whether the token `offset` ahead can follow a modifier.
    fn is_modifier_position(&self, offset: usize) -> bool {
        match self.peek_at(offset) {
            Some(Token::LParen) => true,
            Some(Token::Identifier) => match self.peek_text(offset) {
                Some("actor") => self.peek_at(offset + 1) == Some(Token::Identifier),
                word => word.is_some_and(|w| MODIFIERS.contains(&w)),
            },
            Some(token) => is_declaration_keyword(token),
            None => false,
        }
    }

    /// `class func`, `class var`, `class override func`.
    fn class_is_modifier(&self) -> bool {
        match self.peek_at(1) {
            Some(Token::Func | Token::Var | Token::Let | Token::Subscript | Token::Typealias) => {
                true
            }
            Some(Token::Identifier) => {
                self.peek_text(1).is_some_and(|w| MODIFIERS.contains(&w))
                    && self.is_modifier_position(2)
            }
            _ => false,
        }
    }

    fn starts_declaration_keyword(&self) -> bool {
        match self.peek() {
            Some(Token::Func | Token::Init | Token::Deinit | Token::Subscript) => {
                self.previous() != Some(Token::Dot)
            }
            Some(Token::Identifier) => self.at_actor_declaration(),
            Some(token) => is_declaration_keyword(token),
            None => false,
        }
    }

    /// `actor` is contextual: `actor Name` declares an actor, while
    /// `var actor`, `case actor` and `.actor` use it as a plain name.
    fn at_actor_declaration(&self) -> bool {
        self.peek_text(0) == Some("actor")
            && self.peek_at(1) == Some(Token::Identifier)
            && !matches!(
                self.previous(),
                Some(
                    Token::Var
                        | Token::Let
                        | Token::Case
                        | Token::Comma
                        | Token::Dot
                        | Token::Eq
                        | Token::Colon
                        | Token::LParen
                        | Token::Return
                )
            )
    }

    /// Whether the cursor sits on something that begins a new declaration.
    fn at_declaration_start(&self, scope: Scope) -> bool {
        match self.peek() {
            Some(Token::At) => true,
            Some(Token::PoundKeyword) => true,
            Some(Token::Case) => scope == Scope::Members { in_enum: true },
            Some(Token::Identifier) => {
                self.at_actor_declaration()
                    || (self.peek_text(0).is_some_and(|w| MODIFIERS.contains(&w))
                        && self.is_modifier_position(1))
            }
            _ => self.starts_declaration_keyword(),
        }
    }

    /// Skips a declaration this scanner does not model (stored properties,
    /// typealiases, top-level statements). Braces met on the way are parsed
    /// as code so that declarations inside them still land in the tree.
    fn skip_to_boundary(
        &mut self,
        parent: NodeId,
        scope: Scope,
        mut progressed: bool,
    ) -> Result<(), SyntaxError> {
        let mut depth = 0usize;
        while let Some(token) = self.peek() {
            match token {
                Token::RBrace => break,
                Token::LBrace => {
                    self.parse_braced_code(parent)?;
                    progressed = true;
                    continue;
                }
                Token::Semicolon if depth == 0 => {
                    self.bump();
                    break;
                }
                _ if progressed && depth == 0 && self.at_declaration_start(scope) => break,
                Token::LParen | Token::LBracket => depth += 1,
                Token::RParen | Token::RBracket => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.bump();
            progressed = true;
        }
        Ok(())
    }

    /// Skips an inheritance clause / where clause and consumes the body's `{`.
    fn skip_to_body(&mut self) -> Option<Lexeme> {
        let mut depth = 0usize;
        while let Some(token) = self.peek() {
            match token {
                Token::LBrace if depth == 0 => return self.bump(),
                Token::RBrace | Token::Semicolon => return None,
                Token::LParen | Token::LBracket | Token::Lt => depth += 1,
                Token::RParen | Token::RBracket | Token::Gt => depth = depth.saturating_sub(1),
                _ if depth == 0 && self.starts_declaration_keyword() => return None,
                _ => {}
            }
            self.bump();
        }
        None
    }

    fn skip_braces(&mut self) -> Result<(), SyntaxError> {
        let Some(open) = self.bump() else {
            return Ok(());
        };
        let mut depth = 1usize;
        while let Some(lexeme) = self.bump() {
            match lexeme.token {
                Token::LBrace => depth += 1,
                Token::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
        Err(Self::unclosed(open))
    }

    fn skip_parens(&mut self) {
        let mut depth = 0usize;
        while let Some(token) = self.peek() {
            match token {
                Token::LParen => depth += 1,
                Token::RParen => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.bump();
                        return;
                    }
                }
                Token::LBrace | Token::RBrace => return,
                _ => {}
            }
            self.bump();
        }
    }

    // ------------------------------------------------------------------
    // Verbatim text capture
    // ------------------------------------------------------------------

    /// Captures a type expression up to one of `stops` at nesting depth 0.
    fn capture_type(&mut self, stops: &[Token]) -> Option<String> {
        let start = self.pos;
        let mut depth = 0usize;
        while let Some(token) = self.peek() {
            match token {
                Token::LBrace | Token::RBrace | Token::Semicolon => break,
                _ if depth == 0 && stops.contains(&token) => break,
                Token::LParen | Token::LBracket | Token::Lt => depth += 1,
                Token::RParen | Token::RBracket | Token::Gt => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.bump();
        }
        self.slice(start, self.pos)
    }

    /// Captures an expression (default or raw value) up to one of `stops`.
    fn capture_expression(&mut self, stops: &[Token]) -> Option<String> {
        let start = self.pos;
        let mut depth = 0usize;
        while let Some(token) = self.peek() {
            match token {
                _ if depth == 0 && stops.contains(&token) => break,
                Token::Semicolon if depth == 0 => break,
                Token::LParen | Token::LBracket | Token::LBrace => depth += 1,
                Token::RParen | Token::RBracket | Token::RBrace => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                _ if depth == 0
                    && self.pos > start
                    && self.at_declaration_start(Scope::Members { in_enum: true }) =>
                {
                    break
                }
                _ => {}
            }
            self.bump();
        }
        self.slice(start, self.pos)
    }
}

fn is_declaration_keyword(token: Token) -> bool {
    matches!(
        token,
        Token::Import
            | Token::Enum
            | Token::Case
            | Token::Class
            | Token::Struct
            | Token::Extension
            | Token::Protocol
            | Token::Func
            | Token::Init
            | Token::Deinit
            | Token::Subscript
            | Token::Var
            | Token::Let
            | Token::Typealias
            | Token::Associatedtype
            | Token::Operator
            | Token::Precedencegroup
    )
}
