//! Parser for CSS stylesheets.
//!
//! The parser is lenient: every problem is recorded as a diagnostic and the
//! parser resynchronizes at the next `;` or `}`. Callers always get a
//! stylesheet back.

use crate::ast::*;
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenKind};

/// Result of reading a stylesheet.
#[derive(Debug, Clone, Default)]
pub struct Parsed {
    pub stylesheet: Stylesheet,
    /// Problems encountered, in source order of discovery.
    pub diagnostics: Vec<ParseError>,
}

/// Parse CSS source text.
pub fn parse_stylesheet(input: &str) -> Parsed {
    let mut parser = Parser::new(input);
    let rules = parser.parse_rule_list();
    Parsed {
        stylesheet: Stylesheet { rules },
        diagnostics: parser.diagnostics,
    }
}

/// Deepest block nesting read into the tree. Deeper blocks are skipped.
pub const MAX_NESTING: usize = 256;

enum Item {
    Rule(Rule),
    Declaration(Declaration),
}

// ==================== PARSER STATE ====================

struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    /// Blocks currently open.
    depth: usize,
    diagnostics: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        let (tokens, diagnostics) = Lexer::new(input).tokenize();
        Self {
            input,
            tokens,
            pos: 0,
            depth: 0,
            diagnostics,
        }
    }
}

// ==================== TOKEN HELPERS ====================

impl Parser<'_> {
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| {
            self.tokens
                .last()
                .expect("tokens should always end with EOF")
        })
    }

    fn peek_at(&self, offset: usize) -> &TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map(|t| &t.kind)
            .unwrap_or(&TokenKind::Eof)
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// End offset of the last consumed token.
    fn prev_end(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.span.end)
            .unwrap_or(0)
    }

    /// Source text of `tokens`, comments dropped and whitespace collapsed
    /// to single spaces.
    fn text(&self, tokens: &[Token]) -> String {
        let mut out = String::new();
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 && token.space_before {
                out.push(' ');
            }
            out.push_str(&self.input[token.span.start..token.span.end]);
        }
        out
    }

    fn error(&mut self, error: ParseError) {
        self.diagnostics.push(error);
    }
}

// ==================== RULES ====================

impl Parser<'_> {
    fn parse_rule_list(&mut self) -> Vec<Rule> {
        let mut rules = Vec::new();
        loop {
            match self.peek().kind {
                TokenKind::Eof => break,
                TokenKind::Semicolon => {
                    self.advance();
                }
                TokenKind::RBrace => {
                    let token = self.advance();
                    self.error(ParseError::new("unexpected '}'", token.span));
                }
                _ => match self.parse_item() {
                    Some(Item::Rule(rule)) => rules.push(rule),
                    Some(Item::Declaration(decl)) => self.error(
                        ParseError::new("declaration outside of a rule", decl.span)
                            .with_found(decl.name),
                    ),
                    None => {}
                },
            }
        }
        rules
    }

    /// Parse the inside of a block; the `{` has been consumed.
    fn parse_block(&mut self, open: &Token) -> Block {
        if self.depth >= MAX_NESTING {
            self.error(ParseError::new(
                format!("blocks nested deeper than {} levels", MAX_NESTING),
                open.span,
            ));
            self.skip_block();
            return Block::default();
        }
        self.depth += 1;
        let block = self.parse_block_contents(open);
        self.depth -= 1;
        block
    }

    /// Consume up to and including the `}` matching an already consumed `{`.
    fn skip_block(&mut self) {
        let mut depth = 1usize;
        loop {
            match self.advance().kind {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                TokenKind::Eof => break,
                _ => {}
            }
        }
    }

    fn parse_block_contents(&mut self, open: &Token) -> Block {
        let mut block = Block::default();
        loop {
            match self.peek().kind {
                TokenKind::Eof => {
                    self.error(ParseError::unexpected_eof(open.span, "'}'"));
                    break;
                }
                TokenKind::RBrace => {
                    self.advance();
                    break;
                }
                TokenKind::Semicolon => {
                    self.advance();
                }
                _ => match self.parse_item() {
                    Some(Item::Rule(rule)) => block.rules.push(rule),
                    Some(Item::Declaration(decl)) => block.declarations.push(decl),
                    None => {}
                },
            }
        }
        block
    }

    /// Parse one rule or declaration. Always consumes at least one token
    /// unless positioned on `;`, `}` or EOF.
    fn parse_item(&mut self) -> Option<Item> {
        if matches!(self.peek().kind, TokenKind::AtKeyword(_)) {
            return self.parse_at_rule().map(Item::Rule);
        }
        if self.declaration_ahead() {
            return self.parse_declaration().map(Item::Declaration);
        }
        self.parse_style_rule().map(Item::Rule)
    }

    /// `ident :` followed by `;`, `}` or EOF before any `{`.
    fn declaration_ahead(&self) -> bool {
        if !matches!(self.peek_at(0), TokenKind::Ident(_))
            || !matches!(self.peek_at(1), TokenKind::Colon)
        {
            return false;
        }
        let mut depth = 0usize;
        let mut offset = 2;
        loop {
            match self.peek_at(offset) {
                TokenKind::LParen | TokenKind::LBracket => depth += 1,
                TokenKind::RParen | TokenKind::RBracket => depth = depth.saturating_sub(1),
                TokenKind::LBrace if depth == 0 => return false,
                TokenKind::Semicolon if depth == 0 => return true,
                TokenKind::RBrace | TokenKind::Eof => return true,
                _ => {}
            }
            offset += 1;
        }
    }

    fn parse_style_rule(&mut self) -> Option<Rule> {
        let first = self.peek().clone();
        let start = self.pos;
        let mut depth = 0usize;

        loop {
            match self.peek().kind {
                TokenKind::LBrace if depth == 0 => break,
                TokenKind::Semicolon if depth == 0 => {
                    let token = self.advance();
                    let selector = self.text(&self.tokens[start..self.pos - 1]);
                    self.error(
                        ParseError::new(format!("selector `{}` has no block", selector), token.span)
                            .with_found(";"),
                    );
                    return None;
                }
                TokenKind::RBrace | TokenKind::Eof => {
                    let token = self.peek().clone();
                    self.error(ParseError::unexpected_token(
                        token.span,
                        "'{' after selector",
                        token.kind.name(),
                    ));
                    return None;
                }
                TokenKind::LParen | TokenKind::LBracket => depth += 1,
                TokenKind::RParen | TokenKind::RBracket => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.advance();
        }

        let selectors = self.split_selectors(start, self.pos);
        let open = self.advance();
        let block = self.parse_block(&open);
        let span = Span::new(
            first.span.start,
            self.prev_end(),
            first.span.line,
            first.span.column,
        );

        if selectors.is_empty() {
            self.error(ParseError::new("rule without a selector", span));
            return None;
        }

        Some(Rule::Style(StyleRule {
            selectors,
            block,
            span,
        }))
    }

    fn split_selectors(&self, start: usize, end: usize) -> Vec<String> {
        let mut selectors = Vec::new();
        let mut group_start = start;
        let mut depth = 0usize;
        for i in start..end {
            match self.tokens[i].kind {
                TokenKind::LParen | TokenKind::LBracket => depth += 1,
                TokenKind::RParen | TokenKind::RBracket => depth = depth.saturating_sub(1),
                TokenKind::Comma if depth == 0 => {
                    selectors.push(self.text(&self.tokens[group_start..i]));
                    group_start = i + 1;
                }
                _ => {}
            }
        }
        selectors.push(self.text(&self.tokens[group_start..end]));
        selectors.retain(|s| !s.is_empty());
        selectors
    }

    fn parse_at_rule(&mut self) -> Option<Rule> {
        let at = self.advance();
        let TokenKind::AtKeyword(name) = at.kind.clone() else {
            return None;
        };
        let start = self.pos;
        let mut depth = 0usize;

        loop {
            match self.peek().kind {
                TokenKind::LBrace if depth == 0 => break,
                TokenKind::Semicolon if depth == 0 => {
                    let prelude = self.text(&self.tokens[start..self.pos]);
                    self.advance();
                    return Some(self.statement_at_rule(&at, name, prelude));
                }
                TokenKind::RBrace | TokenKind::Eof => {
                    let prelude = self.text(&self.tokens[start..self.pos]);
                    return Some(self.statement_at_rule(&at, name, prelude));
                }
                TokenKind::LParen | TokenKind::LBracket => depth += 1,
                TokenKind::RParen | TokenKind::RBracket => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.advance();
        }

        let prelude = self.text(&self.tokens[start..self.pos]);
        let open = self.advance();
        let block = self.parse_block(&open);

        Some(Rule::At(AtRule {
            name,
            prelude,
            block: Some(block),
            span: Span::new(at.span.start, self.prev_end(), at.span.line, at.span.column),
        }))
    }

    fn statement_at_rule(&self, at: &Token, name: String, prelude: String) -> Rule {
        Rule::At(AtRule {
            name,
            prelude,
            block: None,
            span: Span::new(at.span.start, self.prev_end(), at.span.line, at.span.column),
        })
    }
}

// ==================== DECLARATIONS ====================

impl Parser<'_> {
    fn parse_declaration(&mut self) -> Option<Declaration> {
        let name_token = self.advance();
        let TokenKind::Ident(name) = name_token.kind.clone() else {
            return None;
        };
        // Colon guaranteed by `declaration_ahead`.
        self.advance();

        let start = self.pos;
        let mut depth = 0usize;
        loop {
            match self.peek().kind {
                TokenKind::RBrace | TokenKind::Eof => break,
                TokenKind::Semicolon if depth == 0 => break,
                TokenKind::LParen | TokenKind::LBracket => depth += 1,
                TokenKind::RParen | TokenKind::RBracket => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.advance();
        }
        let mut end = self.pos;

        let important = end >= start + 2
            && matches!(&self.tokens[end - 1].kind, TokenKind::Ident(word) if word.eq_ignore_ascii_case("important"))
            && self.tokens[end - 2].kind == TokenKind::Delim('!');
        if important {
            end -= 2;
        }

        let value = self.text(&self.tokens[start..end]);
        let span = Span::new(
            name_token.span.start,
            self.prev_end(),
            name_token.span.line,
            name_token.span.column,
        );

        if self.peek().kind == TokenKind::Semicolon {
            self.advance();
        }

        Some(Declaration {
            name,
            value,
            important,
            span,
        })
    }
}
