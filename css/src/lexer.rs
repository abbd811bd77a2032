//! Lexer (tokenizer) for CSS source text.

use crate::{ParseError, Span};

/// Token types.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Names
    Ident(String),
    /// `@media`, without the `@`
    AtKeyword(String),
    /// `#fff`, without the `#`
    Hash(String),

    // Literals
    /// Number with its unit or `%`, as written (`-1.5em`, `50%`).
    Number(String),
    /// String contents without the quotes, escapes kept verbatim.
    String(String),
    /// Contents of an unquoted `url(...)`.
    Url(String),

    // Symbols
    Colon,     // :
    Semicolon, // ;
    Comma,     // ,
    LBrace,    // {
    RBrace,    // }
    LParen,    // (
    RParen,    // )
    LBracket,  // [
    RBracket,  // ]
    Delim(char),

    // End of file
    Eof,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "identifier",
            TokenKind::AtKeyword(_) => "at-keyword",
            TokenKind::Hash(_) => "hash",
            TokenKind::Number(_) => "number",
            TokenKind::String(_) => "string",
            TokenKind::Url(_) => "url",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Delim(_) => "delimiter",
            TokenKind::Eof => "end of input",
        }
    }
}

/// A token with its span.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// Whitespace separated this token from the previous one.
    pub space_before: bool,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, space_before: bool) -> Self {
        Self {
            kind,
            span,
            space_before,
        }
    }
}

/// Lexer state.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    diagnostics: Vec<ParseError>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize all input. Always ends with an `Eof` token; problems are
    /// returned alongside instead of aborting.
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<ParseError>) {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        (tokens, self.diagnostics)
    }

    fn span_from(&self, start: usize, start_line: usize, start_col: usize) -> Span {
        Span::new(start, self.pos, start_line, start_col)
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(n)
    }

    fn peek_char(&self) -> Option<char> {
        self.peek_nth(0)
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.input[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Skip whitespace and comments; returns true if any whitespace was seen.
    fn skip_trivia(&mut self) -> bool {
        let mut saw_space = false;
        loop {
            match (self.peek_nth(0), self.peek_nth(1)) {
                (Some(c), _) if c.is_whitespace() => {
                    self.next_char();
                    saw_space = true;
                }
                (Some('/'), Some('*')) => self.skip_comment(),
                _ => return saw_space,
            }
        }
    }

    fn skip_comment(&mut self) {
        let (start, start_line, start_col) = (self.pos, self.line, self.column);
        self.next_char();
        self.next_char();
        loop {
            match (self.peek_nth(0), self.peek_nth(1)) {
                (Some('*'), Some('/')) => {
                    self.next_char();
                    self.next_char();
                    return;
                }
                (Some(_), _) => {
                    self.next_char();
                }
                (None, _) => {
                    self.diagnostics.push(ParseError::new(
                        "unterminated comment",
                        self.span_from(start, start_line, start_col),
                    ));
                    return;
                }
            }
        }
    }

    fn next_token(&mut self) -> Token {
        let space_before = self.skip_trivia();

        let start = self.pos;
        let start_line = self.line;
        let start_col = self.column;

        let Some(c) = self.next_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::new(self.pos, self.pos, self.line, self.column),
                space_before,
            );
        };

        let kind = match c {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '"' | '\'' => self.read_string(c, start, start_line, start_col),
            '@' => {
                if self.starts_ident(0) {
                    TokenKind::AtKeyword(self.read_name(String::new()))
                } else {
                    TokenKind::Delim('@')
                }
            }
            '#' => match self.peek_char() {
                Some(n) if is_name_char(n) || n == '\\' => {
                    TokenKind::Hash(self.read_name(String::new()))
                }
                _ => TokenKind::Delim('#'),
            },
            c if c.is_ascii_digit() => self.read_number(start),
            '.' if self.peek_char().is_some_and(|n| n.is_ascii_digit()) => {
                self.read_number(start)
            }
            '+' if self.starts_number(0) => self.read_number(start),
            '-' if self.starts_number(0) => self.read_number(start),
            '-' if matches!(self.peek_char(), Some(n) if n == '-' || n == '\\' || is_name_start(n)) => {
                self.read_ident(String::from('-'), start, start_line, start_col)
            }
            '\\' => {
                let mut name = String::from('\\');
                if let Some(escaped) = self.next_char() {
                    name.push(escaped);
                }
                self.read_ident(name, start, start_line, start_col)
            }
            c if is_name_start(c) => self.read_ident(String::from(c), start, start_line, start_col),
            other => TokenKind::Delim(other),
        };

        Token::new(kind, self.span_from(start, start_line, start_col), space_before)
    }

    /// Does an identifier start `offset` characters ahead?
    fn starts_ident(&self, offset: usize) -> bool {
        match self.peek_nth(offset) {
            Some('-') => matches!(
                self.peek_nth(offset + 1),
                Some(n) if n == '-' || n == '\\' || is_name_start(n)
            ),
            Some('\\') => true,
            Some(c) => is_name_start(c),
            None => false,
        }
    }

    /// Does a number start `offset` characters ahead?
    fn starts_number(&self, offset: usize) -> bool {
        match self.peek_nth(offset) {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => self.peek_nth(offset + 1).is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    /// Consume name characters, appending them to `name`.
    fn read_name(&mut self, mut name: String) -> String {
        while let Some(c) = self.peek_char() {
            if is_name_char(c) {
                name.push(c);
                self.next_char();
            } else if c == '\\' && self.peek_nth(1).is_some_and(|n| n != '\n') {
                name.push(c);
                self.next_char();
                if let Some(escaped) = self.next_char() {
                    name.push(escaped);
                }
            } else {
                break;
            }
        }
        name
    }

    fn read_ident(
        &mut self,
        prefix: String,
        start: usize,
        start_line: usize,
        start_col: usize,
    ) -> TokenKind {
        let name = self.read_name(prefix);

        if name.eq_ignore_ascii_case("url") && self.peek_char() == Some('(') {
            let mut offset = 1;
            while self.peek_nth(offset).is_some_and(char::is_whitespace) {
                offset += 1;
            }
            if !matches!(self.peek_nth(offset), Some('"') | Some('\'')) {
                self.next_char();
                return self.read_url(start, start_line, start_col);
            }
        }

        TokenKind::Ident(name)
    }

    fn read_url(&mut self, start: usize, start_line: usize, start_col: usize) -> TokenKind {
        let mut content = String::new();
        loop {
            match self.next_char() {
                Some(')') => break,
                Some('\\') => {
                    content.push('\\');
                    if let Some(escaped) = self.next_char() {
                        content.push(escaped);
                    }
                }
                Some(c) => content.push(c),
                None => {
                    self.diagnostics.push(ParseError::unexpected_eof(
                        self.span_from(start, start_line, start_col),
                        "')' to close url(",
                    ));
                    break;
                }
            }
        }
        TokenKind::Url(content.trim().to_string())
    }

    fn read_string(
        &mut self,
        quote: char,
        start: usize,
        start_line: usize,
        start_col: usize,
    ) -> TokenKind {
        let mut content = String::new();
        loop {
            match self.peek_char() {
                Some(c) if c == quote => {
                    self.next_char();
                    break;
                }
                Some('\n') | None => {
                    self.diagnostics.push(ParseError::new(
                        "unterminated string",
                        self.span_from(start, start_line, start_col),
                    ));
                    break;
                }
                Some('\\') => {
                    self.next_char();
                    content.push('\\');
                    if let Some(escaped) = self.next_char() {
                        content.push(escaped);
                    }
                }
                Some(c) => {
                    self.next_char();
                    content.push(c);
                }
            }
        }
        TokenKind::String(content)
    }

    fn read_number(&mut self, start: usize) -> TokenKind {
        self.eat_digits();
        if self.peek_char() == Some('.') && self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
            self.next_char();
            self.eat_digits();
        }

        // Exponent, but not the `e` of a unit like `em`.
        if matches!(self.peek_char(), Some('e') | Some('E')) {
            let exponent = match self.peek_nth(1) {
                Some(c) if c.is_ascii_digit() => true,
                Some('+') | Some('-') => self.peek_nth(2).is_some_and(|c| c.is_ascii_digit()),
                _ => false,
            };
            if exponent {
                self.next_char();
                if matches!(self.peek_char(), Some('+') | Some('-')) {
                    self.next_char();
                }
                self.eat_digits();
            }
        }

        if self.peek_char() == Some('%') {
            self.next_char();
        } else if self.starts_ident(0) {
            self.read_name(String::new());
        }

        TokenKind::Number(self.input[start..self.pos].to_string())
    }

    fn eat_digits(&mut self) {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.next_char();
        }
    }
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-'
}
