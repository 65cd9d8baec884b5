use unicode_segmentation::UnicodeSegmentation;

use super::token::{Token, TokenKind};
use crate::error::ScanError;
use crate::span::Span;

/// Turns source text into a span-tagged token stream.
///
/// The source is walked one extended grapheme cluster at a time, so
/// `\r\n` counts as a single line terminator and a multi-codepoint
/// character inside a string literal occupies a single column. Token
/// classification itself (digits, letters, operators) is ASCII-only.
pub struct Scanner<'a> {
    /// Source split into grapheme clusters
    graphemes: Vec<&'a str>,
    /// Index of the next unconsumed grapheme
    current: usize,
    /// Current line number (1-indexed)
    line: u32,
    /// Column the next grapheme lands on (1-indexed)
    column: u32,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at line 1, column 1 of `source`
    pub fn new(source: &'a str) -> Self {
        Scanner {
            graphemes: source.graphemes(true).collect(),
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans the whole source, collecting a best-effort token stream and
    /// every diagnostic met along the way. The token stream always ends
    /// with exactly one `Eof`.
    pub fn scan_tokens(&mut self) -> (Vec<Token>, Vec<ScanError>) {
        let mut tokens = Vec::new();
        let mut diagnostics = Vec::new();
        loop {
            match self.next_token() {
                Ok(token) => {
                    let at_end = token.kind == TokenKind::Eof;
                    tokens.push(token);
                    if at_end {
                        break;
                    }
                }
                Err(diagnostic) => diagnostics.push(diagnostic),
            }
        }
        (tokens, diagnostics)
    }

    /// Scans and returns the next token, skipping whitespace and
    /// comments. Once the input is exhausted, every further call yields
    /// the same `Eof` token.
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        loop {
            let Some(grapheme) = self.peek() else {
                return Ok(Token::new(
                    TokenKind::Eof,
                    Span::point(self.line, self.column),
                ));
            };
            match grapheme {
                "\n" | "\r\n" => self.newline(),
                // A bare carriage return is inline whitespace; the
                // terminator form arrives as the single "\r\n" cluster.
                " " | "\t" | "\r" => self.bump(),
                "/" if self.peek_at(1) == Some("/") => self.skip_comment(),
                "\"" => return self.scan_string(),
                "(" => return Ok(self.fixed_token(TokenKind::LeftParen)),
                ")" => return Ok(self.fixed_token(TokenKind::RightParen)),
                "{" => return Ok(self.fixed_token(TokenKind::LeftBrace)),
                "}" => return Ok(self.fixed_token(TokenKind::RightBrace)),
                "," => return Ok(self.fixed_token(TokenKind::Comma)),
                "." => return Ok(self.fixed_token(TokenKind::Dot)),
                "-" => return Ok(self.fixed_token(TokenKind::Minus)),
                "+" => return Ok(self.fixed_token(TokenKind::Plus)),
                ";" => return Ok(self.fixed_token(TokenKind::Semicolon)),
                "*" => return Ok(self.fixed_token(TokenKind::Star)),
                "/" => return Ok(self.fixed_token(TokenKind::Slash)),
                "!" => return Ok(self.equal_suffix(TokenKind::Bang, TokenKind::BangEqual)),
                "=" => return Ok(self.equal_suffix(TokenKind::Equal, TokenKind::EqualEqual)),
                "<" => return Ok(self.equal_suffix(TokenKind::Less, TokenKind::LessEqual)),
                ">" => return Ok(self.equal_suffix(TokenKind::Greater, TokenKind::GreaterEqual)),
                g if is_digit(g) => return Ok(self.scan_number()),
                g if is_identifier_start(g) => return Ok(self.scan_identifier()),
                g => {
                    let diagnostic = ScanError::UnexpectedCharacter {
                        grapheme: g.to_string(),
                        span: Span::point(self.line, self.column),
                    };
                    self.bump();
                    return Err(diagnostic);
                }
            }
        }
    }

    /// `==`, `!=`, `<=`, `>=` win over their single-character prefixes
    fn equal_suffix(&mut self, bare: TokenKind, with_equal: TokenKind) -> Token {
        if self.peek_at(1) == Some("=") {
            self.fixed_token(with_equal)
        } else {
            self.fixed_token(bare)
        }
    }

    /// Emits a fixed-lexeme token at the cursor and steps over it
    fn fixed_token(&mut self, kind: TokenKind) -> Token {
        let width = kind.lexeme().len() as u32;
        let token = Token::fixed(kind, self.line, self.column);
        self.current += width as usize;
        self.column += width;
        token
    }

    /// Consumes `//` and everything up to and including the line
    /// terminator, or up to end of input.
    fn skip_comment(&mut self) {
        while let Some(grapheme) = self.peek() {
            match grapheme {
                "\n" | "\r\n" => {
                    self.newline();
                    return;
                }
                _ => self.bump(),
            }
        }
    }

    /// Digits, then at most one `.` followed by optional digits. The
    /// trailing-dot form (`123.`) is a valid number; the lexeme is kept
    /// verbatim for the parser to convert.
    fn scan_number(&mut self) -> Token {
        let line = self.line;
        let start_column = self.column;
        let mut lexeme = String::new();
        while let Some(g) = self.peek() {
            if is_digit(g) {
                lexeme.push_str(g);
                self.bump();
            } else {
                break;
            }
        }
        if self.peek() == Some(".") {
            lexeme.push('.');
            self.bump();
            while let Some(g) = self.peek() {
                if is_digit(g) {
                    lexeme.push_str(g);
                    self.bump();
                } else {
                    break;
                }
            }
        }
        Token::new(
            TokenKind::Number(lexeme),
            Span::single_line(line, start_column, self.column - 1),
        )
    }

    /// Everything between the quotes, verbatim: embedded line
    /// terminators go into the payload and advance the line counter.
    /// The token's span runs from the opening quote to the closing one.
    fn scan_string(&mut self) -> Result<Token, ScanError> {
        let open = Span::point(self.line, self.column);
        self.bump();
        let mut payload = String::new();
        loop {
            match self.peek() {
                None => return Err(ScanError::UnterminatedString { span: open }),
                Some("\"") => {
                    let close = Span::point(self.line, self.column);
                    self.bump();
                    return Ok(Token::new(TokenKind::String(payload), open.merge(close)));
                }
                Some(g @ ("\n" | "\r\n")) => {
                    payload.push_str(g);
                    self.newline();
                }
                Some(g) => {
                    payload.push_str(g);
                    self.bump();
                }
            }
        }
    }

    /// A letter or `_`, then letters, digits, and `_`; keywords are
    /// separated from identifiers by table lookup on the finished text.
    fn scan_identifier(&mut self) -> Token {
        let line = self.line;
        let start_column = self.column;
        let mut text = String::new();
        while let Some(g) = self.peek() {
            if is_identifier_continue(g) {
                text.push_str(g);
                self.bump();
            } else {
                break;
            }
        }
        let span = Span::single_line(line, start_column, self.column - 1);
        let kind = TokenKind::keyword(&text).unwrap_or_else(|| TokenKind::Identifier(text));
        Token::new(kind, span)
    }

    fn peek(&self) -> Option<&'a str> {
        self.graphemes.get(self.current).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<&'a str> {
        self.graphemes.get(self.current + offset).copied()
    }

    /// Steps over one grapheme within the current line
    fn bump(&mut self) {
        self.current += 1;
        self.column += 1;
    }

    /// Steps over a line terminator
    fn newline(&mut self) {
        self.current += 1;
        self.line += 1;
        self.column = 1;
    }
}

fn is_digit(grapheme: &str) -> bool {
    matches!(grapheme.as_bytes(), [b] if b.is_ascii_digit())
}

fn is_identifier_start(grapheme: &str) -> bool {
    matches!(grapheme.as_bytes(), [b] if b.is_ascii_alphabetic() || *b == b'_')
}

fn is_identifier_continue(grapheme: &str) -> bool {
    matches!(grapheme.as_bytes(), [b] if b.is_ascii_alphanumeric() || *b == b'_')
}
