use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    IntegerConst,
    RealConst,
    Unary,
    LParen,
    RParen,
    Multiply,
    IntegerDivision,
    FloatDivision,
    Plus,
    Minus,
    Program,
    Begin,
    End,
    Dot,
    Semicolon,
    Ident,
    Assign,
    Var,
    Colon,
    Comma,
    TypeName,
    Procedure,
    Eof,
    Unknown,
}

impl TokenKind {
    /// True for kinds after which an expression operand is complete, so a
    /// following `+`/`-` is binary.
    pub fn ends_operand(self) -> bool {
        matches!(
            self,
            TokenKind::IntegerConst | TokenKind::RealConst | TokenKind::Ident | TokenKind::RParen
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::IntegerConst => "integer literal",
            TokenKind::RealConst => "real literal",
            TokenKind::Unary => "unary sign",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Multiply => "*",
            TokenKind::IntegerDivision => "DIV",
            TokenKind::FloatDivision => "/",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Program => "PROGRAM",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Ident => "identifier",
            TokenKind::Assign => ":=",
            TokenKind::Var => "VAR",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::TypeName => "type name",
            TokenKind::Procedure => "PROCEDURE",
            TokenKind::Eof => "end of input",
            TokenKind::Unknown => "unknown",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Integer(i64),
    Real(f64),
    Name(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub raw: String,
    pub value: Option<TokenValue>,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, raw: impl Into<String>, value: Option<TokenValue>, line: usize) -> Self {
        Self {
            kind,
            raw: raw.into(),
            value,
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", None, line)
    }

    /// Identifier and type-name payload. Falls back to the raw text.
    pub fn name(&self) -> &str {
        match &self.value {
            Some(TokenValue::Name(name)) => name,
            _ => &self.raw,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "{}", self.raw),
        }
    }
}
