use crate::config::lexer::lookup_keyword;
use crate::frontend::token::{Token, TokenKind, TokenValue};
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

/// The parser's view of a lexer: a lazily produced token sequence that
/// ends in an endless run of `Eof` tokens.
pub trait TokenStream {
    fn next_token(&mut self) -> Token;

    /// Called when a parenthesized sub-expression begins, so that a
    /// leading `+`/`-` inside it is read as a sign.
    fn enter_bracketed_context(&mut self);
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Skip,
    Real,
    Integer,
    Word,
    Sign(TokenKind),
    Fixed(TokenKind),
}

struct Pattern {
    regex: Regex,
    rule: Rule,
}

fn pattern(source: &str, rule: Rule) -> Pattern {
    // Every pattern is a literal in this file; a bad one is a programming error.
    let regex = Regex::new(source).unwrap_or_else(|e| panic!("invalid lexer pattern {source}: {e}"));
    Pattern { regex, rule }
}

lazy_static! {
    static ref PATTERNS: Vec<Pattern> = vec![
        pattern(r"^\s+", Rule::Skip),
        pattern(r"^\{[^}]*\}", Rule::Skip),
        pattern(r"^[0-9]+\.[0-9]+", Rule::Real),
        pattern(r"^[0-9]+", Rule::Integer),
        pattern(r"^[A-Za-z_][A-Za-z0-9_]*", Rule::Word),
        pattern(r"^:=", Rule::Fixed(TokenKind::Assign)),
        pattern(r"^:", Rule::Fixed(TokenKind::Colon)),
        pattern(r"^\+", Rule::Sign(TokenKind::Plus)),
        pattern(r"^-", Rule::Sign(TokenKind::Minus)),
        pattern(r"^\*", Rule::Fixed(TokenKind::Multiply)),
        pattern(r"^/", Rule::Fixed(TokenKind::FloatDivision)),
        pattern(r"^\(", Rule::Fixed(TokenKind::LParen)),
        pattern(r"^\)", Rule::Fixed(TokenKind::RParen)),
        pattern(r"^;", Rule::Fixed(TokenKind::Semicolon)),
        pattern(r"^,", Rule::Fixed(TokenKind::Comma)),
        pattern(r"^\.", Rule::Fixed(TokenKind::Dot)),
    ];
}

pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    previous: Option<TokenKind>,
    bracketed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            previous: None,
            bracketed: false,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    fn advance(&mut self, text: &str) {
        self.pos += text.len();
        self.line += text.matches('\n').count();
    }

    fn sign_is_unary(&self) -> bool {
        self.bracketed || !self.previous.is_some_and(TokenKind::ends_operand)
    }

    fn build(&self, rule: Rule, text: &str) -> Token {
        let line = self.line;
        match rule {
            Rule::Real => match text.parse::<f64>() {
                Ok(value) => Token::new(TokenKind::RealConst, text, Some(TokenValue::Real(value)), line),
                Err(_) => Token::new(TokenKind::Unknown, text, None, line),
            },
            Rule::Integer => match text.parse::<i64>() {
                Ok(value) => Token::new(TokenKind::IntegerConst, text, Some(TokenValue::Integer(value)), line),
                Err(_) => Token::new(TokenKind::Unknown, text, None, line),
            },
            Rule::Word => match lookup_keyword(text) {
                Some(TokenKind::TypeName) => Token::new(
                    TokenKind::TypeName,
                    text,
                    Some(TokenValue::Name(text.to_ascii_uppercase())),
                    line,
                ),
                Some(kind) => Token::new(kind, text, None, line),
                None => Token::new(TokenKind::Ident, text, Some(TokenValue::Name(text.to_string())), line),
            },
            Rule::Sign(binary) => {
                let kind = if self.sign_is_unary() { TokenKind::Unary } else { binary };
                Token::new(kind, text, None, line)
            }
            Rule::Fixed(kind) => Token::new(kind, text, None, line),
            // Skipped text never becomes a token; see `scan`.
            Rule::Skip => Token::new(TokenKind::Unknown, text, None, line),
        }
    }

    fn scan(&mut self) -> Token {
        let source = self.source;
        loop {
            let rest = &source[self.pos..];
            let Some(ch) = rest.chars().next() else {
                return Token::eof(self.line);
            };
            let found = PATTERNS
                .iter()
                .find_map(|p| p.regex.find(rest).map(|m| (p.rule, m.as_str())));
            match found {
                Some((Rule::Skip, text)) => self.advance(text),
                Some((rule, text)) => {
                    let token = self.build(rule, text);
                    self.advance(text);
                    return token;
                }
                None => {
                    let text = &rest[..ch.len_utf8()];
                    let token = Token::new(TokenKind::Unknown, text, None, self.line);
                    self.advance(text);
                    return token;
                }
            }
        }
    }
}

impl TokenStream for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        let token = self.scan();
        trace!("line {}: {:?} {:?}", token.line, token.kind, token.raw);
        self.previous = Some(token.kind);
        self.bracketed = false;
        token
    }

    fn enter_bracketed_context(&mut self) {
        self.bracketed = true;
    }
}

/// Collects every token up to and including the first `Eof`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is(TokenKind::Eof);
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
