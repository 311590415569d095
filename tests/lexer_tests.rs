use pasc::frontend::{tokenize, Lexer, TokenKind, TokenStream, TokenValue};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|token| token.kind).collect()
}

#[test]
fn test_program_header_tokens() {
    let expected = vec![
        TokenKind::Program,
        TokenKind::Ident,
        TokenKind::Semicolon,
        TokenKind::Var,
        TokenKind::Ident,
        TokenKind::Comma,
        TokenKind::Ident,
        TokenKind::Colon,
        TokenKind::TypeName,
        TokenKind::Semicolon,
        TokenKind::Begin,
        TokenKind::End,
        TokenKind::Dot,
        TokenKind::Eof,
    ];
    assert_eq!(kinds("PROGRAM p; VAR a, b : INTEGER; BEGIN END."), expected);
}

#[test]
fn test_mixed_case_keywords() {
    let tokens = tokenize("pRoGrAm Demo; bEgIn EnD.");
    assert_eq!(tokens[0].kind, TokenKind::Program);
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[1].name(), "Demo");
    assert_eq!(tokens[3].kind, TokenKind::Begin);
    assert_eq!(tokens[4].kind, TokenKind::End);
}

#[test]
fn test_type_names_carry_upper_case_payload() {
    let tokens = tokenize("integer Real");
    assert_eq!(tokens[0].kind, TokenKind::TypeName);
    assert_eq!(tokens[0].value, Some(TokenValue::Name("INTEGER".to_string())));
    assert_eq!(tokens[1].value, Some(TokenValue::Name("REAL".to_string())));
}

#[test]
fn test_numeric_payloads() {
    let tokens = tokenize("42 2.5");
    assert_eq!(tokens[0].kind, TokenKind::IntegerConst);
    assert_eq!(tokens[0].value, Some(TokenValue::Integer(42)));
    assert_eq!(tokens[1].kind, TokenKind::RealConst);
    assert_eq!(tokens[1].value, Some(TokenValue::Real(2.5)));
}

#[test]
fn test_integer_followed_by_dot_is_not_real() {
    assert_eq!(
        kinds("x := 5."),
        vec![TokenKind::Ident, TokenKind::Assign, TokenKind::IntegerConst, TokenKind::Dot, TokenKind::Eof]
    );
}

#[test]
fn test_operators() {
    assert_eq!(
        kinds("a * b DIV c / d"),
        vec![
            TokenKind::Ident,
            TokenKind::Multiply,
            TokenKind::Ident,
            TokenKind::IntegerDivision,
            TokenKind::Ident,
            TokenKind::FloatDivision,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_sign_after_operand_is_binary() {
    assert_eq!(
        kinds("a - 1 + (b)"),
        vec![
            TokenKind::Ident,
            TokenKind::Minus,
            TokenKind::IntegerConst,
            TokenKind::Plus,
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_sign_without_operand_is_unary() {
    assert_eq!(
        kinds("-1 - -2"),
        vec![
            TokenKind::Unary,
            TokenKind::IntegerConst,
            TokenKind::Minus,
            TokenKind::Unary,
            TokenKind::IntegerConst,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("x := (+y)"),
        vec![
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::LParen,
            TokenKind::Unary,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_bracketed_context_forces_unary() {
    let mut lexer = Lexer::new("x - 1");
    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    lexer.enter_bracketed_context();
    assert_eq!(lexer.next_token().kind, TokenKind::Unary);
    assert_eq!(lexer.next_token().kind, TokenKind::IntegerConst);
}

#[test]
fn test_comments_and_line_numbers() {
    let tokens = tokenize("{ a comment\n spanning lines }\nBEGIN\n  x := 1\nEND.");
    let lines: Vec<(TokenKind, usize)> = tokens.iter().map(|t| (t.kind, t.line)).collect();
    assert_eq!(
        lines,
        vec![
            (TokenKind::Begin, 3),
            (TokenKind::Ident, 4),
            (TokenKind::Assign, 4),
            (TokenKind::IntegerConst, 4),
            (TokenKind::End, 5),
            (TokenKind::Dot, 5),
            (TokenKind::Eof, 5),
        ]
    );
}

#[test]
fn test_invalid_chars() {
    let tokens = tokenize("x @ y");
    assert_eq!(tokens[1].kind, TokenKind::Unknown);
    assert_eq!(tokens[1].raw, "@");
    assert_eq!(tokens[2].kind, TokenKind::Ident);
}

#[test]
fn test_end_of_input_repeats() {
    let mut lexer = Lexer::new("  ");
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}
