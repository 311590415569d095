// Source file constants
pub mod source {
    pub const SOURCE_EXTENSIONS: &[&str] = &["pas", "pp"];
}

// Lexer constants
pub mod lexer {
    use crate::frontend::token::TokenKind;
    use lazy_static::lazy_static;
    use std::collections::HashMap;

    lazy_static! {
        // Keys are upper case; lookups upper-case the word first.
        pub static ref RESERVED_KEYWORDS: HashMap<&'static str, TokenKind> = {
            let mut map = HashMap::new();
            map.insert("PROGRAM", TokenKind::Program);
            map.insert("VAR", TokenKind::Var);
            map.insert("PROCEDURE", TokenKind::Procedure);
            map.insert("BEGIN", TokenKind::Begin);
            map.insert("END", TokenKind::End);
            map.insert("DIV", TokenKind::IntegerDivision);
            map.insert("INTEGER", TokenKind::TypeName);
            map.insert("REAL", TokenKind::TypeName);
            map
        };
    }

    pub fn lookup_keyword(word: &str) -> Option<TokenKind> {
        RESERVED_KEYWORDS.get(word.to_ascii_uppercase().as_str()).copied()
    }
}

// AST printer constants
pub mod printer {
    pub const LIST_SEPARATOR: &str = ", ";
    pub const EMPTY_STATEMENT: &str = "NoOp";
}
