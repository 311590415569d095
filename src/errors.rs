use crate::frontend::token::{Token, TokenKind};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PascalError {
    // File and I/O errors
    #[error("File read error: {0}")]
    FileReadError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    // Parsing errors
    #[error("Unknown char '{text}' at line {line} (expected {expected})")]
    UnknownToken {
        text: String,
        expected: TokenKind,
        line: usize,
    },
    #[error("Invalid syntax at line {}: expected {expected}, found '{found}'", .found.line)]
    SyntaxError { expected: TokenKind, found: Token },
    #[error("Missing ';' before '{found}' at line {}", .found.line)]
    MissingSeparator { found: Token },
    #[error("Code not ended at line {}: found '{found}' after the final '.'", .found.line)]
    UnterminatedProgram { found: Token },
}

impl PascalError {
    pub fn syntax_error(expected: TokenKind, found: &Token) -> Self {
        PascalError::SyntaxError {
            expected,
            found: found.clone(),
        }
    }

    /// Line of the offending token, when the error came from parsing.
    pub fn line(&self) -> Option<usize> {
        match self {
            PascalError::UnknownToken { line, .. } => Some(*line),
            PascalError::SyntaxError { found, .. }
            | PascalError::MissingSeparator { found }
            | PascalError::UnterminatedProgram { found } => Some(found.line),
            PascalError::FileReadError(_) | PascalError::IoError(_) => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            PascalError::FileReadError(_) => "FileReadError",
            PascalError::IoError(_) => "IoError",
            PascalError::UnknownToken { .. } => "UnknownTokenError",
            PascalError::SyntaxError { .. } => "SyntaxError",
            PascalError::MissingSeparator { .. } => "MissingSeparatorError",
            PascalError::UnterminatedProgram { .. } => "UnterminatedProgramError",
        }
    }
}

// Type alias for Result with PascalError
pub type PascalResult<T> = Result<T, PascalError>;
