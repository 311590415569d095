use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod config;
pub mod errors;
pub mod frontend;
pub mod semantic;

pub const VERSION: &str = "0.1.0";

use crate::ast::Node;
use crate::config::source::SOURCE_EXTENSIONS;
use crate::errors::{PascalError, PascalResult};
use crate::frontend::{Lexer, ParseMode, Parser};

pub fn read(filename: &Path) -> PascalResult<String> {
    let accepted = filename
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext));
    if !accepted {
        return Err(PascalError::FileReadError(format!(
            "File must have one of the extensions {:?}",
            SOURCE_EXTENSIONS
        )));
    }
    // Open the path in read-only mode, returns `io::Result<File>`
    let mut file = File::open(filename)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Lexes and parses `source` in one go.
pub fn parse_source(source: &str, mode: ParseMode) -> PascalResult<Node> {
    let mut parser = Parser::new(Lexer::new(source));
    parser.parse_with_mode(mode)
}
