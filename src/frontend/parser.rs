use crate::ast::{Assign, BinOp, Block, Compound, NoOp, Node, Number, ProcedureDecl, Program, UnaryOp, VarDecl, Variable};
use crate::errors::{PascalError, PascalResult};
use crate::frontend::lexer::TokenStream;
use crate::frontend::token::{Token, TokenKind};
use log::{debug, info};
use std::mem;

/// How much of the token stream a parse must account for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Pick the rule from the leading token and stop when it is done.
    #[default]
    Loose,
    /// Parse a whole program and require end of input after the final `.`.
    WholeProgram,
}

pub struct Parser<L: TokenStream> {
    current_token: Token,
    lexer: L,
}

impl<L: TokenStream> Parser<L> {
    pub fn new(mut lexer: L) -> Self {
        let current_token = lexer.next_token();
        Self {
            current_token,
            lexer,
        }
    }

    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    fn mismatch(&self, expected: TokenKind) -> PascalError {
        let error = if self.at(TokenKind::Unknown) {
            PascalError::UnknownToken {
                text: self.current_token.raw.clone(),
                expected,
                line: self.current_token.line,
            }
        } else {
            PascalError::syntax_error(expected, &self.current_token)
        };
        debug!("{}", error);
        error
    }

    /// Consumes the lookahead if it has the expected kind and returns it.
    fn take(&mut self, expected: TokenKind) -> PascalResult<Token> {
        if self.at(TokenKind::Unknown) || !self.at(expected) {
            return Err(self.mismatch(expected));
        }
        let next = self.lexer.next_token();
        Ok(mem::replace(&mut self.current_token, next))
    }

    fn eat(&mut self, expected: TokenKind) -> PascalResult<()> {
        self.take(expected).map(|_| ())
    }

    /**
     * Parse a factor according to the grammar:
     * factor = sign factor | integer | real | "(" expr ")" | variable
     */
    fn factor(&mut self) -> PascalResult<Node> {
        match self.current_token.kind {
            kind @ (TokenKind::IntegerConst | TokenKind::RealConst) => Ok(Number::new(self.take(kind)?).into()),
            TokenKind::Unary => {
                let op = self.take(TokenKind::Unary)?;
                let operand = self.factor()?;
                Ok(UnaryOp::new(op, operand).into())
            }
            TokenKind::LParen => {
                self.lexer.enter_bracketed_context();
                self.eat(TokenKind::LParen)?;
                let node = self.expr()?;
                self.eat(TokenKind::RParen)?;
                Ok(node)
            }
            _ => Ok(self.variable()?.into()),
        }
    }

    /**
     * Parse a term according to the grammar:
     * term = factor { ( "*" | "DIV" | "/" ) factor }
     */
    fn term(&mut self) -> PascalResult<Node> {
        let mut node = self.factor()?;
        while matches!(
            self.current_token.kind,
            TokenKind::Multiply | TokenKind::IntegerDivision | TokenKind::FloatDivision
        ) {
            let op = self.take(self.current_token.kind)?;
            let rhs = self.factor()?;
            node = BinOp::new(node, op, rhs).into();
        }
        Ok(node)
    }

    /**
     * Parse an expression according to the grammar:
     * expr = term { ( "+" | "-" ) term }
     */
    fn expr(&mut self) -> PascalResult<Node> {
        let mut node = self.term()?;
        while matches!(self.current_token.kind, TokenKind::Plus | TokenKind::Minus) {
            let op = self.take(self.current_token.kind)?;
            let rhs = self.term()?;
            node = BinOp::new(node, op, rhs).into();
        }
        Ok(node)
    }

    fn variable(&mut self) -> PascalResult<Variable> {
        Ok(Variable::new(self.take(TokenKind::Ident)?))
    }

    fn compound_statement(&mut self) -> PascalResult<Compound> {
        debug!("compound statement at line {}", self.current_token.line);
        self.eat(TokenKind::Begin)?;
        let statements = self.statement_list()?;
        self.eat(TokenKind::End)?;
        Ok(Compound::new(statements))
    }

    /**
     * Parse a statement list according to the grammar:
     * statement_list = statement { ";" statement }
     *
     * An identifier right after a statement means a ';' was left out.
     */
    fn statement_list(&mut self) -> PascalResult<Vec<Node>> {
        let mut statements = vec![self.statement()?];
        while self.at(TokenKind::Semicolon) {
            self.eat(TokenKind::Semicolon)?;
            statements.extend(self.statement_list()?);
        }
        if self.at(TokenKind::Ident) {
            let error = PascalError::MissingSeparator {
                found: self.current_token.clone(),
            };
            debug!("{}", error);
            return Err(error);
        }
        Ok(statements)
    }

    fn statement(&mut self) -> PascalResult<Node> {
        match self.current_token.kind {
            TokenKind::Begin => Ok(self.compound_statement()?.into()),
            TokenKind::Ident => Ok(self.assignment_statement()?.into()),
            _ => Ok(NoOp.into()),
        }
    }

    fn assignment_statement(&mut self) -> PascalResult<Assign> {
        let target = self.variable()?;
        self.eat(TokenKind::Assign)?;
        let expr = self.expr()?;
        Ok(Assign::new(target, expr))
    }

    /**
     * Parse declarations according to the grammar:
     * declarations = [ "VAR" ( variable_declaration ";" ) { variable_declaration ";" } ]
     *                { "PROCEDURE" ident ";" block ";" }
     *
     * Yields a lone NoOp when there is nothing to declare.
     */
    fn declarations(&mut self) -> PascalResult<Vec<Node>> {
        debug!("declarations at line {}", self.current_token.line);
        let mut declarations = Vec::new();
        if self.at(TokenKind::Var) {
            self.eat(TokenKind::Var)?;
            loop {
                declarations.extend(self.variable_declaration()?.into_iter().map(Node::from));
                self.eat(TokenKind::Semicolon)?;
                if !self.at(TokenKind::Ident) {
                    break;
                }
            }
        }
        if self.at(TokenKind::Procedure) {
            declarations.extend(self.procedure()?.into_iter().map(Node::from));
        }
        if declarations.is_empty() {
            declarations.push(NoOp.into());
        }
        Ok(declarations)
    }

    /**
     * Parse a variable declaration according to the grammar:
     * variable_declaration = ident { "," ident } ":" type_name
     */
    fn variable_declaration(&mut self) -> PascalResult<Vec<VarDecl>> {
        let mut names = vec![self.take(TokenKind::Ident)?.name().to_string()];
        while self.at(TokenKind::Comma) {
            self.eat(TokenKind::Comma)?;
            names.push(self.take(TokenKind::Ident)?.name().to_string());
        }
        self.eat(TokenKind::Colon)?;
        let type_token = self.take(TokenKind::TypeName)?;
        let type_name = type_token.name();
        Ok(names.into_iter().map(|name| VarDecl::new(name, type_name)).collect())
    }

    fn procedure(&mut self) -> PascalResult<Vec<ProcedureDecl>> {
        let mut procedures = Vec::new();
        while self.at(TokenKind::Procedure) {
            self.eat(TokenKind::Procedure)?;
            let name = self.take(TokenKind::Ident)?.name().to_string();
            debug!("procedure {} at line {}", name, self.current_token.line);
            self.eat(TokenKind::Semicolon)?;
            let block = self.block()?;
            self.eat(TokenKind::Semicolon)?;
            procedures.push(ProcedureDecl::new(name, block));
        }
        Ok(procedures)
    }

    fn block(&mut self) -> PascalResult<Block> {
        let declarations = self.declarations()?;
        let compound = self.compound_statement()?;
        Ok(Block::new(declarations, compound))
    }

    /**
     * Parse a program according to the grammar:
     * program = "PROGRAM" variable ";" block "." | compound_statement "."
     *
     * A header-less program comes back as a block without declarations.
     */
    fn program(&mut self) -> PascalResult<Node> {
        let node = if self.at(TokenKind::Program) {
            self.eat(TokenKind::Program)?;
            let name = self.variable()?.name().to_string();
            debug!("program {}", name);
            self.eat(TokenKind::Semicolon)?;
            let block = self.block()?;
            Program::new(name, block).into()
        } else {
            let compound = self.compound_statement()?;
            Block::new(vec![NoOp.into()], compound).into()
        };
        self.eat(TokenKind::Dot)?;
        Ok(node)
    }

    /// Parses whatever the leading token implies: an expression, a program
    /// or a compound statement.
    pub fn parse(&mut self) -> PascalResult<Node> {
        info!("parsing from {:?} at line {}", self.current_token.kind, self.current_token.line);
        let node = match self.current_token.kind {
            TokenKind::IntegerConst | TokenKind::RealConst | TokenKind::LParen | TokenKind::Unary => {
                self.expr()?
            }
            TokenKind::Program => self.program()?,
            TokenKind::Begin => self.compound_statement()?.into(),
            _ => return Err(self.mismatch(TokenKind::Begin)),
        };
        info!("parsed {}", node.kind_name());
        Ok(node)
    }

    /// Parses a whole program; nothing but end of input may follow the final `.`.
    pub fn parse_program(&mut self) -> PascalResult<Node> {
        info!("parsing whole program");
        let node = self.program()?;
        if !self.at(TokenKind::Eof) {
            let error = PascalError::UnterminatedProgram {
                found: self.current_token.clone(),
            };
            debug!("{}", error);
            return Err(error);
        }
        info!("parsed {}", node.kind_name());
        Ok(node)
    }

    pub fn parse_with_mode(&mut self, mode: ParseMode) -> PascalResult<Node> {
        match mode {
            ParseMode::Loose => self.parse(),
            ParseMode::WholeProgram => self.parse_program(),
        }
    }
}
