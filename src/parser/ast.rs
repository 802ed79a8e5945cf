// AST (Abstract Syntax Tree) definitions for Monkey programs

use super::token::Token;
use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Binary (infix) operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    // Comparison
    Lt,
    Gt,
    Eq,
    NotEq,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::Eq => "==",
            BinOp::NotEq => "!=",
        };
        write!(f, "{}", op)
    }
}

/// Unary (prefix) operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Not, // !x
    Neg, // -x
}

impl fmt::Display for UnOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnOp::Not => write!(f, "!"),
            UnOp::Neg => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: UnOp,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: BinOp,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    /// The `(` that opened the argument list
    pub token: Token,
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

/// Nodes that yield a value
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
}

impl Expression {
    /// The token that began this expression
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(e) => &e.token,
            Expression::Integer(e) => &e.token,
            Expression::Boolean(e) => &e.token,
            Expression::Prefix(e) => &e.token,
            Expression::Infix(e) => &e.token,
            Expression::If(e) => &e.token,
            Expression::Function(e) => &e.token,
            Expression::Call(e) => &e.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }

    pub fn location(&self) -> SourceLocation {
        self.token().location
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// First token of the expression
    pub token: Token,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// The opening `{`
    pub token: Token,
    pub statements: Vec<Statement>,
}

/// Nodes that stand alone in a program or block body
///
/// Blocks are not statements of their own: they only appear as the body of
/// an `if` branch or a function literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Statement {
    /// The token that began this statement
    pub fn token(&self) -> &Token {
        match self {
            Statement::Let(s) => &s.token,
            Statement::Return(s) => &s.token,
            Statement::Expression(s) => &s.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }

    pub fn location(&self) -> SourceLocation {
        self.token().location
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>, // Source order
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    /// Literal of the first statement's token, or `""` for an empty program
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(Statement::token_literal)
            .unwrap_or("")
    }
}

// ===== Canonical source rendering =====

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::Integer(int) => write!(f, "{}", int.token.literal),
            Expression::Boolean(b) => write!(f, "{}", b.token.literal),
            Expression::Prefix(prefix) => write!(f, "({}{})", prefix.operator, prefix.right),
            Expression::Infix(infix) => {
                write!(f, "({} {} {})", infix.left, infix.operator, infix.right)
            }
            Expression::If(if_expr) => {
                write!(f, "if{} {}", if_expr.condition, if_expr.consequence)?;
                if let Some(alternative) = &if_expr.alternative {
                    write!(f, "else {}", alternative)?;
                }
                Ok(())
            }
            Expression::Function(func) => {
                write!(f, "{}(", func.token.literal)?;
                write_joined(f, &func.parameters)?;
                write!(f, ") {}", func.body)
            }
            Expression::Call(call) => {
                write!(f, "{}(", call.function)?;
                write_joined(f, &call.arguments)?;
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(s) => write!(f, "{} {} = {};", s.token.literal, s.name, s.value),
            Statement::Return(s) => write!(f, "{} {};", s.token.literal, s.value),
            Statement::Expression(s) => write!(f, "{}", s.expression),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}
