//! Indented tree rendering of AST nodes
//!
//! One line per node, two spaces of indentation per level of depth. Used by
//! `monkey check --tree` and by the inspector's tree pane.

use crate::parser::ast::*;

const INDENT: &str = "  ";

/// Render every statement of a program, one tree after another
pub fn program_tree(program: &Program) -> Vec<String> {
    let mut lines = Vec::new();
    for statement in &program.statements {
        write_statement(&mut lines, statement, 0);
    }
    lines
}

/// Render one statement and everything below it
pub fn statement_tree(statement: &Statement) -> Vec<String> {
    let mut lines = Vec::new();
    write_statement(&mut lines, statement, 0);
    lines
}

fn push_line(lines: &mut Vec<String>, depth: usize, text: impl AsRef<str>) {
    lines.push(format!("{}{}", INDENT.repeat(depth), text.as_ref()));
}

fn write_statement(lines: &mut Vec<String>, statement: &Statement, depth: usize) {
    match statement {
        Statement::Let(stmt) => {
            push_line(lines, depth, format!("LetStatement {}", stmt.name));
            write_expression(lines, &stmt.value, depth + 1);
        }
        Statement::Return(stmt) => {
            push_line(lines, depth, "ReturnStatement");
            write_expression(lines, &stmt.value, depth + 1);
        }
        Statement::Expression(stmt) => {
            push_line(lines, depth, "ExpressionStatement");
            write_expression(lines, &stmt.expression, depth + 1);
        }
    }
}

fn write_block(lines: &mut Vec<String>, label: &str, block: &BlockStatement, depth: usize) {
    push_line(lines, depth, label);
    for statement in &block.statements {
        write_statement(lines, statement, depth + 1);
    }
}

fn write_expression(lines: &mut Vec<String>, expr: &Expression, depth: usize) {
    match expr {
        Expression::Identifier(ident) => push_line(lines, depth, format!("Identifier {}", ident)),
        Expression::Integer(int) => push_line(lines, depth, format!("Integer {}", int.value)),
        Expression::Boolean(b) => push_line(lines, depth, format!("Boolean {}", b.value)),
        Expression::Prefix(prefix) => {
            push_line(lines, depth, format!("Prefix {}", prefix.operator));
            write_expression(lines, &prefix.right, depth + 1);
        }
        Expression::Infix(infix) => {
            push_line(lines, depth, format!("Infix {}", infix.operator));
            write_expression(lines, &infix.left, depth + 1);
            write_expression(lines, &infix.right, depth + 1);
        }
        Expression::If(if_expr) => {
            push_line(lines, depth, "If");
            write_expression(lines, &if_expr.condition, depth + 1);
            write_block(lines, "Then", &if_expr.consequence, depth + 1);
            if let Some(alternative) = &if_expr.alternative {
                write_block(lines, "Else", alternative, depth + 1);
            }
        }
        Expression::Function(func) => {
            let params: Vec<&str> = func.parameters.iter().map(|p| p.value.as_str()).collect();
            push_line(lines, depth, format!("Function ({})", params.join(", ")));
            write_block(lines, "Body", &func.body, depth + 1);
        }
        Expression::Call(call) => {
            push_line(lines, depth, format!("Call {}", call.arguments.len()));
            write_expression(lines, &call.function, depth + 1);
            for arg in &call.arguments {
                write_expression(lines, arg, depth + 1);
            }
        }
    }
}
