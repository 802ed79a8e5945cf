//! Operator precedence and operator mapping tables

use monkey::parser::ast::*;
use monkey::parser::parse::parse;
use rstest::rstest;

fn single_expression(source: &str) -> Expression {
    let (program, diagnostics) = parse(source);
    assert!(diagnostics.is_empty(), "{:?}", diagnostics.messages());
    assert_eq!(program.statements.len(), 1, "{}", program);
    match program.statements.into_iter().next() {
        Some(Statement::Expression(stmt)) => stmt.expression,
        other => panic!("Expected expression statement, got {:?}", other),
    }
}

#[rstest]
#[case("-a * b", "((-a) * b)")]
#[case("!-a", "(!(-a))")]
#[case("a + b + c", "((a + b) + c)")]
#[case("a + b - c", "((a + b) - c)")]
#[case("a * b * c", "((a * b) * c)")]
#[case("a * b / c", "((a * b) / c)")]
#[case("a + b / c", "(a + (b / c))")]
#[case("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)")]
#[case("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)")]
#[case("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))")]
#[case("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))")]
#[case("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))")]
#[case("3 > 5 == false", "((3 > 5) == false)")]
#[case("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)")]
#[case("(5 + 5) * 2", "((5 + 5) * 2)")]
#[case("2 / (5 + 5)", "(2 / (5 + 5))")]
#[case("-(5 + 5)", "(-(5 + 5))")]
#[case("!(true == true)", "(!(true == true))")]
#[case("a + add(b * c) + d", "((a + add((b * c))) + d)")]
#[case(
    "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
    "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"
)]
#[case("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))")]
fn test_operator_precedence(#[case] input: &str, #[case] expected: &str) {
    let (program, diagnostics) = parse(input);
    assert!(diagnostics.is_empty(), "{:?}", diagnostics.messages());
    assert_eq!(program.to_string(), expected);
}

#[rstest]
#[case("5 + 5;", BinOp::Add)]
#[case("5 - 5;", BinOp::Sub)]
#[case("5 * 5;", BinOp::Mul)]
#[case("5 / 5;", BinOp::Div)]
#[case("5 > 5;", BinOp::Gt)]
#[case("5 < 5;", BinOp::Lt)]
#[case("5 == 5;", BinOp::Eq)]
#[case("5 != 5;", BinOp::NotEq)]
fn test_infix_operators(#[case] input: &str, #[case] expected: BinOp) {
    match single_expression(input) {
        Expression::Infix(InfixExpression {
            left,
            operator,
            right,
            token,
        }) => {
            assert_eq!(operator, expected);
            assert_eq!(token.literal, expected.to_string());
            assert!(matches!(*left, Expression::Integer(IntegerLiteral { value: 5, .. })));
            assert!(matches!(*right, Expression::Integer(IntegerLiteral { value: 5, .. })));
        }
        other => panic!("Expected infix expression, got {:?}", other),
    }
}

#[rstest]
#[case("!5;", UnOp::Not, "5")]
#[case("-15;", UnOp::Neg, "15")]
#[case("!true;", UnOp::Not, "true")]
#[case("!false;", UnOp::Not, "false")]
fn test_prefix_operators(#[case] input: &str, #[case] expected: UnOp, #[case] operand: &str) {
    match single_expression(input) {
        Expression::Prefix(PrefixExpression {
            operator, right, ..
        }) => {
            assert_eq!(operator, expected);
            assert_eq!(right.to_string(), operand);
        }
        other => panic!("Expected prefix expression, got {:?}", other),
    }
}

#[rstest]
#[case("fn() {};", &[])]
#[case("fn(x) {};", &["x"])]
#[case("fn(x, y, z) {};", &["x", "y", "z"])]
fn test_function_parameters(#[case] input: &str, #[case] expected: &[&str]) {
    match single_expression(input) {
        Expression::Function(FunctionLiteral { parameters, .. }) => {
            let names: Vec<&str> = parameters.iter().map(|p| p.value.as_str()).collect();
            assert_eq!(names, expected);
        }
        other => panic!("Expected function literal, got {:?}", other),
    }
}

#[rstest]
#[case("if (x < y) { x }", false)]
#[case("if (x < y) { x } else { y }", true)]
fn test_if_expressions(#[case] input: &str, #[case] has_else: bool) {
    match single_expression(input) {
        Expression::If(IfExpression {
            condition,
            consequence,
            alternative,
            ..
        }) => {
            assert_eq!(condition.to_string(), "(x < y)");
            assert_eq!(consequence.to_string(), "x");
            assert_eq!(alternative.is_some(), has_else);
        }
        other => panic!("Expected if expression, got {:?}", other),
    }
}

#[rstest]
#[case("let x = ;", "no prefix parse function for ; found")]
#[case("let x = (1 + 2;", "expected next token to be ), got ; instead")]
#[case("fn(x y) { x }", "expected next token to be ), got IDENT instead")]
#[case("fn(1) { 1 }", "expected next token to be IDENT, got INT instead")]
#[case("if x { 1 }", "expected next token to be (, got IDENT instead")]
#[case("add(1, 2", "expected next token to be ), got EOF instead")]
#[case("{ 1 }", "no prefix parse function for { found")]
fn test_error_messages(#[case] input: &str, #[case] expected: &str) {
    let (program, diagnostics) = parse(input);
    assert!(program.statements.is_empty(), "{}", program);
    assert_eq!(diagnostics.messages(), vec![expected.to_string()]);
}
