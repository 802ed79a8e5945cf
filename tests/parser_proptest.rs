//! Property-based tests for the parser
//!
//! These tests check that parsing is total and well behaved on input the
//! grammar never intended:
//! - Any token sequence is consumed in a bounded number of pulls
//! - Fresh sessions over the same tokens agree exactly
//! - Arbitrary text never panics and never yields more diagnostics than tokens
//! - Well-formed `let` statements bind exactly the name that was written
//! - A failed statement inside a block costs one diagnostic and nothing else
//! - Input nested past the limit yields one diagnostic instead of a crash

use monkey::parser::ast::Statement;
use monkey::parser::lexer::Lexer;
use monkey::parser::parse::{parse, Parser, ParserConfig, Recovery, MAX_NESTING};
use monkey::parser::token::{TokenKind, TokenStream};
use proptest::prelude::*;

/// Generate arbitrary token kind sequences, grammatical or not
fn token_kinds_strategy() -> impl Strategy<Value = Vec<TokenKind>> {
    prop::collection::vec(prop::sample::select(TokenKind::ALL.to_vec()), 0..80)
}

fn recovery_strategy() -> impl Strategy<Value = Recovery> {
    prop_oneof![Just(Recovery::Statement), Just(Recovery::Token)]
}

/// Text drawn mostly from the language's own alphabet
fn monkey_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9 =+!*/<>,;(){}-]{0,120}",
        "(let|fn|if|else|return|true|false|x|1|=|;|\\(|\\)|\\{|\\}|,| ){0,40}",
        "\\PC{0,80}",
    ]
}

fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,8}".prop_filter("keywords are not identifiers", |s| {
        TokenKind::keyword(s).is_none()
    })
}

const GOOD_STATEMENTS: &[&str] = &["let a = 1;", "return a * 2;", "add(1, 2);", "x"];
const BAD_STATEMENTS: &[&str] = &["let = 1;", "return );", "x + ;", "fn(x y) { x };", "let 5;"];

/// Where a statement sits in the program
#[derive(Debug, Clone, Copy)]
enum Placement {
    TopLevel,
    FunctionBody,
    IfBranch,
    NestedFunction,
}

impl Placement {
    fn wrap(self, statement: &str) -> String {
        match self {
            Placement::TopLevel => statement.to_string(),
            Placement::FunctionBody => format!("let f = fn() {{ {} x }};", statement),
            Placement::IfBranch => format!("if (c) {{ {} }} else {{ 1 }}", statement),
            Placement::NestedFunction => {
                format!("if (c) {{ let g = fn() {{ {} }}; g }}", statement)
            }
        }
    }
}

/// One statement, good or bad, in some placement
fn item_strategy() -> impl Strategy<Value = (bool, String)> {
    let placement = prop_oneof![
        Just(Placement::TopLevel),
        Just(Placement::FunctionBody),
        Just(Placement::IfBranch),
        Just(Placement::NestedFunction),
    ];
    (any::<bool>(), 0usize..5, placement).prop_map(|(good, index, placement)| {
        let statement = if good {
            GOOD_STATEMENTS[index % GOOD_STATEMENTS.len()]
        } else {
            BAD_STATEMENTS[index]
        };
        (good, placement.wrap(statement))
    })
}

/// Nested input of a given shape and depth
fn nested_source(shape: u8, depth: usize) -> String {
    match shape {
        0 => format!("{}1", "-".repeat(depth)),
        1 => format!("{}1{}", "(".repeat(depth), ")".repeat(depth)),
        2 => format!("{}x{}", "if (x) { ".repeat(depth), " }".repeat(depth)),
        _ => format!("{}1{}", "!(".repeat(depth), ")".repeat(depth)),
    }
}

proptest! {
    #[test]
    fn parser_terminates_within_pull_bound(
        kinds in token_kinds_strategy(),
        recovery in recovery_strategy()
    ) {
        let mut parser = Parser::with_config(TokenStream::from_kinds(&kinds), ParserConfig { recovery });
        parser.parse_program();

        // Two priming pulls, one per token, one past the end
        prop_assert!(parser.source().pulls() <= kinds.len() + 3);
    }

    #[test]
    fn fresh_sessions_agree(kinds in token_kinds_strategy(), recovery in recovery_strategy()) {
        let config = ParserConfig { recovery };

        let mut first = Parser::with_config(TokenStream::from_kinds(&kinds), config);
        let first_program = first.parse_program();

        let mut second = Parser::with_config(TokenStream::from_kinds(&kinds), config);
        let second_program = second.parse_program();

        prop_assert_eq!(first_program, second_program);
        prop_assert_eq!(first.errors(), second.errors());
    }

    #[test]
    fn arbitrary_text_never_panics(source in monkey_text_strategy(), recovery in recovery_strategy()) {
        let token_count = Lexer::new(&source).tokenize().len() - 1;

        let mut parser = Parser::with_config(Lexer::new(&source), ParserConfig { recovery });
        let program = parser.parse_program();

        // Every failed statement consumed at least one token
        prop_assert!(parser.errors().len() + program.statements.len() <= token_count);
    }

    #[test]
    fn well_formed_let_binds_its_name(name in identifier_strategy(), value in 0u32..1_000_000) {
        let source = format!("let {} = {};", name, value);
        let mut parser = Parser::from_source(&source);
        let program = parser.parse_program();

        prop_assert!(parser.errors().is_empty());
        prop_assert_eq!(program.statements.len(), 1);
        match &program.statements[0] {
            Statement::Let(stmt) => {
                prop_assert_eq!(&stmt.name.value, &name);
                prop_assert_eq!(stmt.token.literal.as_str(), "let");
                prop_assert_eq!(stmt.value.to_string(), value.to_string());
            }
            other => prop_assert!(false, "Expected let statement, got {:?}", other),
        }
    }

    #[test]
    fn well_formed_return_keeps_its_token(value in 0u32..1_000_000, semicolon in any::<bool>()) {
        let source = format!("return {}{}", value, if semicolon { ";" } else { "" });
        let (program, diagnostics) = monkey::parser::parse::parse(&source);

        prop_assert!(diagnostics.is_empty());
        prop_assert_eq!(program.token_literal(), "return");
    }

    #[test]
    fn failed_statements_in_blocks_cost_one_diagnostic(
        items in prop::collection::vec(item_strategy(), 0..12)
    ) {
        let source: Vec<&str> = items.iter().map(|(_, text)| text.as_str()).collect();
        let (program, diagnostics) = parse(&source.join("\n"));

        let good = items.iter().filter(|(good, _)| *good).count();
        prop_assert_eq!(diagnostics.len(), items.len() - good, "{:?}", diagnostics.messages());
        prop_assert_eq!(program.statements.len(), good, "{}", program);
    }

    #[test]
    fn deep_nesting_is_at_most_one_diagnostic(shape in 0u8..4, depth in 0usize..(MAX_NESTING * 3)) {
        let (program, diagnostics) = parse(&nested_source(shape, depth));

        prop_assert!(diagnostics.len() <= 1);
        prop_assert_eq!(program.statements.len() + diagnostics.len(), 1);
        // `if` and `!(` levels cost two each
        if depth < MAX_NESTING / 2 {
            prop_assert!(diagnostics.is_empty(), "{:?}", diagnostics.messages());
        }
        if depth > MAX_NESTING {
            prop_assert_eq!(diagnostics.len(), 1);
        }
    }
}
