//! Line-oriented interactive shell
//!
//! Reads one line at a time and either prints the tokens it scans to, or
//! parses it and prints the program in canonical form.  Input and output are
//! plain `BufRead`/`Write` handles so the loop runs the same against a
//! terminal or an in-memory buffer.

use crate::parser::lexer::Lexer;
use crate::parser::parse::{Parser, ParserConfig};
use crate::parser::token::{TokenKind, TokenSource};
use crossterm::style::{Color, Stylize};
use std::fmt::Display;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = ">> ";

/// What the shell does with each line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplMode {
    /// Print every token, one per line
    #[default]
    Tokens,
    /// Parse the line and print the program or its errors
    Parse,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplConfig {
    pub mode: ReplMode,
    /// Emit ANSI colours
    pub color: bool,
    pub parser: ParserConfig,
}

/// Run the read loop until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W, config: &ReplConfig) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match config.mode {
            ReplMode::Tokens => print_tokens(&mut output, &line, config)?,
            ReplMode::Parse => print_program(&mut output, &line, config)?,
        }
    }
}

fn print_tokens<W: Write>(output: &mut W, line: &str, config: &ReplConfig) -> io::Result<()> {
    let mut lexer = Lexer::new(line);
    loop {
        let token = lexer.next_token();
        if token.is(TokenKind::Eof) {
            return Ok(());
        }
        let color = if token.is(TokenKind::Illegal) {
            Color::Red
        } else {
            Color::Cyan
        };
        writeln!(
            output,
            "{} {:?}",
            paint(token.kind, color, config.color),
            token.literal
        )?;
    }
}

fn print_program<W: Write>(output: &mut W, line: &str, config: &ReplConfig) -> io::Result<()> {
    let mut parser = Parser::with_config(Lexer::new(line), config.parser);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        writeln!(output, "{}", paint("parser errors:", Color::Red, config.color))?;
        for err in parser.errors() {
            writeln!(output, "\t{}", err)?;
        }
        return Ok(());
    }

    writeln!(output, "{}", paint(&program, Color::Green, config.color))
}

fn paint(text: impl Display, color: Color, enabled: bool) -> String {
    if enabled {
        text.to_string().with(color).to_string()
    } else {
        text.to_string()
    }
}
