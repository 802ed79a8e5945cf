// monkey: parser front end and inspector for the Monkey language

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser as _, Subcommand, ValueEnum};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use monkey::parser::dump;
use monkey::parser::lexer::Lexer;
use monkey::parser::parse::{Parser, ParserConfig, Recovery};
use monkey::repl::{self, ReplConfig, ReplMode};
use monkey::ui::App;

#[derive(clap::Parser, Debug)]
#[command(name = "monkey", version, about = "Parse and inspect Monkey programs")]
struct Cli {
    /// How to resume after a statement fails to parse
    #[arg(long, value_enum, global = true, env = "MONKEY_RECOVERY", default_value_t = RecoveryArg::Statement)]
    recovery: RecoveryArg,

    /// Suppress progress messages on stderr
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive shell (the default)
    Repl {
        #[arg(long, value_enum, default_value_t = ModeArg::Tokens)]
        mode: ModeArg,

        /// Disable ANSI colours
        #[arg(long)]
        no_color: bool,
    },
    /// Parse a file and report its diagnostics
    Check {
        file: PathBuf,

        /// Print the syntax tree of every statement
        #[arg(long)]
        tree: bool,
    },
    /// Browse a parsed file in the terminal UI
    Inspect { file: PathBuf },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum RecoveryArg {
    Statement,
    Token,
}

impl From<RecoveryArg> for Recovery {
    fn from(arg: RecoveryArg) -> Self {
        match arg {
            RecoveryArg::Statement => Recovery::Statement,
            RecoveryArg::Token => Recovery::Token,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ModeArg {
    Tokens,
    Parse,
}

impl From<ModeArg> for ReplMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Tokens => ReplMode::Tokens,
            ModeArg::Parse => ReplMode::Parse,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("file '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("could not read '{}': {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },

    #[error("{0} parse error(s)")]
    Invalid(usize),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Status lines on stderr, silenced by `--quiet`
struct Log {
    quiet: bool,
}

impl Log {
    fn status(&self, message: impl AsRef<str>) {
        if !self.quiet {
            eprintln!("{}", message.as_ref());
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let log = Log { quiet: cli.quiet };
    let config = ParserConfig {
        recovery: cli.recovery.into(),
    };

    match cli.command.unwrap_or(Command::Repl {
        mode: ModeArg::Tokens,
        no_color: false,
    }) {
        Command::Repl { mode, no_color } => {
            let user = std::env::var("USER").unwrap_or_else(|_| "there".to_string());
            println!("Hello {}! This is the Monkey programming language!", user);
            println!("Feel free to type in commands");

            let repl_config = ReplConfig {
                mode: mode.into(),
                color: !no_color,
                parser: config,
            };
            let stdin = io::stdin();
            repl::start(stdin.lock(), io::stdout(), &repl_config)?;
            Ok(())
        }
        Command::Check { file, tree } => check(&file, tree, config, &log),
        Command::Inspect { file } => inspect(&file, config, &log),
    }
}

fn read_source(path: &Path) -> Result<String, CliError> {
    if !path.exists() {
        return Err(CliError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn check(path: &Path, tree: bool, config: ParserConfig, log: &Log) -> Result<(), CliError> {
    let source = read_source(path)?;

    log.status(format!("Parsing {}...", path.display()));
    let mut parser = Parser::with_config(Lexer::new(&source), config);
    let program = parser.parse_program();
    let diagnostics = parser.into_diagnostics();
    log.status(format!(
        "Parsed {} statements with {} diagnostics.",
        program.statements.len(),
        diagnostics.len()
    ));

    for err in &diagnostics {
        println!("{}:{}: {}", path.display(), err.location(), err);
    }

    if tree {
        for line in dump::program_tree(&program) {
            println!("{}", line);
        }
    } else if diagnostics.is_empty() {
        println!("{}", program);
    }

    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(CliError::Invalid(diagnostics.len()))
    }
}

fn inspect(path: &Path, config: ParserConfig, log: &Log) -> Result<(), CliError> {
    let source = read_source(path)?;

    log.status(format!("Parsing {}...", path.display()));
    let mut parser = Parser::with_config(Lexer::new(&source), config);
    let program = parser.parse_program();
    let diagnostics = parser.into_diagnostics();
    log.status(format!(
        "Parsed {} statements with {} diagnostics.",
        program.statements.len(),
        diagnostics.len()
    ));

    // Set up terminal; `_restore` undoes it on every way out, including a
    // failure halfway through setup
    enable_raw_mode()?;
    let _restore = Restore(|| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    });
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, program, diagnostics);
    app.run(&mut terminal).map_err(CliError::from)
}

/// Runs its closure when dropped.
struct Restore<F: FnMut()>(F);

impl<F: FnMut()> Drop for Restore<F> {
    fn drop(&mut self) {
        (self.0)();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn setup_then_fail(restores: &Cell<usize>) -> Result<(), CliError> {
        let _restore = Restore(|| restores.set(restores.get() + 1));
        let setup: io::Result<()> = Err(io::Error::other("no terminal"));
        setup?;
        Ok(())
    }

    #[test]
    fn test_restore_runs_once_when_setup_fails() {
        let restores = Cell::new(0);
        assert!(matches!(setup_then_fail(&restores), Err(CliError::Io(_))));
        assert_eq!(restores.get(), 1);
    }

    #[test]
    fn test_restore_runs_on_success() {
        let restores = Cell::new(0);
        {
            let _restore = Restore(|| restores.set(restores.get() + 1));
            assert_eq!(restores.get(), 0);
        }
        assert_eq!(restores.get(), 1);
    }
}
