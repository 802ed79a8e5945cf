//! Main TUI application state and logic

use crate::parser::ast::{Program, Statement};
use crate::parser::diagnostics::Diagnostics;
use crate::parser::dump;
use crate::ui::panes::{
    self, SourceRenderData, SourceScrollState, StatementsRenderData, StatusRenderData,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Statements,
    Tree,
    Diagnostics,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> statements -> tree -> diagnostics)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Statements,
            FocusedPane::Statements => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Diagnostics,
            FocusedPane::Diagnostics => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Diagnostics,
            FocusedPane::Statements => FocusedPane::Source,
            FocusedPane::Tree => FocusedPane::Statements,
            FocusedPane::Diagnostics => FocusedPane::Tree,
        }
    }
}

/// The inspector state
pub struct App {
    /// The source code that was parsed
    pub source_code: String,

    pub program: Program,
    pub diagnostics: Diagnostics,

    /// Index of the selected top-level statement
    pub selected: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: SourceScrollState,
    pub statements_scroll: usize,
    pub tree_scroll: usize,
    pub diagnostics_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(source_code: String, program: Program, diagnostics: Diagnostics) -> Self {
        let status_message = if diagnostics.is_empty() {
            String::from("Parsed cleanly")
        } else {
            format!("{} parse error(s)", diagnostics.len())
        };

        App {
            source_code,
            program,
            diagnostics,
            selected: 0,
            focused_pane: FocusedPane::Statements,
            source_scroll: SourceScrollState::default(),
            statements_scroll: 0,
            tree_scroll: 0,
            diagnostics_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    pub fn selected_statement(&self) -> Option<&Statement> {
        self.program.statements.get(self.selected)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Create layout: 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        // Left column: Source (top) | Diagnostics (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: Statements (top) | Tree (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(columns[1]);

        let current_line = self
            .selected_statement()
            .map(|s| s.location().line)
            .unwrap_or(0);
        let error_lines: Vec<usize> = self.diagnostics.iter().map(|e| e.location().line).collect();
        let tree_lines = self
            .selected_statement()
            .map(dump::statement_tree)
            .unwrap_or_default();

        panes::render_source_pane(
            frame,
            left_rows[0],
            SourceRenderData {
                source_code: &self.source_code,
                current_line,
                error_lines: &error_lines,
            },
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_diagnostics_pane(
            frame,
            left_rows[1],
            &self.diagnostics,
            self.focused_pane == FocusedPane::Diagnostics,
            &mut self.diagnostics_scroll,
        );

        panes::render_statements_pane(
            frame,
            right_rows[0],
            StatementsRenderData {
                statements: &self.program.statements,
                selected: self.selected,
            },
            self.focused_pane == FocusedPane::Statements,
            &mut self.statements_scroll,
        );

        panes::render_tree_pane(
            frame,
            right_rows[1],
            &tree_lines,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        panes::render_status_bar(
            frame,
            status_area,
            StatusRenderData {
                message: &self.status_message,
                selected: self.selected,
                total_statements: self.program.statements.len(),
                error_count: self.diagnostics.len(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys move forward N statements directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).map_or(1, |d| d as usize);
                self.select(self.selected.saturating_add(n));
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => self.select(self.selected.saturating_sub(1)),
            KeyCode::Right => self.select(self.selected.saturating_add(1)),
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Statements => self.select(self.selected.saturating_sub(1)),
                FocusedPane::Tree => {
                    self.tree_scroll = self.tree_scroll.saturating_sub(1);
                }
                FocusedPane::Diagnostics => {
                    self.diagnostics_scroll = self.diagnostics_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling down makes the current line move up visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Statements => self.select(self.selected.saturating_add(1)),
                FocusedPane::Tree => {
                    self.tree_scroll = self.tree_scroll.saturating_add(1);
                }
                FocusedPane::Diagnostics => {
                    self.diagnostics_scroll = self.diagnostics_scroll.saturating_add(1);
                }
            },
            KeyCode::Home | KeyCode::Backspace => self.select(0),
            KeyCode::End | KeyCode::Enter => self.select(usize::MAX),
            _ => {}
        }
    }

    /// Select statement `index`, clamped to the program
    fn select(&mut self, index: usize) {
        let total = self.program.statements.len();
        if total == 0 {
            self.status_message = "No statements to select".to_string();
            return;
        }

        let index = index.min(total - 1);
        if index != self.selected {
            self.tree_scroll = 0;
        }
        self.selected = index;

        if let Some(statement) = self.selected_statement() {
            self.status_message = format!("{} at {}", kind_name(statement), statement.location());
        }
    }
}

fn kind_name(statement: &Statement) -> &'static str {
    match statement {
        Statement::Let(_) => "let statement",
        Statement::Return(_) => "return statement",
        Statement::Expression(_) => "expression statement",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::parse;
    use ratatui::backend::TestBackend;

    fn app_for(source: &str) -> App {
        let (program, diagnostics) = parse(source);
        App::new(source.to_string(), program, diagnostics)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::from(code));
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut app = app_for("let a = 1;\nlet b = 2;\nreturn a + b;");

        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected, 0);

        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.selected, 2);
        assert_eq!(app.status_message, "return statement at 3:1");

        press(&mut app, KeyCode::Home);
        assert_eq!(app.selected, 0);

        press(&mut app, KeyCode::End);
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_statements_pane_moves_selection() {
        let mut app = app_for("a; b; c;");
        assert_eq!(app.focused_pane, FocusedPane::Statements);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 2);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tree);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 2);
        assert_eq!(app.tree_scroll, 1);
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut pane = FocusedPane::Source;
        for _ in 0..4 {
            pane = pane.next();
        }
        assert_eq!(pane, FocusedPane::Source);
        assert_eq!(FocusedPane::Source.prev(), FocusedPane::Diagnostics);
    }

    #[test]
    fn test_empty_program() {
        let mut app = app_for("");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected, 0);
        assert!(app.selected_statement().is_none());
        assert_eq!(app.status_message, "No statements to select");
    }

    #[test]
    fn test_quit() {
        let mut app = app_for("x");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_smoke() {
        let mut app = app_for("let add = fn(a, b) { a + b };\nadd(1, 2);\nlet = 3;");
        assert_eq!(app.diagnostics.len(), 1);

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        assert!(app.source_scroll.target_line_row.is_some());
    }
}
