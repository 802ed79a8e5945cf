//! Source code pane rendering with syntax highlighting
//!
//! This module renders the source code pane, which displays the Monkey program
//! being inspected with basic syntax highlighting and parse indicators.
//!
//! # Features
//!
//! - Syntax highlighting for Monkey keywords, literals and called names
//! - The line where the selected statement starts, highlighted
//! - Lines that produced diagnostics, marked in the gutter
//! - Scroll state management for navigating large files
//!
//! # Rendering
//!
//! The pane uses a simple character-by-character tokenizer to apply syntax
//! highlighting styles without requiring a full lexer.

use super::{pane_block, visible_height};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Simple syntax highlighting for one line of Monkey code
fn highlight_source_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    for c in line.chars() {
        if c.is_alphanumeric() || c == '_' {
            current_word.push(c);
            continue;
        }

        if !current_word.is_empty() {
            let style = get_keyword_style(&current_word, c == '(');
            spans.push(Span::styled(std::mem::take(&mut current_word), style));
        }

        let style = match c {
            '{' | '}' | '(' | ')' => Style::default().fg(DEFAULT_THEME.primary), // Brackets
            '+' | '-' | '*' | '/' | '=' | '!' | '<' | '>' | ';' | ',' => {
                Style::default().fg(DEFAULT_THEME.fg)
            }
            c if c.is_whitespace() => Style::default(),
            // Anything else is an illegal character
            _ => Style::default().fg(DEFAULT_THEME.error),
        };
        spans.push(Span::styled(c.to_string(), style));
    }

    if !current_word.is_empty() {
        let style = get_keyword_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn get_keyword_style(word: &str, is_call: bool) -> Style {
    match word {
        "let" | "fn" | "return" | "if" | "else" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "true" | "false" => Style::default().fg(DEFAULT_THEME.number),
        _ if word.starts_with(|c: char| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    /// Visual row the current line is pinned to (None = not initialized yet)
    pub target_line_row: Option<usize>,
}

/// Data needed to render the source pane
pub struct SourceRenderData<'a> {
    pub source_code: &'a str,
    /// 1-based line of the selected statement, 0 when nothing is selected
    pub current_line: usize,
    /// 1-based lines with at least one diagnostic
    pub error_lines: &'a [usize],
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    data: SourceRenderData,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let block = pane_block(" Source Code ", is_focused);

    let lines: Vec<&str> = data.source_code.lines().collect();
    let total_lines = lines.len();
    let visible_height = visible_height(area);

    // Get the target row, clamping to stay within visible area
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    // Keep the current line at the target visual row
    if data.current_line > 0 && data.current_line <= total_lines {
        let target_line_idx = data.current_line - 1;
        scroll_state.offset = target_line_idx.saturating_sub(target_row);

        if total_lines > visible_height {
            let max_scroll = total_lines - visible_height;
            scroll_state.offset = scroll_state.offset.min(max_scroll);
        } else {
            scroll_state.offset = 0;
        }
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = line_num == data.current_line;
            let is_error = data.error_lines.contains(&line_num);

            let marker = if is_error { '✗' } else { ' ' };
            let line_num_str = format!("{:4}{} ", line_num, marker);

            let num_style = if is_error {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment) // Line numbers
            };

            let mut content_line = highlight_source_code(line);
            if is_current {
                let background = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content_line.spans {
                    span.style = span.style.patch(background);
                }
            }

            let mut final_spans = vec![Span::styled(line_num_str, num_style)];
            final_spans.extend(content_line.spans);

            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_splits_words_and_symbols() {
        let line = highlight_source_code("let add = fn(a) { a };");
        let text: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(
            text,
            vec![
                "let", " ", "add", " ", "=", " ", "fn", "(", "a", ")", " ", "{", " ", "a", " ",
                "}", ";"
            ]
        );
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.keyword));
        assert_eq!(line.spans[6].style.fg, Some(DEFAULT_THEME.keyword));
    }

    #[test]
    fn test_keyword_styles() {
        assert_eq!(get_keyword_style("42", false).fg, Some(DEFAULT_THEME.number));
        assert_eq!(get_keyword_style("true", false).fg, Some(DEFAULT_THEME.number));
        assert_eq!(get_keyword_style("add", true).fg, Some(DEFAULT_THEME.function));
        assert_eq!(get_keyword_style("add", false).fg, Some(DEFAULT_THEME.fg));
    }
}
