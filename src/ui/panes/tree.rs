//! Syntax tree pane rendering

use super::{clamp_scroll, pane_block, visible_height};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Style a dump line: node name in one colour, its detail in another
fn tree_line(line: &str) -> Line<'_> {
    let depth = line.len() - line.trim_start().len();
    let (indent, rest) = line.split_at(depth);
    let (kind, detail) = rest.split_once(' ').unwrap_or((rest, ""));

    let mut spans = vec![
        Span::raw(indent),
        Span::styled(kind, Style::default().fg(DEFAULT_THEME.node_kind)),
    ];
    if !detail.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(detail, Style::default().fg(DEFAULT_THEME.fg)));
    }
    Line::from(spans)
}

/// Render the tree of the selected statement
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[String],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Syntax Tree ", is_focused);

    if lines.is_empty() {
        let paragraph = Paragraph::new("(nothing selected)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let items: Vec<ListItem> = lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| ListItem::new(tree_line(line)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_line_splits_kind_and_detail() {
        let line = tree_line("    Infix +");
        let text: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, vec!["    ", "Infix", " ", "+"]);

        let line = tree_line("  ReturnStatement");
        assert_eq!(line.spans.len(), 2);
    }
}
