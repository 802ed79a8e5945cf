//! Statement list pane rendering

use super::{clamp_scroll, pane_block, visible_height};
use crate::parser::ast::Statement;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Data needed to render the statement list
pub struct StatementsRenderData<'a> {
    pub statements: &'a [Statement],
    pub selected: usize,
}

/// Adjust `offset` so that row `selected` is inside the window
fn scroll_to_selection(offset: &mut usize, selected: usize, visible: usize) {
    if selected < *offset {
        *offset = selected;
    } else if selected >= *offset + visible {
        *offset = selected + 1 - visible;
    }
}

/// Render the statement list pane
pub fn render_statements_pane(
    frame: &mut Frame,
    area: Rect,
    data: StatementsRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Statements ", is_focused);

    if data.statements.is_empty() {
        let paragraph = Paragraph::new("(no statements)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = visible_height(area);
    scroll_to_selection(scroll_offset, data.selected, visible_height);
    clamp_scroll(scroll_offset, data.statements.len(), visible_height);

    let items: Vec<ListItem> = data
        .statements
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, statement)| {
            let is_selected = idx == data.selected;
            let location_style = if is_selected {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            let text_style = if is_selected {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.current_line_bg)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>6} ", statement.location().to_string()), location_style),
                Span::styled(statement.to_string(), text_style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_follows_selection() {
        let mut offset = 0;
        scroll_to_selection(&mut offset, 7, 5);
        assert_eq!(offset, 3);

        scroll_to_selection(&mut offset, 4, 5);
        assert_eq!(offset, 3);

        scroll_to_selection(&mut offset, 1, 5);
        assert_eq!(offset, 1);
    }
}
