//! Diagnostics pane rendering

use super::{clamp_scroll, pane_block, visible_height};
use crate::parser::diagnostics::Diagnostics;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the diagnostics pane
pub fn render_diagnostics_pane(
    frame: &mut Frame,
    area: Rect,
    diagnostics: &Diagnostics,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Diagnostics ", is_focused);

    if diagnostics.is_empty() {
        let paragraph = Paragraph::new("No parse errors")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.success));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, diagnostics.len(), visible_height);

    let items: Vec<ListItem> = diagnostics
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|err| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>6} ", err.location().to_string()),
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(err.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
