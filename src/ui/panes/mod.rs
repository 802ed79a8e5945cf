//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility for maintainability.
//!
//! # Pane Modules
//!
//! - [`source`]: Source code display with syntax highlighting, the selected
//!   statement's line and the lines that produced diagnostics
//! - [`statements`]: Top-level statements in canonical form, one per row
//! - [`tree`]: Node tree of the selected statement
//! - [`diagnostics`]: Parse errors with their locations
//! - [`status`]: Status bar with keybindings and parse state
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function and, where the pane
//! needs more than one input, a `*RenderData` struct. Scroll offsets live in
//! the [`App`](crate::ui::App) and are clamped by the pane that owns them.

pub mod diagnostics;
pub mod source;
pub mod statements;
pub mod status;
pub mod tree;

// Re-export render functions for convenience
pub use diagnostics::render_diagnostics_pane;
pub use source::{render_source_pane, SourceRenderData, SourceScrollState};
pub use statements::{render_statements_pane, StatementsRenderData};
pub use status::{render_status_bar, StatusRenderData};
pub use tree::render_tree_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the focus colour applied
fn pane_block(title: &'static str, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp `offset` so a list of `total` rows fills a `visible` high window
fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}

/// Rows available inside a bordered pane
fn visible_height(area: ratatui::layout::Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize // Account for borders (2), min 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut offset = 10;
        clamp_scroll(&mut offset, 12, 5);
        assert_eq!(offset, 7);

        let mut offset = 3;
        clamp_scroll(&mut offset, 4, 5);
        assert_eq!(offset, 0);
    }
}
