//! Shared UI pieces: frame layout, status bar, info panel frame.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the info panel on the right.
pub const INFO_PANEL_WIDTH: u16 = 20;

/// Areas produced by [`game_layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    /// Everything inside the outer border.
    pub inner: Rect,
    /// Where the play field is fitted - top left.
    pub content: Rect,
    /// Two lines below the content.
    pub status_bar: Rect,
    /// Right side, draws its own border.
    pub info_panel: Rect,
}

/// Pure layout computation for the whole screen.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ─────┐
/// │                                 │            │
/// │   [content area]                │  [info]    │
/// │                                 │            │
/// │ [status bar - 2 lines]          │            │
/// └─────────────────────────────────┴────────────┘
/// ```
///
/// Rendering and mouse hit-testing both call this, so a click always maps
/// onto what was drawn.
pub fn game_layout(area: Rect) -> GameLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        inner,
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Draws the outer border with a title.
pub fn render_outer_frame(frame: &mut Frame, area: Rect, title: &str, border_color: Color) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);
}

/// Standardized status bar: message on line 1, key hints on line 2.
///
/// `controls` is a slice of (key, action) pairs, e.g. `[("[Space]", "Flap")]`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height < 2 || controls.is_empty() {
        return;
    }

    let mut spans = Vec::with_capacity(controls.len() * 3);
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Info panel border with the standard " Info " title. Returns the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions_do_not_overlap() {
        let layout = game_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.inner, Rect::new(1, 1, 98, 38));
        assert_eq!(layout.info_panel.width, INFO_PANEL_WIDTH);
        assert_eq!(layout.status_bar.height, 2);
        assert_eq!(
            layout.content.y + layout.content.height,
            layout.status_bar.y
        );
        assert!(layout.content.x + layout.content.width <= layout.info_panel.x);
    }
}
