//! Flappy scene rendering.
//!
//! Uses a cell buffer: sky, barriers, the restart button, the avatar and
//! HUD text are stamped into a 2D grid, then emitted row by row as a
//! Paragraph so every character gets its own colours.

use super::game_common::{
    game_layout, render_info_panel_frame, render_outer_frame, render_status_bar,
};
use super::viewport::{CellSpan, Viewport};
use crate::core::game_state::GamePhase;
use crate::core::view::{Hud, SceneView, RESTART_LABEL};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SKY: Color = Color::Rgb(78, 192, 202);
const BARRIER: Color = Color::Rgb(84, 170, 52);
const BARRIER_EDGE: Color = Color::Rgb(40, 110, 30);
const AVATAR: Color = Color::Rgb(250, 204, 40);
const BUTTON: Color = Color::Blue;
const TEXT: Color = Color::Black;

/// World-space rows (from the top) where HUD text is anchored.
const LIVE_SCORE_Y: f64 = 50.0;
const PROMPT_OFFSET_Y: f64 = 100.0;
const FINAL_SCORE_OFFSET_Y: f64 = -100.0;

/// Render the whole screen for one frame.
pub fn render_flappy_scene(frame: &mut Frame, area: Rect, view: &SceneView<'_>) {
    let border = match view.phase {
        GamePhase::Ready => Color::Cyan,
        GamePhase::Playing => Color::Green,
        GamePhase::GameOver => Color::Red,
    };
    render_outer_frame(frame, area, " Flappy ", border);

    let layout = game_layout(area);
    let viewport = Viewport::fit(layout.content, view.world_width, view.world_height);

    if viewport.area.width < 8 || viewport.area.height < 6 {
        frame.render_widget(
            Paragraph::new("Terminal too small")
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center),
            layout.content,
        );
    } else {
        render_play_field(frame, &viewport, view);
    }

    render_status_bar_content(frame, layout.status_bar, view);
    render_info_panel(frame, layout.info_panel, view);
}

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
    bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: TEXT,
            bg: SKY,
            bold: false,
        }
    }
}

struct CellGrid {
    cells: Vec<Vec<Cell>>,
    width: u16,
}

impl CellGrid {
    fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![vec![Cell::default(); width as usize]; height as usize],
            width,
        }
    }

    fn fill(&mut self, span: CellSpan, cell: Cell) {
        for row in span.row_start..span.row_end {
            for col in span.col_start..span.col_end {
                self.cells[row as usize][col as usize] = cell;
            }
        }
    }

    /// Writes `text` centred on `row`, keeping each cell's background.
    fn stamp_centered(&mut self, row: u16, text: &str, fg: Color, bold: bool) {
        let Some(line) = self.cells.get_mut(row as usize) else {
            return;
        };
        let len = text.chars().count() as u16;
        let start = self.width.saturating_sub(len) / 2;
        for (i, ch) in text.chars().enumerate() {
            let col = start as usize + i;
            if let Some(cell) = line.get_mut(col) {
                cell.ch = ch;
                cell.fg = fg;
                cell.bold = bold;
            }
        }
    }

    fn into_lines(self) -> Vec<Line<'static>> {
        self.cells
            .into_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .into_iter()
                    .map(|c| {
                        let mut style = Style::default().fg(c.fg).bg(c.bg);
                        if c.bold {
                            style = style.add_modifier(Modifier::BOLD);
                        }
                        Span::styled(c.ch.to_string(), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

fn render_play_field(frame: &mut Frame, viewport: &Viewport, view: &SceneView<'_>) {
    let mut grid = CellGrid::new(viewport.area.width, viewport.area.height);

    // ── Barriers ──────────────────────────────────────────────────────
    for obstacle in view.obstacles {
        for rect in [obstacle.top(), obstacle.bottom()] {
            if let Some(span) = viewport.span_of(&rect) {
                grid.fill(
                    span,
                    Cell {
                        ch: '█',
                        fg: BARRIER,
                        bg: BARRIER_EDGE,
                        bold: false,
                    },
                );
            }
        }
    }

    // ── Restart button ────────────────────────────────────────────────
    if let Some(button) = view.restart_button {
        if let Some(span) = viewport.span_of(&button) {
            grid.fill(
                span,
                Cell {
                    ch: ' ',
                    fg: Color::White,
                    bg: BUTTON,
                    bold: false,
                },
            );
            let label_row = span.row_start + (span.row_end - span.row_start) / 2;
            grid.stamp_centered(label_row, RESTART_LABEL, Color::White, true);
        }
    }

    // ── Avatar ────────────────────────────────────────────────────────
    if let Some(span) = viewport.span_of(&view.avatar) {
        let glyph = if view.avatar_velocity < -2.0 {
            '▲'
        } else if view.avatar_velocity > 6.0 {
            '▼'
        } else {
            '►'
        };
        grid.fill(
            span,
            Cell {
                ch: glyph,
                fg: Color::Rgb(220, 80, 30),
                bg: AVATAR,
                bold: true,
            },
        );
    }

    // ── HUD ───────────────────────────────────────────────────────────
    let centre_y = view.world_height / 2.0;
    match view.hud {
        Hud::Prompt(text) => {
            grid.stamp_centered(viewport.row_of(centre_y + PROMPT_OFFSET_Y), text, TEXT, false);
        }
        Hud::LiveScore(score) => {
            grid.stamp_centered(viewport.row_of(LIVE_SCORE_Y), &score.to_string(), TEXT, true);
        }
        Hud::FinalScore(score) => {
            grid.stamp_centered(
                viewport.row_of(centre_y + FINAL_SCORE_OFFSET_Y),
                &format!("Score: {}", score),
                TEXT,
                true,
            );
        }
    }

    frame.render_widget(Paragraph::new(grid.into_lines()), viewport.area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, view: &SceneView<'_>) {
    match view.phase {
        GamePhase::Ready => render_status_bar(
            frame,
            area,
            "Get ready!",
            Color::Yellow,
            &[("[Space]", "Flap"), ("[Esc]", "Quit")],
        ),
        GamePhase::Playing => render_status_bar(
            frame,
            area,
            "Fly through the gaps",
            Color::Green,
            &[("[Space]", "Flap"), ("[Esc]", "Quit")],
        ),
        GamePhase::GameOver => render_status_bar(
            frame,
            area,
            "CRASH!",
            Color::Red,
            &[("[R/Click]", "Try Again"), ("[Esc]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, view: &SceneView<'_>) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let score = match view.hud {
        Hud::LiveScore(s) | Hud::FinalScore(s) => s.to_string(),
        Hud::Prompt(_) => "-".to_string(),
    };

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", view.phase.name().to_uppercase()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                score,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(
                view.obstacles.len().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::styled(
                format!("{:+.1}", view.avatar_velocity),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
