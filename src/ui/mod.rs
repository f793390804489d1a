//! Terminal presentation: ratatui rendering of the scene view.

pub mod flappy_scene;
pub mod game_common;
pub mod viewport;

use crate::core::game_loop::Presenter;
use crate::core::view::SceneView;
use crossterm::cursor;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use game_common::game_layout;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io::{self, Stdout};
use viewport::Viewport;

/// Play-field viewport for a terminal of `width` x `height` cells.
pub fn play_viewport(width: u16, height: u16, world_width: f64, world_height: f64) -> Viewport {
    let layout = game_layout(Rect::new(0, 0, width, height));
    Viewport::fit(layout.content, world_width, world_height)
}

/// Leaves raw mode and the alternate screen without a terminal handle.
/// Used from the panic hook, where the presenter is out of reach.
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )
}

/// Runs `undo` when `result` is an error. The original error wins over
/// any error from `undo`.
fn undo_on_error<T>(
    result: io::Result<T>,
    undo: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    if result.is_err() {
        let _ = undo();
    }
    result
}

/// Draws each frame into a ratatui terminal.
pub struct TerminalPresenter<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalPresenter<B> {
    pub fn new(backend: B) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
        })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl TerminalPresenter<CrosstermBackend<Stdout>> {
    /// Switches stdout into raw mode on the alternate screen with mouse
    /// capture. Pair with [`TerminalPresenter::exit`].
    /// Raw mode is undone if any later step fails.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        undo_on_error(Self::setup_screen(), restore_terminal)
    }

    fn setup_screen() -> io::Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let mut presenter = Self::new(CrosstermBackend::new(stdout))?;
        presenter.terminal.hide_cursor()?;
        presenter.terminal.clear()?;
        Ok(presenter)
    }

    /// Restores the terminal. Safe to call after a failed frame.
    pub fn exit(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()
    }
}

impl<B: Backend> Presenter for TerminalPresenter<B> {
    fn present(&mut self, view: &SceneView<'_>) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.size();
            flappy_scene::render_flappy_scene(frame, area, view);
        })?;
        Ok(())
    }
}
