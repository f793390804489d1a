//! Crossterm input adapter.
//!
//! Keys map onto game events (Space/Up/k flap, r restart, Esc/q/Ctrl-C
//! quit); a left mouse press is translated from terminal cells into world
//! coordinates through the same viewport the renderer draws with.

use crate::core::game_loop::InputSource;
use crate::core::game_state::GameEvent;
use crate::ui::play_viewport;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::terminal;
use std::io;
use std::time::Duration;

/// Map a key press to a game event. Releases and repeats are ignored so a
/// held key does not machine-gun flaps.
pub fn map_key(key: KeyEvent) -> Option<GameEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameEvent::Quit);
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('k') => Some(GameEvent::Flap),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameEvent::Restart),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameEvent::Quit),
        _ => None,
    }
}

/// Map a left-button press at a terminal cell to a world-space pointer
/// event. Clicks outside the play field are dropped.
pub fn map_mouse(
    mouse: MouseEvent,
    terminal_size: (u16, u16),
    world_width: f64,
    world_height: f64,
) -> Option<GameEvent> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let (cols, rows) = terminal_size;
    let viewport = play_viewport(cols, rows, world_width, world_height);
    viewport
        .cell_to_world(mouse.column, mouse.row)
        .map(|(x, y)| GameEvent::PointerDown { x, y })
}

/// Non-blocking crossterm event source.
pub struct CrosstermInput {
    world_width: f64,
    world_height: f64,
}

impl CrosstermInput {
    pub fn new(world_width: f64, world_height: f64) -> Self {
        Self {
            world_width,
            world_height,
        }
    }
}

impl InputSource for CrosstermInput {
    fn poll_events(&mut self) -> io::Result<Vec<GameEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            let mapped = match event::read()? {
                Event::Key(key) => map_key(key),
                Event::Mouse(mouse) => map_mouse(
                    mouse,
                    terminal::size()?,
                    self.world_width,
                    self.world_height,
                ),
                _ => None,
            };
            events.extend(mapped);
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_flap_keys() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(GameEvent::Flap));
        assert_eq!(map_key(press(KeyCode::Up)), Some(GameEvent::Flap));
        assert_eq!(map_key(press(KeyCode::Char('k'))), Some(GameEvent::Flap));
    }

    #[test]
    fn test_restart_and_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Char('r'))), Some(GameEvent::Restart));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(GameEvent::Quit));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(GameEvent::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameEvent::Quit)
        );
    }

    #[test]
    fn test_unmapped_key_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Enter)), None);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn test_click_inside_play_field_maps_to_world() {
        let viewport = play_viewport(100, 40, 400.0, 600.0);
        let event = map_mouse(
            click(viewport.area.x, viewport.area.y),
            (100, 40),
            400.0,
            600.0,
        );
        match event {
            Some(GameEvent::PointerDown { x, y }) => {
                assert!(x > 0.0 && x < 20.0);
                assert!(y > 0.0 && y < 20.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_click_outside_play_field_dropped() {
        assert_eq!(map_mouse(click(0, 0), (100, 40), 400.0, 600.0), None);
    }

    #[test]
    fn test_right_click_and_moves_ignored() {
        let mut event = click(50, 20);
        event.kind = MouseEventKind::Down(MouseButton::Right);
        assert_eq!(map_mouse(event, (100, 40), 400.0, 600.0), None);
        event.kind = MouseEventKind::Moved;
        assert_eq!(map_mouse(event, (100, 40), 400.0, 600.0), None);
    }
}
