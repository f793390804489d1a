//! What happened during one playing tick.
//!
//! `GameWorld::tick` reports events instead of having callers diff state,
//! so the presentation layer and the simulator stay ignorant of internals.

use super::game_state::GamePhase;

#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// Obstacles whose trailing edge crossed x=0 this tick.
    ObstaclesCleared { count: u32, score: u32 },

    /// A new obstacle entered at the right edge.
    ObstacleSpawned { gap_top: f64 },

    /// The avatar hit a barrier or a screen edge; the run is over.
    Collided { score: u32 },

    PhaseChanged { from: GamePhase, to: GamePhase },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    pub events: Vec<TickEvent>,
}

impl TickResult {
    pub fn push(&mut self, event: TickEvent) {
        self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn collided(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TickEvent::Collided { .. }))
    }

    /// Total obstacles cleared this tick.
    pub fn cleared(&self) -> u32 {
        self.events
            .iter()
            .map(|e| match e {
                TickEvent::ObstaclesCleared { count, .. } => *count,
                _ => 0,
            })
            .sum()
    }
}
