//! The player avatar: fixed column, vertical motion only.

use super::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Avatar {
    /// Fixed horizontal position.
    pub x: f64,
    /// Top edge; grows downward.
    pub y: f64,
    /// Vertical velocity in world units per tick (positive = downward).
    pub velocity: f64,
    pub width: f64,
    pub height: f64,
}

impl Avatar {
    /// Avatar at rest, vertically centred on a screen of `screen_height`.
    pub fn new(x: f64, width: f64, height: f64, screen_height: f64) -> Self {
        Self {
            x,
            y: screen_height / 2.0,
            velocity: 0.0,
            width,
            height,
        }
    }

    /// One gravity step. Velocity is updated before position.
    pub fn integrate(&mut self, gravity: f64) {
        self.velocity += gravity;
        self.y += self.velocity;
    }

    /// Overwrites velocity with `strength`; impulses never stack.
    pub fn flap(&mut self, strength: f64) {
        self.velocity = strength;
    }

    pub fn reset(&mut self, screen_height: f64) {
        self.y = screen_height / 2.0;
        self.velocity = 0.0;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::*;

    fn avatar() -> Avatar {
        Avatar::new(AVATAR_X, AVATAR_WIDTH, AVATAR_HEIGHT, SCREEN_HEIGHT)
    }

    #[test]
    fn test_new_avatar_centered_at_rest() {
        let a = avatar();
        assert_eq!(a.y, 300.0);
        assert_eq!(a.velocity, 0.0);
        assert_eq!(a.x, 50.0);
    }

    #[test]
    fn test_integrate_updates_velocity_then_position() {
        let mut a = avatar();
        a.velocity = 3.0;
        a.integrate(GRAVITY);
        assert_eq!(a.velocity, 3.5);
        assert_eq!(a.y, 303.5);

        a.integrate(GRAVITY);
        assert_eq!(a.velocity, 4.0);
        assert_eq!(a.y, 307.5);
    }

    #[test]
    fn test_flap_overwrites_velocity() {
        for prior in [-25.0, -10.0, 0.0, 0.5, 42.0] {
            let mut a = avatar();
            a.velocity = prior;
            a.flap(FLAP_STRENGTH);
            assert_eq!(a.velocity, FLAP_STRENGTH, "prior velocity {}", prior);
        }
    }

    #[test]
    fn test_double_flap_does_not_stack() {
        let mut a = avatar();
        a.flap(FLAP_STRENGTH);
        a.flap(FLAP_STRENGTH);
        assert_eq!(a.velocity, FLAP_STRENGTH);
    }

    #[test]
    fn test_reset_recenters() {
        let mut a = avatar();
        a.y = 12.0;
        a.velocity = 9.0;
        a.reset(SCREEN_HEIGHT);
        assert_eq!(a.y, SCREEN_HEIGHT / 2.0);
        assert_eq!(a.velocity, 0.0);
    }

    #[test]
    fn test_rect_tracks_position() {
        let mut a = avatar();
        a.y = 120.0;
        assert_eq!(a.rect(), Rect::new(50.0, 120.0, 40.0, 30.0));
    }
}
