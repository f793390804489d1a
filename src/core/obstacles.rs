//! Obstacle pairs and the field that spawns, scrolls, and recycles them.
//!
//! Obstacles are kept in spawn order. All of them move at the same
//! velocity, so spawn order is also front-to-back order and their x
//! positions stay non-decreasing along the sequence.

use super::config::GameConfig;
use super::geometry::Rect;
use log::{debug, warn};
use rand::Rng;

/// A top and bottom barrier sharing one x position, separated by a gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Left edge of both barriers.
    pub x: f64,
    /// Bottom edge of the top barrier (= top edge of the gap).
    pub gap_top: f64,
    pub gap_height: f64,
    pub width: f64,
    pub screen_height: f64,
}

impl Obstacle {
    pub fn top(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_top)
    }

    pub fn bottom(&self) -> Rect {
        let y = self.gap_top + self.gap_height;
        Rect::new(self.x, y, self.width, self.screen_height - y)
    }

    pub fn gap_center(&self) -> f64 {
        self.gap_top + self.gap_height / 2.0
    }

    /// Right edge; once this is left of x=0 the obstacle is gone.
    pub fn trailing_edge(&self) -> f64 {
        self.x + self.width
    }

    pub fn is_off_screen(&self) -> bool {
        self.trailing_edge() < 0.0
    }
}

/// Ordered sequence of live obstacles.
#[derive(Debug, Clone)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    screen_width: f64,
    screen_height: f64,
    gap_height: f64,
    width: f64,
    margin_top: f64,
    margin_bottom: f64,
    spawn_threshold: f64,
    clamp_reported: bool,
}

impl ObstacleField {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            obstacles: Vec::new(),
            screen_width: config.screen_width,
            screen_height: config.screen_height,
            gap_height: config.gap_height,
            width: config.obstacle_width,
            margin_top: config.margin_top,
            margin_bottom: config.margin_bottom,
            spawn_threshold: config.spawn_threshold,
            clamp_reported: false,
        }
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Most recently spawned obstacle.
    pub fn last(&self) -> Option<&Obstacle> {
        self.obstacles.last()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Inclusive range the gap's top offset is drawn from. When the gap
    /// and margins do not fit, the range collapses onto `margin_top`.
    pub fn gap_range(&self) -> (f64, f64) {
        let min = self.margin_top;
        let max = self.screen_height - self.gap_height - self.margin_bottom;
        (min, max.max(min))
    }

    /// Appends a new obstacle at the right screen edge with a random gap.
    /// Returns the chosen gap offset.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) -> f64 {
        let (min, max) = self.gap_range();
        if min == max
            && self.gap_height + self.margin_top + self.margin_bottom > self.screen_height
            && !self.clamp_reported
        {
            warn!(
                "obstacle gap {} plus margins {}/{} exceeds screen height {}; clamping gap offset",
                self.gap_height, self.margin_top, self.margin_bottom, self.screen_height
            );
            self.clamp_reported = true;
        }

        // Whole-pixel offsets, inclusive on both ends
        let lo = min.ceil() as i64;
        let hi = max.floor() as i64;
        let gap_top = if hi > lo {
            rng.gen_range(lo..=hi) as f64
        } else {
            min
        };

        self.obstacles.push(Obstacle {
            x: self.screen_width,
            gap_top,
            gap_height: self.gap_height,
            width: self.width,
            screen_height: self.screen_height,
        });
        debug!("spawned obstacle at x={} gap_top={}", self.screen_width, gap_top);
        gap_top
    }

    /// Shifts every obstacle by `velocity` and drops the ones whose trailing
    /// edge crossed x=0. Returns how many were dropped; the caller scores them.
    pub fn advance(&mut self, velocity: f64) -> u32 {
        for obstacle in &mut self.obstacles {
            obstacle.x += velocity;
        }

        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_off_screen());
        let removed = (before - self.obstacles.len()) as u32;
        if removed > 0 {
            debug!("removed {} obstacle(s) past the leading edge", removed);
        }
        removed
    }

    /// Spawns when the field is empty or the newest obstacle has moved more
    /// than the spawn threshold in from the right edge. Returns the new gap
    /// offset if one was spawned.
    pub fn maybe_spawn_next<R: Rng>(&mut self, rng: &mut R) -> Option<f64> {
        let due = match self.obstacles.last() {
            None => true,
            Some(last) => last.x < self.screen_width - self.spawn_threshold,
        };
        if due {
            Some(self.spawn(rng))
        } else {
            None
        }
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn field() -> ObstacleField {
        ObstacleField::new(&GameConfig::default())
    }

    fn obstacle_at(x: f64) -> Obstacle {
        Obstacle {
            x,
            gap_top: 200.0,
            gap_height: 200.0,
            width: 70.0,
            screen_height: 600.0,
        }
    }

    #[test]
    fn test_barriers_frame_the_gap() {
        let o = obstacle_at(120.0);
        assert_eq!(o.top(), Rect::new(120.0, 0.0, 70.0, 200.0));
        assert_eq!(o.bottom(), Rect::new(120.0, 400.0, 70.0, 200.0));
        assert_eq!(o.top().bottom() + o.gap_height, o.bottom().y);
        assert_eq!(o.bottom().bottom(), 600.0);
    }

    #[test]
    fn test_spawn_places_obstacle_at_right_edge() {
        let mut f = field();
        let mut rng = test_rng();
        let gap_top = f.spawn(&mut rng);

        assert_eq!(f.len(), 1);
        let o = f.last().unwrap();
        assert_eq!(o.x, 400.0);
        assert_eq!(o.gap_top, gap_top);
        assert!((100.0..=300.0).contains(&gap_top));
        assert_eq!(gap_top.fract(), 0.0);
    }

    #[test]
    fn test_spawn_gap_always_within_margins() {
        let mut f = field();
        let mut rng = test_rng();
        for _ in 0..500 {
            let gap_top = f.spawn(&mut rng);
            assert!(gap_top >= 100.0 && gap_top <= 300.0, "gap_top {}", gap_top);
        }
    }

    #[test]
    fn test_gap_range_clamps_when_misconfigured() {
        let config = GameConfig {
            gap_height: 500.0,
            ..GameConfig::default()
        };
        let mut f = ObstacleField::new(&config);
        assert_eq!(f.gap_range(), (100.0, 100.0));
        let mut rng = test_rng();
        assert_eq!(f.spawn(&mut rng), 100.0);
    }

    #[test]
    fn test_advance_moves_every_obstacle() {
        let mut f = field();
        f.push(obstacle_at(300.0));
        f.push(obstacle_at(380.0));
        let removed = f.advance(-2.0);
        assert_eq!(removed, 0);
        let xs: Vec<f64> = f.as_slice().iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![298.0, 378.0]);
    }

    #[test]
    fn test_advance_removes_only_when_trailing_edge_passes_zero() {
        let mut f = field();
        f.push(obstacle_at(-68.0));
        // x=-70 puts the trailing edge exactly on 0: still present
        assert_eq!(f.advance(-2.0), 0);
        assert_eq!(f.len(), 1);
        // x=-72: trailing edge at -2, removed
        assert_eq!(f.advance(-2.0), 1);
        assert!(f.is_empty());
    }

    #[test]
    fn test_advance_removes_adjacent_obstacles_in_one_pass() {
        // Two consecutive expired obstacles must both go; removing while
        // iterating would skip the second one.
        let mut f = field();
        f.push(obstacle_at(-71.0));
        f.push(obstacle_at(-70.5));
        f.push(obstacle_at(10.0));
        assert_eq!(f.advance(-2.0), 2);
        assert_eq!(f.len(), 1);
        assert_eq!(f.as_slice()[0].x, 8.0);
    }

    #[test]
    fn test_maybe_spawn_next_when_empty() {
        let mut f = field();
        let mut rng = test_rng();
        assert!(f.maybe_spawn_next(&mut rng).is_some());
        assert_eq!(f.len(), 1);
    }

    #[test]
    fn test_maybe_spawn_next_respects_threshold() {
        let mut f = field();
        let mut rng = test_rng();
        f.push(obstacle_at(200.0));
        // Exactly at screen_width - threshold: not yet
        assert!(f.maybe_spawn_next(&mut rng).is_none());

        f.advance(-2.0);
        assert!(f.maybe_spawn_next(&mut rng).is_some());
        assert_eq!(f.len(), 2);
        assert_eq!(f.last().unwrap().x, 400.0);
    }

    #[test]
    fn test_positions_stay_ordered_while_scrolling() {
        let mut f = field();
        let mut rng = test_rng();
        for _ in 0..2000 {
            f.advance(-2.0);
            f.maybe_spawn_next(&mut rng);
            let xs: Vec<f64> = f.as_slice().iter().map(|o| o.x).collect();
            assert!(xs.windows(2).all(|w| w[0] <= w[1]), "unordered: {:?}", xs);
        }
    }

    #[test]
    fn test_spacing_bounds_density() {
        let mut f = field();
        let mut rng = test_rng();
        for _ in 0..1000 {
            f.advance(-2.0);
            f.maybe_spawn_next(&mut rng);
        }
        // Spawns happen every 101 ticks of 2px, so neighbours sit 202px apart
        for w in f.as_slice().windows(2) {
            assert!(w[1].x - w[0].x > 200.0);
        }
        assert!(f.len() <= 3);
    }
}
