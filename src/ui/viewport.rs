//! Mapping between world units and terminal cells.
//!
//! Terminal cells are roughly twice as tall as they are wide, so the play
//! area is fitted to keep the world's proportions on screen. The same
//! mapping turns mouse clicks back into world coordinates.

use crate::core::geometry::Rect as WorldRect;
use ratatui::layout::Rect;

/// Height of a terminal cell relative to its width.
const CELL_ASPECT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Cells the world is drawn into.
    pub area: Rect,
    pub world_width: f64,
    pub world_height: f64,
}

/// Cell span covered by a world rectangle, relative to the viewport origin.
/// Column and row ends are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub col_start: u16,
    pub col_end: u16,
    pub row_start: u16,
    pub row_end: u16,
}

impl Viewport {
    /// Largest centred area inside `available` with the world's aspect ratio.
    pub fn fit(available: Rect, world_width: f64, world_height: f64) -> Self {
        let cols_per_row = world_width / world_height * CELL_ASPECT;

        let mut width = (available.height as f64 * cols_per_row).round() as u16;
        width = width.min(available.width);
        let mut height = (width as f64 / cols_per_row).round() as u16;
        height = height.min(available.height);

        let area = Rect::new(
            available.x + (available.width - width) / 2,
            available.y + (available.height - height) / 2,
            width,
            height,
        );
        Self {
            area,
            world_width,
            world_height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.area.width == 0 || self.area.height == 0
    }

    /// World x to fractional column offset.
    fn to_col(&self, x: f64) -> f64 {
        x * self.area.width as f64 / self.world_width
    }

    /// World y to fractional row offset.
    fn to_row(&self, y: f64) -> f64 {
        y * self.area.height as f64 / self.world_height
    }

    /// World coordinates of the centre of an absolute terminal cell, or
    /// `None` if the cell lies outside the play area.
    pub fn cell_to_world(&self, col: u16, row: u16) -> Option<(f64, f64)> {
        let a = self.area;
        if self.is_empty()
            || col < a.x
            || row < a.y
            || col >= a.x + a.width
            || row >= a.y + a.height
        {
            return None;
        }
        let x = ((col - a.x) as f64 + 0.5) * self.world_width / a.width as f64;
        let y = ((row - a.y) as f64 + 0.5) * self.world_height / a.height as f64;
        Some((x, y))
    }

    /// Row (relative to the viewport) containing world height `y`, clamped.
    pub fn row_of(&self, y: f64) -> u16 {
        let row = self.to_row(y).floor().max(0.0) as u16;
        row.min(self.area.height.saturating_sub(1))
    }

    /// Cells touched by `rect`, clipped to the viewport. `None` when the
    /// rectangle is entirely off-screen or empty.
    pub fn span_of(&self, rect: &WorldRect) -> Option<CellSpan> {
        if self.is_empty() || rect.is_empty() {
            return None;
        }
        let clamp_col = |v: f64| v.clamp(0.0, self.area.width as f64) as u16;
        let clamp_row = |v: f64| v.clamp(0.0, self.area.height as f64) as u16;

        let span = CellSpan {
            col_start: clamp_col(self.to_col(rect.x).floor()),
            col_end: clamp_col(self.to_col(rect.right()).ceil()),
            row_start: clamp_row(self.to_row(rect.y).floor()),
            row_end: clamp_row(self.to_row(rect.bottom()).ceil()),
        };
        if span.col_end <= span.col_start || span.row_end <= span.row_start {
            return None;
        }
        Some(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::fit(Rect::new(0, 0, 100, 30), 400.0, 600.0)
    }

    #[test]
    fn test_fit_keeps_aspect_and_centres() {
        let v = viewport();
        // 30 rows * (400/600 * 2) = 40 columns
        assert_eq!(v.area.height, 30);
        assert_eq!(v.area.width, 40);
        assert_eq!(v.area.x, 30);
        assert_eq!(v.area.y, 0);
    }

    #[test]
    fn test_fit_limited_by_width() {
        let v = Viewport::fit(Rect::new(0, 0, 20, 50), 400.0, 600.0);
        assert_eq!(v.area.width, 20);
        assert_eq!(v.area.height, 15);
        assert_eq!(v.area.y, 17);
    }

    #[test]
    fn test_fit_empty_area() {
        let v = Viewport::fit(Rect::new(0, 0, 0, 0), 400.0, 600.0);
        assert!(v.is_empty());
        assert!(v.cell_to_world(0, 0).is_none());
    }

    #[test]
    fn test_cell_to_world_outside_is_none() {
        let v = viewport();
        assert!(v.cell_to_world(0, 0).is_none());
        assert!(v.cell_to_world(70, 5).is_none());
    }

    #[test]
    fn test_cell_to_world_uses_cell_centre() {
        let v = viewport();
        // Each cell is 10 x 20 world units
        assert_eq!(v.cell_to_world(30, 0), Some((5.0, 10.0)));
        assert_eq!(v.cell_to_world(69, 29), Some((395.0, 590.0)));
    }

    #[test]
    fn test_span_of_covers_partial_cells() {
        let v = viewport();
        let span = v.span_of(&WorldRect::new(15.0, 25.0, 10.0, 10.0)).unwrap();
        assert_eq!(
            span,
            CellSpan {
                col_start: 1,
                col_end: 3,
                row_start: 1,
                row_end: 2,
            }
        );
    }

    #[test]
    fn test_span_of_clips_offscreen() {
        let v = viewport();
        let span = v.span_of(&WorldRect::new(-30.0, 0.0, 50.0, 600.0)).unwrap();
        assert_eq!(span.col_start, 0);
        assert_eq!(span.col_end, 2);
        assert_eq!(span.row_end, 30);
        assert!(v.span_of(&WorldRect::new(-80.0, 0.0, 70.0, 100.0)).is_none());
    }

    #[test]
    fn test_row_of_clamps() {
        let v = viewport();
        assert_eq!(v.row_of(-5.0), 0);
        assert_eq!(v.row_of(300.0), 15);
        assert_eq!(v.row_of(10_000.0), 29);
    }
}
