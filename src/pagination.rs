use raylib::prelude::*;

use crate::constants::*;
use crate::fit::Size;

/// One dot per slide, centred along the bottom edge of the container.
#[derive(Debug, Clone)]
pub struct Pagination {
    dots: Vec<Vector2>,
}

impl Pagination {
    pub fn layout(container: Size, count: usize) -> Self {
        let span = count.saturating_sub(1) as f32 * PAGINATION_SPACING;
        let start_x = container.width * 0.5 - span * 0.5;
        let y = container.height - PAGINATION_MARGIN;

        let dots = (0..count)
            .map(|i| Vector2::new(start_x + i as f32 * PAGINATION_SPACING, y))
            .collect();
        Self { dots }
    }

    #[cfg(test)]
    pub fn dots(&self) -> &[Vector2] {
        &self.dots
    }

    /// Index of the dot under `point`, if any.
    pub fn hit_test(&self, point: Vector2) -> Option<usize> {
        self.dots
            .iter()
            .position(|dot| (point.x - dot.x).hypot(point.y - dot.y) <= PAGINATION_HIT_RADIUS)
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, active: usize) {
        for (i, dot) in self.dots.iter().enumerate() {
            if i == active {
                d.draw_circle_v(*dot, PAGINATION_RADIUS, Color::WHITE);
            } else {
                d.draw_circle_lines(dot.x as i32, dot.y as i32, PAGINATION_RADIUS, Color::WHITE);
            }
        }
    }
}
