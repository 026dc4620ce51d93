use raylib::prelude::*;
use crate::constants::*;
use crate::selector::Direction;

/// Screen geometry for the indicator row and the prev/next controls.
pub struct Layout {
    screen_width: f32,
    screen_height: f32,
    count: usize,
}

impl Layout {
    pub fn new(screen_width: f32, screen_height: f32, count: usize) -> Self {
        Self {
            screen_width,
            screen_height,
            count,
        }
    }

    pub fn screen_width(&self) -> f32 {
        self.screen_width
    }

    pub fn screen_height(&self) -> f32 {
        self.screen_height
    }

    /// Dots are centered horizontally and evenly spaced along the bottom edge.
    pub fn indicator_center(&self, index: usize) -> Vector2 {
        let span = self.count.saturating_sub(1) as f32 * INDICATOR_SPACING;
        let start_x = self.screen_width * 0.5 - span * 0.5;
        Vector2::new(
            start_x + index as f32 * INDICATOR_SPACING,
            self.screen_height - INDICATOR_MARGIN,
        )
    }

    /// 1-based ordinal of the dot under `point`, if any.
    pub fn indicator_hit(&self, point: Vector2) -> Option<i64> {
        let reach = INDICATOR_RADIUS + INDICATOR_HIT_SLOP;
        (0..self.count)
            .find(|&i| {
                let center = self.indicator_center(i);
                let dx = point.x - center.x;
                let dy = point.y - center.y;
                dx * dx + dy * dy <= reach * reach
            })
            .map(|i| i as i64 + 1)
    }

    pub fn control_rect(&self, direction: Direction) -> Rectangle {
        let y = self.screen_height * 0.5 - CONTROL_HEIGHT * 0.5;
        match direction {
            Direction::Previous => Rectangle::new(0.0, y, CONTROL_WIDTH, CONTROL_HEIGHT),
            Direction::Next => Rectangle::new(
                self.screen_width - CONTROL_WIDTH,
                y,
                CONTROL_WIDTH,
                CONTROL_HEIGHT,
            ),
        }
    }

    pub fn control_hit(&self, point: Vector2) -> Option<Direction> {
        [Direction::Previous, Direction::Next]
            .into_iter()
            .find(|&direction| contains(&self.control_rect(direction), point))
    }
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

/// Scale that fits a texture inside `FIT_RATIO` of the screen without upscaling.
pub fn fit_scale(tex_width: f32, tex_height: f32, screen_width: f32, screen_height: f32) -> f32 {
    if tex_width <= 0.0 || tex_height <= 0.0 {
        return 1.0;
    }
    let max_width = screen_width * FIT_RATIO;
    let max_height = screen_height * FIT_RATIO;
    (max_width / tex_width).min(max_height / tex_height).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::new(1000.0, 600.0, 3)
    }

    #[test]
    fn dots_are_centered() {
        let layout = layout();
        let centers: Vec<(f32, f32)> = (0..3)
            .map(|i| layout.indicator_center(i))
            .map(|c| (c.x, c.y))
            .collect();
        assert_eq!(centers, vec![(472.0, 568.0), (500.0, 568.0), (528.0, 568.0)]);
    }

    #[test]
    fn dot_click_yields_one_based_ordinal() {
        let layout = layout();
        assert_eq!(layout.indicator_hit(Vector2::new(472.0, 568.0)), Some(1));
        assert_eq!(layout.indicator_hit(Vector2::new(503.0, 565.0)), Some(2));
        assert_eq!(layout.indicator_hit(Vector2::new(528.0, 578.0)), Some(3));
    }

    #[test]
    fn clicks_between_or_away_from_dots_miss() {
        let layout = layout();
        assert_eq!(layout.indicator_hit(Vector2::new(486.0, 568.0)), None);
        assert_eq!(layout.indicator_hit(Vector2::new(500.0, 300.0)), None);
        assert_eq!(Layout::new(1000.0, 600.0, 0).indicator_hit(Vector2::new(500.0, 568.0)), None);
    }

    #[test]
    fn controls_sit_on_the_edges() {
        let layout = layout();
        assert_eq!(layout.control_hit(Vector2::new(10.0, 300.0)), Some(Direction::Previous));
        assert_eq!(layout.control_hit(Vector2::new(990.0, 300.0)), Some(Direction::Next));
        assert_eq!(layout.control_hit(Vector2::new(500.0, 300.0)), None);
        assert_eq!(layout.control_hit(Vector2::new(10.0, 10.0)), None);
    }

    #[test]
    fn fit_scale_shrinks_but_never_enlarges() {
        assert_eq!(fit_scale(100.0, 100.0, 1920.0, 1080.0), 1.0);
        assert_eq!(fit_scale(3840.0, 1080.0, 1920.0, 1080.0), 0.45);
        assert_eq!(fit_scale(1000.0, 2160.0, 1920.0, 1080.0), 0.45);
        assert_eq!(fit_scale(0.0, 10.0, 1920.0, 1080.0), 1.0);
    }
}
