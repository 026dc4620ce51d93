use raylib::prelude::*;
use crate::constants::INDICATOR_RADIUS;
use crate::selector::Activate;

#[derive(Debug, Default)]
pub struct IndicatorDot {
    active: bool,
}

impl IndicatorDot {
    pub fn draw(&self, d: &mut RaylibDrawHandle, center: Vector2) {
        if self.active {
            d.draw_circle_v(center, INDICATOR_RADIUS, Color::WHITE);
        } else {
            d.draw_circle_lines(center.x as i32, center.y as i32, INDICATOR_RADIUS, Color::LIGHTGRAY);
        }
    }
}

impl Activate for IndicatorDot {
    fn activate(&mut self) {
        self.active = true;
    }

    fn deactivate(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
