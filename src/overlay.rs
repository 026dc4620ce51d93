use raylib::prelude::*;
use crate::form::{ContactForm, Field, Toast};
use crate::layout::Layout;
use crate::selector::Direction;

const TEXT_SIZE: i32 = 20;
const PANEL_WIDTH: f32 = 480.0;
const FIELD_HEIGHT: f32 = 36.0;
const PANEL_PADDING: f32 = 16.0;

pub fn draw_controls(d: &mut RaylibDrawHandle, layout: &Layout) {
    for direction in [Direction::Previous, Direction::Next] {
        let rect = layout.control_rect(direction);
        d.draw_rectangle_rec(rect, Color::new(0, 0, 0, 96));

        let cx = rect.x + rect.width * 0.5;
        let cy = rect.y + rect.height * 0.5;
        let half = rect.width * 0.25;
        // Vertices in counter-clockwise order
        match direction {
            Direction::Previous => d.draw_triangle(
                Vector2::new(cx - half, cy),
                Vector2::new(cx + half, cy + half),
                Vector2::new(cx + half, cy - half),
                Color::WHITE,
            ),
            Direction::Next => d.draw_triangle(
                Vector2::new(cx + half, cy),
                Vector2::new(cx - half, cy - half),
                Vector2::new(cx - half, cy + half),
                Color::WHITE,
            ),
        }
    }
}

pub fn draw_empty_notice(d: &mut RaylibDrawHandle, layout: &Layout) {
    d.draw_text(
        "No slides loaded.",
        (layout.screen_width() * 0.5) as i32 - 90,
        (layout.screen_height() * 0.5) as i32 - TEXT_SIZE / 2,
        TEXT_SIZE,
        Color::RED,
    );
}

pub fn draw_form(d: &mut RaylibDrawHandle, form: &ContactForm, layout: &Layout) {
    let panel_height = PANEL_PADDING * 2.0 + (Field::ALL.len() as f32 + 1.0) * (FIELD_HEIGHT + PANEL_PADDING);
    let panel = Rectangle::new(
        layout.screen_width() * 0.5 - PANEL_WIDTH * 0.5,
        layout.screen_height() * 0.5 - panel_height * 0.5,
        PANEL_WIDTH,
        panel_height,
    );
    d.draw_rectangle_rec(panel, Color::new(20, 20, 20, 230));
    d.draw_text(
        "Contact us  (Tab: next field, Enter: send, F2: close)",
        (panel.x + PANEL_PADDING) as i32,
        (panel.y + PANEL_PADDING) as i32,
        TEXT_SIZE - 4,
        Color::LIGHTGRAY,
    );

    for (row, field) in Field::ALL.into_iter().enumerate() {
        let y = panel.y + PANEL_PADDING + (row as f32 + 1.0) * (FIELD_HEIGHT + PANEL_PADDING);
        let input = Rectangle::new(panel.x + PANEL_PADDING, y, PANEL_WIDTH - PANEL_PADDING * 2.0, FIELD_HEIGHT);
        let focused = form.focus() == field;

        d.draw_rectangle_rec(input, Color::new(40, 40, 40, 255));
        d.draw_rectangle_lines_ex(input, 1.0, if focused { Color::WHITE } else { Color::GRAY });

        let cursor = if focused { "_" } else { "" };
        d.draw_text(
            &format!("{}: {}{}", field.label(), form.value(field), cursor),
            (input.x + 8.0) as i32,
            (input.y + (FIELD_HEIGHT - TEXT_SIZE as f32) * 0.5) as i32,
            TEXT_SIZE,
            Color::WHITE,
        );
    }
}

pub fn draw_toast(d: &mut RaylibDrawHandle, toast: &Toast, layout: &Layout) {
    if let Some(message) = toast.message() {
        let banner = Rectangle::new(0.0, 24.0, layout.screen_width(), TEXT_SIZE as f32 + 16.0);
        d.draw_rectangle_rec(banner, Color::new(0, 0, 0, 200));
        d.draw_text(message, 24, (banner.y + 8.0) as i32, TEXT_SIZE, Color::LIME);
    }
}
