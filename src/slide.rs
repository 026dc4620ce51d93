use raylib::prelude::*;
use crate::constants::FADE_DURATION;
use crate::layout::fit_scale;
use crate::selector::Activate;

pub struct Slide {
    image: Texture2D,
    active: bool,
    opacity: f32,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self {
            image,
            active: false,
            opacity: 0.0,
        }
    }

    /// Fades toward fully shown while active and toward hidden otherwise.
    pub fn update(&mut self, dt: f32) {
        let target = if self.active { 1.0 } else { 0.0 };
        self.opacity = approach(self.opacity, target, dt / FADE_DURATION);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, screen_width: f32, screen_height: f32) {
        if self.opacity <= 0.0 {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scale = fit_scale(tex_width, tex_height, screen_width, screen_height);

        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                (screen_width - scaled_width) * 0.5,
                (screen_height - scaled_height) * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, (self.opacity * 255.0) as u8),
        );
    }
}

impl Activate for Slide {
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

fn approach(current: f32, target: f32, max_step: f32) -> f32 {
    if current < target {
        (current + max_step).min(target)
    } else {
        (current - max_step).max(target)
    }
}
