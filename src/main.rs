use std::time::Duration;
use anyhow::Context;
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod autoplay;
mod cli;
mod constants;
mod error;
mod form;
mod indicator;
mod input;
mod layout;
mod overlay;
mod selector;
mod slide;
mod texture_loader;
mod trigger;

use crate::cli::Args;
use crate::constants::FPS;
use crate::form::{ContactForm, Toast};
use crate::indicator::IndicatorDot;
use crate::input::Command;
use crate::layout::Layout;
use crate::selector::{Activate, SlideSelector};
use crate::slide::Slide;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};
use crate::trigger::Carousel;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    // --- Discover slides ---
    let mut image_paths = load_sorted_image_paths(&args.image_dir)
        .with_context(|| format!("loading images from {}", args.image_dir.display()))?;
    if args.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }
    info!("found {} images in {}", image_paths.len(), args.image_dir.display());

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut slides = Vec::with_capacity(image_paths.len());
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!("skipping slide: {}", e),
        }
    }
    if slides.is_empty() {
        warn!("no slides loaded, autoplay disabled");
    }

    let indicators: Vec<IndicatorDot> = (0..slides.len()).map(|_| IndicatorDot::default()).collect();
    let selector = SlideSelector::new(slides, indicators)?;
    let form = args.contact_form.then(ContactForm::new);
    let mut carousel = Carousel::new(selector, args.interval(), form, Toast::new());
    let mut form_open = false;

    info!(
        slides = carousel.selector().total(),
        autoplay = carousel.is_autoplay_armed(),
        "carousel ready"
    );

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time().max(0.0);
        let layout = Layout::new(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            carousel.selector().total(),
        );

        for command in input::poll(&mut rl, &layout, form_open) {
            match command {
                Command::Trigger(trigger) => carousel.dispatch(trigger),
                Command::ToggleForm => form_open = !form_open && carousel.form().is_some(),
                Command::FocusNextField => {
                    if let Some(form) = carousel.form_mut() {
                        form.focus_next();
                    }
                }
                Command::Type(c) => {
                    if let Some(form) = carousel.form_mut() {
                        form.push_char(c);
                    }
                }
                Command::Backspace => {
                    if let Some(form) = carousel.form_mut() {
                        form.pop_char();
                    }
                }
            }
        }

        carousel.advance(Duration::from_secs_f32(dt));
        for slide in carousel.selector_mut().slides_mut() {
            slide.update(dt);
        }
        carousel.notifier_mut().update(dt);

        // --- Render ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        let selector = carousel.selector();
        if selector.is_empty() {
            overlay::draw_empty_notice(&mut d, &layout);
        } else {
            // Fading-out slides first, the active one on top
            let (active, fading): (Vec<&Slide>, Vec<&Slide>) =
                selector.slides().iter().partition(|slide| slide.is_active());
            for slide in fading.into_iter().chain(active) {
                slide.draw(&mut d, layout.screen_width(), layout.screen_height());
            }
            overlay::draw_controls(&mut d, &layout);
            for (i, indicator) in selector.indicators().iter().enumerate() {
                indicator.draw(&mut d, layout.indicator_center(i));
            }
        }

        if form_open {
            if let Some(form) = carousel.form() {
                overlay::draw_form(&mut d, form, &layout);
            }
        }
        overlay::draw_toast(&mut d, carousel.notifier(), &layout);
    }

    Ok(())
}
