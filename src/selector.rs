use tracing::debug;
use crate::error::CarouselError;

/// Something the selector can mark as the currently shown item.
pub trait Activate {
    fn activate(&mut self);
    fn deactivate(&mut self);
    fn is_active(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn offset(self) -> i64 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Owns the slide and indicator handles and keeps exactly one of each active.
///
/// Both sequences are fixed at construction. With no slides the selector
/// stays inert: every selection is accepted and nothing gets activated.
pub struct SlideSelector<S, I> {
    slides: Vec<S>,
    indicators: Vec<I>,
    current_index: usize,
}

impl<S: Activate, I: Activate> SlideSelector<S, I> {
    pub fn new(slides: Vec<S>, indicators: Vec<I>) -> Result<Self, CarouselError> {
        if slides.len() != indicators.len() {
            return Err(CarouselError::IndicatorCountMismatch {
                slides: slides.len(),
                indicators: indicators.len(),
            });
        }

        let mut selector = Self {
            slides,
            indicators,
            current_index: 0,
        };
        // First slide starts out shown
        selector.select_slide(0);
        Ok(selector)
    }

    pub fn total(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.current_index)
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    /// Mutable access for per-frame animation. Callers must not toggle activation.
    pub fn slides_mut(&mut self) -> &mut [S] {
        &mut self.slides
    }

    pub fn indicators(&self) -> &[I] {
        &self.indicators
    }

    /// Shows the slide at `target_index`, wrapping one step past either end.
    ///
    /// Anything at or past the end lands on the first slide and anything
    /// below zero lands on the last one; far out-of-range values collapse
    /// to those ends instead of being reduced modulo the slide count.
    pub fn select_slide(&mut self, target_index: i64) {
        for slide in self.slides.iter_mut() {
            slide.deactivate();
        }
        for indicator in self.indicators.iter_mut() {
            indicator.deactivate();
        }

        let total = self.slides.len();
        if total == 0 {
            return;
        }

        self.current_index = wrap_index(target_index, total);
        self.slides[self.current_index].activate();
        self.indicators[self.current_index].activate();
        debug!(target_index, current_index = self.current_index, total, "slide selected");
    }

    pub fn step(&mut self, direction: Direction) {
        self.select_slide(self.current_index as i64 + direction.offset());
    }

    /// Jumps to a slide by its 1-based ordinal, as supplied by indicator clicks.
    pub fn jump_to_one_based(&mut self, one_based_index: i64) {
        self.select_slide(one_based_index.saturating_sub(1));
    }
}

// `total` must be non-zero.
fn wrap_index(target_index: i64, total: usize) -> usize {
    if target_index >= total as i64 {
        0
    } else if target_index < 0 {
        total - 1
    } else {
        target_index as usize
    }
}
