use std::time::Duration;
use tracing::debug;
use crate::autoplay::Autoplay;
use crate::form::{ContactForm, Notify, SubmitEvent};
use crate::selector::{Activate, Direction, SlideSelector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Autoplay timer fired
    Tick,
    /// Prev/next control
    Step(Direction),
    /// Indicator click, carrying a 1-based ordinal
    Jump(i64),
    /// Contact form submit
    Submit,
}

/// Routes triggers to the selector and the contact form.
pub struct Carousel<S, I, N> {
    selector: SlideSelector<S, I>,
    autoplay: Option<Autoplay>,
    form: Option<ContactForm>,
    notifier: N,
}

impl<S: Activate, I: Activate, N: Notify> Carousel<S, I, N> {
    pub fn new(
        selector: SlideSelector<S, I>,
        interval: Duration,
        form: Option<ContactForm>,
        notifier: N,
    ) -> Self {
        // Selector is fully built before the timer exists
        let autoplay = Autoplay::arm(interval, selector.total());
        Self {
            selector,
            autoplay,
            form,
            notifier,
        }
    }

    pub fn is_autoplay_armed(&self) -> bool {
        self.autoplay.is_some()
    }

    pub fn selector(&self) -> &SlideSelector<S, I> {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut SlideSelector<S, I> {
        &mut self.selector
    }

    pub fn form(&self) -> Option<&ContactForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ContactForm> {
        self.form.as_mut()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Feeds frame time to the autoplay timer and dispatches a tick per firing.
    pub fn advance(&mut self, dt: Duration) {
        let fired = self.autoplay.as_mut().map_or(0, |timer| timer.advance(dt));
        for _ in 0..fired {
            self.dispatch(Trigger::Tick);
        }
    }

    pub fn dispatch(&mut self, trigger: Trigger) {
        match trigger {
            Trigger::Tick => self.selector.step(Direction::Next),
            Trigger::Step(direction) => self.selector.step(direction),
            Trigger::Jump(ordinal) => self.selector.jump_to_one_based(ordinal),
            Trigger::Submit => match &self.form {
                Some(form) => {
                    let mut event = SubmitEvent::new();
                    form.submit(&mut event, &mut self.notifier);
                    debug!(default_prevented = event.default_prevented(), "submit handled");
                }
                None => debug!("submit ignored, no contact form"),
            },
        }
    }
}
