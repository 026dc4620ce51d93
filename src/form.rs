use tracing::info;
use crate::constants::TOAST_DURATION;

pub const ACKNOWLEDGMENT: &str = "Thank you for your message; we will contact you soon.";

/// Receives user-visible messages.
pub trait Notify {
    fn notify(&mut self, message: &str);
}

#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    #[default]
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

/// Contact form. Submitting never sends or validates anything.
#[derive(Debug, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    focus: Field,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.focused_mut().push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.focused_mut().pop();
    }

    pub fn submit<N: Notify + ?Sized>(&self, event: &mut SubmitEvent, notifier: &mut N) {
        event.prevent_default();
        notifier.notify(ACKNOWLEDGMENT);
        info!("contact form submitted");
    }
}

/// On-screen notifier: keeps the latest message visible for a few seconds.
#[derive(Debug, Default)]
pub struct Toast {
    message: Option<String>,
    remaining: f32,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, dt: f32) {
        if self.message.is_none() {
            return;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.message = None;
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Notify for Toast {
    fn notify(&mut self, message: &str) {
        self.message = Some(message.to_string());
        self.remaining = TOAST_DURATION;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Default)]
    pub(crate) struct Recorder {
        pub(crate) messages: Vec<String>,
    }

    impl Notify for Recorder {
        fn notify(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }

    #[test]
    fn submit_prevents_default_and_acknowledges_once() {
        let form = ContactForm::new();
        let mut event = SubmitEvent::new();
        let mut recorder = Recorder::default();

        form.submit(&mut event, &mut recorder);

        assert!(event.default_prevented());
        assert_eq!(recorder.messages, vec![ACKNOWLEDGMENT.to_string()]);
    }

    #[test]
    fn submit_ignores_field_contents() {
        let mut form = ContactForm::new();
        for c in "not an email".chars() {
            form.push_char(c);
        }
        form.focus_next();
        form.push_char('@');

        let mut event = SubmitEvent::new();
        let mut recorder = Recorder::default();
        form.submit(&mut event, &mut recorder);

        assert!(event.default_prevented());
        assert_eq!(recorder.messages.len(), 1);
        assert_eq!(form.value(Field::Name), "not an email");
        assert_eq!(form.value(Field::Email), "@");
    }

    #[test]
    fn editing_targets_focused_field() {
        let mut form = ContactForm::new();
        assert_eq!(form.focus(), Field::Name);
        form.push_char('a');
        form.push_char('\n');
        form.push_char('b');
        form.pop_char();
        assert_eq!(form.value(Field::Name), "a");

        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), Field::Message);
        form.push_char('z');
        assert_eq!(form.value(Field::Message), "z");

        form.focus_next();
        assert_eq!(form.focus(), Field::Name);
        form.pop_char();
        form.pop_char();
        assert_eq!(form.value(Field::Name), "");
    }

    #[test]
    fn toast_expires() {
        let mut toast = Toast::new();
        assert_eq!(toast.message(), None);

        toast.notify(ACKNOWLEDGMENT);
        toast.update(TOAST_DURATION / 2.0);
        assert_eq!(toast.message(), Some(ACKNOWLEDGMENT));

        toast.update(TOAST_DURATION);
        assert_eq!(toast.message(), None);
    }
}
