//! Inline error presentation. A slot is the in-memory stand-in for a form
//! page's per-field error node plus its invalid-state class.

use crate::domain::ports::ErrorPresenter;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorSlot {
    pub message: String,
    pub invalid: bool,
}

/// In-memory view of a form's error slots. A slot is created the first time
/// an error is shown for its field.
#[derive(Debug, Default)]
pub struct FormView {
    slots: HashMap<String, ErrorSlot>,
}

impl FormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_text(&self, field: &str) -> &str {
        self.slots
            .get(field)
            .map(|slot| slot.message.as_str())
            .unwrap_or("")
    }

    pub fn is_invalid(&self, field: &str) -> bool {
        self.slots.get(field).map(|slot| slot.invalid).unwrap_or(false)
    }

    pub fn invalid_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self
            .slots
            .iter()
            .filter(|(_, slot)| slot.invalid)
            .map(|(field, _)| field.as_str())
            .collect();
        fields.sort_unstable();
        fields
    }
}

impl ErrorPresenter for FormView {
    fn show_error(&mut self, field: &str, message: &str) {
        let slot = self.slots.entry(field.to_string()).or_default();
        slot.message = message.to_string();
        slot.invalid = true;
    }

    fn clear_error(&mut self, field: &str) {
        // No slot yet means nothing was ever shown; the cleared state
        // already holds.
        if let Some(slot) = self.slots.get_mut(field) {
            slot.message.clear();
            slot.invalid = false;
        }
    }
}

/// Presenter for the CLI: failing fields go straight to stderr.
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorPresenter for ConsolePresenter {
    fn show_error(&mut self, field: &str, message: &str) {
        eprintln!("❌ {}: {}", field, message);
    }

    fn clear_error(&mut self, _field: &str) {}
}
