//! Mock chat sink for testing
//!
//! Records all printed lines for verification.

use aethergo::chat::ChatSink;
use std::sync::{Arc, Mutex};

/// Chat sink that records printed and error lines
#[derive(Debug, Clone, Default)]
pub struct MockChat {
    pub printed: Arc<Mutex<Vec<String>>>,
    pub errors: Arc<Mutex<Vec<String>>>,
}

impl MockChat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_printed(&self) -> Vec<String> {
        self.printed.lock().unwrap().clone()
    }

    pub fn get_errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    /// Check if any printed line contains `text`
    pub fn was_printed(&self, text: &str) -> bool {
        self.printed.lock().unwrap().iter().any(|s| s.contains(text))
    }

    pub fn is_quiet(&self) -> bool {
        self.printed.lock().unwrap().is_empty() && self.errors.lock().unwrap().is_empty()
    }
}

impl ChatSink for MockChat {
    fn print(&mut self, message: &str) {
        self.printed.lock().unwrap().push(message.to_string());
    }

    fn print_error(&mut self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
