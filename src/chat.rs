//! Chat output
//!
//! Where user-facing lines go, and which of them are shown.

/// Destination for user-facing messages
pub trait ChatSink {
    fn print(&mut self, message: &str);
    fn print_error(&mut self, message: &str);
}

/// Writes normal lines to stdout and errors to stderr
#[derive(Debug, Default)]
pub struct StdoutChat;

impl ChatSink for StdoutChat {
    fn print(&mut self, message: &str) {
        println!("{}", message);
    }

    fn print_error(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Kind of message being reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatLevel {
    /// Extended match details
    Verbose,
    /// Where we went
    Info,
    /// Why we didn't go anywhere
    Error,
}

/// Which message kinds are shown in chat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLevels {
    pub verbose: bool,
    pub info: bool,
    pub error: bool,
}

impl Default for ChatLevels {
    fn default() -> Self {
        Self {
            verbose: false,
            info: true,
            error: true,
        }
    }
}

impl ChatLevels {
    pub fn silent() -> Self {
        Self {
            verbose: false,
            info: false,
            error: false,
        }
    }

    pub fn allows(&self, level: ChatLevel) -> bool {
        match level {
            ChatLevel::Verbose => self.verbose,
            ChatLevel::Info => self.info,
            ChatLevel::Error => self.error,
        }
    }

    /// Send `message` to `sink` if `level` is enabled
    pub fn emit(&self, sink: &mut dyn ChatSink, level: ChatLevel, message: &str) {
        if !self.allows(level) {
            return;
        }
        match level {
            ChatLevel::Error => sink.print_error(message),
            ChatLevel::Verbose | ChatLevel::Info => sink.print(message),
        }
    }
}
