//! User-facing log lines collected during a dispatch.
//!
//! Handlers never print. They push [`Message`]s onto their
//! [`Context`](crate::context::Context) and the printer decides where each one goes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Plain,
    Step,
    Info,
    Success,
    Warning,
    Failure,
}

impl MessageLevel {
    /// Failures and warnings go to stderr.
    pub fn is_error_channel(&self) -> bool {
        matches!(self, MessageLevel::Warning | MessageLevel::Failure)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: MessageLevel,
    pub content: String,
}

impl Message {
    pub fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Plain, content)
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }

    pub fn failure(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Failure, content)
    }

    /// A numbered progress line: `"2 Checking length..."`.
    pub fn step(number: usize, content: &str) -> Self {
        Self::new(MessageLevel::Step, format!("{} {}...", number, content))
    }
}
