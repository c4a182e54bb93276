use crate::model::{PatternMatch, SourceBuffer};

pub mod braces;
pub mod chains;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of one repair pass over one buffer.
#[derive(Debug, Clone)]
pub struct RepairResult {
    pub buffer: SourceBuffer,
    pub changed: bool,
    /// Trigger occurrences seen during the pass (empty for whole-buffer
    /// repairs that have no trigger pattern).
    pub matches: Vec<PatternMatch>,
    pub messages: Vec<CmdMessage>,
}

impl RepairResult {
    pub fn unchanged(buffer: SourceBuffer) -> Self {
        Self {
            buffer,
            changed: false,
            matches: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}
