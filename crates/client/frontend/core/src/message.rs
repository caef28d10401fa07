//! Notice log shared by sheet frontends.
//!
//! Rule rejections tend to come in bursts (holding `+` against the attribute
//! cap produces the same notice on every key repeat), so the log folds a
//! notice that repeats the latest entry into that entry instead of pushing a
//! new line.
use std::collections::VecDeque;

/// Severity level for UI messages produced from command results.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

impl MessageLevel {
    /// Short tag shown in front of a message.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error => "error",
        }
    }
}

/// One logical notice, possibly reported several times in a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    pub level: MessageLevel,
    /// Command sequence number of the most recent occurrence.
    pub sequence: u64,
    /// How many consecutive times this notice was reported.
    pub repeats: u32,
}

impl MessageEntry {
    fn same_notice(&self, text: &str, level: MessageLevel) -> bool {
        self.level == level && self.text == text
    }
}

/// Bounded notice history, oldest entries evicted first.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a notice raised by command `sequence`.
    ///
    /// Returns `true` when a new line was added and `false` when the notice
    /// was folded into the latest entry.
    pub fn record(&mut self, text: impl Into<String>, level: MessageLevel, sequence: u64) -> bool {
        let text = text.into();
        if let Some(latest) = self.entries.back_mut()
            && latest.same_notice(&text, level)
        {
            latest.repeats = latest.repeats.saturating_add(1);
            latest.sequence = sequence;
            return false;
        }

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(MessageEntry {
            text,
            level,
            sequence,
            repeats: 1,
        });
        true
    }

    /// Most recent entries first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn latest(&self) -> Option<&MessageEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAP_NOTICE: &str = "Total attribute points cannot exceed 70";

    #[test]
    fn repeated_notice_folds_into_latest_entry() {
        let mut log = MessageLog::new(8);
        assert!(log.record(CAP_NOTICE, MessageLevel::Warning, 71));
        assert!(!log.record(CAP_NOTICE, MessageLevel::Warning, 72));
        assert!(!log.record(CAP_NOTICE, MessageLevel::Warning, 73));

        assert_eq!(log.len(), 1);
        let latest = log.latest().expect("one entry");
        assert_eq!(latest.repeats, 3);
        assert_eq!(latest.sequence, 73);
    }

    #[test]
    fn different_notice_starts_a_new_entry() {
        let mut log = MessageLog::new(8);
        log.record(CAP_NOTICE, MessageLevel::Warning, 1);
        log.record("Selected Bard", MessageLevel::Info, 2);
        log.record(CAP_NOTICE, MessageLevel::Warning, 3);

        let texts: Vec<_> = log.recent(8).map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, [CAP_NOTICE, "Selected Bard", CAP_NOTICE]);
        assert!(log.recent(8).all(|entry| entry.repeats == 1));
    }

    #[test]
    fn oldest_entries_are_evicted_at_capacity() {
        let mut log = MessageLog::new(2);
        for (seq, text) in ["a", "b", "c"].into_iter().enumerate() {
            log.record(text, MessageLevel::Info, seq as u64);
        }
        let texts: Vec<_> = log.recent(2).map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, ["c", "b"]);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut log = MessageLog::new(0);
        log.record("only", MessageLevel::Info, 1);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn levels_have_short_tags() {
        assert_eq!(MessageLevel::Info.tag(), "info");
        assert_eq!(MessageLevel::Warning.tag(), "warn");
        assert_eq!(MessageLevel::Error.tag(), "error");
    }
}
