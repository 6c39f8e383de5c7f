//! Length-based bucketing for thought and message text.

use crate::model::category::{MessageLength, ThoughtLength};
use serde::{Deserialize, Serialize};

/// Two cut points splitting text length into three bands.
///
/// `len < short` is the short band, `short <= len < long` the medium band,
/// `len >= long` the long band. Length counts Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthThresholds {
    pub short: usize,
    pub long: usize,
}

impl LengthThresholds {
    /// Thought stream cut points (spark/fragment/stream).
    pub const THOUGHT: Self = Self {
        short: 80,
        long: 200,
    };
    /// Echo message cut points (whisper/signal/echo).
    pub const MESSAGE: Self = Self {
        short: 120,
        long: 300,
    };

    pub(crate) fn band(&self, text: &str) -> LengthBand {
        let len = text.chars().count();
        if len < self.short {
            LengthBand::Short
        } else if len < self.long {
            LengthBand::Medium
        } else {
            LengthBand::Long
        }
    }

    pub(crate) fn thought(&self, text: &str) -> ThoughtLength {
        match self.band(text) {
            LengthBand::Short => ThoughtLength::Spark,
            LengthBand::Medium => ThoughtLength::Fragment,
            LengthBand::Long => ThoughtLength::Stream,
        }
    }

    pub(crate) fn message(&self, text: &str) -> MessageLength {
        match self.band(text) {
            LengthBand::Short => MessageLength::Whisper,
            LengthBand::Medium => MessageLength::Signal,
            LengthBand::Long => MessageLength::Echo,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LengthBand {
    Short,
    Medium,
    Long,
}

#[cfg(test)]
mod tests {
    use super::{LengthBand, LengthThresholds};

    #[test]
    fn band_counts_chars_not_bytes() {
        // 79 two-byte chars is 158 bytes but still below the short cut.
        let text = "é".repeat(79);
        assert_eq!(LengthThresholds::THOUGHT.band(&text), LengthBand::Short);
        let text = "é".repeat(80);
        assert_eq!(LengthThresholds::THOUGHT.band(&text), LengthBand::Medium);
    }

    #[test]
    fn empty_text_is_short_band() {
        assert_eq!(LengthThresholds::MESSAGE.band(""), LengthBand::Short);
    }
}
