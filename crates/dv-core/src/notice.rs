//! Transient user notices
//! 临时提示消息
//!
//! Outcome messages shown at the bottom of the view. At most one is visible
//! at a time; a newer notice replaces the current one and every notice
//! expires after a fixed duration.

use serde::{Deserialize, Serialize};

/// Default time a notice stays on screen.
pub const DEFAULT_NOTICE_DURATION_MS: i64 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeTone {
    /// Operation succeeded (green).
    Affirmative,
    /// Operation failed (red).
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub tone: NoticeTone,
}

impl Notice {
    pub fn affirmative(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: NoticeTone::Affirmative,
        }
    }

    pub fn negative(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: NoticeTone::Negative,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.tone == NoticeTone::Negative
    }
}

#[derive(Debug, Clone)]
struct Slot {
    notice: Notice,
    expires_at_ms: i64,
}

/// Single-slot notice holder with time-based dismissal.
///
/// Time is passed in by the caller so the board itself stays pure.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    duration_ms: i64,
    slot: Option<Slot>,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_DURATION_MS)
    }
}

impl NoticeBoard {
    pub fn new(duration_ms: i64) -> Self {
        Self {
            duration_ms,
            slot: None,
        }
    }

    pub fn show(&mut self, notice: Notice, now_ms: i64) {
        self.slot = Some(Slot {
            notice,
            expires_at_ms: now_ms.saturating_add(self.duration_ms),
        });
    }

    /// The visible notice at `now_ms`, if it has not expired yet.
    pub fn current(&self, now_ms: i64) -> Option<&Notice> {
        self.slot
            .as_ref()
            .filter(|slot| now_ms < slot.expires_at_ms)
            .map(|slot| &slot.notice)
    }

    /// The most recent notice, expired or not. Cleared by [`dismiss`](Self::dismiss).
    pub fn latest(&self) -> Option<&Notice> {
        self.slot.as_ref().map(|slot| &slot.notice)
    }

    pub fn dismiss(&mut self) {
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_expires_after_duration() {
        let mut board = NoticeBoard::new(3_000);
        board.show(Notice::affirmative("File deleted successfully!"), 1_000);

        assert_eq!(
            board.current(3_999).map(|n| n.message.as_str()),
            Some("File deleted successfully!")
        );
        assert!(board.current(4_000).is_none());
    }

    #[test]
    fn newer_notice_replaces_current_one() {
        let mut board = NoticeBoard::default();
        board.show(Notice::negative("Delete failed: boom"), 0);
        board.show(Notice::affirmative("Shareable link copied to clipboard!"), 1_000);

        let current = board.current(1_500).unwrap();
        assert_eq!(current.tone, NoticeTone::Affirmative);
        // The replacement restarts the timer.
        assert!(board.current(3_500).is_some());
    }

    #[test]
    fn dismiss_clears_slot() {
        let mut board = NoticeBoard::default();
        board.show(Notice::negative("x"), 0);
        board.dismiss();
        assert!(board.current(1).is_none());
        assert!(board.latest().is_none());
    }

    #[test]
    fn latest_outlives_expiry() {
        let mut board = NoticeBoard::new(3_000);
        board.show(Notice::affirmative("Files uploaded successfully!"), 0);

        assert!(board.current(10_000).is_none());
        assert_eq!(
            board.latest().map(|n| n.message.as_str()),
            Some("Files uploaded successfully!")
        );
    }
}
