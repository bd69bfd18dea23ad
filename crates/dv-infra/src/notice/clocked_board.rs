use std::sync::{Arc, Mutex};

use dv_core::notice::{Notice, NoticeBoard, NoticeTone};
use dv_core::ports::{ClockPort, NoticePort};
use tracing::{info, warn};

/// Notice sink backed by a single-slot [`NoticeBoard`].
/// 基于单槽 NoticeBoard 的提示输出
///
/// Every notice is also logged, negative ones at `warn`.
pub struct ClockedNoticeBoard {
    board: Mutex<NoticeBoard>,
    clock: Arc<dyn ClockPort>,
}

impl ClockedNoticeBoard {
    pub fn new(duration_ms: i64, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            board: Mutex::new(NoticeBoard::new(duration_ms)),
            clock,
        }
    }

    /// The notice visible right now, if any.
    pub fn current(&self) -> Option<Notice> {
        let now_ms = self.clock.now_ms();
        self.board
            .lock()
            .ok()
            .and_then(|board| board.current(now_ms).cloned())
    }

    /// The last notice shown, even if it has expired since.
    ///
    /// One-shot callers such as the CLI report the outcome of a command
    /// that may have run longer than the notice duration.
    pub fn latest(&self) -> Option<Notice> {
        self.board
            .lock()
            .ok()
            .and_then(|board| board.latest().cloned())
    }

    pub fn dismiss(&self) {
        if let Ok(mut board) = self.board.lock() {
            board.dismiss();
        }
    }
}

impl NoticePort for ClockedNoticeBoard {
    fn notify(&self, notice: Notice) {
        match notice.tone {
            NoticeTone::Affirmative => info!(message = %notice.message, "notice"),
            NoticeTone::Negative => warn!(message = %notice.message, "notice"),
        }
        let now_ms = self.clock.now_ms();
        match self.board.lock() {
            Ok(mut board) => board.show(notice, now_ms),
            Err(_) => warn!("notice board lock poisoned; notice dropped"),
        }
    }
}
