use crate::notice::Notice;

/// Sink for transient outcome notices.
pub trait NoticePort: Send + Sync {
    fn notify(&self, notice: Notice);
}
