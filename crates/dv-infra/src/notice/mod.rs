mod clocked_board;

pub use clocked_board::ClockedNoticeBoard;
