pub mod fs;
pub mod identity;
pub mod notice;
pub mod profile;
pub mod time;

pub use fs::{app_data_dir, FsObjectStorage, UrlSigner};
pub use identity::LocalIdentity;
pub use notice::ClockedNoticeBoard;
pub use profile::FileProfileRepository;
pub use time::SystemClock;
