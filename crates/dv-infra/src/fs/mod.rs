mod app_data_dir;
pub mod object_storage;
pub mod signing;

pub use app_data_dir::app_data_dir;
pub use object_storage::FsObjectStorage;
pub use signing::UrlSigner;
