//! Profile use cases
//! 用户资料用例

mod get_profile;
mod update_profile;
mod update_profile_picture;

pub use get_profile::GetProfile;
pub use update_profile::UpdateProfile;
pub use update_profile_picture::UpdateProfilePicture;
