pub mod admin;
pub mod home_video;
