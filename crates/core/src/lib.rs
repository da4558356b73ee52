pub mod error;
pub mod home_video;
pub mod messages;
pub mod types;
