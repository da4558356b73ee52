pub mod home_video;
