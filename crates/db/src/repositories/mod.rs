//! Repository structs providing data access for each table.

pub mod home_video_repo;

pub use home_video_repo::HomeVideoRepo;
