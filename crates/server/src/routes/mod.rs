pub mod auth;
pub mod course;
pub mod enrollment;
pub mod health;
pub mod section;
pub mod student;
pub mod video;
