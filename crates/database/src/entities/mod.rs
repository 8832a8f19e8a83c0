pub mod course;
pub mod enrollment;
pub mod section;
pub mod student;
pub mod video;
