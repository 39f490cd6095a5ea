pub mod duration;
pub mod event;
pub mod session;
pub mod status;
pub mod student;
