pub mod feeds;
pub mod roster;
pub mod student;
pub mod view;
