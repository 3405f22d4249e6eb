pub mod index;
pub mod sse;
pub mod students;
