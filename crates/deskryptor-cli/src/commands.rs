pub mod data;
pub mod export;
pub mod list;
pub mod screen;
