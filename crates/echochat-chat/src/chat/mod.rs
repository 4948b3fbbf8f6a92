pub mod history;
pub mod input;
pub mod screen;
