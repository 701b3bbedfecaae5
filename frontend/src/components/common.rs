pub mod alert;
pub mod loader;
pub mod title;
