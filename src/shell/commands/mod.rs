pub mod files;
pub mod navigation;
pub mod network;
pub mod screen;
