// src/handlers/mod.rs
pub mod script;
pub mod status;
pub mod ui;
pub mod video;
pub mod voice;
