pub mod config;
pub mod core;
pub mod renderer;
pub mod screens;
pub mod ui;

pub use renderer::App;
