pub mod button;

pub use button::{Button, render_button};
