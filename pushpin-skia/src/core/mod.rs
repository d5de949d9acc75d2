pub mod assets;
pub mod fonts;
pub mod frame;
pub mod present;

pub use assets::{AssetLoadError, load_image};
pub use fonts::FontBook;
pub use frame::Frame;
pub use present::Presenter;
