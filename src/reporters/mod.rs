pub mod json;
pub mod style;
pub mod text;
pub mod traits;

pub use json::JsonRenderer;
pub use style::Palette;
pub use text::TextRenderer;
pub use traits::Renderer;
