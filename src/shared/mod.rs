//! Geteilte Konfiguration: Default-Konstanten und Laufzeit-Optionen.

pub mod options;

pub use options::DrawingOptions;
pub use options::{
    DEFAULT_BACKGROUND, DEFAULT_BORDER, DEFAULT_BORDER_WIDTH, DEFAULT_LINE_WIDTH,
    DEFAULT_SHAPE_COLOR, DEFAULT_TEXT_FACE,
};
