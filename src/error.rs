use thiserror::Error;

/// Result type alias for theme loading and export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the drawing path: configuration and export.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown built-in theme '{name}'. Available: {available}")]
    UnknownTheme { name: String, available: String },

    #[error("Failed to parse theme TOML: {0}")]
    ThemeToml(#[from] toml::de::Error),

    #[error("Failed to parse theme YAML: {0}")]
    ThemeYaml(#[from] serde_yaml::Error),

    #[error("Invalid PNG scale: {0}")]
    InvalidScale(f32),

    #[error("Failed to parse SVG: {0}")]
    SvgParse(String),

    #[error("Failed to create {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    #[error("Failed to encode PNG: {0}")]
    PngEncode(String),

    #[error("Failed to convert SVG to PDF: {0}")]
    Pdf(String),

    #[error("Failed to serialize draw calls: {0}")]
    Json(#[from] serde_json::Error),
}
