use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const LIGHT_BACKGROUND: &str = "#f5f5f5";
const LIGHT_HEADING: &str = "#333";
const LIGHT_CAPTION: &str = "#666";
const LIGHT_TEXT: &str = "#333";
const LIGHT_MUTED_TEXT: &str = "#666";
const LIGHT_BORDER: &str = "#999";
const LIGHT_EDGE: &str = "#666";
const LIGHT_SHADOW: &str = "rgba(0, 0, 0, 0.2)";

const BUILTIN_THEMES: &[(&str, &str)] = &[
    ("dark", include_str!("../themes/dark.toml")),
    ("light", include_str!("../themes/light.toml")),
];

const SHADOW_BLUR: f64 = 10.0;
const SHADOW_OFFSET: f64 = 3.0;
const FONT_FAMILY: &str = "Arial";

/// Neutral colors, shadow and font used by the box and arrow renderers.
///
/// Box fill colors are part of the diagram layout, not the theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_background")]
    pub background_color: String,
    /// Diagram title, drawn on the background
    #[serde(default = "default_heading")]
    pub heading_color: String,
    /// Footnote, drawn on the background
    #[serde(default = "default_caption")]
    pub caption_color: String,
    /// Box titles, drawn on the box fill
    #[serde(default = "default_text")]
    pub text_color: String,
    /// Box subtitles, drawn on the box fill
    #[serde(default = "default_muted_text")]
    pub muted_text_color: String,
    #[serde(default = "default_border")]
    pub border_color: String,
    #[serde(default = "default_edge")]
    pub edge_color: String,

    #[serde(default = "default_shadow")]
    pub shadow_color: String,
    #[serde(default = "default_shadow_blur")]
    pub shadow_blur: f64,
    #[serde(default = "default_shadow_offset")]
    pub shadow_offset_x: f64,
    #[serde(default = "default_shadow_offset")]
    pub shadow_offset_y: f64,

    #[serde(default = "default_font_family")]
    pub font_family: String,
}

fn default_background() -> String {
    LIGHT_BACKGROUND.to_string()
}
fn default_heading() -> String {
    LIGHT_HEADING.to_string()
}
fn default_caption() -> String {
    LIGHT_CAPTION.to_string()
}
fn default_text() -> String {
    LIGHT_TEXT.to_string()
}
fn default_muted_text() -> String {
    LIGHT_MUTED_TEXT.to_string()
}
fn default_border() -> String {
    LIGHT_BORDER.to_string()
}
fn default_edge() -> String {
    LIGHT_EDGE.to_string()
}
fn default_shadow() -> String {
    LIGHT_SHADOW.to_string()
}
fn default_shadow_blur() -> f64 {
    SHADOW_BLUR
}
fn default_shadow_offset() -> f64 {
    SHADOW_OFFSET
}
fn default_font_family() -> String {
    FONT_FAMILY.to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Theme {
            background_color: LIGHT_BACKGROUND.to_string(),
            heading_color: LIGHT_HEADING.to_string(),
            caption_color: LIGHT_CAPTION.to_string(),
            text_color: LIGHT_TEXT.to_string(),
            muted_text_color: LIGHT_MUTED_TEXT.to_string(),
            border_color: LIGHT_BORDER.to_string(),
            edge_color: LIGHT_EDGE.to_string(),

            shadow_color: LIGHT_SHADOW.to_string(),
            shadow_blur: SHADOW_BLUR,
            shadow_offset_x: SHADOW_OFFSET,
            shadow_offset_y: SHADOW_OFFSET,

            font_family: FONT_FAMILY.to_string(),
        }
    }

    pub fn from_builtin(name: &str) -> Result<Self> {
        let normalized = name.trim().to_ascii_lowercase();
        let content = BUILTIN_THEMES
            .iter()
            .find(|(n, _)| *n == normalized)
            .map(|(_, c)| *c)
            .ok_or_else(|| Error::UnknownTheme {
                name: name.to_string(),
                available: Self::list_builtins().join(", "),
            })?;
        Self::from_toml(content)
    }

    pub fn list_builtins() -> Vec<&'static str> {
        BUILTIN_THEMES.iter().map(|(n, _)| *n).collect()
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Try TOML first, then YAML; on double failure the TOML error is kept.
    pub fn from_toml_or_yaml(content: &str) -> Result<Self> {
        Self::from_toml(content)
            .or_else(|toml_err| Self::from_yaml(content).map_err(|_| toml_err))
    }

    /// CSS font shorthand for the given size and weight in this theme's family.
    pub fn font(&self, size: f64, bold: bool) -> String {
        if bold {
            format!("bold {}px {}", size, self.font_family)
        } else {
            format!("{}px {}", size, self.font_family)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;
    use crate::error::Error;

    #[test]
    fn light_builtin_matches_default() {
        let light = Theme::from_builtin("light").expect("light theme parses");
        assert_eq!(light, Theme::default());
    }

    #[test]
    fn every_builtin_parses() {
        for name in Theme::list_builtins() {
            Theme::from_builtin(name).unwrap_or_else(|e| panic!("{name}: {e}"));
        }
    }

    #[test]
    fn from_builtin_ignores_case_and_surrounding_whitespace() {
        let plain = Theme::from_builtin("dark").expect("plain name");
        let shouty = Theme::from_builtin("  DARK ").expect("shouty name");
        assert_eq!(plain, shouty);
    }

    #[test]
    fn unknown_builtin_lists_available_names() {
        let err = Theme::from_builtin("solarized").unwrap_err();
        assert!(matches!(err, Error::UnknownTheme { .. }));
        assert!(err.to_string().contains("dark, light"));
    }

    #[test]
    fn partial_toml_falls_back_to_light_defaults() {
        let theme = Theme::from_toml("edge_color = \"#ff0000\"\n").expect("partial toml");
        assert_eq!(theme.edge_color, "#ff0000");
        assert_eq!(theme.background_color, "#f5f5f5");
        assert_eq!(theme.shadow_blur, 10.0);
    }

    #[test]
    fn yaml_theme_parses() {
        let theme = Theme::from_yaml("background_color: \"#000000\"\nfont_family: Helvetica\n")
            .expect("yaml theme");
        assert_eq!(theme.background_color, "#000000");
        assert_eq!(theme.font_family, "Helvetica");
        assert_eq!(theme.text_color, "#333");
    }

    #[test]
    fn toml_or_yaml_accepts_either_format() {
        let toml = Theme::from_toml_or_yaml("edge_color = \"#00ff00\"\n").expect("toml");
        assert_eq!(toml.edge_color, "#00ff00");

        let yaml = Theme::from_toml_or_yaml("edge_color: \"#0000ff\"\n").expect("yaml");
        assert_eq!(yaml.edge_color, "#0000ff");
    }

    #[test]
    fn toml_or_yaml_reports_the_toml_error_when_both_fail() {
        let err = Theme::from_toml_or_yaml("shadow_blur = [\n").unwrap_err();
        assert!(matches!(err, Error::ThemeToml(_)));
        assert!(err.to_string().starts_with("Failed to parse theme TOML"));
    }

    #[test]
    fn font_shorthand_includes_weight_only_when_bold() {
        let theme = Theme::default();
        assert_eq!(theme.font(14.0, true), "bold 14px Arial");
        assert_eq!(theme.font(12.0, false), "12px Arial");
    }
}
