const GENERIC_FAMILIES: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
];

/// A parsed CSS font shorthand, e.g. `bold 14px Arial`.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 10.0,
            bold: false,
            italic: false,
        }
    }
}

impl FontSpec {
    /// Parse `[style] [weight] <size>px[/line-height] <family>`.
    ///
    /// Returns `None` when the size or family is missing, in which case a
    /// canvas keeps its previous font.
    pub fn parse(css: &str) -> Option<Self> {
        let mut tokens = css.split_whitespace();
        let mut bold = false;
        let mut italic = false;

        let size = loop {
            let token = tokens.next()?;
            if let Some(size) = parse_px(token) {
                break size;
            }
            match token.to_ascii_lowercase().as_str() {
                "italic" | "oblique" => italic = true,
                "bold" | "bolder" => bold = true,
                "normal" | "lighter" | "small-caps" => {}
                weight => bold = weight.parse::<u16>().ok()? >= 600,
            }
        };

        let family = tokens.collect::<Vec<_>>().join(" ");
        if family.is_empty() {
            return None;
        }

        Some(Self {
            family,
            size,
            bold,
            italic,
        })
    }

    /// Family list with a generic sans-serif fallback appended when none is named.
    pub fn family_with_fallback(&self) -> String {
        let has_generic = self.family.split(',').any(|name| {
            let name = name.trim().trim_matches(|c| c == '"' || c == '\'');
            GENERIC_FAMILIES
                .iter()
                .any(|generic| generic.eq_ignore_ascii_case(name))
        });

        if has_generic {
            self.family.clone()
        } else {
            format!("{}, sans-serif", self.family)
        }
    }
}

fn parse_px(token: &str) -> Option<f64> {
    let size = token.split('/').next()?.strip_suffix("px")?;
    size.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::FontSpec;

    #[test]
    fn parses_bold_title_font() {
        let font = FontSpec::parse("bold 24px Arial").expect("valid font");
        assert_eq!(font.family, "Arial");
        assert_eq!(font.size, 24.0);
        assert!(font.bold);
        assert!(!font.italic);
    }

    #[test]
    fn parses_style_numeric_weight_and_line_height() {
        let font = FontSpec::parse("italic 700 12.5px/1.4 \"Noto Sans\", serif").expect("valid");
        assert!(font.italic);
        assert!(font.bold);
        assert_eq!(font.size, 12.5);
        assert_eq!(font.family, "\"Noto Sans\", serif");
    }

    #[test]
    fn light_numeric_weight_is_not_bold() {
        let font = FontSpec::parse("300 12px Arial").expect("valid");
        assert!(!font.bold);
    }

    #[test]
    fn rejects_fonts_without_size_or_family() {
        assert_eq!(FontSpec::parse("bold Arial"), None);
        assert_eq!(FontSpec::parse("14px"), None);
        assert_eq!(FontSpec::parse("heavy 14px Arial"), None);
    }

    #[test]
    fn appends_generic_fallback_only_when_missing() {
        let arial = FontSpec::parse("12px Arial").expect("valid");
        assert_eq!(arial.family_with_fallback(), "Arial, sans-serif");

        let mono = FontSpec::parse("12px Menlo, monospace").expect("valid");
        assert_eq!(mono.family_with_fallback(), "Menlo, monospace");
    }
}
