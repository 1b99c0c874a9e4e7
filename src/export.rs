//! Turn an SVG document into PNG or PDF bytes.
//!
//! Both paths load system fonts plus a local `fonts/` directory and point the
//! generic families at whatever faces are actually installed, so `Arial,
//! sans-serif` resolves on machines without Arial.

use std::path::Path;
use std::sync::Arc;

use log::debug;
use resvg::usvg;
use tiny_skia::{Pixmap, Transform};

use crate::error::{Error, Result};

const LOCAL_FONT_DIR: &str = "fonts";

/// Generic-family targets picked from the installed faces.
#[derive(Debug, Default, PartialEq)]
struct FallbackFamilies {
    sans: Option<String>,
    serif: Option<String>,
    mono: Option<String>,
}

impl FallbackFamilies {
    fn pick<'a>(families: impl IntoIterator<Item = &'a str>) -> Self {
        let mut sans = None;
        let mut serif = None;
        let mut mono = None;
        let mut first = None;

        for family in families {
            if first.is_none() {
                first = Some(family.to_string());
            }

            let lower = family.to_ascii_lowercase();
            if sans.is_none() && lower.contains("sans") {
                sans = Some(family.to_string());
            }
            if serif.is_none() && lower.contains("serif") && !lower.contains("sans") {
                serif = Some(family.to_string());
            }
            if mono.is_none() && (lower.contains("mono") || lower.contains("code")) {
                mono = Some(family.to_string());
            }
        }

        Self {
            mono: mono.or_else(|| sans.clone()).or_else(|| first.clone()),
            serif: serif.or_else(|| first.clone()),
            sans: sans.or(first),
        }
    }
}

// resvg and svg2pdf each pin their own fontdb, so the setup is shared by macro.
macro_rules! configure_fonts {
    ($fontdb:expr) => {{
        let fontdb = $fontdb;
        fontdb.load_system_fonts();

        let local_fonts = Path::new(LOCAL_FONT_DIR);
        if local_fonts.is_dir() {
            fontdb.load_fonts_dir(local_fonts);
        }

        let fallbacks = FallbackFamilies::pick(
            fontdb
                .faces()
                .flat_map(|face| face.families.iter().map(|(family, _)| family.as_str())),
        );
        debug!("font fallbacks: {:?}", fallbacks);

        if let Some(family) = fallbacks.sans.as_deref() {
            fontdb.set_sans_serif_family(family);
        }
        if let Some(family) = fallbacks.serif.as_deref() {
            fontdb.set_serif_family(family);
        }
        if let Some(family) = fallbacks.mono.as_deref() {
            fontdb.set_monospace_family(family);
        }
    }};
}

/// Rasterize an SVG document, multiplying its size by `scale`.
pub fn svg_to_png(svg: &str, scale: f32) -> Result<Vec<u8>> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(Error::InvalidScale(scale));
    }

    let mut opts = usvg::Options::default();
    configure_fonts!(opts.fontdb_mut());

    let tree = usvg::Tree::from_str(svg, &opts).map_err(|e| Error::SvgParse(e.to_string()))?;

    let width = (tree.size().width() * scale).ceil() as u32;
    let height = (tree.size().height() * scale).ceil() as u32;
    debug!("rasterizing {}x{} at scale {}", width, height, scale);

    let mut pixmap = Pixmap::new(width, height).ok_or(Error::Pixmap { width, height })?;
    resvg::render(
        &tree,
        Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap
        .encode_png()
        .map_err(|e| Error::PngEncode(e.to_string()))
}

/// Convert an SVG document to a single-page PDF with text outlined as paths.
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>> {
    use svg2pdf::usvg::fontdb;

    let mut fontdb = fontdb::Database::new();
    configure_fonts!(&mut fontdb);

    let opts = svg2pdf::usvg::Options {
        fontdb: Arc::new(fontdb),
        ..Default::default()
    };
    let tree = svg2pdf::usvg::Tree::from_str(svg, &opts)
        .map_err(|e| Error::SvgParse(e.to_string()))?;

    // Outlined text survives viewers that cannot load embedded fonts.
    let options = svg2pdf::ConversionOptions {
        embed_text: false,
        ..Default::default()
    };
    debug!("converting SVG to PDF");

    svg2pdf::to_pdf(&tree, options, svg2pdf::PageOptions::default())
        .map_err(|e| Error::Pdf(e.to_string()))
}
