//! The bulldozer cursor glyph.
//!
//! Drawn on a 64x64 view box in white strokes; the overlay blends it with
//! `mix-blend-mode: difference` so it stays visible on both themes. The
//! only part that moves between display modes is the blade assembly.

use std::fmt::Write as _;

use crate::cursor::DisplayMode;

/// Edge length of the SVG view box.
pub const VIEW_BOX: u32 = 64;

/// Blade and arm coordinates for one display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulldozerGeometry {
    pub blade_top: u32,
    pub blade_bottom: u32,
    pub arm_end: u32,
}

impl BulldozerGeometry {
    const BLADE_HEIGHT: u32 = 10;
    const TOOTH_LENGTH: u32 = 4;

    pub fn for_mode(mode: DisplayMode) -> Self {
        let (blade_top, arm_end) = match mode {
            DisplayMode::Up => (30, 34),
            DisplayMode::Down => (36, 40),
        };

        Self {
            blade_top,
            blade_bottom: blade_top + Self::BLADE_HEIGHT,
            arm_end,
        }
    }
}

/// SVG markup of the glyph, rendered at `size` x `size` pixels.
pub fn bulldozer_svg(mode: DisplayMode, size: u32) -> String {
    let g = BulldozerGeometry::for_mode(mode);
    let mut svg = String::with_capacity(2048);

    // write! into a String cannot fail
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {vb} {vb}" fill="none" aria-hidden="true" data-mode="{mode}">"#,
        vb = VIEW_BOX,
    );

    // Tracks
    svg.push_str(r#"<rect x="10" y="44" width="38" height="10" rx="5" stroke="white" stroke-width="4"/>"#);
    for cx in [18, 26, 34, 42] {
        let _ = write!(
            svg,
            r#"<circle cx="{cx}" cy="49" r="2.2" fill="white" opacity="0.9"/>"#
        );
    }

    // Body and cab
    svg.push_str(r#"<rect x="16" y="30" width="26" height="14" rx="4" stroke="white" stroke-width="4"/>"#);
    svg.push_str(r#"<rect x="22" y="22" width="14" height="10" rx="3" stroke="white" stroke-width="4"/>"#);
    svg.push_str(r#"<path d="M26 24h6" stroke="white" stroke-width="3" stroke-linecap="round" opacity="0.9"/>"#);

    // Arms
    let _ = write!(
        svg,
        r#"<path d="M42 36 L52 {}" stroke="white" stroke-width="4" stroke-linecap="round"/>"#,
        g.arm_end
    );
    let _ = write!(
        svg,
        r#"<path d="M42 40 L52 {}" stroke="white" stroke-width="4" stroke-linecap="round" opacity="0.9"/>"#,
        g.arm_end + 4
    );

    // Blade
    let _ = write!(
        svg,
        r#"<path d="M52 {} H60 V{} H52" stroke="white" stroke-width="4" stroke-linejoin="round"/>"#,
        g.blade_top, g.blade_bottom
    );
    let tip = g.blade_bottom + BulldozerGeometry::TOOTH_LENGTH;
    for x in [52, 55, 58] {
        let _ = write!(
            svg,
            r#"<path d="M{x} {} L{} {tip}" stroke="white" stroke-width="3" stroke-linecap="round"/>"#,
            g.blade_bottom,
            x + 2,
        );
    }

    svg.push_str("</svg>");
    svg
}

/// Rasterized glyph as straight-alpha RGBA.
#[cfg(feature = "export")]
#[derive(Clone)]
pub struct RenderedIcon {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

#[cfg(feature = "export")]
impl std::fmt::Debug for RenderedIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderedIcon")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Render the glyph to an RGBA bitmap at `size` x `size`.
#[cfg(feature = "export")]
pub fn rasterize_icon(mode: DisplayMode, size: u32) -> crate::error::FolioResult<RenderedIcon> {
    use crate::error::FolioError;

    let size = size.max(1);
    let svg = bulldozer_svg(mode, size);

    let opts = resvg::usvg::Options::default();
    let tree = resvg::usvg::Tree::from_str(&svg, &opts)
        .map_err(|e| FolioError::IconRender(format!("{} glyph: {}", mode, e)))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| FolioError::IconRender(format!("Cannot allocate {0}x{0} pixmap", size)))?;

    let tree_size = tree.size();
    let transform = resvg::tiny_skia::Transform::from_scale(
        size as f32 / tree_size.width(),
        size as f32 / tree_size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // PNG wants straight alpha
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    log::debug!("[CURSOR] Rasterized {} glyph at {}px", mode, size);

    Ok(RenderedIcon {
        width: size,
        height: size,
        data,
    })
}
