//! Static export: prerendered page, content bundle and cursor sprites.
//!
//! The exported page works without script (sections are plain markup and a
//! `<noscript>` block swaps in the bulldozer as a native CSS cursor). With
//! script, it loads the `folio-web` module which mounts the animated
//! overlay.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::content::SiteContent;
use crate::cursor::DisplayMode;
use crate::error::{FolioError, FolioResult, PathContext};
use crate::rendering::{rasterize_icon, style};
use crate::sections::{escape_html, render_sections, CARET_STYLESHEET, CARET_STYLE_ID};
use crate::theme::{Theme, DARK_CLASS};

pub const INDEX_FILE: &str = "index.html";
pub const CONTENT_FILE: &str = "content.json";

/// Element the sections are rendered into and the overlay mounts on.
pub const ROOT_ID: &str = "app";

/// Path of the wasm-pack output, relative to the page.
pub const WEB_MODULE: &str = "./pkg/folio_web.js";

pub fn sprite_file_name(mode: DisplayMode) -> String {
    format!("cursor-{}.png", mode)
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub theme: Theme,
    pub config: SiteConfig,
}

impl ExportOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            theme: Theme::default(),
            config: SiteConfig::default(),
        }
    }
}

/// Files written by one export run.
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    pub files: Vec<PathBuf>,
}

pub fn export_site(options: &ExportOptions) -> FolioResult<ExportReport> {
    let out_dir = &options.out_dir;
    fs::create_dir_all(out_dir).for_path("create", out_dir)?;

    let content = SiteContent::load();
    let mut report = ExportReport::default();

    let page = render_page(&content, &options.config, options.theme)?;
    report.files.push(write_file(out_dir, INDEX_FILE, page.as_bytes())?);

    let json = serde_json::to_string_pretty(&content)?;
    report.files.push(write_file(out_dir, CONTENT_FILE, json.as_bytes())?);

    let size = options.config.cursor.icon_size;
    for mode in [DisplayMode::Up, DisplayMode::Down] {
        let path = out_dir.join(sprite_file_name(mode));
        write_sprite(&path, mode, size)?;
        report.files.push(path);
    }

    log::info!(
        "[EXPORT] Wrote {} files to {}",
        report.files.len(),
        out_dir.display()
    );
    Ok(report)
}

/// Full HTML document for the site.
pub fn render_page(content: &SiteContent, config: &SiteConfig, theme: Theme) -> FolioResult<String> {
    let html_class = if theme.is_dark() { DARK_CLASS } else { "" };
    let title = escape_html(&content.personal_info.name);
    let body = render_sections(content);

    let hotspot = config.cursor.icon_size / 2;
    let noscript_css = style::native_cursor_css(&sprite_file_name(DisplayMode::Down), hotspot);

    // Inline JSON must not close the script element early
    let config_json = serde_json::to_string(config)?.replace("</", "<\\/");

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en" class="{html_class}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{stylesheet}</style>
<style id="{CARET_STYLE_ID}">{CARET_STYLESHEET}</style>
<noscript><style>{noscript_css}</style></noscript>
</head>
<body>
<main id="{ROOT_ID}">{body}</main>
<script type="module">
import init, {{ Site }} from "{WEB_MODULE}";
await init();
window.folioSite = Site.mount("{ROOT_ID}", {config_json});
</script>
</body>
</html>
"#,
        stylesheet = style::OVERLAY_STYLESHEET,
    ))
}

fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> FolioResult<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, bytes).for_path("write", &path)?;
    log::debug!("[EXPORT] {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

fn write_sprite(path: &Path, mode: DisplayMode, size: u32) -> FolioResult<()> {
    let icon = rasterize_icon(mode, size)?;
    let image = image::RgbaImage::from_raw(icon.width, icon.height, icon.data).ok_or_else(|| {
        FolioError::Image(format!("Sprite buffer does not match {0}x{0}", size))
    })?;
    image.save(path)?;
    log::debug!("[EXPORT] {} ({}px)", path.display(), size);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_names() {
        assert_eq!(sprite_file_name(DisplayMode::Up), "cursor-up.png");
        assert_eq!(sprite_file_name(DisplayMode::Down), "cursor-down.png");
    }

    #[test]
    fn test_render_page_theme_class() {
        let content = SiteContent::load();
        let config = SiteConfig::default();

        let dark = render_page(&content, &config, Theme::Dark).unwrap();
        assert!(dark.contains(r#"<html lang="en" class="dark">"#));

        let light = render_page(&content, &config, Theme::Light).unwrap();
        assert!(light.contains(r#"<html lang="en" class="">"#));
        assert!(light.contains(r#"<main id="app"><section id="home""#));
        assert!(light.contains("cursor:url(cursor-down.png) 18 18"));
        assert!(light.contains(r#"Site.mount("app", {"cursor":"#));
        assert!(light.contains(&format!(
            r#"<style id="folio-caret-style">{}</style>"#,
            CARET_STYLESHEET
        )));
    }

    #[test]
    fn test_export_writes_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let options = ExportOptions {
            theme: Theme::Dark,
            ..ExportOptions::new(dir.path().join("site"))
        };

        let report = export_site(&options).unwrap();
        assert_eq!(report.files.len(), 4);
        for file in &report.files {
            assert!(file.exists(), "{} missing", file.display());
        }

        let json = fs::read_to_string(dir.path().join("site").join(CONTENT_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["education"].is_array());

        let sprite = image::open(dir.path().join("site").join("cursor-up.png")).unwrap();
        assert_eq!(sprite.width(), 36);
        assert_eq!(sprite.height(), 36);
    }
}
