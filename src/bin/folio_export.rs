//! folio-export: prerender the portfolio page and cursor sprites.

use std::path::PathBuf;

use clap::Parser;
use folio::export::{export_site, ExportOptions};
use folio::{FolioResult, SiteConfig, Theme};

#[derive(Parser)]
#[command(name = "folio-export")]
#[command(about = "Write the static portfolio page, content bundle and cursor sprites", long_about = None)]
#[command(version)]
struct Cli {
    /// Output directory
    #[arg(default_value = "dist")]
    out_dir: PathBuf,

    /// Initial color theme (dark or light)
    #[arg(long, default_value = "light")]
    theme: Theme,

    /// JSON site configuration (partial documents keep defaults)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> FolioResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };

    let options = ExportOptions {
        theme: cli.theme,
        config,
        ..ExportOptions::new(cli.out_dir)
    };

    let report = export_site(&options)?;
    for file in &report.files {
        println!("{}", file.display());
    }
    Ok(())
}
