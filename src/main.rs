#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod hooks;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use cgn_core::logging::LoggingBuilder;
use cgn_core::{Gallery, SiteConfig};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Settings resolved at startup, read by the root component
pub struct SiteSettings {
    pub gallery: Gallery,
    pub assets_dir: PathBuf,
}

static SETTINGS: OnceLock<SiteSettings> = OnceLock::new();

/// Get the startup settings (built-in defaults if unset, e.g. in tests)
pub fn get_settings() -> &'static SiteSettings {
    SETTINGS.get_or_init(|| SiteSettings {
        gallery: Gallery::builtin(),
        assets_dir: PathBuf::from("public"),
    })
}

/// C.G.N Construções - desktop site
#[derive(Parser, Debug)]
#[command(name = "cgn-site-desktop")]
#[command(about = "C.G.N Construções - serralheria residencial e comercial")]
struct Args {
    /// Config file (defaults to <config dir>/cgn-site/config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Public asset directory that gallery images resolve against
    #[arg(short, long)]
    assets_dir: Option<PathBuf>,

    /// Close the work modal when clicking outside its content
    #[arg(long)]
    close_on_overlay_click: bool,

    /// Tracing filter directive (RUST_LOG takes precedence)
    #[arg(long)]
    log_filter: Option<String>,

    /// Disable colored log output
    #[arg(long)]
    no_color: bool,

    /// Window width in logical pixels
    #[arg(long)]
    width: Option<f64>,

    /// Window height in logical pixels
    #[arg(long)]
    height: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new();
    if let Some(ref filter) = args.log_filter {
        logging = logging.with_filter(filter.clone());
    }
    if args.no_color {
        logging = logging.no_ansi();
    }
    logging.init().context("failed to initialize logging")?;

    let mut config = match args.config {
        Some(ref path) => SiteConfig::load_from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SiteConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable default config: {}", e);
            SiteConfig::default()
        }),
    };

    // Command-line flags override the file
    if args.close_on_overlay_click {
        config.gallery.close_on_overlay_click = true;
    }
    if let Some(dir) = args.assets_dir {
        config.assets.dir = dir;
    }
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }

    let gallery = config.build_gallery().context("invalid gallery configuration")?;

    tracing::info!(
        categories = gallery.catalog().len(),
        close_on_overlay_click = gallery.policy().close_on_overlay_click,
        "Starting site with assets from {:?}",
        config.assets.dir
    );

    let _ = SETTINGS.set(SiteSettings {
        gallery,
        assets_dir: config.assets.dir.clone(),
    });

    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&config.window.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                config.window.width,
                config.window.height,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .launch(app::App);

    Ok(())
}
