#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod picker;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use profilehero_core::{ProfileConfig, ProfileResult};
use tracing_subscriber::EnvFilter;

/// Global config, resolved from file and command line before launch
static CONFIG: OnceLock<ProfileConfig> = OnceLock::new();

/// Get the resolved config (defaults if launch skipped resolution)
pub fn get_config() -> ProfileConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Profile Hero - animated profile card
#[derive(Parser, Debug)]
#[command(name = "profilehero-desktop")]
#[command(about = "Profile Hero - an avatar that morphs into a banner")]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Name shown on the card
    #[arg(short, long)]
    name: Option<String>,

    /// Title shown under the name
    #[arg(short, long)]
    title: Option<String>,

    /// Duration of the expand/collapse animation in milliseconds
    #[arg(long)]
    animation_ms: Option<u64>,
}

fn resolve_config(args: &Args) -> ProfileResult<ProfileConfig> {
    let mut config = match &args.config {
        Some(path) => ProfileConfig::from_json_file(path)?,
        None => ProfileConfig::default(),
    };

    if let Some(name) = &args.name {
        config.name = name.clone();
    }
    if let Some(title) = &args.title {
        config.title = title.clone();
    }
    if let Some(ms) = args.animation_ms {
        config.animation.duration_ms = ms;
    }

    config.validate()?;
    Ok(config)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Starting profile card for '{}' ({}x{})",
        config.name,
        config.window.width,
        config.window.height
    );

    let window = WindowBuilder::new()
        .with_title(format!("{} - Profile", config.name))
        .with_inner_size(dioxus::desktop::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ))
        .with_resizable(false);

    // Store config globally
    let _ = CONFIG.set(config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}
