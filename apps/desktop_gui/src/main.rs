use std::path::PathBuf;

mod config;
mod controller;
mod ui;

use anyhow::Result;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use config::{load_settings, Settings};
use ui::ContactsApp;

#[derive(Parser, Debug)]
#[command(name = "contacts", about = "Add, list and delete contacts")]
struct Args {
    /// Settings file; defaults to ./contacts.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Tracing filter directive, e.g. `contacts_core=debug`. RUST_LOG still wins.
    #[arg(long)]
    log_filter: Option<String>,
    /// Start with an empty contact book instead of the two sample contacts.
    #[arg(long)]
    no_seed: bool,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        if let Some(filter) = &self.log_filter {
            settings.log_filter = filter.clone();
        }
        if self.no_seed {
            settings.seed_contacts = false;
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref(), |key| std::env::var(key).ok())?;
    args.apply(&mut settings);

    init_tracing(&settings.log_filter);
    tracing::info!(
        title = %settings.window_title,
        seed_contacts = settings.seed_contacts,
        "starting contacts window"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    let app_name = settings.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Ok(Box::new(ContactsApp::new(cc, &settings)))),
    )
    .map_err(|err| anyhow::anyhow!("contacts window exited with an error: {err}"))
}
