mod app;
mod cli;
mod config;
mod list;
mod theme;
mod themes;
mod viewer;

#[cfg(test)]
mod tests;

use anyhow::Context;
use clap::Parser;
use sawah_catalog::Catalog;
use tracing::{info, warn};

use crate::cli::Cli;
use crate::config::Config;
use crate::theme::Theme;
use crate::viewer::Viewer;

fn main() -> anyhow::Result<()> {
	init_tracing();

	let cli = Cli::parse();
	let config = Config::load_default().context("loading configuration")?;

	// A catalogue that fails validation is a corrupt build; refuse to start.
	let catalog = Catalog::load().context("validating the built-in catalogue")?;
	info!(entries = sawah_catalog::ENTRIES.len(), "catalogue validated");

	if cli.list {
		list::print_catalogue(&catalog, &mut std::io::stdout())?;
		return Ok(());
	}

	let theme = resolve_theme(cli.theme.as_deref().or(config.theme.as_deref()));
	info!(theme = theme.name, "starting viewer");

	let mut viewer = Viewer::new(catalog, theme, config.show_citation);
	if let Some(id) = cli.select {
		viewer = viewer.with_selection(id);
	}

	app::run_viewer(viewer)?;
	Ok(())
}

fn resolve_theme(name: Option<&str>) -> &'static Theme {
	match name {
		Some(name) => match theme::get_theme(name) {
			Some(theme) => theme,
			None => {
				warn!(name, "unknown theme, using the default");
				theme::default_theme()
			}
		},
		None => theme::default_theme(),
	}
}

/// Write filtered tracing output to `sawah.log` when `SAWAH_LOG` is set
/// (e.g. `SAWAH_LOG=info`); otherwise stay silent so the TUI owns the
/// terminal.
fn init_tracing() {
	let Ok(filter) = std::env::var("SAWAH_LOG") else {
		return;
	};
	let Ok(file) = std::fs::OpenOptions::new()
		.create(true)
		.append(true)
		.open("sawah.log")
	else {
		return;
	};

	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::new(filter))
		.with_writer(std::sync::Mutex::new(file))
		.with_ansi(false)
		.init();
}
