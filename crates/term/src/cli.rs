use clap::Parser;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "sawah")]
#[command(about = "Interactive reference for rice pest & disease risk models")]
#[command(version)]
pub struct Cli {
	/// Color theme to use (e.g., paddy_dark, paddy_light)
	#[arg(long, short = 't')]
	pub theme: Option<String>,

	/// Entry to select at startup (unknown ids fall back to the default entry)
	#[arg(long, short = 's')]
	pub select: Option<String>,

	/// Print the catalogue to stdout and exit
	#[arg(long)]
	pub list: bool,
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::Cli;

	#[test]
	fn parses_theme_and_selection() {
		let cli = Cli::parse_from(["sawah", "--theme", "paddy_light", "--select", "tungro"]);
		assert_eq!(cli.theme.as_deref(), Some("paddy_light"));
		assert_eq!(cli.select.as_deref(), Some("tungro"));
		assert!(!cli.list);
	}

	#[test]
	fn defaults_to_no_flags() {
		let cli = Cli::parse_from(["sawah"]);
		assert!(cli.theme.is_none());
		assert!(cli.select.is_none());
		assert!(!cli.list);
	}
}
