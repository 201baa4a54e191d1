use linkme::distributed_slice;
use ratatui::style::{Color, Modifier, Style};
use sawah_catalog::{Category, TokenKind};

/// Light/dark classification of a theme.
///
/// This is the only light/dark signal the rest of the viewer sees; nothing
/// is persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeVariant {
	Dark,
	Light,
}

#[derive(Clone, Copy, Debug)]
pub struct UiColors {
	pub bg: Color,
	pub fg: Color,
	pub dim_fg: Color,
	pub border: Color,
	pub title: Color,
	pub section_fg: Color,
	pub accent_fg: Color,
	pub cursor_bg: Color,
	pub cursor_fg: Color,
	pub active_bg: Color,
	pub active_fg: Color,
}

/// Badge colors per category. The style table in [`Theme::badge_style`] is
/// a total match, so a new category cannot fall into the wrong branch.
#[derive(Clone, Copy, Debug)]
pub struct BadgeColors {
	pub pest_bg: Color,
	pub pest_fg: Color,
	pub disease_bg: Color,
	pub disease_fg: Color,
}

#[derive(Clone, Copy, Debug)]
pub struct FormulaColors {
	pub bg: Color,
	pub variable: Color,
	pub literal: Color,
	pub operator: Color,
	pub output: Color,
	pub comment: Color,
	pub plain: Color,
}

#[derive(Clone, Copy, Debug)]
pub struct ThemeColors {
	pub ui: UiColors,
	pub badge: BadgeColors,
	pub formula: FormulaColors,
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub aliases: &'static [&'static str],
	pub variant: ThemeVariant,
	pub colors: ThemeColors,
}

#[distributed_slice]
pub static THEMES: [Theme] = [..];

impl Theme {
	/// Badge style for a category.
	pub fn badge_style(&self, category: Category) -> Style {
		let badge = &self.colors.badge;
		match category {
			Category::Pest => Style::default()
				.bg(badge.pest_bg)
				.fg(badge.pest_fg)
				.add_modifier(Modifier::BOLD),
			Category::Disease => Style::default()
				.bg(badge.disease_bg)
				.fg(badge.disease_fg)
				.add_modifier(Modifier::BOLD),
		}
	}

	/// Style for a formula token kind. The single kind-to-style table for
	/// the whole renderer.
	pub fn token_style(&self, kind: TokenKind) -> Style {
		let formula = &self.colors.formula;
		match kind {
			TokenKind::Variable => Style::default().fg(formula.variable),
			TokenKind::Literal => Style::default().fg(formula.literal),
			TokenKind::Operator => Style::default().fg(formula.operator),
			TokenKind::Output => Style::default()
				.fg(formula.output)
				.add_modifier(Modifier::BOLD),
			TokenKind::Comment => Style::default()
				.fg(formula.comment)
				.add_modifier(Modifier::ITALIC),
			TokenKind::Plain => Style::default().fg(formula.plain),
		}
	}
}

/// Look up a theme by name or alias, ignoring case, `-`, and `_`.
pub fn get_theme(name: &str) -> Option<&'static Theme> {
	let normalize = |s: &str| -> String {
		s.chars()
			.filter(|c| *c != '-' && *c != '_')
			.collect::<String>()
			.to_lowercase()
	};

	let search = normalize(name);

	THEMES
		.iter()
		.find(|t| normalize(t.name) == search || t.aliases.iter().any(|a| normalize(a) == search))
}

pub fn default_theme() -> &'static Theme {
	&crate::themes::PADDY_DARK
}

/// First registered theme of the opposite variant, or the current theme
/// when no counterpart exists.
pub fn toggled(current: &'static Theme) -> &'static Theme {
	let want = match current.variant {
		ThemeVariant::Dark => ThemeVariant::Light,
		ThemeVariant::Light => ThemeVariant::Dark,
	};
	THEMES.iter().find(|t| t.variant == want).unwrap_or(current)
}
