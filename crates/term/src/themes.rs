//! Built-in themes.
//!
//! Both palettes lean on a slate scale; the formula block keeps a dark
//! background in both variants so the token colors stay legible.

use linkme::distributed_slice;
use ratatui::style::Color;

use crate::theme::{BadgeColors, FormulaColors, THEMES, Theme, ThemeColors, ThemeVariant, UiColors};

#[distributed_slice(THEMES)]
pub static PADDY_DARK: Theme = Theme {
	name: "paddy_dark",
	aliases: &["dark"],
	variant: ThemeVariant::Dark,
	colors: ThemeColors {
		ui: UiColors {
			bg: Color::Rgb(15, 23, 42),          // slate-900
			fg: Color::Rgb(226, 232, 240),       // slate-200
			dim_fg: Color::Rgb(148, 163, 184),   // slate-400
			border: Color::Rgb(51, 65, 85),      // slate-700
			title: Color::Rgb(248, 250, 252),    // slate-50
			section_fg: Color::Rgb(148, 163, 184), // slate-400
			accent_fg: Color::Rgb(96, 165, 250), // blue-400
			cursor_bg: Color::Rgb(51, 65, 85),   // slate-700
			cursor_fg: Color::Rgb(248, 250, 252), // slate-50
			active_bg: Color::Rgb(37, 99, 235),  // blue-600
			active_fg: Color::Rgb(255, 255, 255),
		},
		badge: BadgeColors {
			pest_bg: Color::Rgb(22, 101, 52),     // green-800
			pest_fg: Color::Rgb(220, 252, 231),   // green-100
			disease_bg: Color::Rgb(153, 27, 27),  // red-800
			disease_fg: Color::Rgb(254, 226, 226), // red-100
		},
		formula: FormulaColors {
			bg: Color::Rgb(2, 6, 23),            // slate-950
			variable: Color::Rgb(103, 232, 249), // cyan-300
			literal: Color::Rgb(252, 211, 77),   // amber-300
			operator: Color::Rgb(244, 114, 182), // pink-400
			output: Color::Rgb(134, 239, 172),   // green-300
			comment: Color::Rgb(148, 163, 184),  // slate-400
			plain: Color::Rgb(241, 245, 249),    // slate-100
		},
	},
};

#[distributed_slice(THEMES)]
pub static PADDY_LIGHT: Theme = Theme {
	name: "paddy_light",
	aliases: &["light"],
	variant: ThemeVariant::Light,
	colors: ThemeColors {
		ui: UiColors {
			bg: Color::Rgb(248, 250, 252),       // slate-50
			fg: Color::Rgb(51, 65, 85),          // slate-700
			dim_fg: Color::Rgb(100, 116, 139),   // slate-500
			border: Color::Rgb(203, 213, 225),   // slate-300
			title: Color::Rgb(15, 23, 42),       // slate-900
			section_fg: Color::Rgb(100, 116, 139), // slate-500
			accent_fg: Color::Rgb(29, 78, 216),  // blue-700
			cursor_bg: Color::Rgb(226, 232, 240), // slate-200
			cursor_fg: Color::Rgb(15, 23, 42),   // slate-900
			active_bg: Color::Rgb(37, 99, 235),  // blue-600
			active_fg: Color::Rgb(255, 255, 255),
		},
		badge: BadgeColors {
			pest_bg: Color::Rgb(220, 252, 231),  // green-100
			pest_fg: Color::Rgb(22, 101, 52),    // green-800
			disease_bg: Color::Rgb(254, 226, 226), // red-100
			disease_fg: Color::Rgb(153, 27, 27), // red-800
		},
		formula: FormulaColors {
			bg: Color::Rgb(15, 23, 42),          // slate-900
			variable: Color::Rgb(103, 232, 249), // cyan-300
			literal: Color::Rgb(252, 211, 77),   // amber-300
			operator: Color::Rgb(244, 114, 182), // pink-400
			output: Color::Rgb(134, 239, 172),   // green-300
			comment: Color::Rgb(148, 163, 184),  // slate-400
			plain: Color::Rgb(241, 245, 249),    // slate-100
		},
	},
};
