//! Viewer behavior tests: selection, fallback, partitioned selector,
//! detail rendering, and theme tables.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::text::Line;
use sawah_catalog::{Catalog, Category, DEFAULT_ID, TokenKind};

use crate::theme::{self, THEMES, ThemeVariant};
use crate::viewer::Viewer;

fn catalog() -> Catalog {
	Catalog::load().expect("built-in catalogue must validate")
}

fn test_viewer() -> Viewer {
	Viewer::new(catalog(), theme::default_theme(), false)
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn line_text(line: &Line) -> String {
	line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn initial_selection_is_the_default_entry() {
	let viewer = test_viewer();
	assert_eq!(viewer.selected_id(), DEFAULT_ID);
	assert_eq!(viewer.detail_entry().id, "brown_planthopper");
}

#[test]
fn exactly_one_control_is_active_for_a_catalogue_selection() {
	let viewer = test_viewer();
	let active: Vec<_> = viewer
		.control_rows()
		.into_iter()
		.filter(|r| r.active)
		.collect();
	assert_eq!(active.len(), 1);
	assert_eq!(active[0].summary.id, DEFAULT_ID);
}

#[test]
fn unknown_selection_has_zero_active_controls_and_falls_back() {
	let viewer = test_viewer().with_selection("nonexistent");
	assert_eq!(viewer.selected_id(), "nonexistent");
	assert_eq!(viewer.detail_entry().id, "brown_planthopper");
	assert_eq!(viewer.control_rows().iter().filter(|r| r.active).count(), 0);
}

#[test]
fn activation_replaces_the_selection() {
	let mut viewer = test_viewer();
	viewer.handle_key(key(KeyCode::Char('j')));
	viewer.handle_key(key(KeyCode::Enter));

	assert_eq!(viewer.selected_id(), "yellow_stem_borer");
	let active: Vec<_> = viewer
		.control_rows()
		.into_iter()
		.filter(|r| r.active)
		.collect();
	assert_eq!(active.len(), 1);
	assert_eq!(active[0].summary.id, "yellow_stem_borer");
}

#[test]
fn selecting_tungro_shows_the_disease_record() {
	let mut viewer = test_viewer();
	viewer.handle_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
	viewer.handle_key(key(KeyCode::Enter));

	let entry = viewer.detail_entry();
	assert_eq!(entry.id, "tungro");
	assert_eq!(entry.category, Category::Disease);
	assert_eq!(entry.scientific_name, "RTBV + RTSV (via Green Leafhopper)");
	assert_eq!(entry.variables.len(), 2);
}

#[test]
fn cursor_stops_at_list_edges() {
	let mut viewer = test_viewer();
	viewer.handle_key(key(KeyCode::Char('k')));
	assert!(viewer.control_rows()[0].cursor);

	viewer.handle_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
	viewer.handle_key(key(KeyCode::Char('j')));
	let rows = viewer.control_rows();
	assert!(rows.last().unwrap().cursor);
}

#[test]
fn cursor_highlight_is_independent_of_active_state() {
	let mut viewer = test_viewer();
	viewer.handle_key(key(KeyCode::Char('j')));

	let rows = viewer.control_rows();
	assert_eq!(rows.iter().filter(|r| r.cursor).count(), 1);
	assert_eq!(rows.iter().filter(|r| r.active).count(), 1);
	let cursor_row = rows.iter().position(|r| r.cursor).unwrap();
	let active_row = rows.iter().position(|r| r.active).unwrap();
	assert_ne!(cursor_row, active_row);
}

#[test]
fn activation_resets_the_detail_scroll() {
	let mut viewer = test_viewer();
	viewer.scroll_down(7);
	assert_eq!(viewer.scroll(), 7);

	viewer.handle_key(key(KeyCode::Char('j')));
	viewer.handle_key(key(KeyCode::Enter));
	assert_eq!(viewer.scroll(), 0);
}

#[test]
fn theme_toggle_flips_the_variant_and_back() {
	let mut viewer = test_viewer();
	let start = viewer.theme.variant;
	assert_eq!(start, ThemeVariant::Dark);

	viewer.handle_key(key(KeyCode::Char('t')));
	assert_eq!(viewer.theme.variant, ThemeVariant::Light);

	viewer.handle_key(key(KeyCode::Char('t')));
	assert_eq!(viewer.theme.variant, ThemeVariant::Dark);
}

#[test]
fn citation_section_is_toggleable() {
	let mut viewer = test_viewer();
	let entry = viewer.detail_entry();

	let texts: Vec<String> = viewer.detail_lines(entry).iter().map(line_text).collect();
	assert!(!texts.iter().any(|t| t.contains("Source & Citation")));

	viewer.handle_key(key(KeyCode::Char('c')));
	let texts: Vec<String> = viewer.detail_lines(entry).iter().map(line_text).collect();
	assert!(texts.iter().any(|t| t.contains("Source & Citation")));
	assert!(texts.iter().any(|t| t.contains("calculate_bph_risk()")));
}

#[test]
fn detail_sections_keep_their_fixed_order() {
	let viewer = test_viewer().with_selection("rice_blast");
	let entry = viewer.detail_entry();
	let texts: Vec<String> = viewer.detail_lines(entry).iter().map(line_text).collect();

	let position = |needle: &str| {
		texts
			.iter()
			.position(|t| t.contains(needle))
			.unwrap_or_else(|| panic!("missing {needle:?}"))
	};

	let header = position("Rice Blast");
	let description = position("Disease pressure (ADPI) accumulates");
	let formula = position("Risk Calculation");
	let glossary = position("Variable Glossary");
	assert!(header < description);
	assert!(description < formula);
	assert!(formula < glossary);
}

#[test]
fn glossary_rows_render_in_declaration_order() {
	let viewer = test_viewer().with_selection("rice_blast");
	let entry = viewer.detail_entry();
	let texts: Vec<String> = viewer.detail_lines(entry).iter().map(line_text).collect();

	let position = |name: &str| {
		texts
			.iter()
			.position(|t| t.starts_with(&format!("{name}: ")))
			.unwrap_or_else(|| panic!("missing glossary row {name:?}"))
	};

	let order = [
		position("lwd_norm"),
		position("vpd_index"),
		position("n_factor"),
		position("seasonal_mult"),
		position("ADPI"),
	];
	assert!(order.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn formula_lines_render_in_authored_order() {
	let viewer = test_viewer();
	let entry = viewer.detail_entry();
	let texts: Vec<String> = viewer.detail_lines(entry).iter().map(line_text).collect();

	let first = texts
		.iter()
		.position(|t| t.contains("// 1. Compute suitability factors"))
		.unwrap();
	let second = texts
		.iter()
		.position(|t| t.contains("// 2. Compute the weighted base risk"))
		.unwrap();
	let last = texts
		.iter()
		.position(|t| t.contains("FINAL_RISK_PCT"))
		.unwrap();
	assert!(first < second);
	assert!(second < last);
}

#[test]
fn badge_styles_differ_in_every_theme() {
	for theme in THEMES {
		assert_ne!(
			theme.badge_style(Category::Pest),
			theme.badge_style(Category::Disease),
			"{}: pest and disease badges share styling",
			theme.name
		);
	}
}

#[test]
fn token_styles_are_pairwise_distinct_in_every_theme() {
	for theme in THEMES {
		for (i, a) in TokenKind::ALL.iter().enumerate() {
			for b in &TokenKind::ALL[i + 1..] {
				assert_ne!(
					theme.token_style(*a),
					theme.token_style(*b),
					"{}: {a:?} and {b:?} share styling",
					theme.name
				);
			}
		}
	}
}

#[test]
fn selector_keeps_section_headers_for_empty_groups() {
	let items = catalog()
		.summaries()
		.into_iter()
		.filter(|s| s.category == Category::Pest)
		.collect::<Vec<_>>();
	let viewer = Viewer::with_items(catalog(), &items, theme::default_theme(), false);

	let texts: Vec<String> = viewer.selector_lines().iter().map(line_text).collect();
	assert!(texts.contains(&"PESTS".to_string()));
	assert!(texts.contains(&"DISEASES".to_string()));
	// Nothing follows the empty group's header.
	assert_eq!(texts.last().unwrap().as_str(), "DISEASES");
}

#[test]
fn render_smoke_test_shows_the_default_record() {
	let mut viewer = test_viewer();
	let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
	terminal.draw(|frame| viewer.render(frame)).unwrap();

	let buffer = terminal.backend().buffer();
	let mut rows = Vec::new();
	for y in 0..40u16 {
		let row: String = (0..100u16).map(|x| buffer[(x, y)].symbol()).collect();
		rows.push(row);
	}
	let screen = rows.join("\n");

	assert!(screen.contains("Rice Pest & Disease Risk Models"));
	assert!(screen.contains("PESTS"));
	assert!(screen.contains("DISEASES"));
	assert!(screen.contains("Brown Planthopper"));
	assert!(screen.contains("Nilaparvata lugens"));
}
