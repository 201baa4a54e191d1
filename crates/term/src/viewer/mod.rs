//! Viewer state and selection logic.
//!
//! [`Viewer`] is the single owner of the mutable selection state: the
//! currently selected entry id, the keyboard cursor over the selector, the
//! detail scroll offset, and the presentation toggles. Everything else it
//! touches (the catalogue, the themes) is process-wide constant data.

mod input;
mod render;

use sawah_catalog::{Catalog, CatalogEntry, DEFAULT_ID, Summary, partition};

use crate::theme::{self, Theme};

/// Render-model row for one activation control in the selector.
///
/// `active` marks the control whose id equals the current selection;
/// `cursor` marks the keyboard highlight. The two are independent.
#[derive(Clone, Copy, Debug)]
pub struct ControlRow {
	pub summary: Summary,
	pub active: bool,
	pub cursor: bool,
}

pub struct Viewer {
	catalog: Catalog,
	pests: Vec<Summary>,
	diseases: Vec<Summary>,
	/// The selection state: replaced on activation, never cleared.
	selected_id: String,
	/// Keyboard highlight over the flattened control list.
	cursor: usize,
	/// Detail pane scroll offset, reset on every selection change.
	scroll: u16,
	pub theme: &'static Theme,
	pub show_citation: bool,
}

impl Viewer {
	pub fn new(catalog: Catalog, theme: &'static Theme, show_citation: bool) -> Self {
		let items = catalog.summaries();
		Self::from_items(catalog, &items, theme, show_citation)
	}

	fn from_items(
		catalog: Catalog,
		items: &[Summary],
		theme: &'static Theme,
		show_citation: bool,
	) -> Self {
		let (pests, diseases) = partition(items);
		Self {
			catalog,
			pests,
			diseases,
			selected_id: DEFAULT_ID.to_string(),
			cursor: 0,
			scroll: 0,
			theme,
			show_citation,
		}
	}

	/// Start with a specific selection.
	///
	/// The id is stored verbatim: unknown ids are legal input and resolve
	/// to the default entry at render time.
	pub fn with_selection(mut self, id: impl Into<String>) -> Self {
		self.selected_id = id.into();
		if let Some(index) = self.control_index(&self.selected_id) {
			self.cursor = index;
		}
		self
	}

	pub fn selected_id(&self) -> &str {
		&self.selected_id
	}

	/// Replace the selection and reset the detail scroll.
	pub fn select(&mut self, id: &str) {
		self.selected_id = id.to_string();
		self.scroll = 0;
	}

	/// Entry shown in the detail pane (fallback applied).
	pub fn detail_entry(&self) -> &'static CatalogEntry {
		self.catalog.resolve(&self.selected_id)
	}

	pub fn is_active(&self, id: &str) -> bool {
		self.selected_id == id
	}

	/// Activation controls in display order: pests, then diseases.
	pub fn control_rows(&self) -> Vec<ControlRow> {
		self.pests
			.iter()
			.chain(self.diseases.iter())
			.enumerate()
			.map(|(index, summary)| ControlRow {
				summary: *summary,
				active: self.is_active(summary.id),
				cursor: index == self.cursor,
			})
			.collect()
	}

	fn control_count(&self) -> usize {
		self.pests.len() + self.diseases.len()
	}

	fn control_at(&self, index: usize) -> Option<&Summary> {
		self.pests
			.iter()
			.chain(self.diseases.iter())
			.nth(index)
	}

	fn control_index(&self, id: &str) -> Option<usize> {
		self.pests
			.iter()
			.chain(self.diseases.iter())
			.position(|s| s.id == id)
	}

	pub fn move_cursor_down(&mut self) {
		if self.cursor + 1 < self.control_count() {
			self.cursor += 1;
		}
	}

	pub fn move_cursor_up(&mut self) {
		self.cursor = self.cursor.saturating_sub(1);
	}

	pub fn cursor_to_first(&mut self) {
		self.cursor = 0;
	}

	pub fn cursor_to_last(&mut self) {
		self.cursor = self.control_count().saturating_sub(1);
	}

	/// Activate the control under the cursor, emitting its id into the
	/// selection state.
	pub fn activate_cursor(&mut self) {
		if let Some(summary) = self.control_at(self.cursor) {
			let id = summary.id;
			self.select(id);
		}
	}

	pub fn scroll(&self) -> u16 {
		self.scroll
	}

	pub fn scroll_down(&mut self, lines: u16) {
		// Clamped against content height at render time.
		self.scroll = self.scroll.saturating_add(lines);
	}

	pub fn scroll_up(&mut self, lines: u16) {
		self.scroll = self.scroll.saturating_sub(lines);
	}

	pub fn toggle_theme(&mut self) {
		self.theme = theme::toggled(self.theme);
	}

	pub fn toggle_citation(&mut self) {
		self.show_citation = !self.show_citation;
	}

	#[cfg(test)]
	pub fn with_items(
		catalog: Catalog,
		items: &[Summary],
		theme: &'static Theme,
		show_citation: bool,
	) -> Self {
		Self::from_items(catalog, items, theme, show_citation)
	}
}
