use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::viewer::{ControlRow, Viewer};

impl Viewer {
	pub(super) fn render_selector(&self, frame: &mut ratatui::Frame, area: Rect) {
		let ui = &self.theme.colors.ui;
		let block = Block::default()
			.borders(Borders::ALL)
			.title(" Catalogue ")
			.border_style(Style::default().fg(ui.border))
			.style(Style::default().bg(ui.bg));

		frame.render_widget(Paragraph::new(self.selector_lines()).block(block), area);
	}

	/// One line per section header and per activation control.
	///
	/// An empty group still gets its header; the active control and the
	/// keyboard cursor are styled independently.
	pub fn selector_lines(&self) -> Vec<Line<'static>> {
		let ui = &self.theme.colors.ui;
		let rows = self.control_rows();
		let (pest_rows, disease_rows) = rows.split_at(self.pests.len());

		let mut lines = Vec::new();
		for (index, (label, group)) in [("PESTS", pest_rows), ("DISEASES", disease_rows)]
			.into_iter()
			.enumerate()
		{
			if index > 0 {
				lines.push(Line::default());
			}
			lines.push(Line::from(Span::styled(
				label,
				Style::default()
					.fg(ui.section_fg)
					.add_modifier(Modifier::BOLD),
			)));
			for row in group {
				lines.push(self.control_line(row));
			}
		}
		lines
	}

	fn control_line(&self, row: &ControlRow) -> Line<'static> {
		let ui = &self.theme.colors.ui;
		let marker = if row.active { "▸ " } else { "  " };
		let style = match (row.active, row.cursor) {
			(true, true) => Style::default()
				.bg(ui.active_bg)
				.fg(ui.active_fg)
				.add_modifier(Modifier::BOLD),
			(true, false) => Style::default().bg(ui.active_bg).fg(ui.active_fg),
			(false, true) => Style::default().bg(ui.cursor_bg).fg(ui.cursor_fg),
			(false, false) => Style::default().fg(ui.fg),
		};
		Line::from(Span::styled(format!("{marker}{}", row.summary.name), style))
	}

	/// Selector pane width: widest control plus marker, borders, and a
	/// column of padding.
	pub(super) fn selector_width(&self) -> u16 {
		let widest = self
			.pests
			.iter()
			.chain(self.diseases.iter())
			.map(|s| s.name.len())
			.max()
			.unwrap_or(0);
		(widest + 2 + 2 + 1) as u16
	}
}
