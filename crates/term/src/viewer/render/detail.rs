use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use sawah_catalog::CatalogEntry;

use crate::viewer::Viewer;

impl Viewer {
	pub(super) fn render_detail(&mut self, frame: &mut ratatui::Frame, area: Rect) {
		let ui = &self.theme.colors.ui;
		let entry = self.detail_entry();
		let lines = self.detail_lines(entry);

		// Keep the scroll offset within the content.
		let viewport = area.height.saturating_sub(2);
		let max_scroll = (lines.len() as u16).saturating_sub(viewport);
		if self.scroll > max_scroll {
			self.scroll = max_scroll;
		}

		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(Style::default().fg(ui.border))
			.style(Style::default().bg(ui.bg));

		let paragraph = Paragraph::new(lines)
			.block(block)
			.wrap(Wrap { trim: false })
			.scroll((self.scroll, 0));
		frame.render_widget(paragraph, area);
	}

	/// Detail pane content, in fixed section order: header, description,
	/// formula, glossary, citation (optional).
	pub fn detail_lines(&self, entry: &'static CatalogEntry) -> Vec<Line<'static>> {
		let ui = &self.theme.colors.ui;
		let formula_bg = self.theme.colors.formula.bg;
		let mut lines = Vec::new();

		// 1. Header: name, badge, then the scientific name in italics.
		lines.push(Line::from(vec![
			Span::styled(
				entry.name,
				Style::default().fg(ui.title).add_modifier(Modifier::BOLD),
			),
			Span::raw("  "),
			Span::styled(
				format!(" {} ", entry.category.name()),
				self.theme.badge_style(entry.category),
			),
		]));
		lines.push(Line::from(Span::styled(
			entry.scientific_name,
			Style::default().fg(ui.dim_fg).add_modifier(Modifier::ITALIC),
		)));
		lines.push(Line::default());

		// 2. Description.
		lines.push(Line::from(Span::styled(
			entry.description,
			Style::default().fg(ui.fg),
		)));
		lines.push(Line::default());

		// 3. Formula block, token lines verbatim and in order.
		lines.push(self.section_heading("Risk Calculation"));
		for formula_line in entry.formula {
			let spans: Vec<Span<'static>> = formula_line
				.iter()
				.map(|token| Span::styled(token.text, self.theme.token_style(token.kind)))
				.collect();
			lines.push(Line::from(spans).style(Style::default().bg(formula_bg)));
		}
		lines.push(Line::default());

		// 4. Variable glossary, in declaration order.
		lines.push(self.section_heading("Variable Glossary"));
		for variable in entry.variables {
			lines.push(Line::from(vec![
				Span::styled(
					format!("{}: ", variable.name),
					Style::default()
						.fg(ui.accent_fg)
						.add_modifier(Modifier::BOLD),
				),
				Span::styled(variable.description, Style::default().fg(ui.fg)),
			]));
		}

		// 5. Citation, when enabled.
		if self.show_citation {
			lines.push(Line::default());
			lines.push(self.section_heading("Source & Citation"));
			lines.push(Line::from(Span::styled(
				entry.citation,
				Style::default().fg(ui.dim_fg).add_modifier(Modifier::ITALIC),
			)));
		}

		lines
	}

	fn section_heading(&self, text: &'static str) -> Line<'static> {
		let ui = &self.theme.colors.ui;
		Line::from(Span::styled(
			text,
			Style::default()
				.fg(ui.section_fg)
				.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
		))
	}
}
