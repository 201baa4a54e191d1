//! Frame composition: header, selector, detail pane, status bar.

mod detail;
mod selector;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use super::Viewer;

impl Viewer {
	pub fn render(&mut self, frame: &mut ratatui::Frame) {
		let area = frame.area();

		let bg = Block::default().style(Style::default().bg(self.theme.colors.ui.bg));
		frame.render_widget(bg, area);

		let chunks = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(3),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);

		frame.render_widget(self.render_header(), chunks[0]);

		let body = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Length(self.selector_width()), Constraint::Min(1)])
			.split(chunks[1]);

		self.render_selector(frame, body[0]);
		self.render_detail(frame, body[1]);

		frame.render_widget(self.render_status_line(), chunks[2]);
	}

	fn render_header(&self) -> impl Widget + '_ {
		let ui = &self.theme.colors.ui;
		Paragraph::new(vec![
			Line::from(Span::styled(
				"Rice Pest & Disease Risk Models",
				Style::default().fg(ui.title).add_modifier(Modifier::BOLD),
			)),
			Line::from(Span::styled(
				"Interactive breakdown of the emergence risk calculations",
				Style::default().fg(ui.dim_fg),
			)),
		])
	}

	fn render_status_line(&self) -> impl Widget + '_ {
		let ui = &self.theme.colors.ui;
		let key = Style::default().fg(ui.fg).add_modifier(Modifier::BOLD);
		let hint = Style::default().fg(ui.dim_fg);

		let mut spans = Vec::new();
		for (keys, action) in [
			("j/k", "move"),
			("enter", "select"),
			("J/K", "scroll"),
			("t", "theme"),
			("c", "citation"),
			("q", "quit"),
		] {
			spans.push(Span::styled(format!(" {keys} "), key));
			spans.push(Span::styled(format!("{action}  "), hint));
		}
		spans.push(Span::styled(self.theme.name, hint));

		Paragraph::new(Line::from(spans))
	}
}
