use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use super::Viewer;

/// Lines moved per detail-scroll keypress.
const SCROLL_STEP: u16 = 4;

impl Viewer {
	/// Returns `true` when the viewer should quit.
	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return true;
		}

		match key.code {
			KeyCode::Char('q') | KeyCode::Esc => return true,

			KeyCode::Char('j') | KeyCode::Down => self.move_cursor_down(),
			KeyCode::Char('k') | KeyCode::Up => self.move_cursor_up(),
			KeyCode::Char('g') | KeyCode::Home => self.cursor_to_first(),
			KeyCode::Char('G') | KeyCode::End => self.cursor_to_last(),
			KeyCode::Enter | KeyCode::Char(' ') => self.activate_cursor(),

			KeyCode::Char('J') | KeyCode::PageDown => self.scroll_down(SCROLL_STEP),
			KeyCode::Char('K') | KeyCode::PageUp => self.scroll_up(SCROLL_STEP),

			KeyCode::Char('t') => self.toggle_theme(),
			KeyCode::Char('c') => self.toggle_citation(),
			_ => {}
		}
		false
	}

	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::ScrollDown => self.scroll_down(3),
			MouseEventKind::ScrollUp => self.scroll_up(3),
			_ => {}
		}
	}
}
