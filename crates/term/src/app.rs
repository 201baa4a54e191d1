//! Terminal lifecycle and event loop.

use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::terminal::{
	EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::viewer::Viewer;

/// Run the viewer until the user quits.
///
/// Selection updates are synchronous with redraw: an activation event is
/// applied and the next `draw` call reflects it, with no intermediate state
/// observable.
pub fn run_viewer(mut viewer: Viewer) -> io::Result<()> {
	let mut stdout = io::stdout();
	enable_raw_mode()?;
	crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

	let backend = CrosstermBackend::new(stdout);
	let mut terminal = Terminal::new(backend)?;

	let result = (|| {
		loop {
			terminal.draw(|frame| viewer.render(frame))?;

			if !event::poll(Duration::from_millis(250))? {
				continue;
			}

			match event::read()? {
				Event::Key(key)
					if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
				{
					if viewer.handle_key(key) {
						break;
					}
				}
				Event::Mouse(mouse) => viewer.handle_mouse(mouse),
				_ => {}
			}
		}
		Ok(())
	})();

	disable_raw_mode()?;
	crossterm::execute!(
		terminal.backend_mut(),
		LeaveAlternateScreen,
		DisableMouseCapture
	)?;
	terminal.show_cursor()?;

	result
}
