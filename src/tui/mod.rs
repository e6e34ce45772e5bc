pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

use crate::marks::ReportSummary;
use app::{InputMode, Screen};

/// Run the interactive session to completion. Returns the last computed
/// summary, if any, so the caller can print it after the terminal is
/// restored.
pub async fn run_tui(mut app: App) -> anyhow::Result<Option<ReportSummary>> {
    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let mut events = EventHandler::new(250); // 250ms tick

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break;
        }
    }

    ratatui::restore();

    if app.verbose {
        eprintln!(
            "Session ended ({} conversion(s), artifact prepared: {})",
            app.conversions.len(),
            app.has_artifact()
        );
    }

    Ok(app.summary.take())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Any key closes the help overlay
    if app.input_mode == InputMode::Help {
        app.dismiss_help();
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.screen {
        Screen::Entry => match key.code {
            KeyCode::Char(c @ ('0'..='9' | '.')) => app.push_char(c),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Down | KeyCode::Tab => app.next_field(),
            KeyCode::Up | KeyCode::BackTab => app.previous_field(),
            KeyCode::Enter => app.submit(),
            KeyCode::Char('c') => app.start_conversion(),
            KeyCode::Char('d') => app.export(),
            KeyCode::Char('r') => app.reset(),
            KeyCode::Char('?') => app.show_help(),
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        },
        Screen::Converting => match key.code {
            KeyCode::Char(c @ ('0'..='9' | '.')) => app.push_char(c),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Down | KeyCode::Tab => app.next_field(),
            KeyCode::Up | KeyCode::BackTab => app.previous_field(),
            KeyCode::Enter => app.convert_submit(),
            KeyCode::Char('r') => app.reset_conversion(),
            KeyCode::Esc | KeyCode::Char('b') => app.return_to_entry(),
            KeyCode::Char('?') => app.show_help(),
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        },
        Screen::Results => match key.code {
            KeyCode::Char('d') => app.export(),
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('b') => app.return_to_entry(),
            KeyCode::Char('r') => app.reset(),
            KeyCode::Char('?') => app.show_help(),
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(PathBuf::from("marks_report.pdf"), false)
    }

    #[test]
    fn test_digits_edit_focused_field() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('8')));
        handle_key_event(&mut app, key(KeyCode::Char('0')));
        assert_eq!(app.entry_fields[0].buffer, "80");
        handle_key_event(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.entry_fields[0].buffer, "8");
    }

    #[test]
    fn test_letters_are_commands_not_input() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('c')));
        assert_eq!(app.screen, Screen::Converting);
        assert!(app.entry_fields[0].buffer.is_empty());
    }

    #[test]
    fn test_esc_returns_from_conversion() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('c')));
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Entry);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut app = app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_overlay_swallows_next_key() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert_eq!(app.input_mode, InputMode::Help);
        handle_key_event(&mut app, key(KeyCode::Char('5')));
        assert_eq!(app.input_mode, InputMode::Form);
        assert!(app.entry_fields[0].buffer.is_empty());
    }

    #[test]
    fn test_enter_submits_entry_form() {
        let mut app = app();
        // Empty form: submission must fail and stay on Entry
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Entry);
        assert!(app.summary.is_none());
    }
}
