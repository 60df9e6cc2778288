//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent};

use taskdeck_core::Flag;

use super::{App, Focus};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // An open edit row captures everything first.
    if app.list.editing().is_some() {
        handle_edit_key(app, key);
        return;
    }

    match app.focus {
        Focus::Composer => handle_composer_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Enter commits; the row closes no matter how the save ends.
        KeyCode::Enter => {
            if let Some((id, text)) = app.list.save_edit() {
                app.controller.save_edit(&id, text);
            }
        }
        KeyCode::Esc => app.list.cancel_edit(),
        KeyCode::Backspace => app.list.backspace(),
        KeyCode::Char(c) => app.list.input(c),
        _ => {}
    }
}

fn handle_composer_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if let Some(request) = app.composer.submit(&app.flags) {
                app.controller.add_task(request);
            }
        }
        KeyCode::Esc => app.focus = Focus::List,
        KeyCode::Tab => {
            if app.flags.is_enabled(Flag::PriorityTasks) {
                app.composer.cycle_priority();
            }
        }
        KeyCode::BackTab => {
            if app.flags.is_enabled(Flag::TaskCategories) {
                app.composer.cycle_category();
            }
        }
        KeyCode::Backspace => app.composer.backspace(),
        KeyCode::Char(c) => app.composer.input(c),
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('i') => app.focus = Focus::Composer,
        KeyCode::Up | KeyCode::Char('k') => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let len = app.controller.tasks().len();
            if len > 0 && app.cursor < len - 1 {
                app.cursor += 1;
            }
        }
        KeyCode::Char(' ') => {
            if let Some(id) = app.selected_task().map(|t| t.id.clone()) {
                app.controller.toggle_task(&id);
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = app.selected_task().map(|t| t.id.clone()) {
                app.controller.delete_task(&id);
            }
        }
        KeyCode::Char('e') => {
            // No-op on completed tasks; the view enforces it.
            if let Some(task) = app.selected_task().cloned() {
                app.list.begin_edit(&task);
            }
        }
        KeyCode::Char('r') => app.controller.refresh(),
        KeyCode::Char('x') => app.controller.dismiss_error(),
        _ => {}
    }
}
